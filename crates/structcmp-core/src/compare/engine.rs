//! Structural comparison engine.
//!
//! The engine keeps one [`FrameStack`] per graph and walks both in lockstep.
//! Each step runs four checks on the two top frames, stopping at the first
//! verdict:
//!
//! 1. null: both absent is equal, one absent is a difference
//! 2. type: runtime types must be identical
//! 3. cycle: back-reference positions must match; a matching cycle is equal
//! 4. value: scalars by value, iterables by position, then fields by name

use std::time::Instant;

use structcmp_core_types::schema::{OUTCOME_DIFFERENT, OUTCOME_EQUAL};

use crate::compare::frame::{format_positions, Frame, FrameStack, Label};
use crate::difference::Difference;
use crate::model::{Elements, Field, Shape, Structural};
use crate::{log_op_end, log_op_start};

/// A single comparison between an expected and an actual graph.
///
/// The comparison borrows both roots for its lifetime. [`compare`] may be
/// called repeatedly; the stacks are restored after every call, so the result
/// is the same each time.
///
/// [`compare`]: StructuralComparison::compare
#[derive(Debug)]
pub struct StructuralComparison<'a> {
    expected: FrameStack<'a>,
    actual: FrameStack<'a>,
    nodes_visited: u64,
}

impl<'a> StructuralComparison<'a> {
    pub fn new(expected: &'a dyn Structural, actual: &'a dyn Structural) -> Self {
        Self {
            expected: FrameStack::new(expected),
            actual: FrameStack::new(actual),
            nodes_visited: 0,
        }
    }

    /// Compare the two graphs.
    ///
    /// Returns `None` when they are structurally equal, otherwise the first
    /// difference found in depth-first order.
    pub fn compare(&mut self) -> Option<Difference> {
        let started = Instant::now();
        log_op_start!("compare");

        self.nodes_visited = 0;
        let difference = self.compare_top();

        let outcome = if difference.is_some() {
            OUTCOME_DIFFERENT
        } else {
            OUTCOME_EQUAL
        };
        log_op_end!(
            "compare",
            duration_ms = started.elapsed().as_millis() as u64,
            outcome = outcome,
            nodes_visited = self.nodes_visited
        );
        difference
    }

    /// Run the four checks on the current pair of top frames.
    fn compare_top(&mut self) -> Option<Difference> {
        self.nodes_visited += 1;

        let (expected, actual) = match (self.expected.top().value, self.actual.top().value) {
            (None, None) => return None,
            (None, Some(actual)) => {
                return Some(self.difference(format!(
                    "Expected: null, but actual was: {}",
                    actual.describe()
                )));
            }
            (Some(expected), None) => {
                return Some(self.difference(format!(
                    "Expected: {}, but actual was: null",
                    expected.describe()
                )));
            }
            (Some(expected), Some(actual)) => (expected, actual),
        };

        let expected_type = expected.type_key();
        let actual_type = actual.type_key();
        if expected_type != actual_type {
            return Some(self.difference(format!(
                "Expected type: {}, but actual type was: {}",
                expected_type, actual_type
            )));
        }

        let expected_refs = self.expected.back_references();
        let actual_refs = self.actual.back_references();
        if expected_refs != actual_refs {
            return Some(self.difference(format!(
                "Expected to find circular references: {}, but got: {}",
                format_positions(&expected_refs),
                format_positions(&actual_refs)
            )));
        }
        if expected_refs.len() > 1 {
            // Same cycle shape on both sides; descending again would not end.
            return None;
        }

        self.compare_values(expected, actual)
    }

    fn compare_values(
        &mut self,
        expected: &'a dyn Structural,
        actual: &'a dyn Structural,
    ) -> Option<Difference> {
        match (expected.shape(), actual.shape()) {
            (Shape::Scalar(e), Shape::Scalar(a)) => {
                if e.same_value(&a) {
                    None
                } else {
                    Some(self.difference(format!("Expected: {}, but actual was: {}", e, a)))
                }
            }
            (Shape::Composite(e), Shape::Composite(a)) => {
                let (expected_fields, expected_elements) = e.into_parts();
                let (actual_fields, actual_elements) = a.into_parts();

                if expected_elements.is_some() || actual_elements.is_some() {
                    let difference = self.compare_elements(
                        expected_elements.unwrap_or_else(|| Box::new(std::iter::empty())),
                        actual_elements.unwrap_or_else(|| Box::new(std::iter::empty())),
                    );
                    if difference.is_some() {
                        return difference;
                    }
                }

                // Iterables fall through: their own fields are compared too.
                self.compare_fields(expected_fields, actual_fields)
            }
            // Same runtime type but a different shape; only an inconsistent
            // Structural impl gets here.
            _ => Some(self.difference(format!(
                "Expected: {}, but actual was: {}",
                expected.describe(),
                actual.describe()
            ))),
        }
    }

    fn compare_elements(
        &mut self,
        mut expected: Elements<'a>,
        mut actual: Elements<'a>,
    ) -> Option<Difference> {
        let mut index = 0;
        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return None,
                (Some(_), None) => {
                    return Some(
                        self.difference("Expected collection is larger than actual collection"),
                    );
                }
                (None, Some(_)) => {
                    return Some(
                        self.difference("Expected collection is smaller than actual collection"),
                    );
                }
                (Some(e), Some(a)) => {
                    let difference = self.descend(
                        Frame::new(Label::Index(index), e),
                        Frame::new(Label::Index(index), a),
                    );
                    if difference.is_some() {
                        return difference;
                    }
                    index += 1;
                }
            }
        }
    }

    /// Walk both field lists in name order. A name present on only one side is
    /// reported as a missing field.
    fn compare_fields(
        &mut self,
        mut expected: Vec<Field<'a>>,
        mut actual: Vec<Field<'a>>,
    ) -> Option<Difference> {
        expected.sort_by(|x, y| x.name.cmp(y.name));
        actual.sort_by(|x, y| x.name.cmp(y.name));

        let mut expected = expected.into_iter();
        let mut actual = actual.into_iter();
        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return None,
                (Some(e), None) => {
                    return Some(self.difference(format!(
                        "Actual object does not contain field: {}",
                        e.name
                    )));
                }
                (None, Some(a)) => {
                    return Some(self.difference(format!(
                        "Expected object does not contain field: {}",
                        a.name
                    )));
                }
                // Names always line up for static types; maps and JSON
                // objects can disagree on keys.
                (Some(e), Some(a)) if e.name < a.name => {
                    return Some(self.difference(format!(
                        "Actual object does not contain field: {}",
                        e.name
                    )));
                }
                (Some(e), Some(a)) if e.name > a.name => {
                    return Some(self.difference(format!(
                        "Expected object does not contain field: {}",
                        a.name
                    )));
                }
                (Some(e), Some(a)) => {
                    let difference = self.descend(
                        Frame::new(Label::Field(e.name), e.value),
                        Frame::new(Label::Field(a.name), a.value),
                    );
                    if difference.is_some() {
                        return difference;
                    }
                }
            }
        }
    }

    /// Push a frame on each stack, compare, and pop both again.
    fn descend(&mut self, expected: Frame<'a>, actual: Frame<'a>) -> Option<Difference> {
        self.expected.push(expected);
        self.actual.push(actual);
        let difference = self.compare_top();
        self.actual.pop();
        self.expected.pop();
        difference
    }

    /// Build a difference at the current expected path.
    fn difference(&self, detail: impl AsRef<str>) -> Difference {
        let path = self.expected.path();
        tracing::debug!(
            component = module_path!(),
            path = %path,
            detail = detail.as_ref(),
            "difference found"
        );
        Difference::new(format!("Difference at {}. {}", path, detail.as_ref()))
    }
}

/// Compare two graphs structurally.
///
/// Shorthand for `StructuralComparison::new(expected, actual).compare()`.
///
/// # Example
///
/// ```
/// let expected = vec!["Hello", "There", "Matey"];
/// let actual = vec!["Hello", "There", "Mate"];
/// let difference = structcmp_core::compare(&expected, &actual).unwrap();
/// assert_eq!(
///     difference.description(),
///     "Difference at <root-object>.[2]. Expected: Matey, but actual was: Mate"
/// );
/// ```
pub fn compare<E, A>(expected: &E, actual: &A) -> Option<Difference>
where
    E: Structural,
    A: Structural,
{
    StructuralComparison::new(expected, actual).compare()
}
