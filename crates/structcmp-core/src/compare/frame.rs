//! Traversal frames and the path they spell out.

use std::fmt;

use crate::model::{resolve, same_object, Structural};

/// Label of the root frame in every path.
pub const ROOT_LABEL: &str = "<root-object>";

/// How a frame's value was reached from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label<'a> {
    Root,
    Field(&'a str),
    Index(usize),
}

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Root => f.write_str(ROOT_LABEL),
            Label::Field(name) => f.write_str(name),
            Label::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// One step from the root to the value under comparison.
///
/// The value is stored already resolved through transparent wrappers, so
/// `None` means the step reached an absent value.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    pub label: Label<'a>,
    pub value: Option<&'a dyn Structural>,
}

impl<'a> Frame<'a> {
    pub fn new(label: Label<'a>, value: &'a dyn Structural) -> Self {
        Self {
            label,
            value: resolve(value),
        }
    }

    pub fn root(value: &'a dyn Structural) -> Self {
        Self::new(Label::Root, value)
    }
}

impl fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("label", &self.label)
            .field("type", &self.value.map(|v| v.type_key().name()))
            .finish()
    }
}

/// The path from the root of one graph to its current value.
#[derive(Debug)]
pub struct FrameStack<'a> {
    frames: Vec<Frame<'a>>,
}

impl<'a> FrameStack<'a> {
    /// A stack holding only the root frame.
    pub fn new(root: &'a dyn Structural) -> Self {
        Self {
            frames: vec![Frame::root(root)],
        }
    }

    pub fn push(&mut self, frame: Frame<'a>) {
        self.frames.push(frame);
    }

    /// Pop the top frame. The root frame is never popped.
    pub fn pop(&mut self) -> Option<Frame<'a>> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    pub fn top(&self) -> &Frame<'a> {
        // Invariant: the root frame is pushed in `new` and never popped.
        &self.frames[self.frames.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Frame labels joined with `.`, root first.
    pub fn path(&self) -> String {
        self.frames
            .iter()
            .map(|frame| frame.label.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Positions of frames holding the same object as the top frame.
    ///
    /// Positions count down from the top (0 is the top itself) and are
    /// returned in ascending order. Empty when the top value is absent.
    pub fn back_references(&self) -> Vec<usize> {
        let Some(current) = self.top().value else {
            return Vec::new();
        };
        self.frames
            .iter()
            .rev()
            .enumerate()
            .filter(|(_, frame)| frame.value.is_some_and(|v| same_object(v, current)))
            .map(|(position, _)| position)
            .collect()
    }
}

/// Comma-joined positions, as they appear in difference descriptions.
pub fn format_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
