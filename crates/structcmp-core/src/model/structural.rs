//! The `Structural` capability and the shapes a value can expose.

use std::any::TypeId;
use std::fmt;

use crate::model::scalar::Scalar;

/// Runtime type identity of a value.
///
/// Two values are of the same runtime type iff their keys are equal. Most types
/// use [`TypeKey::of`]; sum types whose variants should compare as distinct
/// types (such as JSON values) use [`TypeKey::variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key of the concrete type `T`, named after `std::any::type_name`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// A key for one variant of `T`, distinct from every other variant name.
    pub fn variant<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
        }
    }

    /// The name used in difference descriptions.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A named member of a composite value.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: &'a dyn Structural,
}

impl<'a> Field<'a> {
    pub fn new(name: &'a str, value: &'a dyn Structural) -> Self {
        Self { name, value }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type", &self.value.type_key().name())
            .finish()
    }
}

/// Ordered elements of an iterable composite.
pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Structural> + 'a>;

/// A value compared by its fields and, when iterable, by its elements.
///
/// Field order as declared here does not matter: the comparator sorts fields
/// by name before pairing them.
#[derive(Default)]
pub struct Composite<'a> {
    fields: Vec<Field<'a>>,
    elements: Option<Elements<'a>>,
}

impl<'a> Composite<'a> {
    /// A composite with no fields that is not iterable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named field
    pub fn with_field(mut self, name: &'a str, value: &'a dyn Structural) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// Add a batch of fields
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field<'a>>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Mark the value as iterable over `elements`.
    pub fn with_elements<I>(mut self, elements: I) -> Self
    where
        I: Iterator<Item = &'a dyn Structural> + 'a,
    {
        self.elements = Some(Box::new(elements));
        self
    }

    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    pub fn is_iterable(&self) -> bool {
        self.elements.is_some()
    }

    pub fn into_parts(self) -> (Vec<Field<'a>>, Option<Elements<'a>>) {
        (self.fields, self.elements)
    }
}

impl fmt::Debug for Composite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("fields", &self.fields)
            .field("iterable", &self.is_iterable())
            .finish()
    }
}

/// How a value presents itself to the comparator.
pub enum Shape<'a> {
    /// No value (`None`, an unset cell, JSON `null`).
    Absent,
    /// A transparent wrapper around another value (`Box`, `Rc`, `Some`).
    ///
    /// Wrappers never appear in paths, types or identity checks; the
    /// comparator always works on the value they point at.
    Indirect(&'a dyn Structural),
    /// A primitive or text value, compared by value equality.
    Scalar(Scalar<'a>),
    /// A value compared field by field (and element by element if iterable).
    Composite(Composite<'a>),
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Absent => f.write_str("Absent"),
            Shape::Indirect(inner) => f
                .debug_tuple("Indirect")
                .field(&inner.type_key().name())
                .finish(),
            Shape::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Shape::Composite(composite) => f.debug_tuple("Composite").field(composite).finish(),
        }
    }
}

/// A value the comparator can walk.
///
/// Implementations describe the value's shape; the comparator takes care of
/// ordering, paths and cycles. Plain structs usually get their impl from
/// [`impl_structural!`](crate::impl_structural).
///
/// # Example
///
/// ```
/// use structcmp_core::{Composite, Shape, Structural};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Structural for Point {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Composite(Composite::new().with_field("x", &self.x).with_field("y", &self.y))
///     }
/// }
///
/// let a = Point { x: 1, y: 2 };
/// let b = Point { x: 1, y: 3 };
/// let difference = structcmp_core::compare(&a, &b).unwrap();
/// assert_eq!(
///     difference.description(),
///     "Difference at <root-object>.y. Expected: 2, but actual was: 3"
/// );
/// ```
pub trait Structural: 'static {
    /// Runtime type of this value.
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Self>()
    }

    fn shape(&self) -> Shape<'_>;

    /// Text representation used when the other side is absent.
    ///
    /// Scalars render their value, everything else its type name.
    fn describe(&self) -> String {
        match self.shape() {
            Shape::Scalar(scalar) => scalar.to_string(),
            Shape::Indirect(inner) => inner.describe(),
            Shape::Absent => "null".to_string(),
            Shape::Composite(_) => self.type_key().name().to_string(),
        }
    }
}

/// Follow transparent wrappers down to the value they hold.
///
/// Returns `None` when the chain ends in an absent value.
pub fn resolve(value: &dyn Structural) -> Option<&dyn Structural> {
    let mut current = value;
    loop {
        match current.shape() {
            Shape::Absent => return None,
            Shape::Indirect(inner) => current = inner,
            Shape::Scalar(_) | Shape::Composite(_) => return Some(current),
        }
    }
}

/// Reference identity: same address and same runtime type.
///
/// The type is part of the identity because a struct and its first field
/// share an address.
pub fn same_object(a: &dyn Structural, b: &dyn Structural) -> bool {
    let a_addr = a as *const dyn Structural as *const ();
    let b_addr = b as *const dyn Structural as *const ();
    a_addr == b_addr && a.type_key() == b.type_key()
}
