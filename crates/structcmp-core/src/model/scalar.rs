//! Primitive and text values.

use std::fmt;

/// A value compared by value equality rather than by structure.
///
/// Integers are widened so that every integer width shares a representation;
/// the comparator has already checked that both sides are of the same type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Char(char),
    Int(i128),
    UInt(u128),
    F32(f32),
    F64(f64),
    Text(&'a str),
}

impl Scalar<'_> {
    /// Value equality.
    ///
    /// Floats are equal when their values are equal or when both are NaN, so a
    /// value always compares equal to a copy of itself.
    pub fn same_value(&self, other: &Scalar<'_>) -> bool {
        match (self, other) {
            (Scalar::F32(a), Scalar::F32(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::F64(a), Scalar::F64(b)) => a == b || (a.is_nan() && b.is_nan()),
            (a, b) => a == b,
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Char(v) => write!(f, "{}", v),
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::UInt(v) => write!(f, "{}", v),
            // Debug keeps the fractional part, so 1.0 does not read as 1
            Scalar::F32(v) => write!(f, "{:?}", v),
            Scalar::F64(v) => write!(f, "{:?}", v),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}
