//! The value model the comparator walks.

pub mod json;
pub mod macros;
pub mod scalar;
pub mod std_impls;
pub mod structural;

pub use scalar::Scalar;
pub use structural::{resolve, same_object, Composite, Elements, Field, Shape, Structural, TypeKey};
