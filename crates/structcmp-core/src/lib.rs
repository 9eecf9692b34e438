//! Structural deep-equality for object graphs.
//!
//! `structcmp_core` compares two values by walking them in lockstep and
//! reports the first place where they diverge as a [`Difference`] naming the
//! path and the mismatching values. Values take part through the
//! [`Structural`] trait, which the crate implements for the standard library
//! scalars, sequences, maps and smart pointers as well as for
//! `serde_json::Value`.
//!
//! Reference cycles are supported: a cycle on one side must be matched by a
//! cycle of the same shape on the other.
//!
//! ```
//! use structcmp_core::{compare, impl_structural};
//!
//! struct Order {
//!     id: u32,
//!     lines: Vec<String>,
//! }
//!
//! impl_structural!(Order { id, lines });
//!
//! let expected = Order { id: 7, lines: vec!["tea".into(), "milk".into()] };
//! let actual = Order { id: 7, lines: vec!["tea".into()] };
//!
//! let difference = compare(&expected, &actual).unwrap();
//! assert_eq!(
//!     difference.description(),
//!     "Difference at <root-object>.lines. Expected collection is larger than actual collection"
//! );
//! ```

pub mod compare;
pub mod difference;
pub mod errors;
pub mod logging_facility;
pub mod model;

pub use compare::{compare, StructuralComparison};
pub use difference::Difference;
pub use errors::{ExError, ExErrorKind, Result, StructCmpError};
pub use model::{Composite, Elements, Field, Scalar, Shape, Structural, TypeKey};

/// Field and event names shared by every log line.
pub use structcmp_core_types::schema;
