//! `Structural` for standard library types.
//!
//! - Integers, floats, `bool`, `char`, `String`, `str` are scalars.
//! - `Option`, `Box`, `Rc`, `Arc`, `OnceCell`, `OnceLock` are transparent
//!   (`Box<str>` and `Box<[T]>` behave like `str` and `[T]`).
//! - Sequences are iterable composites with no fields.
//! - String-keyed maps expose one field per key.
//! - Tuples expose their positions as fields `0`, `1`, ...
//!
//! `HashSet` is deliberately absent: its iteration order is not stable, so a
//! positional comparison would be meaningless.

use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, OnceLock};

use crate::model::scalar::Scalar;
use crate::model::structural::{Composite, Field, Shape, Structural};

macro_rules! signed_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Structural for $t {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(Scalar::Int(*self as i128))
                }
            }
        )*
    };
}

macro_rules! unsigned_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Structural for $t {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(Scalar::UInt(*self as u128))
                }
            }
        )*
    };
}

signed_scalar!(i8, i16, i32, i64, i128, isize);
unsigned_scalar!(u8, u16, u32, u64, u128, usize);

impl Structural for f32 {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::F32(*self))
    }
}

impl Structural for f64 {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::F64(*self))
    }
}

impl Structural for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Bool(*self))
    }
}

impl Structural for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Char(*self))
    }
}

impl Structural for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Text(self))
    }
}

impl Structural for &'static str {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Text(self))
    }
}

impl Structural for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Text(self.as_str()))
    }
}

impl Structural for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Composite(Composite::new())
    }
}

// ---------------------------------------------------------------------------
// Transparent wrappers
// ---------------------------------------------------------------------------

impl<T: Structural> Structural for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => Shape::Indirect(value),
            None => Shape::Absent,
        }
    }
}

macro_rules! pointer_structural {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Structural> Structural for $ptr<T> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Indirect(&**self)
                }
            }

            impl Structural for $ptr<dyn Structural> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Indirect(&**self)
                }
            }

            impl Structural for $ptr<str> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(Scalar::Text(self))
                }
            }

            impl<T: Structural> Structural for $ptr<[T]> {
                fn shape(&self) -> Shape<'_> {
                    elements(self.iter())
                }
            }
        )*
    };
}

pointer_structural!(Box, Rc, Arc);

impl<T: Structural> Structural for OnceCell<T> {
    fn shape(&self) -> Shape<'_> {
        match self.get() {
            Some(value) => Shape::Indirect(value),
            None => Shape::Absent,
        }
    }
}

impl<T: Structural> Structural for OnceLock<T> {
    fn shape(&self) -> Shape<'_> {
        match self.get() {
            Some(value) => Shape::Indirect(value),
            None => Shape::Absent,
        }
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

fn elements<'a, T: Structural>(items: impl Iterator<Item = &'a T> + 'a) -> Shape<'a> {
    Shape::Composite(Composite::new().with_elements(items.map(|item| item as &dyn Structural)))
}

impl<T: Structural> Structural for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        elements(self.iter())
    }
}

impl<T: Structural> Structural for [T] {
    fn shape(&self) -> Shape<'_> {
        elements(self.iter())
    }
}

impl<T: Structural, const N: usize> Structural for [T; N] {
    fn shape(&self) -> Shape<'_> {
        elements(self.iter())
    }
}

impl<T: Structural> Structural for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        elements(self.iter())
    }
}

impl<T: Structural> Structural for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        elements(self.iter())
    }
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

impl<V: Structural> Structural for BTreeMap<String, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Composite(
            Composite::new()
                .with_fields(self.iter().map(|(key, value)| Field::new(key.as_str(), value))),
        )
    }
}

impl<V: Structural, S: 'static> Structural for HashMap<String, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Composite(
            Composite::new()
                .with_fields(self.iter().map(|(key, value)| Field::new(key.as_str(), value))),
        )
    }
}

// ---------------------------------------------------------------------------
// Tuples
// ---------------------------------------------------------------------------

macro_rules! tuple_structural {
    ($(($($name:ident : $idx:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Structural),+> Structural for ($($name,)+) {
                fn shape(&self) -> Shape<'_> {
                    Shape::Composite(
                        Composite::new()$(.with_field(stringify!($idx), &self.$idx))+,
                    )
                }
            }
        )*
    };
}

tuple_structural!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
);
