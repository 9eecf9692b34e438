//! Derivation of `Structural` for plain structs.

/// Implement [`Structural`](crate::Structural) for a struct by listing its
/// fields.
///
/// Every listed field must itself be `Structural`. Private fields can be
/// listed as long as the macro is invoked in a module that can see them.
///
/// # Forms
///
/// - `impl_structural!(Type { a, b, c });` named fields
/// - `impl_structural!(Type(0, 1));` tuple struct positions
/// - `impl_structural!(Type { a, b } elements(items));` also iterable over
///   `self.items`
///
/// Generic types need a hand-written impl (see the trait docs).
///
/// # Example
///
/// ```
/// use structcmp_core::impl_structural;
///
/// struct Account {
///     owner: String,
///     balance: i64,
/// }
///
/// impl_structural!(Account { owner, balance });
///
/// let a = Account { owner: "ada".to_string(), balance: 10 };
/// let b = Account { owner: "ada".to_string(), balance: 10 };
/// assert!(structcmp_core::compare(&a, &b).is_none());
/// ```
#[macro_export]
macro_rules! impl_structural {
    ($name:ident ( $($idx:tt),* $(,)? )) => {
        impl $crate::Structural for $name {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Composite(
                    $crate::Composite::new()
                        $(.with_field(stringify!($idx), &self.$idx))*
                )
            }
        }
    };
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Structural for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Composite(
                    $crate::Composite::new()
                        $(.with_field(stringify!($field), &self.$field))*
                )
            }
        }
    };
    ($ty:ty { $($field:ident),* $(,)? } elements($items:ident)) => {
        impl $crate::Structural for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Composite(
                    $crate::Composite::new()
                        $(.with_field(stringify!($field), &self.$field))*
                        .with_elements(
                            self.$items
                                .iter()
                                .map(|item| item as &dyn $crate::Structural),
                        )
                )
            }
        }
    };
}
