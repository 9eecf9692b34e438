#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use structcmp_core::{compare, StructuralComparison};

proptest! {
    #[test]
    fn prop_value_equals_its_copy(values in proptest::collection::vec(any::<i64>(), 0..32)) {
        let copy = values.clone();
        prop_assert_eq!(compare(&values, &copy), None);
    }

    #[test]
    fn prop_nested_text_equals_its_copy(
        rows in proptest::collection::vec(proptest::collection::vec(".{0,8}", 0..6), 0..6)
    ) {
        let copy = rows.clone();
        prop_assert_eq!(compare(&rows, &copy), None);
    }

    #[test]
    fn prop_repeated_comparison_is_stable(
        expected in proptest::collection::vec(any::<u16>(), 0..16),
        actual in proptest::collection::vec(any::<u16>(), 0..16),
    ) {
        let mut comparison = StructuralComparison::new(&expected, &actual);
        let first = comparison.compare();
        let second = comparison.compare();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_extra_trailing_element_reports_length(
        values in proptest::collection::vec(any::<i32>(), 0..16),
        extra in any::<i32>(),
    ) {
        let mut longer = values.clone();
        longer.push(extra);

        let shorter_first = compare(&values, &longer).unwrap();
        prop_assert_eq!(
            shorter_first.description(),
            "Difference at <root-object>. Expected collection is smaller than actual collection"
        );

        let longer_first = compare(&longer, &values).unwrap();
        prop_assert_eq!(
            longer_first.description(),
            "Difference at <root-object>. Expected collection is larger than actual collection"
        );
    }

    #[test]
    fn prop_first_differing_index_is_reported(
        values in proptest::collection::vec(0_u8..100, 1..16),
        index in any::<prop::sample::Index>(),
    ) {
        let i = index.index(values.len());
        let mut changed = values.clone();
        changed[i] += 100;

        let difference = compare(&values, &changed).unwrap();
        prop_assert_eq!(
            difference.description(),
            format!(
                "Difference at <root-object>.[{}]. Expected: {}, but actual was: {}",
                i, values[i], changed[i]
            )
        );
    }
}
