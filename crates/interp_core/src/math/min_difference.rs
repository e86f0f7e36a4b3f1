//! Minimum absolute difference between any two elements.
//!
//! Sorting first means the closest pair is always adjacent, so a single scan
//! over neighbouring elements is enough: O(n log n) overall.

use num_traits::{CheckedSub, Signed};

/// Smallest `|a - b|` over all pairs of distinct positions in `values`.
///
/// Returns `None` when fewer than two values are given, or when the smallest
/// gap does not fit in `T` (e.g. `[i8::MIN, 0]`). The input slice is not
/// reordered.
///
/// # Examples
///
/// ```
/// use interp_core::math::min_abs_difference;
///
/// assert_eq!(min_abs_difference(&[3, -7, 0]), Some(3));
/// assert_eq!(min_abs_difference(&[1, -3, 71, 68, 17]), Some(3));
/// assert_eq!(min_abs_difference::<i32>(&[5]), None);
/// assert_eq!(min_abs_difference(&[i32::MIN, i32::MAX]), None);
/// ```
pub fn min_abs_difference<T>(values: &[T]) -> Option<T>
where
    T: Signed + Ord + Copy + CheckedSub,
{
    if values.len() < 2 {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    // Sorted ascending, so every gap is non-negative. A gap that overflows is
    // larger than any representable one and can never be the minimum.
    sorted.windows(2).filter_map(|w| w[1].checked_sub(&w[0])).min()
}

/// Float variant of [`min_abs_difference`].
///
/// Returns `None` for fewer than two values or when any value is NaN.
/// Equal infinities are zero apart; an infinity next to a finite value is an
/// infinite gap.
///
/// # Examples
///
/// ```
/// use interp_core::math::min_abs_difference_f64;
///
/// assert_eq!(min_abs_difference_f64(&[0.5, 2.0, 0.75]), Some(0.25));
/// assert_eq!(min_abs_difference_f64(&[1.0, f64::NAN]), None);
/// ```
pub fn min_abs_difference_f64(values: &[f64]) -> Option<f64> {
    if values.len() < 2 || values.iter().any(|v| v.is_nan()) {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    sorted
        .windows(2)
        .map(|w| if w[0] == w[1] { 0.0 } else { w[1] - w[0] })
        .min_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_integers() {
        assert_eq!(min_abs_difference(&[-59, -36, -13, 1, -53, -92, -2, -96, -54, 75]), Some(1));
        assert_eq!(min_abs_difference(&[10, 10]), Some(0));
        assert_eq!(min_abs_difference(&[-5i64, 5]), Some(10));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(min_abs_difference::<i32>(&[]), None);
        assert_eq!(min_abs_difference_f64(&[1.0]), None);
    }

    #[test]
    fn test_input_not_reordered() {
        let values = [9, 1, 5];
        let _ = min_abs_difference(&values);
        assert_eq!(values, [9, 1, 5]);
    }

    #[test]
    fn test_floats_with_infinity() {
        assert_eq!(
            min_abs_difference_f64(&[f64::INFINITY, 1.0, 3.5]),
            Some(2.5)
        );
    }

    #[test]
    fn test_gap_wider_than_type_is_skipped() {
        assert_eq!(min_abs_difference(&[i32::MIN, i32::MAX]), None);
        assert_eq!(min_abs_difference(&[i8::MIN, 0]), None);
        assert_eq!(min_abs_difference(&[i8::MIN, 0, 100]), Some(100));
        assert_eq!(min_abs_difference(&[i64::MIN, i64::MIN]), Some(0));
        assert_eq!(min_abs_difference(&[i32::MAX, i32::MIN, i32::MAX - 2]), Some(2));
    }

    #[test]
    fn test_equal_infinities_are_zero_apart() {
        assert_eq!(
            min_abs_difference_f64(&[f64::NEG_INFINITY, f64::NEG_INFINITY]),
            Some(0.0)
        );
        assert_eq!(
            min_abs_difference_f64(&[f64::INFINITY, 2.0, f64::INFINITY]),
            Some(0.0)
        );
        assert_eq!(
            min_abs_difference_f64(&[f64::NEG_INFINITY, f64::INFINITY]),
            Some(f64::INFINITY)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_matches_pairwise_scan(values in prop::collection::vec(-1000i64..1000, 2..40)) {
            let mut expected = i64::MAX;
            for i in 0..values.len() {
                for j in (i + 1)..values.len() {
                    expected = expected.min((values[i] - values[j]).abs());
                }
            }
            prop_assert_eq!(min_abs_difference(&values), Some(expected));
        }
    }
}
