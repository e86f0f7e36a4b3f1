//! Text rendering of interpolated values.

/// Render an interpolated value as cell text.
///
/// Without `decimal_places` the shortest round-trip representation is used,
/// written out in positional notation, and integral values keep a trailing
/// `.0` (`2.5`, `3.0`, `100000000000000000000.0`). With `decimal_places` the
/// value is rounded to that many fractional digits.
///
/// # Examples
///
/// ```
/// use interp_core::interpolator::render_value;
///
/// assert_eq!(render_value(2.5, None), "2.5");
/// assert_eq!(render_value(3.0, None), "3.0");
/// assert_eq!(render_value(2.0 / 3.0, Some(3)), "0.667");
/// ```
pub fn render_value(value: f64, decimal_places: Option<usize>) -> String {
    match decimal_places {
        Some(places) => format!("{:.*}", places, value),
        None => {
            let mut text = value.to_string();
            if value.is_finite() && !text.contains('.') {
                text.push_str(".0");
            }
            text
        }
    }
}
