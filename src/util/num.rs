/// Returns `true` if `value` has no fractional component.
///
/// NaN and the infinities are never integral.
///
/// ## Example
/// ```
/// use rpncalc::util::num::is_integral;
///
/// assert!(is_integral(5.0));
/// assert!(is_integral(-3.0));
/// assert!(!is_integral(5.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Floored remainder: the result takes the sign of `divisor`.
///
/// The caller is responsible for rejecting a zero divisor.
///
/// ## Example
/// ```
/// use rpncalc::util::num::floored_rem;
///
/// assert_eq!(floored_rem(7.0, 3.0), 1.0);
/// assert_eq!(floored_rem(-7.0, 3.0), 2.0);
/// assert_eq!(floored_rem(7.0, -3.0), -2.0);
/// ```
#[must_use]
pub fn floored_rem(dividend: f64, divisor: f64) -> f64 {
    let rem = dividend % divisor;
    if rem != 0.0 && (rem < 0.0) != (divisor < 0.0) {
        normalize_zero(rem + divisor)
    } else {
        normalize_zero(rem)
    }
}

/// Integer division truncated toward zero.
///
/// This does not pair with [`floored_rem`] when the operands differ in sign:
/// `-7 // 2` is `-3` while `-7 % 2` is `1`.
///
/// The caller is responsible for rejecting a zero divisor.
///
/// ## Example
/// ```
/// use rpncalc::util::num::truncated_div;
///
/// assert_eq!(truncated_div(5.0, 2.0), 2.0);
/// assert_eq!(truncated_div(-7.0, 2.0), -3.0);
/// assert_eq!(truncated_div(7.0, -2.0), -3.0);
/// ```
#[must_use]
pub fn truncated_div(dividend: f64, divisor: f64) -> f64 {
    normalize_zero((dividend / divisor).trunc())
}

/// Maps `-0.0` to `0.0`, leaving every other value untouched.
#[must_use]
pub fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Renders a result the way it is printed on success.
///
/// Integral values always keep a trailing `.0`. Values below `1e-4` or from
/// `1e16` up use exponent notation with an explicit sign and at least two
/// exponent digits (`1e+16`, `1.5e-05`). Non-finite values print as `inf`,
/// `-inf` and `nan`.
///
/// ## Example
/// ```
/// use rpncalc::util::num::format_value;
///
/// assert_eq!(format_value(5.0), "5.0");
/// assert_eq!(format_value(-1.0), "-1.0");
/// assert_eq!(format_value(0.25), "0.25");
/// assert_eq!(format_value(1e16), "1e+16");
/// assert_eq!(format_value(1.5e-5), "1.5e-05");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => repr,
    }
}
