/// Significant digits printed by the compact general format.
pub const GENERAL_PRECISION: usize = 6;

/// Formats a number in compact general notation, like C's `%g`.
///
/// The value is rounded to [`GENERAL_PRECISION`] significant digits. If the
/// decimal exponent of the rounded value is below `-4` or not below the
/// precision, scientific notation is used (`1e+20`, `2.5e-07`); otherwise
/// fixed notation. Trailing zeros and a trailing decimal point are removed in
/// both cases.
///
/// ## Example
/// ```
/// use sunum::util::num::format_general;
///
/// assert_eq!(format_general(5.0), "5");
/// assert_eq!(format_general(1.0 / 3.0), "0.333333");
/// assert_eq!(format_general(1e20), "1e+20");
/// assert_eq!(format_general(0.0001), "0.0001");
/// assert_eq!(format_general(0.00001), "1e-05");
/// ```
#[must_use]
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // `{:e}` rounds to the requested precision and reports the exponent of
    // the rounded value, which is what the notation choice depends on.
    let scientific = format!("{:.*e}", GENERAL_PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    let precision = GENERAL_PRECISION as i32;

    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_fraction_zeros(mantissa), exponent.unsigned_abs())
    } else {
        #[allow(clippy::cast_sign_loss)]
        let decimals = (precision - 1 - exponent) as usize;
        strip_fraction_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

/// Formats a number with the shortest text that reads back to the same
/// `f64`. Integral values print without a fractional part.
///
/// ## Example
/// ```
/// use sunum::util::num::format_shortest;
///
/// assert_eq!(format_shortest(5.0), "5");
/// assert_eq!(format_shortest(0.1 + 0.2), "0.30000000000000004");
/// ```
#[must_use]
pub fn format_shortest(value: f64) -> String {
    format!("{value}")
}

fn strip_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
