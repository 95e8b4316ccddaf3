//! Numeric rendering.
//!
//! Integers and floats render either in one of the explicit `#format`
//! notations or as a plain decimal with a fixed number of fractional digits,
//! grouped thousands, and an optional forced `+`.

use crate::placeholder::NumericFormat;
use crate::FormatOptions;

/// A number taken from an argument value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Truncating (and saturating) integer view used by the radix formats.
    fn as_i64(self) -> i64 {
        match self {
            Number::Integer(i) => i,
            Number::Float(f) => f as i64,
        }
    }

    fn is_non_negative(self) -> bool {
        match self {
            Number::Integer(i) => i >= 0,
            Number::Float(f) => f >= 0.0,
        }
    }
}

/// Largest number of fractional digits ever rendered; larger requests are
/// clamped.
pub(crate) const MAX_DECIMALS: usize = 500;

pub(crate) fn render_number(
    number: Number,
    sign: bool,
    decimals: usize,
    format: Option<NumericFormat>,
    options: &FormatOptions,
) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    match format {
        Some(NumericFormat::Exponent) => exponent(number.as_f64(), sign, decimals),
        Some(NumericFormat::Binary) => format!("0b{:b}", number.as_i64()),
        Some(NumericFormat::Octal) => format!("0o{:o}", number.as_i64()),
        Some(NumericFormat::Hex) => format!("0x{:X}", number.as_i64()),
        Some(NumericFormat::Caret | NumericFormat::Pictures) | None => {
            decimal(number, sign, decimals, options)
        }
    }
}

/// Exponent notation with an explicitly signed exponent, e.g. `1.234568e-1`
/// or `1.200000e+3`. Six mantissa digits unless `decimals` asks otherwise.
fn exponent(value: f64, sign: bool, decimals: usize) -> String {
    let precision = if decimals > 0 { decimals } else { 6 };
    let mut rendered = format!("{:.*e}", precision, value);
    if let Some(e) = rendered.find('e') {
        if rendered.as_bytes().get(e + 1) != Some(&b'-') {
            rendered.insert(e + 1, '+');
        }
    }
    if sign && value >= 0.0 {
        rendered.insert(0, '+');
    }
    rendered
}

/// Rounds half away from zero at `decimals` fractional digits.
///
/// The scaled value is first rounded to 15 significant digits, so that
/// `1.005` at two decimals becomes `1.01` although its binary value is just
/// below the midpoint.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let Ok(exponent) = i32::try_from(decimals) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    pre_round(scaled).round() / factor
}

fn pre_round(value: f64) -> f64 {
    if value == 0.0 {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    if magnitude >= 15 {
        return value;
    }
    let precision = 10f64.powi(14 - magnitude);
    let shifted = value * precision;
    if !precision.is_finite() || !shifted.is_finite() {
        return value;
    }
    shifted.round() / precision
}

fn decimal(number: Number, sign: bool, decimals: usize, options: &FormatOptions) -> String {
    let (digits, negative) = match number {
        Number::Integer(i) => {
            let mut digits = i.unsigned_abs().to_string();
            if decimals > 0 {
                digits.push('.');
                digits.extend(std::iter::repeat('0').take(decimals));
            }
            (digits, i < 0)
        }
        Number::Float(f) if f.is_nan() => return "nan".to_string(),
        Number::Float(f) if f.is_infinite() => {
            return match (f > 0.0, sign) {
                (true, true) => "+inf".to_string(),
                (true, false) => "inf".to_string(),
                (false, _) => "-inf".to_string(),
            };
        }
        Number::Float(f) => {
            let rounded = round_half_away(f, decimals);
            let digits = format!("{:.*}", decimals, rounded.abs());
            // no negative zero after rounding
            let negative = f < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));
            (digits, negative)
        }
    };

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut rendered = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        rendered.push('-');
    } else if sign && number.is_non_negative() {
        rendered.push('+');
    }
    push_grouped(&mut rendered, integer, options.thousands_separator);
    if let Some(fraction) = fraction {
        rendered.push(options.decimal_point);
        rendered.push_str(fraction);
    }
    rendered
}

fn push_grouped(output: &mut String, integer: &str, separator: Option<char>) {
    let Some(separator) = separator else {
        output.push_str(integer);
        return;
    };
    let len = integer.len();
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            output.push(separator);
        }
        output.push(digit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(number: Number, sign: bool, decimals: usize) -> String {
        render_number(number, sign, decimals, None, &FormatOptions::default())
    }

    #[test]
    fn test_float_rounds_to_decimals() {
        assert_eq!(plain(Number::Float(0.123456789), false, 0), "0");
        assert_eq!(plain(Number::Float(0.123456789), false, 5), "0.12346");
        assert_eq!(plain(Number::Float(2.5), false, 0), "3");
        assert_eq!(plain(Number::Float(-2.5), false, 0), "-3");
    }

    #[test]
    fn test_float_rounding_ignores_binary_representation_error() {
        assert_eq!(plain(Number::Float(1.005), false, 2), "1.01");
        assert_eq!(plain(Number::Float(-1.005), false, 2), "-1.01");
        assert_eq!(plain(Number::Float(0.285), false, 2), "0.29");
        assert_eq!(plain(Number::Float(1e-300), false, 2), "0.00");
    }

    #[test]
    fn test_decimals_are_clamped() {
        let huge = 1_000_000_000_000;

        let rendered = plain(Number::Integer(1), false, huge);
        assert_eq!(rendered.len(), 2 + MAX_DECIMALS);
        assert!(rendered.starts_with("1.000"));

        let rendered = plain(Number::Float(0.5), false, huge);
        assert_eq!(rendered.len(), 2 + MAX_DECIMALS);
        assert!(rendered.starts_with("0.5000"));

        let options = FormatOptions::default();
        let rendered = render_number(
            Number::Float(1.0),
            false,
            huge,
            Some(NumericFormat::Exponent),
            &options,
        );
        assert_eq!(rendered, format!("1.{}e+0", "0".repeat(MAX_DECIMALS)));
    }

    #[test]
    fn test_integer_decimals_are_zero_padded() {
        assert_eq!(plain(Number::Integer(1), false, 1), "1.0");
        assert_eq!(plain(Number::Integer(1000), false, 2), "1,000.00");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(plain(Number::Integer(999), false, 0), "999");
        assert_eq!(plain(Number::Integer(1234567), false, 0), "1,234,567");
        assert_eq!(plain(Number::Integer(-1234567), false, 0), "-1,234,567");
        assert_eq!(
            plain(Number::Integer(i64::MIN), false, 0),
            "-9,223,372,036,854,775,808"
        );
        assert_eq!(plain(Number::Float(1234.5), false, 1), "1,234.5");
    }

    #[test]
    fn test_forced_sign() {
        assert_eq!(plain(Number::Integer(5), true, 0), "+5");
        assert_eq!(plain(Number::Integer(0), true, 0), "+0");
        assert_eq!(plain(Number::Integer(-5), true, 0), "-5");
        assert_eq!(plain(Number::Float(1.5), true, 1), "+1.5");
    }

    #[test]
    fn test_no_negative_zero() {
        assert_eq!(plain(Number::Float(-0.001), false, 0), "0");
        assert_eq!(plain(Number::Float(-0.001), true, 2), "0.00");
        assert_eq!(plain(Number::Float(-0.0), true, 0), "+0");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(plain(Number::Float(f64::NAN), false, 2), "nan");
        assert_eq!(plain(Number::Float(f64::INFINITY), true, 0), "+inf");
        assert_eq!(plain(Number::Float(f64::NEG_INFINITY), false, 0), "-inf");
    }

    #[test]
    fn test_exponent() {
        let options = FormatOptions::default();
        let exp = |n, sign, decimals| {
            render_number(n, sign, decimals, Some(NumericFormat::Exponent), &options)
        };
        assert_eq!(exp(Number::Float(0.123456789), false, 0), "1.234568e-1");
        assert_eq!(exp(Number::Float(1200.0), false, 0), "1.200000e+3");
        assert_eq!(exp(Number::Integer(1200), true, 2), "+1.20e+3");
        assert_eq!(exp(Number::Float(-0.5), true, 1), "-5.0e-1");
        assert_eq!(exp(Number::Integer(0), false, 0), "0.000000e+0");
    }

    #[test]
    fn test_radix_formats() {
        let options = FormatOptions::default();
        let radix = |n, format| render_number(n, true, 3, Some(format), &options);
        assert_eq!(radix(Number::Integer(2), NumericFormat::Binary), "0b10");
        assert_eq!(radix(Number::Integer(493), NumericFormat::Octal), "0o755");
        assert_eq!(radix(Number::Integer(42), NumericFormat::Hex), "0x2A");
        assert_eq!(radix(Number::Float(42.9), NumericFormat::Hex), "0x2A");
        assert_eq!(
            radix(Number::Integer(-1), NumericFormat::Hex),
            "0xFFFFFFFFFFFFFFFF"
        );
    }

    #[test]
    fn test_custom_separators() {
        let options = FormatOptions::new()
            .with_decimal_point(',')
            .with_thousands_separator('.');
        assert_eq!(
            render_number(Number::Float(1234.5), false, 2, None, &options),
            "1.234,50"
        );

        let options = FormatOptions::new().without_grouping();
        assert_eq!(
            render_number(Number::Integer(1234567), false, 0, None, &options),
            "1234567"
        );
    }
}
