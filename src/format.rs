//! Number rendering for demo output.
//!
//! Areas and salaries are printed the way a default-configured C++ stream
//! prints a `double`: six significant digits, no trailing zeros, and
//! scientific notation only for very large or very small magnitudes.

const SIGNIFICANT_DIGITS: i32 = 6;

/// Formats `value` with six significant digits (`78.5398`, `50`, `1e+06`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to six digits can bump the exponent (999999.7 -> 1e+06),
    // so take it from the rounded scientific form.
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let precision = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", precision, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_whole_numbers_have_no_fraction() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(800.0), "800");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_negative_zero_keeps_its_sign() {
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(format_number(-0.0 * 10.0), "-0");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(format_number(25.0 * PI), "78.5398");
        assert_eq!(format_number(PI), "3.14159");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_large_and_tiny_values_switch_to_scientific() {
        assert_eq!(format_number(1_000_000.0), "1e+06");
        assert_eq!(format_number(1_234_567.0), "1.23457e+06");
        assert_eq!(format_number(999_999.7), "1e+06");
        assert_eq!(format_number(0.000_001_5), "1.5e-06");
        assert_eq!(format_number(0.000_15), "0.00015");
        assert_eq!(format_number(0.000_015), "1.5e-05");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }
}
