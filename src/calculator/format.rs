//! Number formatting for the calculator display.
//!
//! Finite values are shown in plain decimal notation without grouping, with
//! at most [`MAX_FRACTION_DIGITS`] digits after the point. Infinities and NaN
//! get fixed text so a division by zero always has something to show.

/// Maximum number of fraction digits shown on the display.
pub const MAX_FRACTION_DIGITS: usize = 16;

pub const POSITIVE_INFINITY: &str = "Infinity";
pub const NEGATIVE_INFINITY: &str = "-Infinity";
pub const NOT_A_NUMBER: &str = "Not a Number";

/// Format a value for the display.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return NOT_A_NUMBER.to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            POSITIVE_INFINITY
        } else {
            NEGATIVE_INFINITY
        };
        return text.to_string();
    }

    // Shortest round-trip form; f64's Display never switches to an exponent.
    let shortest = value.to_string();
    match shortest.split_once('.') {
        Some((_, fraction)) if fraction.len() > MAX_FRACTION_DIGITS => {
            let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value);
            trim_fraction(&rounded).to_string()
        }
        _ => shortest,
    }
}

/// Whether a display string is one of the non-finite renderings.
pub fn is_error_display(text: &str) -> bool {
    matches!(text, POSITIVE_INFINITY | NEGATIVE_INFINITY | NOT_A_NUMBER)
}

/// Drop insignificant zeros (and a bare point) from a decimal string.
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

    #[test]
    fn test_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-9.0), "-9");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn test_fraction_digits_capped() {
        // 0.1 + 0.2 has 17 fraction digits in its shortest form
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(1e-20), "0");
    }

    #[test]
    fn test_large_values_stay_plain() {
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "Not a Number");
        assert!(is_error_display("Infinity"));
        assert!(is_error_display("Not a Number"));
        assert!(!is_error_display("0"));
    }
}
