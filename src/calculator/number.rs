//! Operand parsing and canonical number rendering
//!
//! Operands are kept as the strings the user typed. They only become numbers
//! at compute time, using leading-prefix parsing: the longest numeric prefix
//! wins and anything after it is ignored ("7." is 7, "12abc" is 12).
//! Strings with no numeric prefix (including "" and "NaN") do not parse.

use regex::Regex;
use std::sync::OnceLock;

/// Magnitude at and above which results switch to exponent notation
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which non-zero results switch to exponent notation
const EXPONENT_LOWER: f64 = 1e-6;

fn numeric_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([+-]?)(Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
            .expect("numeric prefix pattern is valid")
    })
}

/// Parse the leading numeric prefix of `s`
///
/// Returns `None` when there is no prefix or it evaluates to NaN.
pub fn parse_operand(s: &str) -> Option<f64> {
    let caps = numeric_prefix().captures(s)?;
    let negative = &caps[1] == "-";
    let body = &caps[2];

    let magnitude = if body == "Infinity" {
        f64::INFINITY
    } else {
        body.parse::<f64>().ok()?
    };

    let value = if negative { -magnitude } else { magnitude };
    (!value.is_nan()).then_some(value)
}

/// Render a number the way it is stored back into an operand
///
/// Shortest round-trip decimal. Very large and very small magnitudes use
/// exponent form with an explicit sign (`1e+21`, `1.5e-7`), negative zero
/// collapses to `0`, and non-finite values spell out `Infinity` / `NaN`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let rendered = format!("{:e}", value);
        return match rendered.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => rendered,
        };
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_partial_operands() {
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("3.25"), Some(3.25));
        assert_eq!(parse_operand("7."), Some(7.0));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("-12"), Some(-12.0));
        assert_eq!(parse_operand("007"), Some(7.0));
    }

    #[test]
    fn parses_longest_numeric_prefix() {
        assert_eq!(parse_operand("12abc"), Some(12.0));
        assert_eq!(parse_operand("1e+21"), Some(1e21));
        assert_eq!(parse_operand("1.5e-7"), Some(1.5e-7));
        assert_eq!(parse_operand("2e"), Some(2.0));
    }

    #[test]
    fn rejects_missing_operands() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("NaN"), None);
        assert_eq!(parse_operand("abc"), None);
    }

    #[test]
    fn parses_infinity() {
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn renders_ordinary_numbers() {
        assert_eq!(number_to_string(7.0), "7");
        assert_eq!(number_to_string(-3.5), "-3.5");
        assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_string(-0.0), "0");
    }

    #[test]
    fn renders_extreme_magnitudes_with_exponent() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_string(123456789.0), "123456789");
    }

    #[test]
    fn renders_non_finite_values() {
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_string(f64::NAN), "NaN");
    }
}
