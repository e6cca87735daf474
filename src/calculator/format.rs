//! Display formatting for operands
//!
//! The integer part of an operand gets thousands grouping; the fractional
//! part is reattached exactly as typed so trailing zeros and a trailing
//! decimal point stay visible while the user is still entering digits.

use super::number::parse_operand;
use super::CalculatorState;
use serde::Serialize;

/// Number grouping options for the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator inserted between groups of three integer digits
    pub thousands_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_separator: ",".to_string(),
        }
    }
}

/// Format an operand for display
///
/// # Examples
/// ```ignore
/// let format = NumberFormat::default();
/// assert_eq!(format_for_display_with("1234.5", &format), "1,234.5");
/// assert_eq!(format_for_display_with("7.", &format), "7.");
/// assert_eq!(format_for_display_with("", &format), "");
/// ```
pub fn format_for_display_with(operand: &str, format: &NumberFormat) -> String {
    let (integer_digits, decimal_digits) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let integer_display = parse_operand(integer_digits)
        .map(|value| group_integer(value, &format.thousands_separator))
        .unwrap_or_default();

    match decimal_digits {
        Some(fraction) => format!("{}.{}", integer_display, fraction),
        None => integer_display,
    }
}

/// Round to zero fractional digits and insert thousands separators
fn group_integer(value: f64, separator: &str) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}∞", sign);
    }

    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}

/// The two rendered text regions of the calculator display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayText {
    /// Pending operand and operator, empty when no operator is pending
    pub previous: String,
    /// Operand being typed, or the last result
    pub current: String,
}

impl DisplayText {
    /// Render both regions from the calculator state
    pub fn render(state: &CalculatorState, format: &NumberFormat) -> Self {
        let current = format_for_display_with(state.current_operand(), format);
        let previous = match state.operation() {
            Some(op) => format!(
                "{} {}",
                format_for_display_with(state.previous_operand(), format),
                op.token()
            ),
            None => String::new(),
        };

        Self { previous, current }
    }
}
