//! User intents decoded from keys, keypad clicks, and replay scripts
//!
//! One `Action` maps to exactly one calculator operation.

use crate::calculator::Operator;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    /// A digit `0`-`9` or the decimal point
    AppendDigit(char),
    ChooseOperation(Operator),
    Compute,
    Delete,
    Clear,
}

impl Action {
    /// Map a typed character to an action
    ///
    /// Keyboard operators differ from display tokens: `*` and `x` choose
    /// multiply, `/` chooses divide. `÷` is accepted for keypads that can
    /// produce it.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Action::AppendDigit(c)),
            '=' => Some(Action::Compute),
            '+' | '-' | '*' | '/' | 'x' | 'X' | '÷' => {
                let mut buf = [0u8; 4];
                Operator::from_token(c.encode_utf8(&mut buf)).map(Action::ChooseOperation)
            }
            _ => None,
        }
    }

    /// Short label used on keypad buttons
    pub fn label(&self) -> String {
        match self {
            Action::AppendDigit(d) => d.to_string(),
            Action::ChooseOperation(op) => op.token().to_string(),
            Action::Compute => "=".to_string(),
            Action::Delete => "DEL".to_string(),
            Action::Clear => "AC".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_decimal_point() {
        for c in "0123456789.".chars() {
            assert_eq!(Action::from_char(c), Some(Action::AppendDigit(c)));
        }
    }

    #[test]
    fn keyboard_operators_map_to_display_operators() {
        assert_eq!(
            Action::from_char('+'),
            Some(Action::ChooseOperation(Operator::Add))
        );
        assert_eq!(
            Action::from_char('-'),
            Some(Action::ChooseOperation(Operator::Subtract))
        );
        assert_eq!(
            Action::from_char('*'),
            Some(Action::ChooseOperation(Operator::Multiply))
        );
        assert_eq!(
            Action::from_char('x'),
            Some(Action::ChooseOperation(Operator::Multiply))
        );
        assert_eq!(
            Action::from_char('/'),
            Some(Action::ChooseOperation(Operator::Divide))
        );
        assert_eq!(
            Action::from_char('÷'),
            Some(Action::ChooseOperation(Operator::Divide))
        );
    }

    #[test]
    fn equals_computes_and_others_are_unmapped() {
        assert_eq!(Action::from_char('='), Some(Action::Compute));
        for c in ['q', 'a', ' ', '%', '('] {
            assert_eq!(Action::from_char(c), None, "{:?} should be unmapped", c);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Action::Clear.label(), "AC");
        assert_eq!(Action::Delete.label(), "DEL");
        assert_eq!(Action::ChooseOperation(Operator::Divide).label(), "÷");
        assert_eq!(Action::AppendDigit('7').to_string(), "7");
    }
}
