// Calculator core - operand/operator state machine
//
// The calculator holds three flat fields: the operand being typed, the operand
// captured before an operator was chosen, and the pending operator. Operands
// stay strings until compute time. Every operation is total; invalid input is
// a silent no-op.
//
// This module knows nothing about the terminal. The TUI adapter calls one
// operation per user action and re-renders afterwards.

mod format;
mod history;
mod number;

pub use format::{DisplayText, NumberFormat};
pub use history::{
    HistoryLog, HistoryRecord, DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY, NO_DATA,
};
pub use number::{number_to_string, parse_operand};

use serde::Serialize;
use std::fmt;

/// One of the four supported binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Display token shown next to the pending operand
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "x",
            Operator::Divide => "÷",
        }
    }

    /// Parse a display token or keyboard symbol
    ///
    /// `*` and `/` are accepted as aliases for `x` and `÷`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "X" | "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => Self::ALL.into_iter().find(|op| op.token() == token),
        }
    }

    /// Apply the operator with IEEE-754 semantics (no division guard)
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Derived state of the calculator, for display hints and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed, no operator pending
    Empty,
    /// Typing (or holding the result of) the left operand
    EnteringFirst,
    /// Operator chosen, right operand not started
    OperatorChosen,
    /// Typing the right operand
    EnteringSecond,
}

/// A completed binary computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Computation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            number_to_string(self.lhs),
            self.operator,
            number_to_string(self.rhs),
            number_to_string(self.result)
        )
    }
}

/// Calculator state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    current: String,
    previous: String,
    operation: Option<Operator>,
}

impl CalculatorState {
    /// Create a calculator in the cleared state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_operand(&self) -> &str {
        &self.current
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    pub fn phase(&self) -> Phase {
        match (self.operation.is_some(), self.current.is_empty()) {
            (false, true) => Phase::Empty,
            (false, false) => Phase::EnteringFirst,
            (true, true) => Phase::OperatorChosen,
            (true, false) => Phase::EnteringSecond,
        }
    }

    /// Append a digit or decimal point to the current operand
    ///
    /// A second decimal point is ignored.
    pub fn append_digit(&mut self, digit: char) {
        if digit == '.' && self.current.contains('.') {
            tracing::trace!("Ignoring repeated decimal point");
            return;
        }
        self.current.push(digit);
    }

    /// Queue an operator, evaluating any pending one first
    ///
    /// Returns the computation performed by the implicit evaluation, if any.
    pub fn choose_operation(&mut self, operator: Operator) -> Option<Computation> {
        if self.current.is_empty() {
            tracing::trace!(%operator, "Ignoring operator with no operand");
            return None;
        }

        let chained = if self.previous.is_empty() {
            None
        } else {
            self.compute()
        };

        self.operation = Some(operator);
        self.previous = std::mem::take(&mut self.current);
        chained
    }

    /// Evaluate the pending operation
    ///
    /// No-op (returns `None`) when either operand is missing or unparsable,
    /// or when no operator is pending.
    pub fn compute(&mut self) -> Option<Computation> {
        let (Some(lhs), Some(rhs)) = (
            parse_operand(&self.previous),
            parse_operand(&self.current),
        ) else {
            tracing::trace!("Ignoring compute with missing operand");
            return None;
        };
        let Some(operator) = self.operation else {
            tracing::trace!("Ignoring compute with no pending operator");
            return None;
        };

        let computation = Computation {
            lhs,
            operator,
            rhs,
            result: operator.apply(lhs, rhs),
        };
        tracing::debug!(%computation, "Computed");

        self.current = number_to_string(computation.result);
        self.operation = None;
        self.previous.clear();
        Some(computation)
    }

    /// Remove the last character of the current operand
    pub fn delete(&mut self) {
        self.current.pop();
    }

    /// Reset to the cleared state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn typed(input: &str) -> CalculatorState {
        let mut state = CalculatorState::new();
        for d in input.chars() {
            state.append_digit(d);
        }
        state
    }

    #[test]
    fn starts_empty() {
        let state = CalculatorState::new();
        assert_eq!(state.phase(), Phase::Empty);
        assert_eq!(state.current_operand(), "");
        assert_eq!(state.previous_operand(), "");
        assert_eq!(state.operation(), None);
    }

    #[test]
    fn repeated_decimal_point_is_ignored() {
        let mut state = typed("3.1");
        let before = state.clone();
        state.append_digit('.');
        assert_eq!(state, before);
        state.append_digit('.');
        assert_eq!(state, before);
        state.append_digit('4');
        assert_eq!(state.current_operand(), "3.14");
    }

    #[test]
    fn choose_operation_without_operand_is_noop() {
        let mut state = CalculatorState::new();
        assert_eq!(state.choose_operation(Operator::Add), None);
        assert_eq!(state, CalculatorState::new());

        // Also a no-op right after an operator was chosen
        let mut state = typed("5");
        state.choose_operation(Operator::Add);
        let before = state.clone();
        state.choose_operation(Operator::Multiply);
        assert_eq!(state, before);
        assert_eq!(state.operation(), Some(Operator::Add));
    }

    #[test]
    fn choose_operation_moves_operand() {
        let mut state = typed("12");
        assert_eq!(state.choose_operation(Operator::Subtract), None);
        assert_eq!(state.previous_operand(), "12");
        assert_eq!(state.current_operand(), "");
        assert_eq!(state.operation(), Some(Operator::Subtract));
        assert_eq!(state.phase(), Phase::OperatorChosen);

        state.append_digit('4');
        assert_eq!(state.phase(), Phase::EnteringSecond);
    }

    #[test]
    fn chained_operations_evaluate_left_to_right() {
        let mut state = typed("1");
        state.choose_operation(Operator::Add);
        state.append_digit('2');

        let chained = state.choose_operation(Operator::Multiply);
        let chained = chained.expect("pending addition is evaluated");
        assert_eq!(chained.result, 3.0);
        assert_eq!(state.previous_operand(), "3");
        assert_eq!(state.operation(), Some(Operator::Multiply));

        state.append_digit('3');
        let result = state.compute().expect("multiplication computes");
        assert_eq!(result.result, 9.0);
        assert_eq!(state.current_operand(), "9");
        assert_eq!(state.phase(), Phase::EnteringFirst);
    }

    #[test]
    fn compute_applies_each_operator() {
        let cases = [
            (Operator::Add, "7", "3", "10"),
            (Operator::Subtract, "7", "10", "-3"),
            (Operator::Multiply, "2.5", "4", "10"),
            (Operator::Divide, "1", "4", "0.25"),
        ];
        for (op, lhs, rhs, expected) in cases {
            let mut state = typed(lhs);
            state.choose_operation(op);
            for d in rhs.chars() {
                state.append_digit(d);
            }
            assert!(state.compute().is_some(), "{} should compute", op);
            assert_eq!(state.current_operand(), expected, "{} {} {}", lhs, op, rhs);
            assert_eq!(state.previous_operand(), "");
            assert_eq!(state.operation(), None);
        }
    }

    #[test]
    fn compute_with_missing_operand_is_noop() {
        let mut state = typed("8");
        let before = state.clone();
        assert_eq!(state.compute(), None);
        assert_eq!(state, before);

        state.choose_operation(Operator::Add);
        let before = state.clone();
        assert_eq!(state.compute(), None);
        assert_eq!(state, before);
    }

    #[test]
    fn compute_with_unparsable_operand_is_noop() {
        let mut state = typed(".");
        state.choose_operation(Operator::Add);
        state.append_digit('2');
        let before = state.clone();
        assert_eq!(state.compute(), None);
        assert_eq!(state, before);
    }

    #[test]
    fn division_by_zero_yields_infinity() {
        let mut state = typed("5");
        state.choose_operation(Operator::Divide);
        state.append_digit('0');
        let computation = state.compute().expect("division computes");
        assert!(computation.result.is_infinite());
        assert_eq!(state.current_operand(), "Infinity");
        assert_eq!(
            format::format_for_display_with(state.current_operand(), &NumberFormat::default()),
            "∞"
        );
        assert_ne!(state.phase(), Phase::Empty);
    }

    #[test]
    fn result_can_be_extended_and_deleted() {
        let mut state = typed("2");
        state.choose_operation(Operator::Multiply);
        state.append_digit('6');
        state.compute();
        state.append_digit('1');
        assert_eq!(state.current_operand(), "121");
        state.delete();
        assert_eq!(state.current_operand(), "12");
    }

    #[test]
    fn delete_single_character_and_empty() {
        let mut state = typed("9");
        state.delete();
        assert_eq!(state.current_operand(), "");
        state.delete();
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn delete_trims_result_text() {
        let mut state = typed("5");
        state.choose_operation(Operator::Divide);
        state.append_digit('0');
        state.compute();
        state.delete();
        assert_eq!(state.current_operand(), "Infinit");
    }

    #[test]
    fn clear_always_returns_to_empty() {
        let mut state = typed("4.2");
        state.choose_operation(Operator::Multiply);
        state.append_digit('3');
        state.clear();
        assert_eq!(state, CalculatorState::new());
        assert_eq!(state.phase(), Phase::Empty);
    }

    #[test]
    fn operator_tokens_and_aliases() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.token()), Some(op));
        }
        assert_eq!(Operator::from_token("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_token("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_token("%"), None);
    }

    #[test]
    fn computation_renders_as_history_line() {
        let computation = Computation {
            lhs: 3.5,
            operator: Operator::Multiply,
            rhs: 2.0,
            result: 7.0,
        };
        assert_eq!(computation.to_string(), "3.5 x 2 = 7");
    }

    proptest! {
        #[test]
        fn digits_concatenate(input in "[0-9]{0,12}(\\.[0-9]{0,6})?") {
            let state = typed(&input);
            prop_assert_eq!(state.current_operand(), input.as_str());
        }

        #[test]
        fn decimal_point_is_idempotent(input in "[0-9]{0,6}\\.[0-9]{0,6}", repeats in 1usize..5) {
            let mut state = typed(&input);
            let before = state.clone();
            for _ in 0..repeats {
                state.append_digit('.');
            }
            prop_assert_eq!(state, before);
        }
    }
}
