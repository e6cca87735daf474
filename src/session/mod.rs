// Calculator session - the display adapter's owned state
//
// A session pairs the calculator state machine with the rolling history log
// and the number format. Every input surface (keyboard, keypad click, replay
// script) funnels through `Session::apply`, which runs exactly one calculator
// operation and records any computation it produced. Rendering is always the
// caller's next step.

mod action;
mod replay;

pub use action::Action;
pub use replay::replay;

use crate::calculator::{
    CalculatorState, Computation, DisplayText, HistoryLog, NumberFormat,
};

/// Calculator state plus the adapter-owned history log
#[derive(Debug, Clone)]
pub struct Session {
    pub calculator: CalculatorState,
    pub history: HistoryLog,
    pub format: NumberFormat,
}

impl Session {
    pub fn new(history_capacity: usize, format: NumberFormat) -> Self {
        Self {
            calculator: CalculatorState::new(),
            history: HistoryLog::new(history_capacity),
            format,
        }
    }

    /// Dispatch one action; returns the computation it produced, if any
    pub fn apply(&mut self, action: Action) -> Option<Computation> {
        tracing::trace!(%action, phase = ?self.calculator.phase(), "Dispatching");

        let computation = match action {
            Action::AppendDigit(d) => {
                self.calculator.append_digit(d);
                None
            }
            Action::ChooseOperation(op) => self.calculator.choose_operation(op),
            Action::Compute => self.calculator.compute(),
            Action::Delete => {
                self.calculator.delete();
                None
            }
            Action::Clear => {
                self.calculator.clear();
                None
            }
        };

        if let Some(computation) = computation {
            let record = self.history.record(computation);
            tracing::info!(
                sequence = record.sequence,
                slot = record.slot,
                "{}",
                record.line()
            );
        }

        computation
    }

    /// Render both display regions
    pub fn display(&self) -> DisplayText {
        DisplayText::render(&self.calculator, &self.format)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            crate::calculator::DEFAULT_HISTORY_CAPACITY,
            NumberFormat::default(),
        )
    }
}
