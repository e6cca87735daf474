//! Headless key replay for `abacus press`
//!
//! Feeds a key script through the same action mapping the TUI uses. Two
//! aliases exist only here because a shell argument has no Backspace or
//! Delete key: `<` deletes and `C` clears. Unmapped characters are skipped.

use super::{Action, Session};
use crate::calculator::DisplayText;
use serde::Serialize;

/// Final state after a replay, in the shape printed by `--json`
#[derive(Debug, Clone, Serialize)]
pub struct ReplayOutcome {
    pub display: DisplayText,
    /// History lines, newest first
    pub history: Vec<String>,
    pub ignored: Vec<char>,
}

impl ReplayOutcome {
    /// Plain-text rendering: previous region, current region, then history
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.display.previous);
        out.push('\n');
        out.push_str(&self.display.current);
        out.push('\n');
        if self.history.is_empty() {
            out.push_str(crate::calculator::NO_DATA);
            out.push('\n');
        } else {
            for line in &self.history {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

fn action_for_script_char(c: char) -> Option<Action> {
    match c {
        '<' => Some(Action::Delete),
        'C' => Some(Action::Clear),
        _ => Action::from_char(c),
    }
}

/// Replay `keys` against `session` and report the rendered result
pub fn replay(session: &mut Session, keys: &str) -> ReplayOutcome {
    let mut ignored = Vec::new();

    for c in keys.chars() {
        match action_for_script_char(c) {
            Some(action) => {
                session.apply(action);
            }
            None if c.is_whitespace() => {}
            None => {
                tracing::debug!(key = %c, "Ignoring unmapped key");
                ignored.push(c);
            }
        }
    }

    ReplayOutcome {
        display: session.display(),
        history: session.history.records().map(|r| r.line()).collect(),
        ignored,
    }
}
