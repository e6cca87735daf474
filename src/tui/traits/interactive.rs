//! Keyboard input for focusable panels

use super::Scrollable;
use crossterm::event::{KeyCode, KeyEvent};

/// Whether a layer consumed a key event
///
/// A `No` lets the event fall through to the next layer of dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// A panel that handles keys while it has focus
pub trait Interactive {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Key hints shown in the status bar while focused
    fn focus_hint(&self) -> &'static str;
}

/// Common scroll keys for any scrollable panel
pub fn handle_scroll_keys<T: Scrollable + ?Sized>(panel: &mut T, key: KeyEvent) -> Handled {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => panel.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => panel.scroll_down(),
        KeyCode::PageUp => panel.page_up(),
        KeyCode::PageDown => panel.page_down(),
        KeyCode::Home => panel.scroll_to_top(),
        KeyCode::End => panel.scroll_to_bottom(),
        _ => return Handled::No,
    }
    Handled::Yes
}
