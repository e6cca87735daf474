// Modal overlays
//
// A modal captures all key input while open. App holds `Option<Modal>` and
// acts on the returned `ModalAction`.

use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input swallowed
    None,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Key bindings and current settings
    Help,
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_dismiss_keys_only() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('5')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Backspace), ModalAction::None);
    }
}
