// TUI application state
//
// App owns the calculator session and the UI state around it: theme, panel
// focus, modal, toast, and the keypad flash. All mutation happens on the
// event loop task.

use super::components::{HistoryPanel, Keypad, LogsPanel, Toast};
use super::input::InputHandler;
use super::modal::Modal;
use super::traits::{Handled, Interactive};
use crate::calculator::Computation;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::session::{Action, Session};
use crate::theme::{Theme, ThemeConfig};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// How long a pressed keypad button stays highlighted
const FLASH_DURATION: Duration = Duration::from_millis(150);

/// Panels that take navigation keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusablePanel {
    #[default]
    History,
    Logs,
}

pub struct App {
    pub session: Session,
    pub config: Config,
    pub theme: Theme,

    pub keypad: Keypad,
    pub history_panel: HistoryPanel,
    pub logs_panel: LogsPanel,
    pub log_buffer: LogBuffer,

    pub focused: FocusablePanel,
    pub show_logs: bool,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,

    /// Keypad button to highlight and when it was pressed
    flash: Option<(Action, Instant)>,

    input_handler: InputHandler,

    /// Theme changed during the session; written back on quit
    config_dirty: bool,

    pub should_quit: bool,
}

impl App {
    pub fn with_config(log_buffer: LogBuffer, config: Config) -> Self {
        let theme = Theme::by_name_with_config(&config.theme, &theme_config(&config));
        let session = Session::new(config.history_capacity, config.number_format());

        Self {
            session,
            theme,
            keypad: Keypad::new(),
            history_panel: HistoryPanel::new(),
            logs_panel: LogsPanel::new(),
            log_buffer,
            focused: FocusablePanel::default(),
            show_logs: false,
            modal: None,
            toast: None,
            flash: None,
            input_handler: InputHandler::for_app_keys(),
            config_dirty: false,
            should_quit: false,
            config,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Calculator
    // ─────────────────────────────────────────────────────────────────────

    /// Run one calculator action and flash its keypad button
    pub fn dispatch(&mut self, action: Action) -> Option<Computation> {
        self.flash = Some((action, Instant::now()));
        self.session.apply(action)
    }

    /// Keypad button currently highlighted
    pub fn pressed(&self) -> Option<Action> {
        self.flash.map(|(action, _)| action)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Debounced press for app-level keys; true means act on it
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.release(key);
    }

    pub fn release_all_keys(&mut self) {
        self.input_handler.release_all();
    }

    /// Route a key to the focused panel
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            FocusablePanel::History => self.history_panel.handle_key(key),
            FocusablePanel::Logs => self.logs_panel.handle_key(key),
        }
    }

    pub fn focus_hint(&self) -> &'static str {
        match self.focused {
            FocusablePanel::History => self.history_panel.focus_hint(),
            FocusablePanel::Logs => self.logs_panel.focus_hint(),
        }
    }

    pub fn is_focused(&self, panel: FocusablePanel) -> bool {
        self.focused == panel
    }

    /// Cycle focus; the logs panel only takes focus while visible
    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            FocusablePanel::History if self.show_logs => FocusablePanel::Logs,
            _ => FocusablePanel::History,
        };
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if self.show_logs {
            self.focused = FocusablePanel::Logs;
        } else {
            self.focused = FocusablePanel::History;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────────────

    /// Text that `y` copies: the selected log line when the logs panel has
    /// a selection, otherwise the current operand as a plain number
    pub fn copy_text(&self) -> Option<String> {
        if self.focused == FocusablePanel::Logs && self.show_logs {
            let entries = self.log_buffer.get_all();
            if let Some(text) = self.logs_panel.selected_entry_text(&entries) {
                return Some(text);
            }
        }

        let current = self.session.calculator.current_operand();
        (!current.is_empty()).then(|| current.to_string())
    }

    pub fn copy_to_clipboard(&mut self) {
        let Some(text) = self.copy_text() else {
            self.show_toast(Toast::info("Nothing to copy"));
            return;
        };

        match write_clipboard(&text) {
            Ok(()) => self.show_toast(Toast::info(format!("✓ Copied {}", text))),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast(Toast::error("✗ Failed to copy"));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Theme and config
    // ─────────────────────────────────────────────────────────────────────

    /// Switch to the next bundled theme
    pub fn cycle_theme(&mut self) {
        let next = Theme::next_name(&self.theme.name);
        self.theme = Theme::by_name_with_config(next, &theme_config(&self.config));
        self.config.theme = next.to_string();
        self.config_dirty = true;
        tracing::debug!(theme = next, "Theme changed");
    }

    /// Persist the theme choice if it changed
    ///
    /// Only the theme is written; env overrides in `self.config` stay out of
    /// the file.
    pub fn save_config_if_dirty(&mut self) {
        if !self.config_dirty {
            return;
        }
        match Config::save_theme(&self.config.theme) {
            Ok(()) => {
                self.config_dirty = false;
                tracing::info!("Saved theme {:?} to config", self.config.theme);
            }
            Err(e) => tracing::error!("Failed to save config: {}", e),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────

    pub fn open_help(&mut self) {
        self.modal = Some(Modal::help());
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Expire the toast and keypad flash
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
        if self
            .flash
            .is_some_and(|(_, at)| at.elapsed() >= FLASH_DURATION)
        {
            self.flash = None;
        }
    }
}

fn theme_config(config: &Config) -> ThemeConfig {
    ThemeConfig {
        use_theme_background: config.use_theme_background,
    }
}

/// The clipboard is opened per copy so no handle outlives the call
fn write_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
