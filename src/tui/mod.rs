// TUI module - the calculator in the terminal
//
// This module owns the terminal: raw mode, alternate screen, optional mouse
// capture, and the event loop. Every key or click that maps to a calculator
// action is dispatched to the session, then the whole screen is redrawn.

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::session::Action;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use traits::Handled;

/// Run the calculator until the user quits
pub async fn run_tui(log_buffer: LogBuffer, config: Config) -> Result<()> {
    let mouse = config.mouse;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(log_buffer, config);

    let result = run_event_loop(&mut terminal, &mut app).await;

    app.save_config_if_dirty();

    disable_raw_mode().context("Failed to disable raw mode")?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to disable mouse capture")?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Redraw, then wait for input or the next tick
///
/// The tick expires toasts and the keypad flash even when no input arrives.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(Event::FocusLost) => app.release_all_keys(),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Map a key to a calculator action
///
/// Keys with Ctrl or Alt held never map, so terminal shortcuts stay global.
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(Action::Compute),
        KeyCode::Backspace => Some(Action::Delete),
        KeyCode::Delete => Some(Action::Clear),
        KeyCode::Char(c) => Action::from_char(c),
        _ => None,
    }
}

/// Layered dispatch: modal → calculator → global → focused panel
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if handle_modal_input(app, &key_event) {
        return;
    }

    match key_event.kind {
        KeyEventKind::Press => {}
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
            return;
        }
        KeyEventKind::Repeat => {
            // Held Backspace keeps deleting; other repeats go through the debouncer
            if key_event.code != KeyCode::Backspace {
                if handle_global_keys(app, &key_event) == Handled::No
                    && app.handle_key_press(key_event.code)
                {
                    app.dispatch_to_focused(key_event);
                }
                return;
            }
        }
    }

    if handle_calculator_keys(app, &key_event) == Handled::Yes {
        return;
    }

    if handle_global_keys(app, &key_event) == Handled::Yes {
        return;
    }

    if app.handle_key_press(key_event.code) {
        app.dispatch_to_focused(key_event);
    }
}

/// Recognized calculator keys are consumed here and never reach the
/// global layer
fn handle_calculator_keys(app: &mut App, key_event: &KeyEvent) -> Handled {
    match action_for_key(key_event) {
        Some(action) => {
            app.dispatch(action);
            Handled::Yes
        }
        None => Handled::No,
    }
}

fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = app.keypad.hit_test(mouse_event.column, mouse_event.row) {
                app.dispatch(action);
            }
        }
        MouseEventKind::ScrollUp => {
            app.dispatch_to_focused(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        }
        MouseEventKind::ScrollDown => {
            app.dispatch_to_focused(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        _ => {}
    }
}

/// Modal captures all input while open; returns true if it absorbed the event
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Keep the debouncer in sync or keys stay "held" after the modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
    }

    true
}

/// App-level keys, debounced to fire once per press
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> Handled {
    let key = key_event.code;

    if key == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Handled::Yes;
    }

    // Panel Esc (clear log selection) wins over quitting
    if key == KeyCode::Esc && app.dispatch_to_focused(*key_event) == Handled::Yes {
        return Handled::Yes;
    }

    let handled = matches!(
        key,
        KeyCode::Char('q' | 'Q' | '?' | 'y' | 'L' | 't') | KeyCode::Esc | KeyCode::Tab
    );
    if !handled || !app.handle_key_press(key) {
        return handled.into();
    }

    match key {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('y') => app.copy_to_clipboard(),
        KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Tab => app.focus_next(),
        _ => {}
    }

    Handled::Yes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;
    use crate::tui::modal::Modal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::with_config(LogBuffer::new(), Config::default())
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            handle_key_event(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn special_keys_map_to_actions() {
        assert_eq!(action_for_key(&key(KeyCode::Enter)), Some(Action::Compute));
        assert_eq!(
            action_for_key(&key(KeyCode::Backspace)),
            Some(Action::Delete)
        );
        assert_eq!(action_for_key(&key(KeyCode::Delete)), Some(Action::Clear));
        assert_eq!(
            action_for_key(&key(KeyCode::Char('*'))),
            Some(Action::ChooseOperation(Operator::Multiply))
        );
        assert_eq!(action_for_key(&key(KeyCode::Char('q'))), None);
        assert_eq!(action_for_key(&key(KeyCode::F(1))), None);
    }

    #[test]
    fn modified_keys_do_not_map() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let alt_1 = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT);
        assert_eq!(action_for_key(&ctrl_c), None);
        assert_eq!(action_for_key(&alt_1), None);

        let shift_plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(
            action_for_key(&shift_plus),
            Some(Action::ChooseOperation(Operator::Add))
        );
    }

    #[test]
    fn typed_sequence_computes_and_logs() {
        let mut app = app();
        type_keys(&mut app, "12+7*2");
        handle_key_event(&mut app, key(KeyCode::Enter));

        assert_eq!(app.session.display().current, "38");
        assert_eq!(app.session.history.len(), 2);
        assert!(!app.should_quit);
    }

    #[test]
    fn repeated_digits_are_not_debounced() {
        let mut app = app();
        type_keys(&mut app, "1111");
        assert_eq!(app.session.display().current, "1,111");

        handle_key_event(&mut app, key(KeyCode::Backspace));
        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.session.display().current, "11");

        handle_key_event(&mut app, key(KeyCode::Delete));
        assert_eq!(app.session.display().current, "");
    }

    #[test]
    fn global_keys_quit_and_open_help() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.modal, Some(Modal::Help));

        // Calculator keys are swallowed by the modal
        handle_key_event(&mut app, key(KeyCode::Char('5')));
        assert_eq!(app.session.display().current, "");

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.modal, None);
        assert!(!app.should_quit);

        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn clicks_dispatch_keypad_buttons() {
        let mut app = app();
        let mut terminal =
            Terminal::new(ratatui::backend::TestBackend::new(80, 30)).expect("terminal");
        terminal
            .draw(|f| views::draw(f, &mut app))
            .expect("draw");

        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        // Top-left of the keypad is AC; enter a digit first so clear is visible
        handle_key_event(&mut app, key(KeyCode::Char('9')));
        handle_mouse_event(&mut app, click(1, 8));
        assert_eq!(app.session.display().current, "");
        assert_eq!(app.pressed(), Some(Action::Clear));
    }
}
