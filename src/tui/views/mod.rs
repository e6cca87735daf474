// Screen layout
//
// One calculator screen, arranged by width breakpoint:
//
//   Compact     title / display / keypad / history / [logs] / status
//   Normal+     title / (display + keypad | history) / [logs] / status
//   UltraWide   title / (display + keypad | history | [logs]) / status

mod modal;

use super::app::{App, FocusablePanel};
use super::components::{display_panel, status_bar, title_bar};
use super::layout::Breakpoint;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Rows for the two display regions plus borders
const DISPLAY_HEIGHT: u16 = 4;
/// Keypad rows below which buttons lose their borders
const KEYPAD_MIN_HEIGHT: u16 = 10;
/// Width of the calculator column when history sits beside it
const CALCULATOR_WIDTH: u16 = 44;
const LOGS_HEIGHT: u16 = 8;

/// Render a full frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let [title_area, body, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(KEYPAD_MIN_HEIGHT + DISPLAY_HEIGHT),
        Constraint::Length(2),
    ])
    .areas(f.area());

    title_bar::render(f, title_area, app);
    draw_body(f, body, app);
    status_bar::render(f, status_area, app);

    if let Some(modal_state) = app.modal {
        modal::render(f, &modal_state, app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

fn draw_body(f: &mut Frame, area: Rect, app: &mut App) {
    let bp = Breakpoint::from_width(area.width);

    // Logs take a strip at the bottom unless there is room for a column
    let (main, logs_area) = if app.show_logs && !bp.logs_column() {
        let [main, logs] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(LOGS_HEIGHT)]).areas(area);
        (main, Some(logs))
    } else {
        (area, None)
    };

    let (calculator, history, logs_area) = if bp.history_beside() {
        let mut constraints = vec![Constraint::Length(CALCULATOR_WIDTH), Constraint::Min(20)];
        if app.show_logs && bp.logs_column() {
            constraints.push(Constraint::Percentage(40));
        }
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(main);
        (columns[0], columns[1], logs_area.or(columns.get(2).copied()))
    } else {
        let history_height = app.session.history.capacity().min(4) as u16 + 2;
        let [calculator, history] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(history_height)])
                .areas(main);
        (calculator, history, logs_area)
    };

    let [display_area, keypad_area] =
        Layout::vertical([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)])
            .areas(calculator);

    let display = app.session.display();
    display_panel::render(f, display_area, &display, &app.theme);

    let pressed = app.pressed();
    app.keypad.render(f, keypad_area, &app.theme, pressed);

    let history_focused = app.is_focused(FocusablePanel::History);
    app.history_panel.render(
        f,
        history,
        &app.session.history,
        &app.theme,
        history_focused,
        bp.history_timestamps(),
    );

    if let Some(logs_area) = logs_area {
        let entries = app.log_buffer.get_all();
        let focused = app.is_focused(FocusablePanel::Logs);
        app.logs_panel
            .render(f, logs_area, &entries, &app.theme, focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::session::Action;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::with_config(LogBuffer::new(), Config::default())
    }

    #[test]
    fn renders_grouped_display_and_placeholder() {
        let mut app = app();
        for c in "1234567".chars() {
            app.dispatch(Action::AppendDigit(c));
        }

        let text = screen(&mut app, 80, 30);
        assert!(text.contains("1,234,567"));
        assert!(text.contains("No Data"));
        assert!(text.contains("AC"));
    }

    #[test]
    fn compact_layout_still_shows_history() {
        let mut app = app();
        for action in [
            Action::AppendDigit('6'),
            Action::ChooseOperation(crate::calculator::Operator::Divide),
            Action::AppendDigit('3'),
            Action::Compute,
        ] {
            app.dispatch(action);
        }

        let text = screen(&mut app, 40, 30);
        assert!(text.contains("6 ÷ 3 = 2"));
    }

    #[test]
    fn compact_layout_with_large_history_capacity() {
        let config = Config {
            history_capacity: usize::MAX,
            ..Config::default()
        };
        let mut app = App::with_config(LogBuffer::new(), config);
        app.dispatch(Action::AppendDigit('4'));

        let text = screen(&mut app, 40, 30);
        assert!(text.contains("No Data"));
        assert!(text.contains("AC"));
    }

    #[test]
    fn keypad_hitboxes_follow_last_frame() {
        let mut app = app();
        screen(&mut app, 80, 30);

        // Calculator column starts at x=0, below title (3) and display (4)
        assert_eq!(app.keypad.hit_test(1, 8), Some(Action::Clear));
    }
}
