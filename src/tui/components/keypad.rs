// Keypad component
//
// A 4×5 grid of buttons. Rendering records each button's rectangle so that
// mouse clicks can be hit-tested against the last drawn frame.

use crate::calculator::Operator;
use crate::session::Action;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const COLUMNS: u32 = 4;

/// Buttons per row with their column span
const ROWS: [&[(Action, u16)]; 5] = [
    &[
        (Action::Clear, 2),
        (Action::Delete, 1),
        (Action::ChooseOperation(Operator::Divide), 1),
    ],
    &[
        (Action::AppendDigit('1'), 1),
        (Action::AppendDigit('2'), 1),
        (Action::AppendDigit('3'), 1),
        (Action::ChooseOperation(Operator::Multiply), 1),
    ],
    &[
        (Action::AppendDigit('4'), 1),
        (Action::AppendDigit('5'), 1),
        (Action::AppendDigit('6'), 1),
        (Action::ChooseOperation(Operator::Add), 1),
    ],
    &[
        (Action::AppendDigit('7'), 1),
        (Action::AppendDigit('8'), 1),
        (Action::AppendDigit('9'), 1),
        (Action::ChooseOperation(Operator::Subtract), 1),
    ],
    &[
        (Action::AppendDigit('.'), 1),
        (Action::AppendDigit('0'), 1),
        (Action::Compute, 2),
    ],
];

/// Button rectangles for a keypad drawn in `area`
pub fn button_layout(area: Rect) -> Vec<(Rect, Action)> {
    let rows = Layout::vertical([Constraint::Ratio(1, ROWS.len() as u32); 5]).split(area);

    let mut buttons = Vec::with_capacity(18);
    for (row_area, row) in rows.iter().zip(ROWS.iter()) {
        let cells =
            Layout::horizontal([Constraint::Ratio(1, COLUMNS); COLUMNS as usize]).split(*row_area);

        let mut col = 0usize;
        for &(action, span) in row.iter() {
            let span = span as usize;
            let rect = cells[col..col + span]
                .iter()
                .fold(cells[col], |acc, cell| acc.union(*cell));
            buttons.push((rect, action));
            col += span;
        }
    }
    buttons
}

/// Keypad state: where each button was last drawn
#[derive(Debug, Default)]
pub struct Keypad {
    hitboxes: Vec<(Rect, Action)>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Action under a terminal cell, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Action> {
        self.hitboxes
            .iter()
            .find(|(rect, _)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(_, action)| *action)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme, pressed: Option<Action>) {
        self.hitboxes = button_layout(area);

        for (rect, action) in &self.hitboxes {
            let color = button_color(*action, theme);
            let style = if pressed == Some(*action) {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.pressed)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            };

            // Bordered buttons need three rows; below that draw bare labels
            let bordered = rect.height >= 3;
            let pad = if bordered {
                rect.height.saturating_sub(3) / 2
            } else {
                rect.height.saturating_sub(1) / 2
            };
            let mut lines = vec![Line::raw(""); pad as usize];
            lines.push(Line::raw(action.label()));

            let mut button = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(style);
            if bordered {
                button = button.block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(theme.border_type)
                        .border_style(Style::default().fg(theme.border)),
                );
            }

            f.render_widget(button, *rect);
        }
    }
}

fn button_color(action: Action, theme: &Theme) -> ratatui::style::Color {
    match action {
        Action::AppendDigit(_) => theme.digit,
        Action::ChooseOperation(_) => theme.operator,
        Action::Compute => theme.equals,
        Action::Delete | Action::Clear => theme.edit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypad_at(area: Rect) -> Keypad {
        Keypad {
            hitboxes: button_layout(area),
        }
    }

    #[test]
    fn grid_has_every_button_once() {
        let buttons = button_layout(Rect::new(0, 0, 40, 15));
        assert_eq!(buttons.len(), 18);

        for c in "0123456789.".chars() {
            assert!(buttons.iter().any(|(_, a)| *a == Action::AppendDigit(c)));
        }
        for op in Operator::ALL {
            assert!(buttons
                .iter()
                .any(|(_, a)| *a == Action::ChooseOperation(op)));
        }
    }

    #[test]
    fn wide_buttons_span_two_columns() {
        let buttons = button_layout(Rect::new(0, 0, 40, 15));
        let clear = buttons.iter().find(|(_, a)| *a == Action::Clear).map(|(r, _)| *r);
        let equals = buttons.iter().find(|(_, a)| *a == Action::Compute).map(|(r, _)| *r);
        assert_eq!(clear, Some(Rect::new(0, 0, 20, 3)));
        assert_eq!(equals, Some(Rect::new(20, 12, 20, 3)));
    }

    #[test]
    fn clicks_map_to_buttons() {
        let keypad = keypad_at(Rect::new(10, 5, 40, 15));

        assert_eq!(keypad.hit_test(11, 6), Some(Action::Clear));
        assert_eq!(keypad.hit_test(29, 6), Some(Action::Clear));
        assert_eq!(keypad.hit_test(30, 6), Some(Action::Delete));
        assert_eq!(
            keypad.hit_test(45, 9),
            Some(Action::ChooseOperation(Operator::Multiply))
        );
        assert_eq!(keypad.hit_test(22, 12), Some(Action::AppendDigit('5')));
        assert_eq!(keypad.hit_test(22, 15), Some(Action::AppendDigit('8')));
        assert_eq!(keypad.hit_test(49, 19), Some(Action::Compute));
    }

    #[test]
    fn clicks_outside_miss() {
        let keypad = keypad_at(Rect::new(10, 5, 40, 15));
        assert_eq!(keypad.hit_test(9, 6), None);
        assert_eq!(keypad.hit_test(50, 6), None);
        assert_eq!(keypad.hit_test(12, 20), None);
        assert_eq!(Keypad::new().hit_test(0, 0), None);
    }
}
