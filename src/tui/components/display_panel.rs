// Display panel component
//
// Two right-aligned regions: the pending operand with its operator above,
// the operand being typed (or the last result) below.

use super::truncate_start;
use crate::calculator::DisplayText;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, display: &DisplayText, theme: &Theme) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let previous = Line::styled(
        truncate_start(&display.previous, inner_width),
        Style::default().fg(theme.previous),
    );
    let current = Line::styled(
        truncate_start(&display.current, inner_width),
        Style::default()
            .fg(theme.current)
            .add_modifier(Modifier::BOLD),
    );

    let paragraph = Paragraph::new(vec![previous, current])
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border)),
        );

    f.render_widget(paragraph, area);
}
