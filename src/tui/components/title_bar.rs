// Title bar component

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// App name and active theme, with the help hint on the right
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let title = Paragraph::new(format!(" abacus ── {}", theme.name))
        .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
