// Status bar component
//
// Key hints on the left, computation count on the right. Narrow terminals
// get the short hint set.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let hints = if bp.at_least(Breakpoint::Normal) {
        format!(
            " Enter:=  Bksp:del  Del:clear │ {}  Tab:focus  y:copy  t:theme  L:logs  q:quit",
            app.focus_hint()
        )
    } else {
        " ?:help  q:quit".to_string()
    };

    let total = format!("Σ {} ", app.session.history.total());
    let gap = (area.width as usize).saturating_sub(hints.width() + total.width());

    let line = Line::from(vec![
        Span::raw(hints),
        Span::raw(" ".repeat(gap)),
        Span::raw(total),
    ]);

    let status = Paragraph::new(line)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
