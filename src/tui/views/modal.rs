// Modal overlay rendering

use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn help_text<'a>(app: &'a App, theme: &Theme) -> Text<'a> {
    let key_style = Style::default().fg(theme.operator);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Calculator", header_style)),
        kb("0-9 .", "Enter digits"),
        kb("+ - * x /", "Choose operator"),
        kb("Enter, =", "Compute"),
        kb("Backspace", "Delete last character"),
        kb("Delete", "Clear everything"),
        kb("Click", "Press a keypad button"),
        Line::raw(""),
        Line::from(Span::styled("  Panels", header_style)),
        kb("Tab", "Switch history / logs focus"),
        kb("↑/↓ PgUp/PgDn", "Scroll focused panel"),
        kb("L", "Toggle logs"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("y", "Copy current value"),
        kb("t", "Next theme"),
        kb("?", "Toggle this help"),
        kb("q, Esc", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
        ]),
        Line::from(vec![
            Span::styled("  History: ", desc_style),
            Span::styled(
                format!(
                    "{} of {} slots used",
                    app.session.history.len(),
                    app.session.history.capacity()
                ),
                key_style,
            ),
        ]),
    ])
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let content = help_text(app, theme);

    let area = centered_rect(46, content.height() as u16 + 2, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
