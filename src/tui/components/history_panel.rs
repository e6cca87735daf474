//! History panel component
//!
//! Shows the rolling history log, newest record first. Before the first
//! computation the panel holds a single "No Data" placeholder line.

use super::truncate_end;
use crate::calculator::{HistoryLog, HistoryRecord, NO_DATA};
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{handle_scroll_keys, Handled, Interactive, Scrollable};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct HistoryPanel {
    scroll: ScrollState,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::anchored(),
        }
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        history: &HistoryLog,
        theme: &Theme,
        focused: bool,
        timestamps: bool,
    ) {
        let viewport = area.height.saturating_sub(2) as usize;
        self.scroll.update_dimensions(history.len(), viewport);

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = if history.is_empty() {
            vec![ListItem::new(Line::styled(
                NO_DATA,
                Style::default()
                    .fg(theme.placeholder)
                    .add_modifier(Modifier::ITALIC),
            ))]
        } else {
            let (start, end) = self.scroll.visible_range();
            history
                .records()
                .skip(start)
                .take(end - start)
                .map(|record| record_item(record, inner_width, timestamps, theme))
                .collect()
        };

        let border = if focused { theme.highlight } else { theme.border };
        let title = format!(" History {}/{} ", history.len(), history.capacity());

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border))
                .title(title),
        );
        f.render_widget(list, area);

        if self.scroll.needs_scrollbar() {
            let mut state = ScrollbarState::new(self.scroll.total().saturating_sub(viewport))
                .position(self.scroll.offset());
            f.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                area,
                &mut state,
            );
        }
    }
}

impl Default for HistoryPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// One history line, with the time right-aligned when there is room
fn record_item(
    record: &HistoryRecord,
    width: usize,
    timestamps: bool,
    theme: &Theme,
) -> ListItem<'static> {
    let text = record.line();
    let time = record.recorded_at.format("%H:%M:%S").to_string();

    if timestamps && width > time.len() + 2 {
        let text_width = width - time.len() - 1;
        let text = truncate_end(&text, text_width);
        let gap = width.saturating_sub(text.width() + time.len());
        return ListItem::new(Line::from(vec![
            Span::styled(text, Style::default().fg(theme.record)),
            Span::raw(" ".repeat(gap)),
            Span::styled(time, Style::default().fg(theme.muted)),
        ]));
    }

    ListItem::new(Line::styled(
        truncate_end(&text, width),
        Style::default().fg(theme.record),
    ))
}

impl Scrollable for HistoryPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for HistoryPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        handle_scroll_keys(self, key)
    }

    fn focus_hint(&self) -> &'static str {
        "↑↓:scroll history"
    }
}
