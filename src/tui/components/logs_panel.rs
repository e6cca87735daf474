//! Logs panel component
//!
//! Displays captured tracing events with color-coded levels. The panel owns
//! its scroll position and selection; entries are passed in on each render
//! because the buffer is shared with the logging layer.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{handle_scroll_keys, Handled, Interactive, Scrollable};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    scroll: ScrollState,

    /// Selected entry index (None = follow newest)
    pub selected: Option<usize>,

    entry_count: usize,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::following(),
            selected: None,
            entry_count: 0,
        }
    }

    /// Sync with the buffer size for this frame
    pub fn sync_entries(&mut self, count: usize, viewport_height: usize) {
        self.entry_count = count;
        self.scroll.update_dimensions(count, viewport_height);

        if let Some(idx) = self.selected {
            if idx >= count {
                self.selected = count.checked_sub(1);
            }
        }
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        entries: &[LogEntry],
        theme: &Theme,
        focused: bool,
    ) {
        self.sync_entries(entries.len(), area.height.saturating_sub(2) as usize);

        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if focused && self.selected == Some(start + i) {
                    Style::default()
                        .fg(theme.background)
                        .bg(theme.highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    log_level_style(entry.level, theme)
                };
                ListItem::new(format_log_entry(entry)).style(style)
            })
            .collect();

        let title = if self.selected.is_some() && focused {
            " Logs [select] "
        } else if self.scroll.auto_follow {
            " Logs "
        } else {
            " Logs [scroll] "
        };
        let border = if focused { theme.highlight } else { theme.border };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border))
                .title(title),
        );

        f.render_widget(list, area);
    }

    /// Selected entry as one line of text, for the clipboard
    pub fn selected_entry_text(&self, entries: &[LogEntry]) -> Option<String> {
        self.selected.and_then(|idx| entries.get(idx)).map(|entry| {
            format!(
                "{} {:5} {}: {}",
                entry.timestamp.to_rfc3339(),
                entry.level.as_str(),
                entry.target,
                entry.message
            )
        })
    }

    fn select_previous(&mut self) {
        match self.selected {
            Some(idx) if idx > 0 => {
                self.selected = Some(idx - 1);
                self.scroll.scroll_up();
            }
            None if self.entry_count > 0 => {
                self.selected = Some(self.entry_count - 1);
            }
            _ => {}
        }
    }

    fn select_next(&mut self) {
        match self.selected {
            Some(idx) if idx + 1 < self.entry_count => {
                self.selected = Some(idx + 1);
                self.scroll.scroll_down();
            }
            None if self.entry_count > 0 => {
                self.selected = Some(self.entry_count - 1);
            }
            _ => {}
        }
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::End => {
                self.selected = None;
                self.scroll.auto_follow = true;
                self.scroll_to_bottom();
                Handled::Yes
            }
            KeyCode::Esc if self.selected.is_some() => {
                self.selected = None;
                self.scroll.auto_follow = true;
                Handled::Yes
            }
            _ => handle_scroll_keys(self, key),
        }
    }

    fn focus_hint(&self) -> &'static str {
        "↑↓:select  y:copy line  Esc:follow"
    }
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.log_debug),
    }
}
