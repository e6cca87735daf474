// Components module - the panels of the calculator screen
//
// - Title bar: app name, theme, help hint
// - Display panel: previous and current regions
// - Keypad: clickable button grid
// - History panel: rolling log of computations
// - Logs panel: captured tracing events
// - Status bar: key hints for the focused panel
// - Toast: transient notifications

pub mod display_panel;
pub mod history_panel;
pub mod keypad;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use history_panel::HistoryPanel;
pub use keypad::Keypad;
pub use logs_panel::LogsPanel;
pub use toast::Toast;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Keep the rightmost columns of `text`, marking the cut with `…`
///
/// Long numbers lose their leading digits first, like a pocket calculator.
pub fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut kept = Vec::new();
    let mut width = 1; // the ellipsis
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        kept.push(c);
    }

    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}

/// Keep the leftmost columns of `text`, marking the cut with `…`
pub fn truncate_end(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 1;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_start("1,234", 10), "1,234");
        assert_eq!(truncate_end("1 + 1 = 2", 9), "1 + 1 = 2");
    }

    #[test]
    fn truncate_start_keeps_trailing_digits() {
        assert_eq!(truncate_start("123,456,789", 6), "…6,789");
        assert_eq!(truncate_start("123,456,789", 6).width(), 6);
    }

    #[test]
    fn truncate_end_keeps_leading_text() {
        assert_eq!(truncate_end("12 ÷ 7 = 1.7142857142857142", 10), "12 ÷ 7 = …");
    }

    #[test]
    fn zero_width_yields_empty() {
        assert_eq!(truncate_start("123", 0), "");
        assert_eq!(truncate_end("123", 0), "");
    }
}
