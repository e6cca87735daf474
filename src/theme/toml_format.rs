// TOML theme format parser
//
// Each theme explicitly defines every semantic color used by the calculator
// panels. Colors are either `#RRGGBB` or `ansi:N` for terminal-native colors.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub display: DisplayColors,
    pub keypad: KeypadColors,
    pub history: HistoryColors,
    pub logs: LogColors,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
}

/// Base UI chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub muted: String,
    /// Optional border style: "plain", "rounded", "double", "thick" (default: rounded)
    pub border_type: Option<String>,
}

/// Operand display colors
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayColors {
    pub current: String,
    pub previous: String,
}

/// Keypad button colors
#[derive(Debug, Clone, Deserialize)]
pub struct KeypadColors {
    pub digit: String,
    pub operator: String,
    pub equals: String,
    pub edit: String,
    /// Background flash for the last pressed button
    pub pressed: String,
}

/// History panel colors
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryColors {
    pub record: String,
    pub placeholder: String,
}

/// Log level colors for the logs panel
#[derive(Debug, Clone, Deserialize)]
pub struct LogColors {
    pub error: String,
    pub warn: String,
    pub info: String,
    pub debug: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    ///
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (terminal-native colors)
    pub fn parse_color(value: &str) -> Color {
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset,
                _ => Color::White,
            };
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::White;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    }
}
