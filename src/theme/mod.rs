// Theme system for the TUI
//
// - TomlTheme: on-disk format with explicit semantic color definitions
// - Theme: resolved colors ready for rendering
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/abacus/themes/*.toml
// 2. Bundled themes (compiled into the binary)
// 3. Hardcoded default

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Chrome ──────────────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub highlight: Color,
    pub title: Color,
    pub status_bar: Color,
    pub muted: Color,
    pub border_type: BorderType,

    // ─── Display ─────────────────────────────────────────────
    pub current: Color,
    pub previous: Color,

    // ─── Keypad ──────────────────────────────────────────────
    pub digit: Color,
    pub operator: Color,
    pub equals: Color,
    pub edit: Color,
    pub pressed: Color,

    // ─── History ─────────────────────────────────────────────
    pub record: Color,
    pub placeholder: Color,

    // ─── Log levels ──────────────────────────────────────────
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name with custom configuration
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_external(name, config) {
            return theme;
        }

        if let Some(bundled) = bundled::find(name) {
            match TomlTheme::parse(bundled.content) {
                Ok(toml_theme) => return Self::from_toml(toml_theme, config),
                Err(e) => tracing::warn!("Bundled theme {} failed to parse: {}", name, e),
            }
        } else {
            tracing::debug!("Unknown theme {:?}, using default", name);
        }

        Self::hardcoded_default(config)
    }

    /// Names of all bundled themes, in cycling order
    pub fn list_available() -> Vec<&'static str> {
        bundled::BUNDLED_THEMES.iter().map(|t| t.name).collect()
    }

    /// Name of the bundled theme after `current` (wraps around)
    pub fn next_name(current: &str) -> &'static str {
        let names = Self::list_available();
        let idx = names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(current))
            .map(|i| (i + 1) % names.len())
            .unwrap_or(0);
        names[idx]
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("abacus").join("themes"))
    }

    /// Load from a user TOML file, trying the name as given and with spaces
    /// replaced by underscores
    fn load_external(name: &str, config: &ThemeConfig) -> Option<Self> {
        let dir = Self::themes_dir()?;
        let candidates = [name.to_string(), name.replace(' ', "_")];

        for candidate in candidates {
            let path = dir.join(format!("{}.toml", candidate));
            let Ok(contents) = std::fs::read_to_string(&path) else {
                continue;
            };
            match TomlTheme::parse(&contents) {
                Ok(toml_theme) => return Some(Self::from_toml(toml_theme, config)),
                Err(e) => tracing::warn!("Ignoring theme {}: {}", path.display(), e),
            }
        }

        None
    }

    /// Resolve a parsed TOML theme into colors
    pub fn from_toml(theme: TomlTheme, config: &ThemeConfig) -> Self {
        let c = TomlTheme::parse_color;
        let background = if config.use_theme_background {
            c(&theme.ui.background)
        } else {
            Color::Reset
        };

        let border_type = match theme.ui.border_type.as_deref() {
            Some("plain") => BorderType::Plain,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Rounded,
        };

        Self {
            name: theme.meta.name,
            background,
            foreground: c(&theme.ui.foreground),
            border: c(&theme.ui.border),
            highlight: c(&theme.ui.border_focused),
            title: c(&theme.ui.title),
            status_bar: c(&theme.ui.status_bar),
            muted: c(&theme.ui.muted),
            border_type,
            current: c(&theme.display.current),
            previous: c(&theme.display.previous),
            digit: c(&theme.keypad.digit),
            operator: c(&theme.keypad.operator),
            equals: c(&theme.keypad.equals),
            edit: c(&theme.keypad.edit),
            pressed: c(&theme.keypad.pressed),
            record: c(&theme.history.record),
            placeholder: c(&theme.history.placeholder),
            log_error: c(&theme.logs.error),
            log_warn: c(&theme.logs.warn),
            log_info: c(&theme.logs.info),
            log_debug: c(&theme.logs.debug),
        }
    }

    /// Plain ANSI fallback that needs no parsing
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        Self {
            name: "Default".to_string(),
            background: if config.use_theme_background {
                Color::Black
            } else {
                Color::Reset
            },
            foreground: Color::White,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            title: Color::Cyan,
            status_bar: Color::White,
            muted: Color::DarkGray,
            border_type: BorderType::Rounded,
            current: Color::White,
            previous: Color::Gray,
            digit: Color::White,
            operator: Color::Blue,
            equals: Color::Green,
            edit: Color::Red,
            pressed: Color::DarkGray,
            record: Color::White,
            placeholder: Color::Yellow,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Green,
            log_debug: Color::DarkGray,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(crate::config::DEFAULT_THEME)
    }
}
