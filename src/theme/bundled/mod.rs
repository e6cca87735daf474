//! Bundled TOML themes (compiled into binary)
//!
//! External themes in ~/.config/abacus/themes/ take precedence over these.

mod gruvbox_dark;
mod nord;
mod one_half_dark;
mod terminal_ansi;

pub use gruvbox_dark::THEME as GRUVBOX_DARK;
pub use nord::THEME as NORD;
pub use one_half_dark::THEME as ONE_HALF_DARK;
pub use terminal_ansi::THEME as TERMINAL_ANSI;

/// Bundled theme: name and TOML content
pub struct BundledTheme {
    pub name: &'static str,
    pub content: &'static str,
}

/// All bundled themes, in cycling order
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        name: "One Half Dark",
        content: ONE_HALF_DARK,
    },
    BundledTheme {
        name: "Nord",
        content: NORD,
    },
    BundledTheme {
        name: "Gruvbox Dark",
        content: GRUVBOX_DARK,
    },
    BundledTheme {
        name: "Terminal ANSI",
        content: TERMINAL_ANSI,
    },
];

/// Look up a bundled theme by name (case-insensitive, `_` matches space)
pub fn find(name: &str) -> Option<&'static BundledTheme> {
    let normalized = name.replace('_', " ");
    BUNDLED_THEMES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(&normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::TomlTheme;

    #[test]
    fn all_bundled_themes_parse() {
        for theme in BUNDLED_THEMES {
            let parsed = TomlTheme::parse(theme.content)
                .unwrap_or_else(|e| panic!("{} should parse: {}", theme.name, e));
            assert_eq!(parsed.meta.name, theme.name);
        }
    }

    #[test]
    fn find_is_forgiving() {
        assert!(find("nord").is_some());
        assert!(find("Gruvbox_Dark").is_some());
        assert!(find("Solarized").is_none());
    }
}
