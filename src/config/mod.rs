//! Configuration for the calculator
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/abacus/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

use crate::calculator::{NumberFormat, DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Theme used when nothing is configured
pub const DEFAULT_THEME: &str = "One Half Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme name: "One Half Dark", "Nord", "Gruvbox Dark", "Terminal ANSI"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Number of visible records in the rolling history log
    pub history_capacity: usize,

    /// Separator between groups of three integer digits
    pub thousands_separator: String,

    /// Capture mouse clicks on the keypad
    pub mouse: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            thousands_separator: ",".to_string(),
            mouse: true,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (for TOML parsing)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub history_capacity: Option<usize>,
    pub thousands_separator: Option<String>,
    pub mouse: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/abacus/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("abacus").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but does not parse exits with an error banner.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `abacus config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// File values over defaults, without env overrides
    ///
    /// Anything written back to disk starts from this, never from `from_env`.
    pub fn from_file() -> Self {
        Self::resolve(Self::load_file_config(), |_| None)
    }

    /// File config with only the theme replaced
    pub(crate) fn with_saved_theme(file: FileConfig, theme: &str) -> Self {
        Self {
            theme: theme.to_string(),
            ..Self::resolve(file, |_| None)
        }
    }

    /// Persist a theme choice, leaving every other file value untouched
    pub fn save_theme(theme: &str) -> Result<(), std::io::Error> {
        Self::with_saved_theme(Self::load_file_config(), theme).save()
    }

    /// Merge file values and environment lookups over the defaults
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("ABACUS_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        // History capacity: env > file > default, clamped to 1..=MAX
        let history_capacity = env("ABACUS_HISTORY_CAPACITY")
            .and_then(|v| v.parse().ok())
            .or(file.history_capacity)
            .unwrap_or(defaults.history_capacity)
            .clamp(1, MAX_HISTORY_CAPACITY);

        let thousands_separator = file
            .thousands_separator
            .unwrap_or(defaults.thousands_separator);

        // Mouse capture: env opt-out > file > default
        let mouse = match env("ABACUS_NO_MOUSE") {
            Some(v) => !(v == "1" || v.eq_ignore_ascii_case("true")),
            None => file.mouse.unwrap_or(defaults.mouse),
        };

        // RUST_LOG env var is handled in main.rs
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            use_theme_background,
            history_capacity,
            thousands_separator,
            mouse,
            logging,
        }
    }

    /// Display grouping derived from the config
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            thousands_separator: self.thousands_separator.clone(),
        }
    }
}
