//! TOML serialization for Config

use super::Config;

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# abacus configuration

# Theme: One Half Dark, Nord, Gruvbox Dark, Terminal ANSI
# Press 't' in the TUI to cycle themes
theme = {theme}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Number of computations kept in the history panel
history_capacity = {history}

# Separator between groups of three integer digits ("," "." " " "'")
thousands_separator = {separator}

# Click keypad buttons with the mouse
mouse = {mouse}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            theme = quoted(&self.theme),
            use_bg = self.use_theme_background,
            history = self.history_capacity,
            separator = quoted(&self.thousands_separator),
            mouse = self.mouse,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = quoted(self.logging.file_rotation.as_str()),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}

/// TOML string literal with quotes and escapes applied
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
