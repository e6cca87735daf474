// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the calculator TUI starts. Subcommands:
// - press <keys>: Replay a key script headlessly and print the display
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Merge new defaults into existing config

use crate::config::{Config, VERSION};
use crate::session::{replay, Session};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// abacus - a four-function calculator for the terminal
#[derive(Parser)]
#[command(name = "abacus")]
#[command(version = VERSION)]
#[command(about = "Four-function calculator for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay keys without a terminal UI and print the display
    ///
    /// Keys use the keyboard mapping (digits, '.', + - * x /, '='), plus
    /// '<' for delete and 'C' for clear.
    Press {
        /// Key script, e.g. "12+7x2="
        keys: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Run `abacus press` against a fresh session
pub fn handle_press(config: &Config, keys: &str, json: bool) -> Result<()> {
    let mut session = Session::new(config.history_capacity, config.number_format());
    let outcome = replay(&mut session, keys);

    if !outcome.ignored.is_empty() {
        tracing::warn!(ignored = ?outcome.ignored, "Skipped unmapped keys");
    }

    let mut stdout = std::io::stdout().lock();
    if json {
        let rendered =
            serde_json::to_string_pretty(&outcome).context("Failed to serialize replay result")?;
        writeln!(stdout, "{}", rendered)?;
    } else {
        write!(stdout, "{}", outcome.to_text())?;
    }
    Ok(())
}

/// Dispatch `abacus config` flags
pub fn handle_config(show: bool, reset: bool, edit: bool, update: bool, path: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else if edit {
        handle_config_edit();
    } else if update {
        handle_config_update();
    } else {
        println!("Usage: abacus config [--show|--reset|--edit|--update|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --update  Update config with new defaults (preserves user values)");
        println!("  --path    Show config file path");
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!("use_theme_background = {}", config.use_theme_background);
    println!("history_capacity = {}", config.history_capacity);
    println!("thousands_separator = {:?}", config.thousands_separator);
    println!("mouse = {}", config.mouse);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn confirm(prompt: &str) -> bool {
    eprint!("{} [y/N] ", prompt);
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists()
        && !confirm(&format!(
            "Config file exists at {}. Overwrite?",
            path.display()
        ))
    {
        println!("Aborted.");
        return;
    }

    if let Err(e) = Config::default().save() {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // Re-render through to_toml so new keys appear with their defaults.
    // Env overrides stay out of the file.
    let existing = Config::from_file();

    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    if let Err(e) = existing.save() {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_press_subcommand() {
        let cli = Cli::try_parse_from(["abacus", "press", "1+2=", "--json"]).expect("parses");
        match cli.command {
            Some(Commands::Press { keys, json }) => {
                assert_eq!(keys, "1+2=");
                assert!(json);
            }
            _ => panic!("expected press subcommand"),
        }
    }

    #[test]
    fn no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["abacus"]).expect("parses");
        assert!(cli.command.is_none());
    }
}
