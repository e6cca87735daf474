// abacus - a four-function calculator for the terminal
//
// Architecture:
// - Calculator: operand/operator state machine and display formatting
// - Session: calculator state plus the rolling history log, driven by actions
// - TUI (ratatui): display, clickable keypad, history and log panels
// - CLI (clap): headless key replay and config management

mod calculator;
mod cli;
mod config;
mod logging;
mod session;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Where human-readable log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogSink {
    /// Captured into the in-TUI logs panel
    Tui,
    /// Written to stderr, for headless commands
    Stderr,
}

/// Initialize tracing
///
/// Precedence for the filter: RUST_LOG env var > config file > "info".
/// File logging (JSON, rotated) is added on top of either sink when enabled.
/// The returned guard must live until exit so the file writer flushes.
fn init_tracing(config: &Config, sink: LogSink, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("abacus={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let sink_layer = match sink {
        LogSink::Tui => TuiLogLayer::new(log_buffer.clone()).boxed(),
        LogSink::Stderr => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    let (file_layer, guard) = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(sink_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            cli::handle_config(show, reset, edit, update, path);
            Ok(())
        }
        Some(Commands::Press { keys, json }) => {
            let config = Config::from_env();
            let _file_guard = init_tracing(&config, LogSink::Stderr, &LogBuffer::new());
            cli::handle_press(&config, &keys, json)
        }
        None => {
            // Write a commented template so users can discover the options
            Config::ensure_config_exists();

            let config = Config::from_env();
            let log_buffer = LogBuffer::new();
            let _file_guard = init_tracing(&config, LogSink::Tui, &log_buffer);

            tracing::info!(
                version = config::VERSION,
                theme = %config.theme,
                history_capacity = config.history_capacity,
                "Starting calculator"
            );

            if let Err(e) = tui::run_tui(log_buffer, config).await {
                // Subscriber output is inside the TUI buffer; report on stderr too
                tracing::error!("TUI error: {:?}", e);
                eprintln!("Error: {:#}", e);
                return Err(e);
            }

            tracing::info!("Shutdown complete");
            Ok(())
        }
    }
}
