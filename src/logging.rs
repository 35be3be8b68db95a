// Logging setup
//
// While the TUI owns the terminal, anything written to stdout/stderr would
// tear through the alternate screen, so the only sink there is a rolling
// log file. Headless runs log to stderr like any other CLI tool.
//
// Precedence for the filter: RUST_LOG > config level > "info"

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "hackroulette.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Terminal UI active: file only
    Tui,
    /// No UI: stderr, plus the file if enabled
    Headless,
}

/// Install the global subscriber. The returned guard must be held until the
/// program exits so buffered file writes get flushed.
pub fn init(config: &LoggingConfig, sink: Sink) -> Option<WorkerGuard> {
    let default_filter = format!("hackroulette={}", config.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = if config.file_enabled {
        match std::fs::create_dir_all(&config.file_dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(&config.file_dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                // Still before the TUI takes over the screen
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let stderr_layer = match sink {
        Sink::Headless => Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        Sink::Tui => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    guard
}
