//! Structured JSONL logging plus human-readable stderr output.
//!
//! Dual-output logging in the same shape hosts expect from the rest of
//! their tooling:
//! - **JSONL to file** (~/.keymode/logs/keymode.jsonl) - structured, machine-parseable
//! - **Pretty to stderr** - human-readable for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use keymode::logging;
//!
//! // Initialize logging - keep the guard alive for the program's lifetime
//! let _guard = logging::init();
//!
//! tracing::info!(event_type = "mode_entered", "Shortcut mode entered");
//! ```

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Guard that must be kept alive for the duration of the program.
/// Dropping it flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that must be kept alive for the duration of the
/// program; dropping it flushes remaining logs.
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let file_path = log_path();
    let writer: Box<dyn Write + Send> = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&file_path)
    {
        Ok(file) => Box::new(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            Box::new(std::io::sink())
        }
    };

    // Non-blocking writer so logging never stalls the event handler
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(writer);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // JSONL layer for file output
    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    // Pretty layer for stderr
    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::info!(
        event_type = "lifecycle",
        action = "started",
        log_path = %file_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Log directory (~/.keymode/logs/).
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".keymode").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("keymode-logs"))
}

/// Path to the JSONL log file.
pub fn log_path() -> PathBuf {
    get_log_dir().join("keymode.jsonl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_lives_under_keymode_logs() {
        let path = log_path();
        let s = path.to_string_lossy();
        assert!(s.ends_with("keymode.jsonl"));
        assert!(s.contains("logs"));
    }
}
