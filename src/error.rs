use thiserror::Error;
use tracing::{error, warn};

use crate::binding::SequenceParseError;

/// Error severity for host-side presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,    // informational
    Warning, // recoverable
    Error,   // operation failed
}

/// Domain-specific errors for keymode.
///
/// Absence of a match, an ambiguous partial sequence, or an idle timeout
/// are expected non-events and never appear here; every variant is a real
/// configuration or I/O problem.
#[derive(Error, Debug)]
pub enum KeymodeError {
    #[error("invalid key sequence: {0}")]
    SequenceParse(#[from] SequenceParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to read settings from '{path}': {source}")]
    SettingsRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),
}

impl KeymodeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SequenceParse(_) => ErrorSeverity::Warning,
            Self::Config(_) => ErrorSeverity::Warning,
            Self::SettingsRead { .. } => ErrorSeverity::Warning,
            Self::SettingsParse(_) => ErrorSeverity::Warning,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::SequenceParse(e) => format!("Invalid shortcut sequence: {}", e),
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::SettingsRead { path, .. } => format!("Could not read settings from {}", path),
            Self::SettingsParse(e) => format!("Invalid settings format: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, KeymodeError>;

/// Extension trait for ergonomic error logging.
pub trait ResultExt<T> {
    fn log_err(self) -> Option<T>;
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    fn log_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                error!(error = ?e, "Operation failed");
                None
            }
        }
    }

    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(error = ?e, "Operation warning");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_warnings() {
        let err = KeymodeError::from(SequenceParseError::Empty);
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert!(err.user_message().contains("Invalid shortcut sequence"));
    }

    #[test]
    fn log_err_passes_through_ok() {
        let value: std::result::Result<u32, &str> = Ok(7);
        assert_eq!(value.log_err(), Some(7));
    }

    #[test]
    fn warn_on_err_swallows_error() {
        let value: std::result::Result<u32, &str> = Err("nope");
        assert_eq!(value.warn_on_err(), None);
    }
}
