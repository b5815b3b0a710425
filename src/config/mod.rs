//! Configuration module - pipeline settings and their defaults.
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - The `Settings` struct
//! - `loader` - File system loading with defaults-on-failure

mod defaults;
mod loader;
mod types;

pub use loader::{default_settings_path, load_settings, try_load_settings};
pub use types::Settings;

#[cfg(test)]
pub use defaults::{
    DEFAULT_COMBO_THRESHOLD_MS, DEFAULT_FOCUS_RESTORE_KEY, DEFAULT_SEQUENCE_TIMEOUT_MS,
    DEFAULT_TRIGGER_KEY,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
