//! Settings type definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults::*;

/// User-tunable behavior of the shortcut-mode pipeline.
///
/// Every field has a default so partial settings files deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Key that toggles shortcut mode (default: `"esc"`)
    #[serde(default = "default_trigger_key")]
    pub trigger_key: String,
    /// Key that restores focus while no sequence is in progress (default: `"i"`)
    #[serde(default = "default_focus_restore_key")]
    pub focus_restore_key: String,
    /// Enter shortcut mode whenever nothing editable is focused (default: false)
    #[serde(default = "default_auto_shortcut_mode")]
    pub auto_shortcut_mode: bool,
    /// Combo window in milliseconds (default: 200)
    #[serde(default = "default_combo_threshold_ms")]
    pub combo_threshold_ms: u64,
    /// Sequence idle timeout in milliseconds (default: 5000)
    #[serde(default = "default_sequence_timeout_ms")]
    pub sequence_timeout_ms: u64,
    /// Drop out of shortcut mode when a sequence dead-ends (default: false)
    #[serde(default = "default_exit_mode_on_no_match")]
    pub exit_mode_on_no_match: bool,
    /// Allow editor scope mode (default: false)
    #[serde(default = "default_editor_scope_enabled")]
    pub editor_scope_enabled: bool,
}

fn default_trigger_key() -> String {
    DEFAULT_TRIGGER_KEY.to_string()
}
fn default_focus_restore_key() -> String {
    DEFAULT_FOCUS_RESTORE_KEY.to_string()
}
fn default_auto_shortcut_mode() -> bool {
    DEFAULT_AUTO_SHORTCUT_MODE
}
fn default_combo_threshold_ms() -> u64 {
    DEFAULT_COMBO_THRESHOLD_MS
}
fn default_sequence_timeout_ms() -> u64 {
    DEFAULT_SEQUENCE_TIMEOUT_MS
}
fn default_exit_mode_on_no_match() -> bool {
    DEFAULT_EXIT_MODE_ON_NO_MATCH
}
fn default_editor_scope_enabled() -> bool {
    DEFAULT_EDITOR_SCOPE_ENABLED
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            trigger_key: DEFAULT_TRIGGER_KEY.to_string(),
            focus_restore_key: DEFAULT_FOCUS_RESTORE_KEY.to_string(),
            auto_shortcut_mode: DEFAULT_AUTO_SHORTCUT_MODE,
            combo_threshold_ms: DEFAULT_COMBO_THRESHOLD_MS,
            sequence_timeout_ms: DEFAULT_SEQUENCE_TIMEOUT_MS,
            exit_mode_on_no_match: DEFAULT_EXIT_MODE_ON_NO_MATCH,
            editor_scope_enabled: DEFAULT_EDITOR_SCOPE_ENABLED,
        }
    }
}

impl Settings {
    pub fn combo_threshold(&self) -> Duration {
        Duration::from_millis(self.combo_threshold_ms)
    }

    pub fn sequence_timeout(&self) -> Duration {
        Duration::from_millis(self.sequence_timeout_ms)
    }
}
