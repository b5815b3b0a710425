//! Default constant values for all settings.

/// Key that toggles shortcut mode.
pub const DEFAULT_TRIGGER_KEY: &str = "esc";

/// Key that leaves shortcut mode and returns focus to the last editable
/// element, honored only while no sequence is in progress.
pub const DEFAULT_FOCUS_RESTORE_KEY: &str = "i";

/// Enter shortcut mode automatically whenever nothing editable has focus.
pub const DEFAULT_AUTO_SHORTCUT_MODE: bool = false;

/// Maximum inter-keystroke gap for two tokens to join one chord.
pub const DEFAULT_COMBO_THRESHOLD_MS: u64 = 200;

/// Idle gap after which an in-progress sequence is abandoned.
pub const DEFAULT_SEQUENCE_TIMEOUT_MS: u64 = 5000;

/// Leave shortcut mode when a sequence dead-ends (the stricter historical
/// policy; off by default).
pub const DEFAULT_EXIT_MODE_ON_NO_MATCH: bool = false;

/// Editor scope mode is opt-in.
pub const DEFAULT_EDITOR_SCOPE_ENABLED: bool = false;
