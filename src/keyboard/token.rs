//! Canonical key tokens and key-name resolution.
//!
//! A [`KeyToken`] is the normalized, order-independent string form of one
//! physical key press, e.g. `"ctrl+shift+A"` or `"esc"`. Modifiers always
//! appear in the fixed order ctrl, alt, shift, meta; a press of a modifier
//! by itself yields just the modifier name. Tokens are what the sequence
//! accumulator collects and what bindings are compared against.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::event::KeyEvent;

/// Modifier names in the fixed canonical order.
pub const MODIFIER_NAMES: [&str; 4] = ["ctrl", "alt", "shift", "meta"];

/// A normalized key token.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyToken(String);

impl KeyToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the whole token is a single bare modifier (`"ctrl"`,
    /// `"shift"`, ...), as opposed to a modifier-plus-key combination.
    pub fn is_lone_modifier(&self) -> bool {
        MODIFIER_NAMES.contains(&self.0.as_str())
    }
}

impl From<String> for KeyToken {
    fn from(s: String) -> Self {
        KeyToken(s)
    }
}

impl From<&str> for KeyToken {
    fn from(s: &str) -> Self {
        KeyToken(s.to_string())
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Platform enum for display formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Platform::Linux
        }
    }
}

/// Resolve a browser-style key name to the short canonical form used for
/// tokens and trigger-key comparison (`"Escape"` → `"esc"`, `" "` →
/// `"space"`, `"ArrowUp"` → `"up"`). Single printable characters come back
/// lower-cased; unknown multi-character names are passed through lower-cased.
pub fn resolve_key_name(key: &str) -> String {
    match key {
        "Control" | "Ctrl" => "ctrl",
        "Alt" => "alt",
        "Shift" => "shift",
        "Meta" | "Command" | "OS" | "Super" => "meta",
        "Escape" | "Esc" => "esc",
        " " | "Space" | "Spacebar" => "space",
        "Enter" | "Return" => "enter",
        "Tab" => "tab",
        "Backspace" => "backspace",
        "Delete" | "Del" => "delete",
        "Insert" => "insert",
        "ArrowUp" | "Up" => "up",
        "ArrowDown" | "Down" => "down",
        "ArrowLeft" | "Left" => "left",
        "ArrowRight" | "Right" => "right",
        "Home" => "home",
        "End" => "end",
        "PageUp" => "pageup",
        "PageDown" => "pagedown",
        _ => return key.to_lowercase(),
    }
    .to_string()
}

/// Check whether a canonical key name is one this crate knows how to match.
/// Used to validate binding sequences coming from configuration.
pub fn is_known_key(key: &str) -> bool {
    if key.chars().count() == 1 {
        // Any single printable character is accepted as-is.
        return key.chars().all(|c| !c.is_control());
    }
    if let Some(n) = key.strip_prefix('f') {
        if let Ok(n) = n.parse::<u8>() {
            return (1..=24).contains(&n);
        }
    }
    matches!(
        key,
        "esc"
            | "space"
            | "enter"
            | "tab"
            | "backspace"
            | "delete"
            | "insert"
            | "up"
            | "down"
            | "left"
            | "right"
            | "home"
            | "end"
            | "pageup"
            | "pagedown"
    )
}

/// Convert a raw keyboard event into a canonical token.
///
/// Modifiers are collected in the fixed order, the physical key is resolved
/// to its canonical name (single characters upper-cased), and if the key
/// itself is one of the collected modifiers it is not repeated: pressing
/// Control alone yields `"ctrl"`, not `"ctrl+ctrl"`.
pub fn tokenize(event: &KeyEvent) -> KeyToken {
    let mut modifiers: Vec<&str> = Vec::new();
    if event.ctrl {
        modifiers.push("ctrl");
    }
    if event.alt {
        modifiers.push("alt");
    }
    if event.shift {
        modifiers.push("shift");
    }
    if event.meta {
        modifiers.push("meta");
    }

    let resolved = resolve_key_name(&event.key);
    let key = if resolved.chars().count() == 1 {
        resolved.to_uppercase()
    } else {
        resolved
    };

    if modifiers.iter().any(|m| *m == key) {
        KeyToken(modifiers.join("+"))
    } else if modifiers.is_empty() {
        KeyToken(key)
    } else {
        KeyToken(format!("{}+{}", modifiers.join("+"), key))
    }
}

/// Platform-cosmetic rendering of a token, for presentation only.
///
/// On macOS `meta` reads as `command` and `alt` as `option`. Never use the
/// result for matching; matching goes through the normalized sequence form.
pub fn display_form(token: &KeyToken, platform: Platform) -> String {
    match platform {
        Platform::MacOS => token
            .as_str()
            .replace("meta", "command")
            .replace("alt", "option"),
        Platform::Windows | Platform::Linux => token.as_str().to_string(),
    }
}
