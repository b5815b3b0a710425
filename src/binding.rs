//! Registered bindings: a sequence of chords mapped to an action descriptor.
//!
//! Bindings are owned by the host's configuration store and handed to the
//! core read-only on every keystroke; the core never mutates them. An
//! empty sequence is a valid "unassigned" binding and never matches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keyboard::matcher;
use crate::keyboard::token::{is_known_key, MODIFIER_NAMES};

/// What to run when a binding's sequence is matched. Execution itself is
/// the host's job; the core only carries the descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionDescriptor {
    /// A host command id, e.g. `"palette.open"`.
    Command(String),
    /// A predefined host function looked up by id.
    Builtin(String),
    /// A UI element identified by its accessible label, to be clicked.
    UiElement(String),
}

/// Presentation grouping for bindings. Never consulted during matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindingScope {
    #[default]
    General,
    Editor,
    Ui,
}

/// A registered shortcut binding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub id: String,
    pub name: String,
    /// Chords in order; each chord is a list of raw token strings like
    /// `"ctrl+k"`. Empty means unassigned.
    pub sequence: Vec<Vec<String>>,
    pub action: ActionDescriptor,
    #[serde(default)]
    pub scope: BindingScope,
}

impl Binding {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sequence: Vec<Vec<String>>,
        action: ActionDescriptor,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sequence,
            action,
            scope: BindingScope::General,
        }
    }

    pub fn with_scope(mut self, scope: BindingScope) -> Self {
        self.scope = scope;
        self
    }

    /// Whether this binding has a sequence at all. Unassigned bindings are
    /// kept around for the settings surface but never match.
    pub fn is_assigned(&self) -> bool {
        !self.sequence.is_empty()
    }

    /// The canonical comparison form of this binding's sequence; see
    /// [`matcher::format_sequence`].
    pub fn normalized_sequence(&self) -> String {
        matcher::format_sequence(&self.sequence)
    }
}

/// Errors from parsing a sequence string like `"ctrl+k then ctrl+s"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceParseError {
    #[error("sequence string is empty")]
    Empty,
    #[error("chord has no key, only modifiers: '{0}'")]
    MissingKey(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("modifier '{0}' appears twice in one chord")]
    DuplicateModifier(String),
    #[error("chord '{0}' has more than one base key")]
    MultipleKeys(String),
}

/// Parse a human-written sequence string into chord form.
///
/// Steps are separated by `" then "`, modifiers and key within a step by
/// `+`. Each step becomes a single-token chord; multi-token chords only
/// arise from live typing, not configuration.
pub fn parse_sequence(s: &str) -> Result<Vec<Vec<String>>, SequenceParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(SequenceParseError::Empty);
    }

    let mut chords = Vec::new();
    for step in s.split(" then ") {
        let step = step.trim();
        if step.is_empty() {
            return Err(SequenceParseError::Empty);
        }

        let mut seen_modifiers: Vec<String> = Vec::new();
        let mut key: Option<String> = None;

        for part in step.split('+') {
            let part = part.trim().to_lowercase();
            if MODIFIER_NAMES.contains(&part.as_str())
                || part == "command"
                || part == "option"
            {
                let canonical = match part.as_str() {
                    "command" => "meta".to_string(),
                    "option" => "alt".to_string(),
                    other => other.to_string(),
                };
                if seen_modifiers.contains(&canonical) {
                    return Err(SequenceParseError::DuplicateModifier(canonical));
                }
                seen_modifiers.push(canonical);
            } else {
                if key.is_some() {
                    return Err(SequenceParseError::MultipleKeys(step.to_string()));
                }
                if !is_known_key(&part) {
                    return Err(SequenceParseError::UnknownKey(part));
                }
                key = Some(part);
            }
        }

        // A bare modifier chord like "shift" is legal; it resolves to the
        // modifier-only token the tokenizer emits for that press.
        if key.is_none() && seen_modifiers.is_empty() {
            return Err(SequenceParseError::MissingKey(step.to_string()));
        }

        let mut token_parts = seen_modifiers;
        if let Some(k) = key {
            token_parts.push(k);
        }
        chords.push(vec![token_parts.join("+")]);
    }

    Ok(chords)
}

/// The stock binding table shipped with the crate, mirroring the defaults
/// users see before customizing anything.
pub fn default_bindings() -> Vec<Binding> {
    vec![
        Binding::new(
            "palette.open",
            "Open command palette",
            vec![vec!["shift".into()]],
            ActionDescriptor::Command("palette.open".into()),
        ),
        Binding::new(
            "switcher.open",
            "Open quick switcher",
            vec![vec!["space".into()]],
            ActionDescriptor::Command("switcher.open".into()),
        ),
        Binding::new(
            "sidebar.left.toggle",
            "Toggle left sidebar",
            vec![vec!["o".into()], vec!["l".into()]],
            ActionDescriptor::Command("sidebar.left.toggle".into()),
        )
        .with_scope(BindingScope::Ui),
        Binding::new(
            "sidebar.right.toggle",
            "Toggle right sidebar",
            vec![vec!["o".into()], vec!["r".into()]],
            ActionDescriptor::Command("sidebar.right.toggle".into()),
        )
        .with_scope(BindingScope::Ui),
        Binding::new(
            "graph.open",
            "Open graph view",
            vec![vec!["g".into()]],
            ActionDescriptor::Builtin("graph.open".into()),
        ),
        Binding::new(
            "file.quick-open",
            "Quick open file",
            vec![vec!["o".into()], vec!["f".into()]],
            ActionDescriptor::Command("file.quick-open".into()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_key() {
        assert_eq!(parse_sequence("g").unwrap(), vec![vec!["g".to_string()]]);
    }

    #[test]
    fn parse_two_step_sequence() {
        let seq = parse_sequence("ctrl+k then ctrl+s").unwrap();
        assert_eq!(
            seq,
            vec![vec!["ctrl+k".to_string()], vec!["ctrl+s".to_string()]]
        );
    }

    #[test]
    fn parse_bare_modifier_chord() {
        assert_eq!(
            parse_sequence("shift").unwrap(),
            vec![vec!["shift".to_string()]]
        );
    }

    #[test]
    fn parse_mac_spellings_normalize() {
        let seq = parse_sequence("command+option+p").unwrap();
        assert_eq!(seq, vec![vec!["meta+alt+p".to_string()]]);
    }

    #[test]
    fn parse_rejects_unknown_key() {
        assert_eq!(
            parse_sequence("ctrl+bogus"),
            Err(SequenceParseError::UnknownKey("bogus".into()))
        );
    }

    #[test]
    fn parse_rejects_duplicate_modifier() {
        assert_eq!(
            parse_sequence("ctrl+ctrl+a"),
            Err(SequenceParseError::DuplicateModifier("ctrl".into()))
        );
    }

    #[test]
    fn parse_rejects_two_base_keys() {
        assert!(matches!(
            parse_sequence("a+b"),
            Err(SequenceParseError::MultipleKeys(_))
        ));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(parse_sequence("   "), Err(SequenceParseError::Empty));
    }

    #[test]
    fn unassigned_binding_never_matches() {
        let b = Binding::new(
            "unassigned",
            "Unassigned",
            vec![],
            ActionDescriptor::Command("noop".into()),
        );
        assert!(!b.is_assigned());
        assert_eq!(b.normalized_sequence(), "");
    }

    #[test]
    fn default_bindings_are_assigned_and_distinct() {
        let bindings = default_bindings();
        assert!(bindings.iter().all(|b| b.is_assigned()));
        let mut ids: Vec<_> = bindings.iter().map(|b| b.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), bindings.len());
    }

    #[test]
    fn binding_serde_round_trip() {
        let binding = Binding::new(
            "graph.open",
            "Open graph view",
            vec![vec!["g".into()]],
            ActionDescriptor::Builtin("graph.open".into()),
        );
        let json = serde_json::to_string(&binding).unwrap();
        let back: Binding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, binding);
    }
}
