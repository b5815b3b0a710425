//! Sequence normalization and binding matching.
//!
//! Both sides of a comparison (the accumulator's current input and each
//! binding's configured sequence) are run through [`format_sequence`],
//! which produces the canonical lower-cased, sorted, cosmetically
//! substituted string form. Matching is therefore insensitive to case,
//! modifier order, and `meta`/`command` spelling.
//!
//! Prefix matching is a literal string-prefix test over the joined
//! representation, not a chord-wise test: `"o"` is a prefix of `"o+f"`.
//! User-visible behavior depends on this granularity, so it is preserved
//! deliberately.

use crate::binding::Binding;

use super::token::MODIFIER_NAMES;

/// Result of matching the current sequence against the registered bindings.
#[derive(Debug, Default)]
pub struct MatchResult<'a> {
    /// The first registered binding whose sequence equals the input exactly.
    pub matched: Option<&'a Binding>,
    /// Every binding whose normalized sequence starts with the input.
    pub candidates: Vec<&'a Binding>,
}

/// Rewrite one raw token into canonical form: modifiers in fixed order
/// (ctrl, alt, shift, meta), then the key, all lower-cased. Makes
/// `"shift+ctrl+A"` and `"ctrl+shift+a"` compare equal.
fn canonical_token(raw: &str) -> String {
    let mut flags = [false; 4];
    let mut key: Option<String> = None;

    for part in raw.split('+') {
        let part = part.to_lowercase();
        match part.as_str() {
            "ctrl" => flags[0] = true,
            "alt" | "option" => flags[1] = true,
            "shift" => flags[2] = true,
            "meta" | "command" => flags[3] = true,
            // Malformed tokens with several base keys are tolerated:
            // the last one wins.
            _ => key = Some(part),
        }
    }

    let mut parts: Vec<&str> = Vec::new();
    for (i, name) in MODIFIER_NAMES.iter().enumerate() {
        if flags[i] {
            parts.push(name);
        }
    }
    if let Some(ref k) = key {
        parts.push(k);
    }
    parts.join("+")
}

/// Render a sequence of chords into the canonical comparison string:
/// each chord's tokens canonicalized and sorted lexically, joined with
/// `+`, chords joined with `" then "`, and `meta`/`alt` rewritten to their
/// `command`/`option` spellings so both sides of a comparison agree.
pub fn format_sequence(chords: &[Vec<String>]) -> String {
    chords
        .iter()
        .map(|chord| {
            let mut keys: Vec<String> = chord.iter().map(|t| canonical_token(t)).collect();
            keys.sort();
            keys.join("+")
        })
        .collect::<Vec<_>>()
        .join(" then ")
        .replace("meta", "command")
        .replace("alt", "option")
}

/// First binding whose normalized sequence equals `formatted`.
///
/// Ties between bindings with identical sequences resolve to the first
/// registered one. Unassigned bindings (empty sequence) never match, and
/// an empty input matches nothing.
pub fn find_exact<'a>(formatted: &str, bindings: &'a [Binding]) -> Option<&'a Binding> {
    if formatted.is_empty() {
        return None;
    }
    bindings
        .iter()
        .find(|b| b.is_assigned() && b.normalized_sequence() == formatted)
}

/// Every assigned binding whose normalized sequence starts with `formatted`.
pub fn prefix_candidates<'a>(formatted: &str, bindings: &'a [Binding]) -> Vec<&'a Binding> {
    bindings
        .iter()
        .filter(|b| b.is_assigned() && b.normalized_sequence().starts_with(formatted))
        .collect()
}

/// Exact match plus prefix candidates in one pass over the bindings.
pub fn find_match<'a>(formatted: &str, bindings: &'a [Binding]) -> MatchResult<'a> {
    MatchResult {
        matched: find_exact(formatted, bindings),
        candidates: prefix_candidates(formatted, bindings),
    }
}
