//! Keyboard pipeline: events in, classified decisions and matched bindings out.
//!
//! # Module structure
//!
//! - `event` - the browser-like key event model the host feeds in
//! - `token` - canonical key tokens and key-name resolution
//! - `sequence` - the chord/sequence accumulator and its timing discipline
//! - `matcher` - normalization and exact/prefix matching against bindings
//! - `classifier` - the ordered event-classification rules

pub mod classifier;
pub mod event;
pub mod matcher;
pub mod sequence;
pub mod token;

pub use classifier::{ClassifyContext, Decision, InputClassifier};
pub use event::{ElementId, EventTarget, KeyEvent, TargetKind};
pub use matcher::{find_exact, find_match, format_sequence, prefix_candidates, MatchResult};
pub use sequence::{Chord, SequenceAccumulator};
pub use token::{display_form, is_known_key, resolve_key_name, tokenize, KeyToken, Platform};

#[cfg(test)]
#[path = "token_tests.rs"]
mod token_tests;
