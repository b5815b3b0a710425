//! keymode - keyboard chord and sequence recognition for editor hosts.
//!
//! The crate recognizes multi-key chords (`ctrl+shift+A`) and multi-step
//! sequences (`o` then `l`) typed by a user, matches them against a set of
//! registered bindings, and governs the "shortcut mode" state that decides
//! when keystrokes belong to the host's editor and when they belong to the
//! recognizer.
//!
//! The host owns all I/O. It feeds keydown/keyup events, focus changes,
//! and timer deliveries into a [`ModeController`] and implements the
//! [`Host`] trait to receive matched actions, notification requests, and
//! focus effects back. Everything in between (tokenization, chord
//! accumulation under the combo-threshold timing discipline, prefix
//! matching, mode transitions) is synchronous and side-effect free.
//!
//! ```rust,no_run
//! use std::time::Instant;
//! use keymode::{default_bindings, KeyEvent, ModeController, Settings};
//! # struct MyHost;
//! # impl keymode::Host for MyHost {
//! #     fn execute_action(&mut self, _: &keymode::ActionDescriptor) {}
//! #     fn notify_sequence_progress(&mut self, _: &str, _: &[&keymode::Binding]) {}
//! #     fn notify_no_match(&mut self, _: &str) {}
//! #     fn notify_mode_entered(&mut self) {}
//! #     fn notify_action_executed(&mut self, _: &str) {}
//! #     fn hide_notifications(&mut self) {}
//! #     fn blur_active_editor(&mut self) -> Option<keymode::FocusSnapshot> { None }
//! #     fn restore_focus(&mut self, _: &keymode::FocusSnapshot) {}
//! #     fn modal_visible(&self) -> bool { false }
//! # }
//!
//! let mut controller = ModeController::new(Settings::default());
//! let bindings = default_bindings();
//! let mut host = MyHost;
//!
//! controller.handle_key_down(&KeyEvent::plain("Escape"), Instant::now(), &bindings, &mut host);
//! assert!(controller.is_shortcut_mode_active());
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod host;
pub mod keyboard;
pub mod logging;
pub mod mode;

pub use binding::{
    default_bindings, parse_sequence, ActionDescriptor, Binding, BindingScope, SequenceParseError,
};
pub use config::{load_settings, Settings};
pub use error::{ErrorSeverity, KeymodeError, Result, ResultExt};
pub use host::{Host, TimerLane, TimerToken};
pub use keyboard::{
    Decision, ElementId, EventTarget, InputClassifier, KeyEvent, KeyToken, Platform,
    SequenceAccumulator, TargetKind,
};
pub use mode::{CursorPosition, FocusKind, FocusSnapshot, FocusState, ModeController};
