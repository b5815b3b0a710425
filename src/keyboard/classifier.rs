//! Per-event classification: what does this keystroke mean right now?
//!
//! A keystroke may be the start of a combo, a continuation, a mode trigger,
//! a focus-restore request, or something that must be left alone for the
//! focused editable surface. The rules below run in strict priority order;
//! the ordering is what resolves the competing concerns of "don't steal
//! keystrokes from editing", "always allow the trigger key", and "the
//! focus-restore key only makes sense before a sequence has started".
//!
//! Decision flow:
//! 1. An external capture (the binding recorder) owns the keyboard → ignore.
//! 2. Plain editable target, mode off, not the trigger → ignore.
//! 3. Blocking dialog on screen with the default `esc` trigger → ignore,
//!    so the dialog keeps its close key.
//! 4. Auto shortcut mode: the trigger toggles, short-circuiting the rest.
//! 5. The trigger toggles; with the sticky modal flag set and an `esc`
//!    trigger it instead dismisses the flag.
//! 6. Mode on, focus-restore key, nothing accumulated yet → restore focus.
//! 7. Mode off → ignore.
//! 8. Sticky modal flag plus the trigger → ignore (no double handling).
//! 9. Otherwise the event is a sequence token.

use std::collections::BTreeSet;

use crate::config::Settings;

use super::event::KeyEvent;
use super::token::{resolve_key_name, tokenize, KeyToken, MODIFIER_NAMES};

/// What the controller should do with one keydown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Forward untouched to whatever has focus.
    Ignore,
    /// Enter shortcut mode.
    ToggleOn,
    /// Leave shortcut mode.
    ToggleOff,
    /// Clear the sticky modal flag; the event is otherwise swallowed.
    DismissModal,
    /// Leave shortcut mode and return focus to the last snapshot.
    RestoreFocus,
    /// Feed the tokenized key into the sequence accumulator.
    FeedSequence(KeyToken),
}

/// Read-only view of the controller state a classification depends on.
#[derive(Clone, Copy, Debug)]
pub struct ClassifyContext<'a> {
    pub settings: &'a Settings,
    /// Shortcut mode currently active.
    pub mode_active: bool,
    /// No chords accumulated yet.
    pub accumulator_empty: bool,
    /// The settings UI is recording a raw key capture.
    pub capturing: bool,
    /// Sticky modal flag maintained by the controller (rules 5 and 8).
    pub modal_flag: bool,
    /// A blocking dialog is currently in the document (rule 3).
    pub modal_visible: bool,
}

/// Stateless rule evaluation plus the pressed-modifier bookkeeping that
/// keyup events maintain.
#[derive(Debug, Default)]
pub struct InputClassifier {
    pressed_modifiers: BTreeSet<String>,
}

impl InputClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the ordered rules to one keydown.
    pub fn classify(&self, event: &KeyEvent, ctx: &ClassifyContext<'_>) -> Decision {
        let key = resolve_key_name(&event.key);
        let trigger = resolve_key_name(&ctx.settings.trigger_key);
        let focus_key = resolve_key_name(&ctx.settings.focus_restore_key);

        // 1. External capture owns the keyboard.
        if ctx.capturing && !ctx.settings.auto_shortcut_mode {
            return Decision::Ignore;
        }

        // 2. Typing in an input/contenteditable (not the rich editor) with
        // mode off: only the trigger key gets through.
        if event.target.kind.is_plain_editable() && !ctx.mode_active && key != trigger {
            return Decision::Ignore;
        }

        // 3. A blocking dialog owns esc while esc is the trigger.
        if ctx.modal_visible && trigger == "esc" {
            return Decision::Ignore;
        }

        // 4. Auto shortcut mode: trigger toggles, nothing else applies.
        if ctx.settings.auto_shortcut_mode && key == trigger {
            return if ctx.mode_active {
                Decision::ToggleOff
            } else {
                Decision::ToggleOn
            };
        }

        // 5. The trigger key.
        if key == trigger {
            if ctx.modal_flag && trigger == "esc" {
                return Decision::DismissModal;
            }
            return if ctx.mode_active {
                Decision::ToggleOff
            } else {
                Decision::ToggleOn
            };
        }

        // 6. Focus-restore key, only before any sequence input.
        if ctx.mode_active && key == focus_key && ctx.accumulator_empty {
            return Decision::RestoreFocus;
        }

        // 7. Everything below needs shortcut mode.
        if !ctx.mode_active {
            return Decision::Ignore;
        }

        // 8. Guard against double-handling the trigger around a modal.
        if ctx.modal_flag && key == trigger {
            return Decision::Ignore;
        }

        // 9. Sequence token.
        Decision::FeedSequence(tokenize(event))
    }

    /// Record modifiers held down, for later release tracking.
    pub fn note_key_down(&mut self, event: &KeyEvent) {
        let key = resolve_key_name(&event.key);
        if MODIFIER_NAMES.contains(&key.as_str()) {
            self.pressed_modifiers.insert(key);
        }
    }

    /// Drop released modifiers. The event's own flags are authoritative, so
    /// a missed keyup for a modifier is corrected on the next one.
    pub fn handle_key_up(&mut self, event: &KeyEvent) {
        let key = resolve_key_name(&event.key);
        self.pressed_modifiers.remove(&key);

        if !event.ctrl {
            self.pressed_modifiers.remove("ctrl");
        }
        if !event.alt {
            self.pressed_modifiers.remove("alt");
        }
        if !event.shift {
            self.pressed_modifiers.remove("shift");
        }
        if !event.meta {
            self.pressed_modifiers.remove("meta");
        }
    }

    pub fn pressed_modifiers(&self) -> &BTreeSet<String> {
        &self.pressed_modifiers
    }

    /// A press of a modifier key by itself (editor-scope capture lets these
    /// through so held modifiers don't produce spurious tokens).
    pub fn is_standalone_modifier(event: &KeyEvent) -> bool {
        MODIFIER_NAMES.contains(&resolve_key_name(&event.key).as_str())
    }
}
