//! The shortcut-mode state machine.
//!
//! [`ModeController`] owns every piece of mutable state in the crate: the
//! classifier, the two sequence accumulators, the focus snapshot, and the
//! mode/modal/capture flags. Hosts drive it with keydown/keyup events,
//! focus changes, and timer deliveries; it answers through the [`Host`]
//! trait and never performs I/O of its own.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::binding::Binding;
use crate::config::Settings;
use crate::host::{Host, TimerLane, TimerToken};
use crate::keyboard::classifier::{ClassifyContext, Decision, InputClassifier};
use crate::keyboard::event::{ElementId, KeyEvent, TargetKind};
use crate::keyboard::sequence::SequenceAccumulator;
use crate::keyboard::token::tokenize;
use crate::keyboard::{matcher, KeyToken};

use super::focus::{CursorPosition, FocusState};

/// How one fed token resolved against the bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FeedOutcome {
    Executed,
    Pending,
    NoMatch,
}

/// Central coordinator for shortcut mode and the editor-scope lane.
pub struct ModeController {
    settings: Settings,
    classifier: InputClassifier,
    accumulator: SequenceAccumulator,
    editor_scope_accumulator: SequenceAccumulator,
    focus: FocusState,
    shortcut_mode_active: bool,
    editor_scope_active: bool,
    editor_focused: bool,
    /// Sticky flag a host sets while one of its own modals is open. Cleared
    /// by the trigger key (rule 5) or by the host.
    modal_open: bool,
    /// A settings surface is recording a raw key capture.
    capturing: bool,
}

impl ModeController {
    pub fn new(settings: Settings) -> Self {
        let combo = settings.combo_threshold();
        Self {
            settings,
            classifier: InputClassifier::new(),
            accumulator: SequenceAccumulator::new(combo, TimerLane::Sequence),
            editor_scope_accumulator: SequenceAccumulator::new(combo, TimerLane::EditorScope),
            focus: FocusState::new(),
            shortcut_mode_active: false,
            editor_scope_active: false,
            editor_focused: false,
            modal_open: false,
            capturing: false,
        }
    }

    /// Handle one keydown. Returns `true` when the event was consumed and
    /// must not reach the focused element.
    #[instrument(skip_all, fields(key = %event.key))]
    pub fn handle_key_down(
        &mut self,
        event: &KeyEvent,
        now: Instant,
        bindings: &[Binding],
        host: &mut impl Host,
    ) -> bool {
        self.classifier.note_key_down(event);

        let decision = {
            let ctx = ClassifyContext {
                settings: &self.settings,
                mode_active: self.shortcut_mode_active,
                accumulator_empty: self.accumulator.is_empty(),
                capturing: self.capturing,
                modal_flag: self.modal_open,
                modal_visible: host.modal_visible(),
            };
            self.classifier.classify(event, &ctx)
        };

        match decision {
            Decision::Ignore => false,
            Decision::ToggleOn => {
                self.enter_shortcut_mode(event, host);
                true
            }
            Decision::ToggleOff => {
                self.cancel_shortcuts(true, host);
                true
            }
            Decision::DismissModal => {
                self.modal_open = false;
                debug!(event_type = "modal_dismissed", "sticky modal flag cleared");
                true
            }
            Decision::RestoreFocus => {
                self.restore_focus(host);
                true
            }
            Decision::FeedSequence(token) => {
                self.feed_sequence(token, now, bindings, host);
                true
            }
        }
    }

    /// Handle one keyup. Only modifier bookkeeping happens here.
    pub fn handle_key_up(&mut self, event: &KeyEvent) {
        self.classifier.handle_key_up(event);
    }

    /// Keydown entry point for the editor-scope lane. Hosts wire this to
    /// the rich editor's own key handler; it runs the same match-and-notify
    /// pipeline as shortcut mode over the full binding table (the scope tag
    /// on a binding is presentation only) and never touches shortcut-mode
    /// state.
    pub fn handle_editor_scope_key(
        &mut self,
        event: &KeyEvent,
        now: Instant,
        bindings: &[Binding],
        host: &mut impl Host,
    ) -> bool {
        if !self.editor_scope_active {
            return false;
        }
        // A held modifier on its own is part of the next combo, not a token.
        if InputClassifier::is_standalone_modifier(event) {
            return false;
        }

        self.feed_lane(TimerLane::EditorScope, tokenize(event), now, bindings, host);
        true
    }

    /// Focus moved. Keeps the snapshot current, maintains the editor-focus
    /// flag the editor-scope lane depends on, and drives auto shortcut
    /// mode when it is enabled.
    pub fn on_focus_changed(
        &mut self,
        kind: TargetKind,
        focusing: bool,
        element: Option<ElementId>,
        position: Option<CursorPosition>,
        host: &mut impl Host,
    ) {
        if focusing {
            if let Some(element) = element {
                match kind {
                    TargetKind::RichEditor => self.focus.set_editor_focus(element, position),
                    TargetKind::Input => self.focus.set_input_focus(element),
                    TargetKind::ContentEditable => {
                        self.focus.set_content_editable_focus(element)
                    }
                    TargetKind::Other => {}
                }
            }
        }

        let editor_focused = kind == TargetKind::RichEditor && focusing;
        if kind == TargetKind::RichEditor || focusing {
            self.editor_focused = editor_focused;
        }
        if !self.editor_focused && self.editor_scope_active {
            self.set_editor_scope_active(false, host);
        }

        if self.settings.auto_shortcut_mode {
            if focusing && kind.is_editable_surface() {
                if self.shortcut_mode_active {
                    self.cancel_shortcuts(false, host);
                }
            } else if !self.shortcut_mode_active {
                self.shortcut_mode_active = true;
                self.accumulator.reset();
                host.notify_mode_entered();
                debug!(event_type = "mode_entered", auto = true, "shortcut mode on");
            }
        }
    }

    /// A scheduled idle-reset timer fired. Stale tokens (from an arming
    /// that has since been superseded or reset) are ignored.
    pub fn on_idle_timeout(&mut self, token: TimerToken, host: &mut impl Host) {
        let acc = match token.lane {
            TimerLane::Sequence => &mut self.accumulator,
            TimerLane::EditorScope => &mut self.editor_scope_accumulator,
        };
        if !acc.timer_is_current(token) {
            return;
        }
        acc.reset();
        host.hide_notifications();
        debug!(event_type = "sequence_timeout", lane = ?token.lane, "sequence abandoned");
    }

    /// Leave shortcut mode and drop any partial sequence. With `restore`
    /// set, focus goes back to the last snapshot unless a modal is up.
    pub fn cancel_shortcuts(&mut self, restore: bool, host: &mut impl Host) {
        let was_active = self.shortcut_mode_active;
        self.shortcut_mode_active = false;
        self.accumulator.reset();
        host.cancel_reset(TimerLane::Sequence);
        host.hide_notifications();

        if was_active && restore && !host.modal_visible() {
            if let Some(snapshot) = self.focus.snapshot() {
                host.restore_focus(snapshot);
            }
        }
        if was_active {
            debug!(event_type = "mode_exited", restore, "shortcut mode off");
        }
    }

    /// Turn the editor-scope lane on or off. Turning it on requires the
    /// feature to be enabled and the rich editor to have focus; losing
    /// editor focus turns it back off.
    pub fn set_editor_scope_active(&mut self, active: bool, host: &mut impl Host) {
        if active {
            if !self.settings.editor_scope_enabled || !self.editor_focused {
                return;
            }
            self.editor_scope_active = true;
            self.editor_scope_accumulator.reset();
        } else if self.editor_scope_active {
            self.editor_scope_active = false;
            self.editor_scope_accumulator.reset();
            host.cancel_reset(TimerLane::EditorScope);
        }
    }

    pub fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }

    pub fn set_capturing(&mut self, capturing: bool) {
        self.capturing = capturing;
    }

    /// Swap in new settings, rippling the combo threshold into both lanes.
    pub fn update_settings(&mut self, settings: Settings) {
        let combo = settings.combo_threshold();
        self.accumulator.set_combo_threshold(combo);
        self.editor_scope_accumulator.set_combo_threshold(combo);
        self.settings = settings;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_shortcut_mode_active(&self) -> bool {
        self.shortcut_mode_active
    }

    pub fn is_editor_scope_active(&self) -> bool {
        self.editor_scope_active
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    fn enter_shortcut_mode(&mut self, event: &KeyEvent, host: &mut impl Host) {
        if self.shortcut_mode_active {
            return;
        }
        self.shortcut_mode_active = true;
        self.accumulator.reset();

        // Whatever was being edited loses focus now; remember where it was.
        match event.target.kind {
            TargetKind::RichEditor => {
                if let Some(snapshot) = host.blur_active_editor() {
                    self.focus.replace(snapshot);
                }
            }
            TargetKind::Input | TargetKind::ContentEditable => {
                self.focus.prepare_for_capture(event);
            }
            TargetKind::Other => {}
        }

        host.notify_mode_entered();
        debug!(event_type = "mode_entered", auto = false, "shortcut mode on");
    }

    /// The focus-restore key: leave shortcut mode and put focus back
    /// unconditionally (no modal check on this path).
    fn restore_focus(&mut self, host: &mut impl Host) {
        self.shortcut_mode_active = false;
        self.accumulator.reset();
        host.cancel_reset(TimerLane::Sequence);
        host.hide_notifications();
        if let Some(snapshot) = self.focus.snapshot() {
            host.restore_focus(snapshot);
        }
        debug!(event_type = "focus_restored", "shortcut mode off");
    }

    fn feed_sequence(
        &mut self,
        token: KeyToken,
        now: Instant,
        bindings: &[Binding],
        host: &mut impl Host,
    ) {
        let outcome = self.feed_lane(TimerLane::Sequence, token, now, bindings, host);
        // The no-match exit policy applies to the main lane only.
        if outcome == FeedOutcome::NoMatch && self.settings.exit_mode_on_no_match {
            self.cancel_shortcuts(false, host);
        }
    }

    /// Accumulate one token on the given lane and resolve it against the
    /// bindings: execute on an exact match, keep accumulating (with a
    /// progress notification and a re-armed idle timer) while prefix
    /// candidates remain, and reset with a no-match notification on a dead
    /// end.
    fn feed_lane(
        &mut self,
        lane: TimerLane,
        token: KeyToken,
        now: Instant,
        bindings: &[Binding],
        host: &mut impl Host,
    ) -> FeedOutcome {
        let timeout = self.settings.sequence_timeout();
        let acc = match lane {
            TimerLane::Sequence => &mut self.accumulator,
            TimerLane::EditorScope => &mut self.editor_scope_accumulator,
        };

        acc.add_token(token, now);
        let formatted = acc.snapshot_formatted();
        let result = matcher::find_match(&formatted, bindings);

        if let Some(binding) = result.matched {
            debug!(
                event_type = "sequence_match",
                lane = ?lane,
                binding = %binding.id,
                sequence = %formatted,
                "binding matched"
            );
            host.hide_notifications();
            host.execute_action(&binding.action);
            host.notify_action_executed(&binding.name);
            acc.reset();
            host.cancel_reset(lane);
            return FeedOutcome::Executed;
        }

        if !result.candidates.is_empty() {
            host.notify_sequence_progress(&formatted, &result.candidates);
            let timer = acc.arm_idle_timer();
            host.schedule_reset(timer, timeout);
            return FeedOutcome::Pending;
        }

        debug!(event_type = "sequence_no_match", lane = ?lane, sequence = %formatted, "no binding");
        host.notify_no_match(&formatted);
        acc.reset();
        host.cancel_reset(lane);
        FeedOutcome::NoMatch
    }
}
