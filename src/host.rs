//! Collaborator traits the host application implements.
//!
//! The core never performs I/O itself: executing a matched action, showing
//! or hiding notifications, moving focus, and scheduling the idle-reset
//! timer are all delegated through [`Host`]. Every callback is
//! fire-and-forget from the core's perspective; a host that fails inside
//! one must not surface that failure back into the pipeline.

use std::time::Duration;

use crate::binding::{ActionDescriptor, Binding};
use crate::mode::focus::FocusSnapshot;

/// Which accumulator a scheduled reset belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerLane {
    /// The main shortcut-mode sequence.
    Sequence,
    /// The editor-scope sequence.
    EditorScope,
}

/// Handle for one arming of the idle-reset timer.
///
/// The generation is bumped every time the owning accumulator is re-armed
/// or reset, so a token delivered back after the sequence it protected is
/// gone is recognized as stale and ignored. Stale timers are impossible by
/// construction; no flag juggling is involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub lane: TimerLane,
    pub generation: u64,
}

/// Everything the mode controller needs from its host.
pub trait Host {
    /// Run the action bound to an exactly matched sequence. Failures are
    /// the host's to log; the core has already completed its part.
    fn execute_action(&mut self, action: &ActionDescriptor);

    /// The user is mid-sequence: show what they have typed and how many
    /// bindings are still reachable.
    fn notify_sequence_progress(&mut self, formatted: &str, candidates: &[&Binding]);

    /// The typed sequence matched nothing and was discarded.
    fn notify_no_match(&mut self, formatted: &str);

    /// Shortcut mode was just entered.
    fn notify_mode_entered(&mut self);

    /// A binding's action was just executed.
    fn notify_action_executed(&mut self, name: &str);

    /// Tear down any visible sequence/mode feedback.
    fn hide_notifications(&mut self);

    /// Blur the rich editor if it currently has focus, returning a snapshot
    /// (element plus cursor position) the core can later hand back to
    /// [`Host::restore_focus`].
    fn blur_active_editor(&mut self) -> Option<FocusSnapshot>;

    /// Give focus back to a previously snapshotted element. The host is
    /// responsible for ignoring snapshots whose element has since been
    /// detached.
    fn restore_focus(&mut self, snapshot: &FocusSnapshot);

    /// Whether a blocking modal dialog is currently on screen.
    fn modal_visible(&self) -> bool;

    /// Schedule `token` to be delivered to
    /// [`ModeController::on_idle_timeout`](crate::mode::ModeController::on_idle_timeout)
    /// after `delay`. Scheduling replaces any earlier timer on the same
    /// lane. Hosts without a timer facility may leave this as the default
    /// no-op; sequences then simply never time out.
    fn schedule_reset(&mut self, token: TimerToken, delay: Duration) {
        let _ = (token, delay);
    }

    /// Cancel any pending reset on `lane`. Best effort; a token that fires
    /// anyway is rejected as stale.
    fn cancel_reset(&mut self, lane: TimerLane) {
        let _ = lane;
    }
}
