//! Stateful accumulator for chords typed so far.
//!
//! Two separate time windows drive accumulation: the short combo threshold
//! (default 200 ms) decides whether a new token joins the previous chord or
//! starts a new one, and the much longer idle timeout abandons a sequence
//! the user has walked away from. The split is what lets `ctrl+k ctrl+s`
//! style chords and `g d` style sequences coexist on one input stream.

use std::time::{Duration, Instant};

use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::host::{TimerLane, TimerToken};

use super::matcher;
use super::token::KeyToken;

/// Tokens captured within one combo window.
pub type Chord = SmallVec<[KeyToken; 4]>;

/// Buffer of chords plus the timing state that grows it.
#[derive(Debug)]
pub struct SequenceAccumulator {
    chords: Vec<Chord>,
    last_token_at: Option<Instant>,
    combo_threshold: Duration,
    lane: TimerLane,
    timer_generation: u64,
    timer_armed: bool,
}

impl SequenceAccumulator {
    pub fn new(combo_threshold: Duration, lane: TimerLane) -> Self {
        Self {
            chords: Vec::new(),
            last_token_at: None,
            combo_threshold,
            lane,
            timer_generation: 0,
            timer_armed: false,
        }
    }

    pub fn set_combo_threshold(&mut self, threshold: Duration) {
        self.combo_threshold = threshold;
    }

    /// Add a token, merging into the last chord when it arrives within the
    /// combo threshold.
    ///
    /// Merge policy:
    /// - a lone modifier already contained in the chord's last token is
    ///   discarded (key-repeat of a held modifier produces no noise);
    /// - if the chord's last token is itself a lone modifier and the new
    ///   token differs, the new token replaces it: `ctrl` immediately
    ///   followed by `ctrl+A` is one physical press, not two chords;
    /// - otherwise the token is appended to the chord.
    pub fn add_token(&mut self, token: KeyToken, now: Instant) {
        let start_new_chord = match self.last_token_at {
            None => true,
            Some(prev) => {
                self.chords.is_empty() || now.duration_since(prev) > self.combo_threshold
            }
        };

        if start_new_chord {
            self.chords.push(smallvec![token]);
        } else if let Some(chord) = self.chords.last_mut() {
            let last = chord.last().cloned();
            match last {
                Some(ref last)
                    if token.is_lone_modifier() && last.as_str().contains(token.as_str()) =>
                {
                    // Duplicate modifier-only noise; drop it. The substring
                    // test is intentional: `ctrl` inside `ctrl+A` counts as
                    // already present.
                }
                Some(ref last) if last.is_lone_modifier() && *last != token => {
                    if let Some(slot) = chord.last_mut() {
                        *slot = token;
                    }
                }
                _ => chord.push(token),
            }
        }

        self.last_token_at = Some(now);
        trace!(
            event_type = "sequence_token",
            chords = self.chords.len(),
            "token accumulated"
        );
    }

    /// The canonical comparison string for the current buffer; see
    /// [`matcher::format_sequence`].
    pub fn snapshot_formatted(&self) -> String {
        let chords: Vec<Vec<String>> = self
            .chords
            .iter()
            .map(|c| c.iter().map(|t| t.as_str().to_string()).collect())
            .collect();
        matcher::format_sequence(&chords)
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    /// Clear the buffer and invalidate any outstanding timer token.
    /// Idempotent: a second reset leaves the same empty state.
    pub fn reset(&mut self) {
        self.chords.clear();
        self.last_token_at = None;
        self.timer_generation = self.timer_generation.wrapping_add(1);
        self.timer_armed = false;
    }

    /// (Re)arm the idle timer, superseding any earlier arming. The caller
    /// hands the returned token to the host for scheduling; only the most
    /// recently issued token will be honored when it comes back.
    pub fn arm_idle_timer(&mut self) -> TimerToken {
        self.timer_generation = self.timer_generation.wrapping_add(1);
        self.timer_armed = true;
        TimerToken {
            lane: self.lane,
            generation: self.timer_generation,
        }
    }

    /// Whether a delivered token is still the live one for this buffer.
    pub fn timer_is_current(&self, token: TimerToken) -> bool {
        self.timer_armed && token.lane == self.lane && token.generation == self.timer_generation
    }
}
