use tracing::debug;

use crate::compiler::CompiledPlayback;
use crate::error::{TimelineError, TimelineResult};
use crate::frame::Frame;

/// Tracks playback position across the transitions of a compiled play.
///
/// The clock snapshots transition durations when created and is driven by an
/// external tick source through [`advance`](Self::advance). It never owns the
/// compiled play; pass it back in to [`frame`](Self::frame).
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackClock {
    durations: Vec<f64>,
    transition_index: usize,
    elapsed_ms: f64,
}

impl PlaybackClock {
    /// A clock at the start of the first transition.
    pub fn new(compiled: &CompiledPlayback) -> Self {
        Self {
            durations: compiled
                .transitions
                .iter()
                .map(|t| t.total_duration_ms())
                .collect(),
            transition_index: 0,
            elapsed_ms: 0.0,
        }
    }

    /// Move playback forward by `delta_ms`, rolling into the next transition
    /// when the current one runs out and stopping at the end of the last.
    /// Returns `true` while there is more to play.
    ///
    /// A zero-length transition (a phase with no actions) is held for the
    /// tick that reaches it, with any leftover time dropped, so its phase is
    /// on screen for at least one frame.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        if self.is_finished() {
            return false;
        }
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed_ms += delta_ms;
        }

        let last = self.durations.len() - 1;
        while self.transition_index < last && self.elapsed_ms >= self.durations[self.transition_index] {
            self.elapsed_ms -= self.durations[self.transition_index];
            self.transition_index += 1;
            debug!(transition = self.transition_index, "entered transition");
            if self.durations[self.transition_index] == 0.0 {
                self.elapsed_ms = 0.0;
                break;
            }
        }
        if self.transition_index == last {
            self.elapsed_ms = self.elapsed_ms.min(self.durations[last]);
        }
        !self.is_finished()
    }

    /// Back to the start of the first transition.
    pub fn restart(&mut self) {
        self.transition_index = 0;
        self.elapsed_ms = 0.0;
    }

    /// Jump to the start of the transition leaving phase `index`.
    pub fn jump_to_phase(&mut self, index: usize) -> TimelineResult<()> {
        if index >= self.durations.len() {
            return Err(TimelineError::PhaseOutOfRange {
                index,
                transitions: self.durations.len(),
            });
        }
        self.transition_index = index;
        self.elapsed_ms = 0.0;
        Ok(())
    }

    /// The frame at the clock's position, or `None` for a play with a single
    /// phase.
    pub fn frame(&self, compiled: &CompiledPlayback) -> Option<Frame> {
        compiled
            .transition(self.transition_index)
            .map(|t| t.frame_at(self.elapsed_ms))
    }

    /// True once the last transition has played out. A play with no
    /// transitions is always finished.
    pub fn is_finished(&self) -> bool {
        match self.durations.last() {
            None => true,
            Some(&last) => {
                self.transition_index + 1 == self.durations.len() && self.elapsed_ms >= last
            }
        }
    }

    /// Index of the current transition (equal to its departing phase index).
    pub fn transition_index(&self) -> usize {
        self.transition_index
    }

    /// Time into the current transition.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}
