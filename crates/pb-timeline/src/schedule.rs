use std::fmt;

use pb_core::{ActionId, ActionKind, ObjectId, PlayAction, PlaybackConfig, Point, Trigger};
use serde::Serialize;

use crate::speed::SpeedMultiplier;

/// One action placed on the transition's time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledAction {
    /// The source action.
    pub action_id: ActionId,
    /// The source action's kind.
    pub kind: ActionKind,
    /// The trigger actually applied (the first action is always sequential).
    pub trigger: Trigger,
    /// The object that moves along the path, if any.
    pub from_object_id: Option<ObjectId>,
    /// The receiver, if any.
    pub to_object_id: Option<ObjectId>,
    /// Path start.
    pub from: Point,
    /// Path end.
    pub to: Point,
    /// Start of the action's window, in milliseconds from the transition start.
    pub start_ms: f64,
    /// End of the action's window.
    pub end_ms: f64,
}

impl ScheduledAction {
    /// Length of the window.
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }

    /// True if `elapsed_ms` lies in `[start_ms, end_ms]`.
    pub fn contains(&self, elapsed_ms: f64) -> bool {
        self.start_ms <= elapsed_ms && elapsed_ms <= self.end_ms
    }

    /// Fraction of the path covered at `elapsed_ms`, in `[0, 1]`.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        let span = self.duration_ms();
        if span <= 0.0 {
            return 1.0;
        }
        ((elapsed_ms - self.start_ms) / span).clamp(0.0, 1.0)
    }

    /// Point along the path at `elapsed_ms`.
    pub fn position_at(&self, elapsed_ms: f64) -> Point {
        self.from.lerp(self.to, self.progress(elapsed_ms))
    }
}

impl fmt::Display for ScheduledAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.0}-{:.0}ms",
            self.action_id, self.kind, self.start_ms, self.end_ms
        )
    }
}

/// The actions of one phase laid out in time.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Scheduled actions, in the phase's action order.
    pub actions: Vec<ScheduledAction>,
    /// Time at which the last action finishes. Zero for a phase with no actions.
    pub total_duration_ms: f64,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            writeln!(f, "{action}")?;
        }
        write!(f, "total {:.0}ms", self.total_duration_ms)
    }
}

/// Lay out a phase's actions on a single time axis.
///
/// A running cursor starts at zero. A sequential action starts at the cursor
/// and pushes it forward by its duration. A concurrent action starts together
/// with the most recent sequential action (its anchor) and pushes the cursor
/// out only if it outlasts everything scheduled so far. The first action is
/// always sequential. Durations are floored by `config` and then divided by
/// `speed`.
pub fn schedule_actions(
    actions: &[PlayAction],
    speed: SpeedMultiplier,
    config: &PlaybackConfig,
) -> Schedule {
    let mut cursor = 0.0_f64;
    let mut anchor_start = 0.0_f64;
    let mut scheduled = Vec::with_capacity(actions.len());

    for (index, action) in actions.iter().enumerate() {
        let duration = speed.scale(config.effective_duration_ms(action.animation.duration_ms));
        let trigger = if index == 0 {
            Trigger::AfterPrevious
        } else {
            action.animation.trigger
        };

        let start = match trigger {
            Trigger::AfterPrevious => {
                anchor_start = cursor;
                cursor += duration;
                anchor_start
            }
            Trigger::WithPrevious => {
                cursor = cursor.max(anchor_start + duration);
                anchor_start
            }
        };

        scheduled.push(ScheduledAction {
            action_id: action.id.clone(),
            kind: action.kind,
            trigger,
            from_object_id: action.from_object_id.clone(),
            to_object_id: action.to_object_id.clone(),
            from: action.from,
            to: action.to,
            start_ms: start,
            end_ms: start + duration,
        });
    }

    Schedule {
        actions: scheduled,
        total_duration_ms: cursor,
    }
}
