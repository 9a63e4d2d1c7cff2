use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::id::{ActionId, ObjectId};

/// What an action depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Player moves while dribbling.
    Dribble,
    /// Ball travels from one player to another.
    Pass,
    /// Player moves without the ball.
    Cut,
    /// Player sets a screen.
    Screen,
    /// Shot at the basket.
    Shot,
    /// Ball handed from one player to another.
    Handoff,
}

impl ActionKind {
    /// Pass and handoff are the kinds that move possession.
    pub fn transfers_possession(self) -> bool {
        matches!(self, Self::Pass | Self::Handoff)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Dribble => "dribble",
            Self::Pass => "pass",
            Self::Cut => "cut",
            Self::Screen => "screen",
            Self::Shot => "shot",
            Self::Handoff => "handoff",
        };
        f.write_str(s)
    }
}

/// How an action is anchored in time relative to the actions before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Start once everything scheduled so far has finished.
    #[default]
    AfterPrevious,
    /// Start together with the most recent `AfterPrevious` action.
    WithPrevious,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AfterPrevious => f.write_str("after_previous"),
            Self::WithPrevious => f.write_str("with_previous"),
        }
    }
}

/// Timing of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    /// Scheduling relationship to the preceding actions.
    #[serde(default)]
    pub trigger: Trigger,
    /// Nominal duration at 1x speed. `None` takes the configured default
    /// when compiled; values under the configured floor are raised to it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            trigger: Trigger::AfterPrevious,
            duration_ms: None,
        }
    }
}

/// A movement drawn on a phase, animated during the transition out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayAction {
    /// Identifier, unique within the phase.
    pub id: ActionId,
    /// The kind of action.
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Start point of the drawn path.
    pub from: Point,
    /// End point of the drawn path.
    pub to: Point,
    /// The object that performs the action, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_object_id: Option<ObjectId>,
    /// The receiver of a pass or handoff, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_object_id: Option<ObjectId>,
    /// Timing.
    #[serde(default)]
    pub animation: Animation,
}

impl PlayAction {
    /// Create a freehand action with default timing.
    pub fn new(id: impl Into<ActionId>, kind: ActionKind, from: Point, to: Point) -> Self {
        Self {
            id: id.into(),
            kind,
            from,
            to,
            from_object_id: None,
            to_object_id: None,
            animation: Animation::default(),
        }
    }

    /// Attach the performing object.
    pub fn from_object(mut self, id: impl Into<ObjectId>) -> Self {
        self.from_object_id = Some(id.into());
        self
    }

    /// Attach the receiving object.
    pub fn to_object(mut self, id: impl Into<ObjectId>) -> Self {
        self.to_object_id = Some(id.into());
        self
    }

    /// Set the trigger.
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.animation.trigger = trigger;
        self
    }

    /// Set the nominal duration.
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.animation.duration_ms = Some(duration_ms);
        self
    }

    /// True if the action references `object` on either end.
    pub fn references(&self, object: &ObjectId) -> bool {
        self.from_object_id.as_ref() == Some(object) || self.to_object_id.as_ref() == Some(object)
    }

    /// The `(from, to)` pair when this action hands the ball over, i.e. a
    /// pass or handoff with both ends attached.
    pub fn possession_change(&self) -> Option<(&ObjectId, &ObjectId)> {
        if !self.kind.transfers_possession() {
            return None;
        }
        match (&self.from_object_id, &self.to_object_id) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }
}
