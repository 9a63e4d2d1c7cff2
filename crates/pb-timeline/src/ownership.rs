//! Ball possession across phases and within a transition.

use pb_core::{ActionId, BallOwner, ObjectId, Phase};
use serde::Serialize;

use crate::schedule::Schedule;

/// A possession change: at `at_ms` the ball goes from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipFlip {
    /// The pass or handoff that moves the ball.
    pub action_id: ActionId,
    /// Passer.
    pub from: ObjectId,
    /// Receiver.
    pub to: ObjectId,
    /// End of the action's window; the receiver owns the ball from here on.
    pub at_ms: f64,
}

/// The possession change a phase performs: the first pass or handoff with
/// both a passer and a receiver. Later passes in the same phase animate but
/// do not move possession.
pub fn first_ownership_flip(schedule: &Schedule) -> Option<OwnershipFlip> {
    schedule.actions.iter().find_map(|action| {
        if !action.kind.transfers_possession() {
            return None;
        }
        match (&action.from_object_id, &action.to_object_id) {
            (Some(from), Some(to)) => Some(OwnershipFlip {
                action_id: action.action_id.clone(),
                from: from.clone(),
                to: to.clone(),
                at_ms: action.end_ms,
            }),
            _ => None,
        }
    })
}

/// Owner at the start of phase `index`.
///
/// An explicit owner or explicit nobody wins. An inherited owner is
/// `carried`, the owner at the end of the previous phase; the first phase has
/// nothing to inherit and falls back to its first offense or defense player.
pub fn start_owner(phase: &Phase, index: usize, carried: Option<&ObjectId>) -> Option<ObjectId> {
    match &phase.ball_owner_object_id {
        BallOwner::Owner(id) => Some(id.clone()),
        BallOwner::None => None,
        BallOwner::Inherit if index == 0 => phase.first_player().map(|o| o.id.clone()),
        BallOwner::Inherit => carried.cloned(),
    }
}

/// Owner once every flip has fired.
pub fn resulting_owner(start: Option<&ObjectId>, flip: Option<&OwnershipFlip>) -> Option<ObjectId> {
    match flip {
        Some(flip) => Some(flip.to.clone()),
        None => start.cloned(),
    }
}

/// Owner at `elapsed_ms`: `start`, with every flip whose time has come
/// applied in order.
pub fn owner_at<'a>(
    start: Option<&'a ObjectId>,
    flips: impl IntoIterator<Item = &'a OwnershipFlip>,
    elapsed_ms: f64,
) -> Option<&'a ObjectId> {
    flips
        .into_iter()
        .filter(|flip| flip.at_ms <= elapsed_ms)
        .fold(start, |_, flip| Some(&flip.to))
}
