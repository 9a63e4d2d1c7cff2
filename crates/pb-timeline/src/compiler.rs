//! Compile a play document into one timed transition per adjacent phase pair.

use std::collections::HashMap;

use pb_core::{BasketballPlayDocument, ObjectId, Phase, PhaseId, PlaybackConfig, Point};
use serde::Serialize;
use tracing::debug;

use crate::ownership::{OwnershipFlip, first_ownership_flip, resulting_owner, start_owner};
use crate::schedule::{Schedule, schedule_actions};
use crate::speed::SpeedMultiplier;

/// How one object moves through a transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTrack {
    /// The object (matched by id across the two phases).
    pub object_id: ObjectId,
    /// Where the object stands when the transition starts.
    pub departing: Point,
    /// Where the object stands when the transition ends.
    pub arriving: Point,
    /// Indices into the schedule of the actions this object performs, in
    /// action order.
    pub actions: Vec<usize>,
}

/// The compiled animation between phase `index` and phase `index + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// Index of the departing phase.
    pub index: usize,
    /// Departing phase.
    pub from_phase_id: PhaseId,
    /// Arriving phase.
    pub to_phase_id: PhaseId,
    /// The departing phase's actions laid out in time.
    pub schedule: Schedule,
    /// One track per object present in either phase: departing-phase objects
    /// in insertion order, then objects that only exist in the arriving phase.
    pub tracks: Vec<ObjectTrack>,
    /// Ball owner when the transition starts.
    pub start_owner: Option<ObjectId>,
    /// The possession change this transition performs, if any.
    pub ownership_flip: Option<OwnershipFlip>,
}

impl Transition {
    /// Length of the transition. Zero for a phase with no actions.
    pub fn total_duration_ms(&self) -> f64 {
        self.schedule.total_duration_ms
    }

    /// Ball owner once the transition has finished.
    pub fn end_owner(&self) -> Option<ObjectId> {
        resulting_owner(self.start_owner.as_ref(), self.ownership_flip.as_ref())
    }
}

/// A whole play compiled at one speed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledPlayback {
    /// One transition per adjacent phase pair.
    pub transitions: Vec<Transition>,
    /// Resolved ball owner at the start of each phase.
    pub phase_start_owners: Vec<Option<ObjectId>>,
    /// The speed the play was compiled at.
    pub speed: SpeedMultiplier,
}

impl CompiledPlayback {
    /// Sum of all transition durations.
    pub fn total_duration_ms(&self) -> f64 {
        self.transitions.iter().map(Transition::total_duration_ms).sum()
    }

    /// The transition leaving phase `index`.
    pub fn transition(&self, index: usize) -> Option<&Transition> {
        self.transitions.get(index)
    }
}

/// Compile with the default [`PlaybackConfig`].
pub fn compile_play_playback(
    document: &BasketballPlayDocument,
    speed: impl Into<SpeedMultiplier>,
) -> CompiledPlayback {
    compile_play_playback_with(document, speed, &PlaybackConfig::default())
}

/// Compile a validated document into transitions.
///
/// The document is trusted to have passed validation; compiling an invalid
/// one yields a well-defined but meaningless animation rather than an error.
pub fn compile_play_playback_with(
    document: &BasketballPlayDocument,
    speed: impl Into<SpeedMultiplier>,
    config: &PlaybackConfig,
) -> CompiledPlayback {
    let speed = speed.into();
    let mut transitions = Vec::with_capacity(document.phases.len().saturating_sub(1));
    let mut phase_start_owners = Vec::with_capacity(document.phases.len());
    let mut carried: Option<ObjectId> = None;

    for (index, phase) in document.phases.iter().enumerate() {
        let owner = start_owner(phase, index, carried.as_ref());
        phase_start_owners.push(owner.clone());

        let Some(next) = document.phases.get(index + 1) else {
            break;
        };

        let schedule = schedule_actions(&phase.actions, speed, config);
        let ownership_flip = first_ownership_flip(&schedule);
        carried = resulting_owner(owner.as_ref(), ownership_flip.as_ref());

        debug!(
            from = %phase.id,
            to = %next.id,
            actions = schedule.actions.len(),
            duration_ms = schedule.total_duration_ms,
            "compiled transition"
        );

        transitions.push(Transition {
            index,
            from_phase_id: phase.id.clone(),
            to_phase_id: next.id.clone(),
            tracks: build_tracks(phase, next, &schedule),
            schedule,
            start_owner: owner,
            ownership_flip,
        });
    }

    CompiledPlayback {
        transitions,
        phase_start_owners,
        speed,
    }
}

fn build_tracks(departing: &Phase, arriving: &Phase, schedule: &Schedule) -> Vec<ObjectTrack> {
    let mut by_source: HashMap<&ObjectId, Vec<usize>> = HashMap::new();
    for (i, action) in schedule.actions.iter().enumerate() {
        if let Some(source) = &action.from_object_id {
            by_source.entry(source).or_default().push(i);
        }
    }

    let mut tracks: Vec<ObjectTrack> = departing
        .objects
        .iter()
        .map(|object| {
            let actions = by_source.remove(&object.id).unwrap_or_default();
            // An object missing from the next phase ends where its last action does.
            let arriving = arriving
                .object(&object.id)
                .map(|o| o.position)
                .or_else(|| actions.last().map(|&i| schedule.actions[i].to))
                .unwrap_or(object.position);
            ObjectTrack {
                object_id: object.id.clone(),
                departing: object.position,
                arriving,
                actions,
            }
        })
        .collect();

    tracks.extend(
        arriving
            .objects
            .iter()
            .filter(|o| !departing.contains_object(&o.id))
            .map(|o| ObjectTrack {
                object_id: o.id.clone(),
                departing: o.position,
                arriving: o.position,
                actions: Vec::new(),
            }),
    );
    tracks
}
