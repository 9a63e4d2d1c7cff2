//! Evaluate a compiled transition at one instant.

use std::collections::BTreeMap;

use pb_core::{ObjectId, Point};
use serde::Serialize;

use crate::compiler::{ObjectTrack, Transition};
use crate::ownership::owner_at;
use crate::schedule::Schedule;

/// Everything a renderer needs to draw one instant of playback.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Position of every object present in either adjacent phase.
    pub positions: BTreeMap<ObjectId, Point>,
    /// Who holds the ball, if anyone.
    pub ball_owner_object_id: Option<ObjectId>,
}

impl Frame {
    /// Position of one object.
    pub fn position(&self, id: &ObjectId) -> Option<Point> {
        self.positions.get(id).copied()
    }
}

impl Transition {
    /// Shorthand for [`transition_frame`].
    pub fn frame_at(&self, elapsed_ms: f64) -> Frame {
        transition_frame(self, elapsed_ms)
    }
}

/// Positions and ball owner at `elapsed_ms` into `transition`.
///
/// `elapsed_ms` is clamped to `[0, total_duration_ms]`; NaN reads as zero.
pub fn transition_frame(transition: &Transition, elapsed_ms: f64) -> Frame {
    let total = transition.total_duration_ms();
    let elapsed = if elapsed_ms.is_nan() {
        0.0
    } else {
        elapsed_ms.clamp(0.0, total)
    };

    let positions = transition
        .tracks
        .iter()
        .map(|track| {
            let at = track_position(track, &transition.schedule, elapsed);
            (track.object_id.clone(), at)
        })
        .collect();

    let ball_owner_object_id = owner_at(
        transition.start_owner.as_ref(),
        transition.ownership_flip.iter(),
        elapsed,
    )
    .cloned();

    Frame {
        positions,
        ball_owner_object_id,
    }
}

fn track_position(track: &ObjectTrack, schedule: &Schedule, elapsed: f64) -> Point {
    let actions: Vec<_> = track
        .actions
        .iter()
        .filter_map(|&i| schedule.actions.get(i))
        .collect();

    if actions.is_empty() {
        // Repositioned between phases without an action: glide over the whole transition.
        let total = schedule.total_duration_ms;
        if total <= 0.0 {
            return track.departing;
        }
        return track.departing.lerp(track.arriving, elapsed / total);
    }

    let first_start = actions.iter().map(|a| a.start_ms).fold(f64::INFINITY, f64::min);
    let last_end = actions.iter().map(|a| a.end_ms).fold(f64::NEG_INFINITY, f64::max);
    if elapsed <= first_start {
        return track.departing;
    }
    if elapsed >= last_end {
        return track.arriving;
    }

    // Later actions in the list win overlaps.
    if let Some(active) = actions.iter().rev().find(|a| a.contains(elapsed)) {
        return active.position_at(elapsed);
    }

    // Between actions: rest where the most recently finished one ended.
    actions
        .iter()
        .filter(|a| a.end_ms < elapsed)
        .max_by(|a, b| a.end_ms.total_cmp(&b.end_ms))
        .map_or(track.departing, |a| a.to)
}

#[cfg(test)]
mod tests {
    use pb_core::{
        ActionKind, BallOwner, BasketballPlayDocument, CourtTemplate, ObjectKind, Phase, PlayAction,
        PlayObject, Trigger,
    };

    use super::*;
    use crate::compiler::compile_play_playback;
    use crate::speed::PlaybackSpeed;

    fn player(id: &str, x: f64, y: f64) -> PlayObject {
        PlayObject::new(id, ObjectKind::OffensePlayer, Point::new(x, y))
    }

    fn phase(id: &str, objects: Vec<PlayObject>, actions: Vec<PlayAction>) -> Phase {
        let mut phase = Phase::with_id(id, id);
        phase.objects = objects;
        phase.actions = actions;
        phase
    }

    fn transition(first: Phase, second: Phase) -> Transition {
        let doc = BasketballPlayDocument::new(CourtTemplate::HalfCourt, vec![first, second]);
        compile_play_playback(&doc, PlaybackSpeed::Normal)
            .transitions
            .remove(0)
    }

    fn pos(frame: &Frame, id: &str) -> Point {
        frame.position(&ObjectId::new(id)).unwrap()
    }

    fn cut(id: &str, object: &str, from: Point, to: Point, ms: u32) -> PlayAction {
        PlayAction::new(id, ActionKind::Cut, from, to)
            .from_object(object)
            .with_duration_ms(ms)
    }

    #[test]
    fn pass_moves_possession_at_its_end() {
        let objects = || vec![player("P1", 100.0, 100.0), player("P2", 300.0, 100.0)];
        let mut first = phase(
            "p1",
            objects(),
            vec![
                PlayAction::new("a1", ActionKind::Pass, Point::new(100.0, 100.0), Point::new(300.0, 100.0))
                    .from_object("P1")
                    .to_object("P2")
                    .with_duration_ms(500),
            ],
        );
        first.ball_owner_object_id = BallOwner::Owner("P1".into());
        let t = transition(first, phase("p2", objects(), vec![]));

        assert_eq!(t.frame_at(400.0).ball_owner_object_id.unwrap(), "P1");
        assert_eq!(t.frame_at(500.0).ball_owner_object_id.unwrap(), "P2");
        assert_eq!(t.frame_at(600.0).ball_owner_object_id.unwrap(), "P2");
    }

    #[test]
    fn source_object_follows_its_path() {
        let t = transition(
            phase(
                "p1",
                vec![player("P1", 0.0, 0.0)],
                vec![cut("c1", "P1", Point::new(0.0, 0.0), Point::new(400.0, 0.0), 400)],
            ),
            phase("p2", vec![player("P1", 400.0, 0.0)], vec![]),
        );
        assert_eq!(pos(&t.frame_at(0.0), "P1"), Point::new(0.0, 0.0));
        assert_eq!(pos(&t.frame_at(100.0), "P1"), Point::new(100.0, 0.0));
        assert_eq!(pos(&t.frame_at(400.0), "P1"), Point::new(400.0, 0.0));
    }

    #[test]
    fn object_waits_for_its_first_action() {
        let t = transition(
            phase(
                "p1",
                vec![player("P1", 0.0, 0.0), player("P2", 500.0, 500.0)],
                vec![
                    cut("c1", "P1", Point::new(0.0, 0.0), Point::new(100.0, 0.0), 300),
                    cut("c2", "P2", Point::new(500.0, 500.0), Point::new(500.0, 900.0), 400),
                ],
            ),
            phase(
                "p2",
                vec![player("P1", 100.0, 0.0), player("P2", 500.0, 900.0)],
                vec![],
            ),
        );
        let frame = t.frame_at(200.0);
        assert_eq!(pos(&frame, "P2"), Point::new(500.0, 500.0));
        let frame = t.frame_at(500.0);
        assert_eq!(pos(&frame, "P1"), Point::new(100.0, 0.0));
        assert_eq!(pos(&frame, "P2"), Point::new(500.0, 700.0));
    }

    #[test]
    fn later_action_wins_overlap() {
        let t = transition(
            phase(
                "p1",
                vec![player("P1", 0.0, 0.0)],
                vec![
                    cut("c1", "P1", Point::new(0.0, 0.0), Point::new(400.0, 0.0), 400),
                    cut("c2", "P1", Point::new(0.0, 0.0), Point::new(0.0, 400.0), 400)
                        .with_trigger(Trigger::WithPrevious),
                ],
            ),
            phase("p2", vec![player("P1", 0.0, 400.0)], vec![]),
        );
        assert_eq!(pos(&t.frame_at(200.0), "P1"), Point::new(0.0, 200.0));
    }

    #[test]
    fn object_rests_between_its_actions() {
        let t = transition(
            phase(
                "p1",
                vec![player("P1", 0.0, 0.0), player("P2", 900.0, 900.0)],
                vec![
                    cut("c1", "P1", Point::new(0.0, 0.0), Point::new(100.0, 0.0), 200),
                    cut("c2", "P2", Point::new(900.0, 900.0), Point::new(900.0, 500.0), 300),
                    cut("c3", "P1", Point::new(100.0, 0.0), Point::new(100.0, 100.0), 200),
                ],
            ),
            phase(
                "p2",
                vec![player("P1", 100.0, 100.0), player("P2", 900.0, 500.0)],
                vec![],
            ),
        );
        assert_eq!(pos(&t.frame_at(350.0), "P1"), Point::new(100.0, 0.0));
        assert_eq!(pos(&t.frame_at(600.0), "P1"), Point::new(100.0, 50.0));
    }

    #[test]
    fn elapsed_is_clamped() {
        let t = transition(
            phase(
                "p1",
                vec![player("P1", 0.0, 0.0)],
                vec![cut("c1", "P1", Point::new(0.0, 0.0), Point::new(400.0, 0.0), 400)],
            ),
            phase("p2", vec![player("P1", 400.0, 0.0)], vec![]),
        );
        assert_eq!(t.frame_at(-50.0), t.frame_at(0.0));
        assert_eq!(t.frame_at(10_000.0), t.frame_at(400.0));
        assert_eq!(t.frame_at(f64::NAN), t.frame_at(0.0));
    }

    #[test]
    fn objects_of_one_phase_only() {
        let t = transition(
            phase(
                "p1",
                vec![player("P1", 0.0, 0.0), player("leaving", 50.0, 50.0)],
                vec![cut("c1", "P1", Point::new(0.0, 0.0), Point::new(400.0, 0.0), 400)],
            ),
            phase(
                "p2",
                vec![player("P1", 400.0, 0.0), player("arriving", 700.0, 700.0)],
                vec![],
            ),
        );
        for at in [0.0, 200.0, 400.0] {
            let frame = t.frame_at(at);
            assert_eq!(pos(&frame, "leaving"), Point::new(50.0, 50.0));
            assert_eq!(pos(&frame, "arriving"), Point::new(700.0, 700.0));
        }
        assert_eq!(t.frame_at(0.0).positions.len(), 3);
    }

    #[test]
    fn repositioned_object_without_action_glides() {
        let t = transition(
            phase(
                "p1",
                vec![player("P1", 0.0, 0.0), player("P2", 200.0, 0.0)],
                vec![cut("c1", "P1", Point::new(0.0, 0.0), Point::new(400.0, 0.0), 400)],
            ),
            phase(
                "p2",
                vec![player("P1", 400.0, 0.0), player("P2", 200.0, 400.0)],
                vec![],
            ),
        );
        assert_eq!(pos(&t.frame_at(0.0), "P2"), Point::new(200.0, 0.0));
        assert_eq!(pos(&t.frame_at(100.0), "P2"), Point::new(200.0, 100.0));
        assert_eq!(pos(&t.frame_at(400.0), "P2"), Point::new(200.0, 400.0));
    }

    #[test]
    fn dwell_transition_shows_departing_phase() {
        let t = transition(
            phase("p1", vec![player("P1", 0.0, 0.0)], vec![]),
            phase("p2", vec![player("P1", 500.0, 0.0)], vec![]),
        );
        assert_eq!(t.total_duration_ms(), 0.0);
        assert_eq!(pos(&t.frame_at(0.0), "P1"), Point::new(0.0, 0.0));
        assert_eq!(pos(&t.frame_at(250.0), "P1"), Point::new(0.0, 0.0));
    }

    #[test]
    fn frame_serializes_in_id_order() {
        let t = transition(
            phase("p1", vec![player("Z", 1.0, 2.0), player("A", 3.0, 4.0)], vec![]),
            phase("p2", vec![], vec![]),
        );
        let json = serde_json::to_string(&t.frame_at(0.0)).unwrap();
        assert_eq!(
            json,
            r#"{"positions":{"A":{"x":3.0,"y":4.0},"Z":{"x":1.0,"y":2.0}},"ballOwnerObjectId":"Z"}"#
        );
    }
}
