//! Canned play documents and the load fallback.
//!
//! Templates seed or reset the working document. Each one validates.

use tracing::warn;

use crate::action::{ActionKind, PlayAction, Trigger};
use crate::document::{BallOwner, BasketballPlayDocument, CourtTemplate, Phase};
use crate::geometry::Point;
use crate::object::{ObjectKind, PlayObject};
use crate::validate::validate;

/// Ids of every shipped template, in display order.
pub fn ids() -> &'static [&'static str] {
    &["empty", "pick_and_roll", "horns_flare"]
}

/// Look up a template by id.
pub fn by_id(id: &str) -> Option<BasketballPlayDocument> {
    match id {
        "empty" => Some(BasketballPlayDocument::empty()),
        "pick_and_roll" => Some(pick_and_roll()),
        "horns_flare" => Some(horns_flare()),
        _ => None,
    }
}

/// Validate a loaded value, substituting the empty document if it fails so
/// that the editor always has something renderable.
pub fn load_or_empty(candidate: &serde_json::Value) -> BasketballPlayDocument {
    match validate(candidate) {
        Ok(document) => document,
        Err(e) => {
            warn!(error = %e, "play document failed validation, substituting empty play");
            BasketballPlayDocument::empty()
        }
    }
}

fn offense(id: &str, label: &str, x: f64, y: f64) -> PlayObject {
    PlayObject::new(id, ObjectKind::OffensePlayer, Point::new(x, y)).with_label(label)
}

fn defense(id: &str, label: &str, x: f64, y: f64) -> PlayObject {
    PlayObject::new(id, ObjectKind::DefensePlayer, Point::new(x, y)).with_label(label)
}

fn phase(id: &str, name: &str, objects: Vec<PlayObject>, actions: Vec<PlayAction>) -> Phase {
    let mut phase = Phase::with_id(id, name);
    phase.objects = objects;
    phase.actions = actions;
    phase
}

fn pick_and_roll() -> BasketballPlayDocument {
    let mut setup = phase(
        "pnr-1",
        "Set the screen",
        vec![
            offense("P1", "1", 500.0, 760.0),
            offense("P5", "5", 620.0, 560.0),
            offense("P2", "2", 180.0, 520.0),
            defense("X1", "x1", 500.0, 700.0),
        ],
        vec![
            PlayAction::new("pnr-a1", ActionKind::Screen, Point::new(620.0, 560.0), Point::new(545.0, 700.0))
                .from_object("P5")
                .with_duration_ms(700),
            PlayAction::new("pnr-a2", ActionKind::Dribble, Point::new(500.0, 760.0), Point::new(660.0, 620.0))
                .from_object("P1")
                .with_duration_ms(900),
            PlayAction::new("pnr-a3", ActionKind::Cut, Point::new(545.0, 700.0), Point::new(520.0, 360.0))
                .from_object("P5")
                .with_trigger(Trigger::WithPrevious)
                .with_duration_ms(900),
        ],
    );
    setup.ball_owner_object_id = BallOwner::Owner("P1".into());

    let roll = phase(
        "pnr-2",
        "Hit the roller",
        vec![
            offense("P1", "1", 660.0, 620.0),
            offense("P5", "5", 520.0, 360.0),
            offense("P2", "2", 180.0, 520.0),
            defense("X1", "x1", 500.0, 700.0),
        ],
        vec![
            PlayAction::new("pnr-a4", ActionKind::Pass, Point::new(660.0, 620.0), Point::new(520.0, 360.0))
                .from_object("P1")
                .to_object("P5")
                .with_duration_ms(500),
        ],
    );

    let finish = phase(
        "pnr-3",
        "Finish",
        vec![
            offense("P1", "1", 660.0, 620.0),
            offense("P5", "5", 520.0, 360.0),
            offense("P2", "2", 180.0, 520.0),
            defense("X1", "x1", 500.0, 700.0),
        ],
        vec![
            PlayAction::new("pnr-a5", ActionKind::Shot, Point::new(520.0, 360.0), Point::new(500.0, 120.0))
                .from_object("P5")
                .with_duration_ms(600),
        ],
    );

    BasketballPlayDocument::new(CourtTemplate::HalfCourt, vec![setup, roll, finish])
}

fn horns_flare() -> BasketballPlayDocument {
    let mut entry = phase(
        "horns-1",
        "Horns entry",
        vec![
            offense("P1", "1", 500.0, 780.0),
            offense("P4", "4", 380.0, 540.0),
            offense("P5", "5", 620.0, 540.0),
            offense("P2", "2", 120.0, 300.0),
            offense("P3", "3", 880.0, 300.0),
        ],
        vec![
            PlayAction::new("horns-a1", ActionKind::Pass, Point::new(500.0, 780.0), Point::new(380.0, 540.0))
                .from_object("P1")
                .to_object("P4")
                .with_duration_ms(600),
            PlayAction::new("horns-a2", ActionKind::Screen, Point::new(620.0, 540.0), Point::new(800.0, 420.0))
                .from_object("P5")
                .with_trigger(Trigger::WithPrevious)
                .with_duration_ms(800),
            PlayAction::new("horns-a3", ActionKind::Cut, Point::new(880.0, 300.0), Point::new(900.0, 520.0))
                .from_object("P3")
                .with_duration_ms(700),
        ],
    );
    entry.ball_owner_object_id = BallOwner::Owner("P1".into());

    let flare = phase(
        "horns-2",
        "Skip to the flare",
        vec![
            offense("P1", "1", 500.0, 780.0),
            offense("P4", "4", 380.0, 540.0),
            offense("P5", "5", 800.0, 420.0),
            offense("P2", "2", 120.0, 300.0),
            offense("P3", "3", 900.0, 520.0),
        ],
        vec![
            PlayAction::new("horns-a4", ActionKind::Pass, Point::new(380.0, 540.0), Point::new(900.0, 520.0))
                .from_object("P4")
                .to_object("P3")
                .with_duration_ms(700),
        ],
    );

    BasketballPlayDocument::new(CourtTemplate::HalfCourt, vec![entry, flare])
}
