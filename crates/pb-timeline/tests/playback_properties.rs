//! Property tests for play playback compilation.
use pb_core::{
    ActionKind, BasketballPlayDocument, CourtTemplate, ObjectKind, Phase, PlayAction, PlayObject,
    Point, Trigger,
};
use pb_timeline::{PlaybackSpeed, compile_play_playback};
use proptest::prelude::*;
use proptest::test_runner::Config;

const SLOTS: usize = 4;

#[derive(Debug, Clone)]
struct ActionSpec {
    source: usize,
    receiver: Option<usize>,
    kind: ActionKind,
    concurrent: bool,
    duration_ms: u32,
    to: (f64, f64),
}

#[derive(Debug, Clone)]
struct PhaseSpec {
    objects: Vec<Option<(f64, f64)>>,
    actions: Vec<ActionSpec>,
}

fn coord() -> impl Strategy<Value = (f64, f64)> {
    (0.0..1000.0_f64, 0.0..1000.0_f64)
}

fn kind() -> impl Strategy<Value = ActionKind> {
    prop_oneof![
        Just(ActionKind::Pass),
        Just(ActionKind::Dribble),
        Just(ActionKind::Cut),
        Just(ActionKind::Screen),
        Just(ActionKind::Handoff),
        Just(ActionKind::Shot),
    ]
}

fn action_spec() -> impl Strategy<Value = ActionSpec> {
    (
        0..SLOTS,
        proptest::option::of(0..SLOTS),
        kind(),
        any::<bool>(),
        0_u32..2000,
        coord(),
    )
        .prop_map(|(source, receiver, kind, concurrent, duration_ms, to)| ActionSpec {
            source,
            receiver,
            kind,
            concurrent,
            duration_ms,
            to,
        })
}

fn phase_spec() -> impl Strategy<Value = PhaseSpec> {
    (
        proptest::collection::vec(proptest::option::weighted(0.8, coord()), SLOTS),
        proptest::collection::vec(action_spec(), 0..6),
    )
        .prop_map(|(objects, actions)| PhaseSpec { objects, actions })
}

fn document() -> impl Strategy<Value = BasketballPlayDocument> {
    proptest::collection::vec(phase_spec(), 1..5).prop_map(build)
}

/// Turn the raw specs into a document that passes validation: actions only
/// reference objects present in their phase.
fn build(specs: Vec<PhaseSpec>) -> BasketballPlayDocument {
    let phases = specs
        .into_iter()
        .enumerate()
        .map(|(p, spec)| {
            let mut phase = Phase::with_id(format!("p{p}"), format!("Phase {p}"));
            for (slot, at) in spec.objects.iter().enumerate() {
                if let Some((x, y)) = at {
                    phase.objects.push(PlayObject::new(
                        format!("P{slot}"),
                        ObjectKind::OffensePlayer,
                        Point::new(*x, *y),
                    ));
                }
            }
            for (n, a) in spec.actions.iter().enumerate() {
                let from = spec.objects[a.source]
                    .map(|(x, y)| Point::new(x, y))
                    .unwrap_or_default();
                let mut action = PlayAction::new(
                    format!("a{p}-{n}"),
                    a.kind,
                    from,
                    Point::new(a.to.0, a.to.1),
                )
                .with_duration_ms(a.duration_ms);
                if a.concurrent {
                    action = action.with_trigger(Trigger::WithPrevious);
                }
                if spec.objects[a.source].is_some() {
                    action = action.from_object(format!("P{}", a.source));
                }
                if let Some(r) = a.receiver.filter(|&r| spec.objects[r].is_some()) {
                    action = action.to_object(format!("P{r}"));
                }
                phase.actions.push(action);
            }
            phase
        })
        .collect();
    BasketballPlayDocument::new(CourtTemplate::HalfCourt, phases)
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn generated_documents_validate(doc in document()) {
        prop_assert!(pb_core::validate_document(&doc).is_ok());
    }

    #[test]
    fn one_transition_per_adjacent_pair(doc in document()) {
        for speed in PlaybackSpeed::ALL {
            let compiled = compile_play_playback(&doc, speed);
            prop_assert_eq!(compiled.transitions.len(), doc.phases.len() - 1);
            prop_assert_eq!(compiled.phase_start_owners.len(), doc.phases.len());
            prop_assert!(compiled.transitions.iter().all(|t| t.total_duration_ms() >= 0.0));
        }
    }

    #[test]
    fn compiling_is_deterministic(doc in document()) {
        let a = compile_play_playback(&doc, PlaybackSpeed::OneAndHalf);
        let b = compile_play_playback(&doc, PlaybackSpeed::OneAndHalf);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn first_frame_reproduces_departing_phase(doc in document()) {
        let compiled = compile_play_playback(&doc, PlaybackSpeed::Normal);
        for (i, t) in compiled.transitions.iter().enumerate() {
            let frame = t.frame_at(0.0);
            for object in &doc.phases[i].objects {
                prop_assert_eq!(frame.position(&object.id), Some(object.position));
            }
            prop_assert_eq!(frame.ball_owner_object_id.as_ref(), compiled.phase_start_owners[i].as_ref());
        }
    }

    #[test]
    fn last_frame_reproduces_arriving_phase(doc in document()) {
        let compiled = compile_play_playback(&doc, PlaybackSpeed::Normal);
        for (i, t) in compiled.transitions.iter().enumerate() {
            let total = t.total_duration_ms();
            if total <= 0.0 {
                continue;
            }
            let frame = t.frame_at(total);
            for object in &doc.phases[i + 1].objects {
                prop_assert_eq!(frame.position(&object.id), Some(object.position));
            }
            prop_assert_eq!(frame.ball_owner_object_id.as_ref(), compiled.phase_start_owners[i + 1].as_ref());
        }
    }

    #[test]
    fn doubling_speed_halves_the_clock(doc in document(), fraction in 0.0..=1.0_f64) {
        let normal = compile_play_playback(&doc, PlaybackSpeed::Normal);
        let double = compile_play_playback(&doc, PlaybackSpeed::Double);
        for (slow, fast) in normal.transitions.iter().zip(&double.transitions) {
            prop_assert_eq!(slow.total_duration_ms(), 2.0 * fast.total_duration_ms());
            for (a, b) in slow.schedule.actions.iter().zip(&fast.schedule.actions) {
                prop_assert_eq!(a.duration_ms(), 2.0 * b.duration_ms());
            }
            let t = slow.total_duration_ms() * fraction;
            prop_assert_eq!(slow.frame_at(t), fast.frame_at(t / 2.0));
        }
    }

    #[test]
    fn frames_are_idempotent(doc in document(), fraction in 0.0..=1.0_f64) {
        let compiled = compile_play_playback(&doc, PlaybackSpeed::Half);
        for t in &compiled.transitions {
            let at = t.total_duration_ms() * fraction;
            prop_assert_eq!(t.frame_at(at), t.frame_at(at));
        }
    }
}
