//! Non-fatal advisories about a phase's actions.
//!
//! Warnings never make a document invalid and never change playback; they
//! only explain to the coach what the diagram will do.

use crate::action::ActionKind;
use crate::document::{BasketballPlayDocument, Phase};
use crate::id::ActionId;

/// An advisory attached to one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionWarning {
    /// The action the warning is about.
    pub action: ActionId,
    /// The action's kind (pass or handoff).
    pub kind: ActionKind,
}

impl std::fmt::Display for ActionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} \"{}\" has no receiver; possession stays with the current owner",
            self.kind, self.action
        )
    }
}

/// Warnings for one phase: one per pass or handoff that names a passer but
/// no receiver.
pub fn phase_action_warnings(phase: &Phase) -> Vec<ActionWarning> {
    phase
        .actions
        .iter()
        .filter(|a| a.kind.transfers_possession())
        .filter(|a| a.from_object_id.is_some() && a.to_object_id.is_none())
        .map(|a| ActionWarning {
            action: a.id.clone(),
            kind: a.kind,
        })
        .collect()
}

/// Warnings across a whole document in phase order, each paired with the
/// phase it belongs to.
pub fn document_warnings(document: &BasketballPlayDocument) -> Vec<(&Phase, ActionWarning)> {
    document
        .phases
        .iter()
        .flat_map(|phase| phase_action_warnings(phase).into_iter().map(move |w| (phase, w)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::PlayAction;
    use crate::geometry::Point;
    use crate::object::{ObjectKind, PlayObject};

    fn phase_with(actions: Vec<PlayAction>) -> Phase {
        let mut phase = Phase::with_id("p1", "Entry");
        phase.objects = vec![
            PlayObject::new("P1", ObjectKind::OffensePlayer, Point::new(500.0, 700.0)),
            PlayObject::new("P2", ObjectKind::OffensePlayer, Point::new(250.0, 500.0)),
        ];
        phase.actions = actions;
        phase
    }

    fn pass(id: &str) -> PlayAction {
        PlayAction::new(id, ActionKind::Pass, Point::new(500.0, 700.0), Point::new(250.0, 500.0))
    }

    #[test]
    fn pass_without_receiver_warns_once() {
        let phase = phase_with(vec![pass("a1").from_object("P1")]);
        let warnings = phase_action_warnings(&phase);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].to_string(),
            "pass \"a1\" has no receiver; possession stays with the current owner"
        );
    }

    #[test]
    fn pass_with_receiver_does_not_warn() {
        let phase = phase_with(vec![pass("a1").from_object("P1").to_object("P2")]);
        assert!(phase_action_warnings(&phase).is_empty());
    }

    #[test]
    fn handoff_without_receiver_warns() {
        let handoff = PlayAction::new("h1", ActionKind::Handoff, Point::default(), Point::default())
            .from_object("P1");
        let warnings = phase_action_warnings(&phase_with(vec![handoff]));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, ActionKind::Handoff);
    }

    #[test]
    fn freehand_and_non_passing_actions_are_quiet() {
        let phase = phase_with(vec![
            pass("a1"),
            PlayAction::new("c1", ActionKind::Cut, Point::default(), Point::default())
                .from_object("P2"),
            PlayAction::new("d1", ActionKind::Dribble, Point::default(), Point::default())
                .from_object("P1"),
        ]);
        assert!(phase_action_warnings(&phase).is_empty());
    }

    #[test]
    fn document_warnings_carry_their_phase() {
        let mut second = phase_with(vec![pass("a9").from_object("P2")]);
        second.id = "p2".into();
        let doc = BasketballPlayDocument::new(
            crate::document::CourtTemplate::HalfCourt,
            vec![phase_with(vec![pass("a1").from_object("P1")]), second],
        );
        let warnings = document_warnings(&doc);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].0.id, "p1");
        assert_eq!(warnings[1].0.id, "p2");
        assert_eq!(warnings[1].1.action, "a9");
    }
}
