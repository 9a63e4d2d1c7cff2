//! Copy-on-write editing of phases and documents.
//!
//! Every operation borrows the current value and returns a new one, leaving
//! the original untouched on both success and failure. The editor swaps whole
//! phases into the document with [`BasketballPlayDocument::with_phase_replaced`].

use crate::action::PlayAction;
use crate::document::{BallOwner, BasketballPlayDocument, Phase};
use crate::error::{PlayError, PlayResult, ValidationError};
use crate::geometry::Point;
use crate::id::{ActionId, ObjectId};
use crate::object::PlayObject;
use crate::validate::validate_document;

impl Phase {
    // -----------------------------------------------------------------------
    // Objects
    // -----------------------------------------------------------------------

    /// Add an object. Its position is clamped onto the court.
    ///
    /// The first player added to a phase with no explicit owner becomes the
    /// ball owner. This happens once: later adds never reassign.
    pub fn with_object(&self, mut object: PlayObject) -> PlayResult<Phase> {
        if self.contains_object(&object.id) {
            return Err(ValidationError::DuplicateObjectId {
                phase: self.id.clone(),
                object: object.id,
            }
            .into());
        }

        let mut next = self.clone();
        object.position = object.position.clamped();
        if object.kind.is_player()
            && next.ball_owner_object_id.is_inherit()
            && next.first_player().is_none()
        {
            next.ball_owner_object_id = BallOwner::Owner(object.id.clone());
        }
        next.objects.push(object);
        Ok(next)
    }

    /// Remove an object and every action that references it.
    ///
    /// If the object held the ball, the owner becomes explicitly nobody; it
    /// is never handed to another object.
    pub fn without_object(&self, id: &ObjectId) -> PlayResult<Phase> {
        if !self.contains_object(id) {
            return Err(PlayError::ObjectNotFound(id.clone()));
        }

        let mut next = self.clone();
        next.objects.retain(|o| &o.id != id);
        next.actions.retain(|a| !a.references(id));
        if next.ball_owner_object_id.owner_id() == Some(id) {
            next.ball_owner_object_id = BallOwner::None;
        }
        Ok(next)
    }

    /// Move an object to a new recorded position (clamped onto the court).
    pub fn with_object_moved(&self, id: &ObjectId, position: Point) -> PlayResult<Phase> {
        let mut next = self.clone();
        let object = next
            .objects
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| PlayError::ObjectNotFound(id.clone()))?;
        object.position = position.clamped();
        Ok(next)
    }

    /// Set the ball owner explicitly. An owner must be an object of this phase.
    pub fn with_ball_owner(&self, owner: BallOwner) -> PlayResult<Phase> {
        if let BallOwner::Owner(id) = &owner {
            if !self.contains_object(id) {
                return Err(PlayError::ObjectNotFound(id.clone()));
            }
        }
        let mut next = self.clone();
        next.ball_owner_object_id = owner;
        Ok(next)
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Append an action to the end of the execution order.
    pub fn with_action(&self, action: PlayAction) -> PlayResult<Phase> {
        if self.actions.iter().any(|a| a.id == action.id) {
            return Err(ValidationError::DuplicateActionId {
                phase: self.id.clone(),
                action: action.id,
            }
            .into());
        }
        self.check_references(&action)?;

        let mut next = self.clone();
        next.actions.push(action);
        Ok(next)
    }

    /// Replace the action with the same id, keeping its place in the order.
    pub fn with_replaced_action(&self, action: PlayAction) -> PlayResult<Phase> {
        let index = self
            .actions
            .iter()
            .position(|a| a.id == action.id)
            .ok_or_else(|| PlayError::ActionNotFound(action.id.clone()))?;
        self.check_references(&action)?;

        let mut next = self.clone();
        next.actions[index] = action;
        Ok(next)
    }

    /// Remove an action.
    pub fn without_action(&self, id: &ActionId) -> PlayResult<Phase> {
        if !self.actions.iter().any(|a| &a.id == id) {
            return Err(PlayError::ActionNotFound(id.clone()));
        }
        let mut next = self.clone();
        next.actions.retain(|a| &a.id != id);
        Ok(next)
    }

    fn check_references(&self, action: &PlayAction) -> PlayResult<()> {
        let refs = [
            ("fromObjectId", action.from_object_id.as_ref()),
            ("toObjectId", action.to_object_id.as_ref()),
        ];
        for (field, reference) in refs {
            if let Some(object) = reference {
                if !self.contains_object(object) {
                    return Err(ValidationError::DanglingActionReference {
                        phase: self.id.clone(),
                        action: action.id.clone(),
                        field,
                        object: object.clone(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    /// The phase that naturally follows this one: same objects, each moved to
    /// the end point of the last action it performs, no actions, and an
    /// inherited ball owner.
    pub fn next_snapshot(&self, name: impl Into<String>) -> Phase {
        let mut next = Phase::new(name);
        next.objects = self
            .objects
            .iter()
            .map(|object| {
                let mut moved = object.clone();
                if let Some(last) = self
                    .actions
                    .iter()
                    .rev()
                    .find(|a| a.from_object_id.as_ref() == Some(&object.id))
                {
                    moved.position = last.to.clamped();
                }
                moved
            })
            .collect();
        next
    }
}

impl BasketballPlayDocument {
    /// Swap in a new version of the phase at `index`. The resulting document
    /// must still validate.
    pub fn with_phase_replaced(&self, index: usize, phase: Phase) -> PlayResult<Self> {
        if index >= self.phases.len() {
            return Err(PlayError::PhaseOutOfRange {
                index,
                len: self.phases.len(),
            });
        }
        let mut next = self.clone();
        next.phases[index] = phase;
        validate_document(&next)?;
        Ok(next)
    }

    /// Append a snapshot of the last phase's end state as a new phase.
    pub fn with_phase_appended(&self) -> Self {
        let mut next = self.clone();
        let name = format!("Phase {}", self.phases.len() + 1);
        let phase = match self.phases.last() {
            Some(last) => last.next_snapshot(name),
            None => Phase::new(name),
        };
        next.phases.push(phase);
        next
    }

    /// Remove the phase at `index`. The last remaining phase cannot be removed.
    pub fn without_phase(&self, index: usize) -> PlayResult<Self> {
        if index >= self.phases.len() {
            return Err(PlayError::PhaseOutOfRange {
                index,
                len: self.phases.len(),
            });
        }
        if self.phases.len() == 1 {
            return Err(PlayError::LastPhase);
        }
        let mut next = self.clone();
        next.phases.remove(index);
        Ok(next)
    }
}
