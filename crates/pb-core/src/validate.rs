//! Structural validation of play documents.
//!
//! A document that fails here is never compiled or saved. Checks run in a
//! fixed order and stop at the first failure:
//!
//! 1. shape: integer `schemaVersion`, known `courtTemplate`, non-empty `phases`
//! 2. phase ids unique across the document
//! 3. object ids and action ids unique within each phase
//! 4. action `fromObjectId` / `toObjectId` resolve within their phase
//! 5. an explicit `ballOwnerObjectId` resolves within its phase
//!
//! Checks 3 to 5 run phase by phase in document order.

use std::collections::HashSet;

use serde::Deserialize;

use crate::document::{BallOwner, BasketballPlayDocument, Phase};
use crate::error::{PlayResult, ValidationError};

/// Validate an untyped candidate and return the typed document on success.
///
/// This is the only place an arbitrary JSON value is turned into a
/// [`BasketballPlayDocument`]; everything downstream works on typed values.
pub fn validate(candidate: &serde_json::Value) -> Result<BasketballPlayDocument, ValidationError> {
    let document = BasketballPlayDocument::deserialize(candidate)
        .map_err(|e| ValidationError::Malformed(e.to_string()))?;
    validate_document(&document)?;
    Ok(document)
}

/// Parse JSON text and validate it.
pub fn parse_document(text: &str) -> PlayResult<BasketballPlayDocument> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(validate(&value)?)
}

/// Run the semantic checks on an already typed document.
pub fn validate_document(document: &BasketballPlayDocument) -> Result<(), ValidationError> {
    if document.phases.is_empty() {
        return Err(ValidationError::EmptyPhases);
    }

    let mut phase_ids = HashSet::new();
    for phase in &document.phases {
        if !phase_ids.insert(&phase.id) {
            return Err(ValidationError::DuplicatePhaseId(phase.id.clone()));
        }
    }

    for phase in &document.phases {
        validate_phase(phase)?;
    }
    Ok(())
}

/// Checks 3 to 5 for a single phase.
pub fn validate_phase(phase: &Phase) -> Result<(), ValidationError> {
    let mut object_ids = HashSet::new();
    for object in &phase.objects {
        if !object_ids.insert(&object.id) {
            return Err(ValidationError::DuplicateObjectId {
                phase: phase.id.clone(),
                object: object.id.clone(),
            });
        }
    }

    let mut action_ids = HashSet::new();
    for action in &phase.actions {
        if !action_ids.insert(&action.id) {
            return Err(ValidationError::DuplicateActionId {
                phase: phase.id.clone(),
                action: action.id.clone(),
            });
        }
    }

    for action in &phase.actions {
        let refs = [
            ("fromObjectId", action.from_object_id.as_ref()),
            ("toObjectId", action.to_object_id.as_ref()),
        ];
        for (field, reference) in refs {
            // An absent reference is legal; only a dangling one is an error.
            if let Some(object) = reference {
                if !object_ids.contains(object) {
                    return Err(ValidationError::DanglingActionReference {
                        phase: phase.id.clone(),
                        action: action.id.clone(),
                        field,
                        object: object.clone(),
                    });
                }
            }
        }
    }

    if let BallOwner::Owner(owner) = &phase.ball_owner_object_id {
        if !object_ids.contains(owner) {
            return Err(ValidationError::DanglingBallOwner {
                phase: phase.id.clone(),
                object: owner.clone(),
            });
        }
    }

    Ok(())
}
