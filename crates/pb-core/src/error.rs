use crate::id::{ActionId, ObjectId, PhaseId};

/// Alias for `Result<T, PlayError>`.
pub type PlayResult<T> = Result<T, PlayError>;

/// Reasons a candidate document is rejected. The `Display` text is the
/// error string reported to callers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The candidate does not have the document shape (wrong types, unknown
    /// enum values, missing required keys).
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The document has no phases.
    #[error("document must contain at least one phase")]
    EmptyPhases,

    /// Two phases share an id.
    #[error("duplicate phase id \"{0}\"")]
    DuplicatePhaseId(PhaseId),

    /// Two objects in one phase share an id.
    #[error("phase \"{phase}\": duplicate object id \"{object}\"")]
    DuplicateObjectId {
        /// The phase containing the duplicate.
        phase: PhaseId,
        /// The repeated object id.
        object: ObjectId,
    },

    /// Two actions in one phase share an id.
    #[error("phase \"{phase}\": duplicate action id \"{action}\"")]
    DuplicateActionId {
        /// The phase containing the duplicate.
        phase: PhaseId,
        /// The repeated action id.
        action: ActionId,
    },

    /// An action points at an object that is not in its phase.
    #[error(
        "phase \"{phase}\": action \"{action}\" {field} references unknown object \"{object}\""
    )]
    DanglingActionReference {
        /// The phase containing the action.
        phase: PhaseId,
        /// The offending action.
        action: ActionId,
        /// Which reference dangles (`fromObjectId` or `toObjectId`).
        field: &'static str,
        /// The id that did not resolve.
        object: ObjectId,
    },

    /// The explicit ball owner is not an object in its phase.
    #[error("phase \"{phase}\": ballOwnerObjectId references unknown object \"{object}\"")]
    DanglingBallOwner {
        /// The phase whose owner dangles.
        phase: PhaseId,
        /// The id that did not resolve.
        object: ObjectId,
    },
}

/// Errors that can occur when loading or editing a play document.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The document (or the result of an edit) is not well-formed.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The input is not JSON at all.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No phase exists at the given index.
    #[error("phase index {index} out of range (document has {len} phases)")]
    PhaseOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of phases in the document.
        len: usize,
    },

    /// The requested object does not exist in the phase.
    #[error("object not found: \"{0}\"")]
    ObjectNotFound(ObjectId),

    /// The requested action does not exist in the phase.
    #[error("action not found: \"{0}\"")]
    ActionNotFound(ActionId),

    /// A document must keep at least one phase.
    #[error("cannot remove the last remaining phase")]
    LastPhase,
}
