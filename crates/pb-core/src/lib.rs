//! Core types for Playbook: basketball play diagrams.
//!
//! A [`BasketballPlayDocument`] is an ordered list of [`Phase`]s. Each phase
//! records where every object stands and which actions lead out of it toward
//! the next phase. This crate defines that model, validates candidate
//! documents, edits phases copy-on-write, and reports advisory warnings. It
//! knows nothing about time; `pb-timeline` compiles documents into
//! animations.

/// Play actions (pass, cut, screen, ...) and their timing.
pub mod action;
/// Timing parameters shared by the editor and the timeline compiler.
pub mod config;
/// The document, phase, and ball-owner types.
pub mod document;
/// Copy-on-write editing operations.
pub mod edit;
/// Error types used throughout the crate.
pub mod error;
/// Normalized court coordinates.
pub mod geometry;
/// String identifiers for phases, objects, and actions.
pub mod id;
/// Objects placed on the court.
pub mod object;
/// Canned documents and the load fallback.
pub mod template;
/// Structural validation.
pub mod validate;
/// Non-fatal advisories.
pub mod warnings;

/// Re-export action types.
pub use action::{ActionKind, Animation, PlayAction, Trigger};
/// Re-export configuration.
pub use config::PlaybackConfig;
/// Re-export document types.
pub use document::{BallOwner, BasketballPlayDocument, CourtTemplate, Phase};
/// Re-export error types.
pub use error::{PlayError, PlayResult, ValidationError};
/// Re-export geometry.
pub use geometry::{COURT_SIZE, Point};
/// Re-export identifiers.
pub use id::{ActionId, ObjectId, PhaseId};
/// Re-export object types.
pub use object::{ObjectKind, PlayObject};
/// Re-export validation entry points.
pub use validate::{parse_document, validate, validate_document};
/// Re-export warning analysis.
pub use warnings::{ActionWarning, document_warnings, phase_action_warnings};
