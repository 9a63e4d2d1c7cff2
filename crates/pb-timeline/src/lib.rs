//! Timeline compiler and playback evaluator for Playbook.
//!
//! [`compile_play_playback`] turns a validated [`pb_core::BasketballPlayDocument`]
//! into one [`Transition`] per adjacent phase pair. Each transition is a pure
//! function of elapsed time: [`transition_frame`] returns object positions and
//! the ball owner at any instant. [`PlaybackClock`] walks the transitions in
//! order for callers that drive playback from a frame loop.

/// Playback position across transitions.
pub mod clock;
/// Document to transition compilation.
pub mod compiler;
/// Error types for the timeline crate.
pub mod error;
/// Frame evaluation at an elapsed time.
pub mod frame;
/// Ball possession resolution.
pub mod ownership;
/// Action scheduling on a single time axis.
pub mod schedule;
/// Playback speed presets and multipliers.
pub mod speed;

/// Re-export of [`clock::PlaybackClock`].
pub use clock::PlaybackClock;
/// Re-exports of the compiler entry points and outputs.
pub use compiler::{
    CompiledPlayback, ObjectTrack, Transition, compile_play_playback, compile_play_playback_with,
};
/// Re-exports of [`error::TimelineError`] and [`error::TimelineResult`].
pub use error::{TimelineError, TimelineResult};
/// Re-exports of [`frame::Frame`] and [`frame::transition_frame`].
pub use frame::{Frame, transition_frame};
/// Re-export of [`ownership::OwnershipFlip`].
pub use ownership::OwnershipFlip;
/// Re-exports of [`schedule::Schedule`], [`schedule::ScheduledAction`], and [`schedule::schedule_actions`].
pub use schedule::{Schedule, ScheduledAction, schedule_actions};
/// Re-exports of [`speed::PlaybackSpeed`] and [`speed::SpeedMultiplier`].
pub use speed::{PlaybackSpeed, SpeedMultiplier};
