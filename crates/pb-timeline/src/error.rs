/// Alias for `Result<T, TimelineError>`.
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Errors raised at the boundary of the timeline crate. Compiled values are
/// trusted once built, so evaluation itself never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    /// A speed multiplier that is not a finite positive number.
    #[error("speed multiplier must be a finite number greater than zero, got {0}")]
    InvalidSpeed(f64),

    /// Text that does not name one of the playback speed presets.
    #[error("unknown playback speed \"{0}\" (expected 0.5, 1, 1.5, or 2)")]
    UnknownSpeed(String),

    /// A phase index with no transition leaving it.
    #[error("phase {index} has no transition (play has {transitions} transitions)")]
    PhaseOutOfRange {
        /// The requested phase index.
        index: usize,
        /// Number of compiled transitions.
        transitions: usize,
    },
}
