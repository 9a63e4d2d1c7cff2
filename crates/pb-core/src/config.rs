/// Shortest duration an action may animate for, at 1x speed.
pub const MIN_ACTION_DURATION_MS: u32 = 120;

/// Duration given to actions that do not specify one.
pub const DEFAULT_ACTION_DURATION_MS: u32 = 800;

/// Timing parameters for compiling a play into a timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    /// Floor applied to every action duration before speed scaling.
    pub min_action_duration_ms: u32,
    /// Duration used for actions that leave `durationMs` out.
    pub default_action_duration_ms: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            min_action_duration_ms: MIN_ACTION_DURATION_MS,
            default_action_duration_ms: DEFAULT_ACTION_DURATION_MS,
        }
    }
}

impl PlaybackConfig {
    /// Set the duration floor.
    pub fn with_min_action_duration_ms(mut self, ms: u32) -> Self {
        self.min_action_duration_ms = ms;
        self
    }

    /// Set the duration used when an action has none.
    pub fn with_default_action_duration_ms(mut self, ms: u32) -> Self {
        self.default_action_duration_ms = ms;
        self
    }

    /// Resolve an action's nominal duration: fill in the default when it
    /// has none, then apply the floor.
    pub fn effective_duration_ms(&self, duration_ms: Option<u32>) -> u32 {
        duration_ms
            .unwrap_or(self.default_action_duration_ms)
            .max(self.min_action_duration_ms)
    }
}
