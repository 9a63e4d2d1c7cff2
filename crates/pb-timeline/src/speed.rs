use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{TimelineError, TimelineResult};

/// A playback rate. Always finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SpeedMultiplier(f64);

impl SpeedMultiplier {
    /// Normal speed.
    pub const NORMAL: SpeedMultiplier = SpeedMultiplier(1.0);

    /// Check and wrap a raw multiplier.
    pub fn new(value: f64) -> TimelineResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(TimelineError::InvalidSpeed(value))
        }
    }

    /// The raw multiplier.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Wall-clock duration of an action that takes `duration_ms` at 1x.
    pub fn scale(self, duration_ms: u32) -> f64 {
        f64::from(duration_ms) / self.0
    }
}

impl Default for SpeedMultiplier {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// The speeds offered by the player controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackSpeed {
    /// 0.5x
    Half,
    /// 1x
    #[default]
    Normal,
    /// 1.5x
    OneAndHalf,
    /// 2x
    Double,
}

impl PlaybackSpeed {
    /// Every preset, slowest first.
    pub const ALL: [PlaybackSpeed; 4] = [Self::Half, Self::Normal, Self::OneAndHalf, Self::Double];

    /// The multiplier for this preset.
    pub fn multiplier(self) -> SpeedMultiplier {
        SpeedMultiplier(match self {
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::OneAndHalf => 1.5,
            Self::Double => 2.0,
        })
    }
}

impl From<PlaybackSpeed> for SpeedMultiplier {
    fn from(speed: PlaybackSpeed) -> Self {
        speed.multiplier()
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.multiplier(), f)
    }
}

impl FromStr for PlaybackSpeed {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('x').unwrap_or(trimmed);
        match number {
            "0.5" | ".5" => Ok(Self::Half),
            "1" | "1.0" => Ok(Self::Normal),
            "1.5" => Ok(Self::OneAndHalf),
            "2" | "2.0" => Ok(Self::Double),
            _ => Err(TimelineError::UnknownSpeed(s.to_string())),
        }
    }
}
