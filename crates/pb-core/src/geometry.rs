use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the normalized court. Every position lives in
/// `[0, COURT_SIZE] x [0, COURT_SIZE]`, independent of on-screen size.
pub const COURT_SIZE: f64 = 1000.0;

/// A point in normalized court space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation from `self` toward `to`. `t` is clamped to `[0, 1]`
    /// and both endpoints are reproduced exactly.
    pub fn lerp(self, to: Point, t: f64) -> Point {
        if t.is_nan() || t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return to;
        }
        Point {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }

    /// Clamp both coordinates into the normalized court.
    pub fn clamped(self) -> Point {
        Point {
            x: self.x.clamp(0.0, COURT_SIZE),
            y: self.y.clamp(0.0, COURT_SIZE),
        }
    }

    /// True if the point lies inside the normalized court (edges included).
    pub fn is_on_court(self) -> bool {
        (0.0..=COURT_SIZE).contains(&self.x) && (0.0..=COURT_SIZE).contains(&self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
