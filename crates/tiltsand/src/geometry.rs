//! Gravity direction and the perpendicular used for spillage.

use std::fmt;

use crate::error::ConfigError;

/// Unit direction elements are pulled toward each step.
///
/// Each component is -1, 0 or 1. `(0, 0)` is legal and leaves every
/// gravity-driven rule without a move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Gravity {
    dx: i32,
    dy: i32,
}

impl Default for Gravity {
    fn default() -> Self {
        Self::DOWN
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}

/// Cardinal candidates for tilt quantization; earlier entries win ties.
const CARDINALS: [Gravity; 4] = [Gravity::DOWN, Gravity::UP, Gravity::RIGHT, Gravity::LEFT];

impl Gravity {
    pub const ZERO: Gravity = Gravity { dx: 0, dy: 0 };
    pub const DOWN: Gravity = Gravity { dx: 0, dy: 1 };
    pub const UP: Gravity = Gravity { dx: 0, dy: -1 };
    pub const RIGHT: Gravity = Gravity { dx: 1, dy: 0 };
    pub const LEFT: Gravity = Gravity { dx: -1, dy: 0 };

    /// Build a gravity from any integer pair, keeping only each component's sign.
    #[must_use]
    pub fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }

    #[must_use]
    pub fn dx(self) -> i32 {
        self.dx
    }

    #[must_use]
    pub fn dy(self) -> i32 {
        self.dy
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Perpendicular direction used for lateral spillage and water dispersion.
    ///
    /// Fixed lookup; the sign per quadrant is part of the simulated behavior.
    #[must_use]
    pub fn perpendicular(self) -> (i32, i32) {
        perpendicular(self.dx, self.dy)
    }

    /// Next of the eight directions, stepping down → down-right → right → … → down-left.
    #[must_use]
    pub fn rotated(self) -> Self {
        let (dx, dy) = match (self.dx, self.dy) {
            (0, 1) => (1, 1),
            (1, 1) => (1, 0),
            (1, 0) => (1, -1),
            (1, -1) => (0, -1),
            (0, -1) => (-1, -1),
            (-1, -1) => (-1, 0),
            (-1, 0) => (-1, 1),
            (-1, 1) => (0, 1),
            _ => (0, 0),
        };
        Self { dx, dy }
    }

    /// Quantize an accelerometer reading to the closest cardinal direction.
    ///
    /// Only the in-plane components matter. A zero or non-finite reading
    /// falls back to [`Gravity::DOWN`].
    #[must_use]
    pub fn from_acceleration(ax: f32, ay: f32) -> Self {
        let norm = ax.hypot(ay);
        if !norm.is_finite() || norm == 0.0 {
            return Self::DOWN;
        }
        let (ux, uy) = (ax / norm, ay / norm);

        let mut best = Self::DOWN;
        let mut best_dot = f32::NEG_INFINITY;
        for candidate in CARDINALS {
            let dot = ux * candidate.dx as f32 + uy * candidate.dy as f32;
            if dot > best_dot {
                best_dot = dot;
                best = candidate;
            }
        }
        best
    }
}

impl TryFrom<(i32, i32)> for Gravity {
    type Error = ConfigError;

    fn try_from((dx, dy): (i32, i32)) -> Result<Self, Self::Error> {
        if (-1..=1).contains(&dx) && (-1..=1).contains(&dy) {
            Ok(Self { dx, dy })
        } else {
            Err(ConfigError::InvalidGravity { dx, dy })
        }
    }
}

/// Perpendicular of `(x, y)` with components in {-1, 0, 1}.
#[must_use]
#[allow(clippy::match_same_arms)]
pub fn perpendicular(x: i32, y: i32) -> (i32, i32) {
    match (x, y) {
        (0, 0) => (0, 0),
        (0, y) => (y, 0),
        (x, 0) => (0, -x),
        (x, y) if x > 0 && y > 0 => (y, -x),
        (x, y) if x < 0 && y > 0 => (y, -x),
        (x, y) if x < 0 && y < 0 => (-y, x),
        (x, y) if x > 0 && y < 0 => (y, -x),
        (x, y) => (x, y),
    }
}
