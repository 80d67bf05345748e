//! Error types for world configuration.
//!
//! The simulation itself is total; only configuration and name parsing fail.

use std::fmt;

/// Errors raised while loading or validating a [`crate::config::WorldConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration text was not valid JSON for a world config.
    Json(serde_json::Error),
    /// Pixels per cell must be at least one.
    ZeroElementSize,
    /// Gravity components must each be -1, 0 or 1.
    InvalidGravity { dx: i32, dy: i32 },
    /// A spawn entry asked for a negative pen radius.
    NegativeRadius(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(e) => write!(f, "Failed to parse world config: {e}"),
            ConfigError::ZeroElementSize => write!(f, "Element size must be greater than zero"),
            ConfigError::InvalidGravity { dx, dy } => write!(
                f,
                "Gravity ({dx}, {dy}) is out of range; components must be -1, 0 or 1"
            ),
            ConfigError::NegativeRadius(r) => write!(f, "Spawn radius {r} is negative"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// An element name that is not one of `sand`, `water` or `stone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown element kind \"{}\"", self.0)
    }
}

impl std::error::Error for ParseKindError {}
