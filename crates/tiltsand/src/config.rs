//! World configuration loaded from JSON.

use std::num::NonZeroU32;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::cell::Kind;
use crate::error::ConfigError;
use crate::geometry::Gravity;
use crate::grid::quantize;
use crate::world::World;

fn default_element_size() -> u32 {
    5
}

fn default_gravity() -> [i32; 2] {
    [0, 1]
}

/// A pen placement applied once when the world is built.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpawnConfig {
    /// Pixel coordinates of the pen center.
    pub x: i32,
    pub y: i32,
    /// Pen radius in pixels.
    pub radius: i32,
    pub kind: Kind,
}

/// Complete world configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorldConfig {
    /// Surface width in pixels; the grid has `width / element_size` columns.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Pixels per cell.
    #[serde(default = "default_element_size")]
    pub element_size: u32,
    #[serde(default)]
    pub seed: u64,
    /// `[dx, dy]`, each -1, 0 or 1.
    #[serde(default = "default_gravity")]
    pub gravity: [i32; 2],
    #[serde(default)]
    pub spawns: Vec<SpawnConfig>,
}

impl WorldConfig {
    /// Config for a `width` x `height` pixel surface with every other field defaulted.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            element_size: default_element_size(),
            seed: 0,
            gravity: default_gravity(),
            spawns: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn element_size(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.element_size).ok_or(ConfigError::ZeroElementSize)
    }

    pub fn gravity(&self) -> Result<Gravity, ConfigError> {
        let [dx, dy] = self.gravity;
        Gravity::try_from((dx, dy))
    }

    /// Grid size in cells.
    pub fn grid_size(&self) -> Result<(usize, usize), ConfigError> {
        let size = self.element_size()?;
        let (w, h) = quantize(
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
            size,
        );
        Ok((w as usize, h as usize))
    }

    /// Check every field without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.element_size()?;
        self.gravity()?;
        if let Some(bad) = self.spawns.iter().find(|s| s.radius < 0) {
            return Err(ConfigError::NegativeRadius(bad.radius));
        }
        Ok(())
    }
}

impl World<StdRng> {
    /// Build a seeded world and apply the configured spawns in order.
    pub fn from_config(config: &WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = config.grid_size()?;
        let mut world = World::new(
            width,
            height,
            config.element_size()?,
            StdRng::seed_from_u64(config.seed),
        );
        world.set_gravity(config.gravity()?);
        for spawn in &config.spawns {
            world.add_elements(spawn.x, spawn.y, spawn.radius, spawn.kind);
        }
        Ok(world)
    }
}
