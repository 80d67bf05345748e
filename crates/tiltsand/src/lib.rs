//! Tilt-driven falling sand simulation engine.

pub mod api;
pub mod cell;
pub mod config;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod grid;
mod spawn;
pub mod world;

use std::num::NonZeroU32;

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

pub use cell::{Cell, Color, Kind};
pub use config::{SpawnConfig, WorldConfig};
pub use error::{ConfigError, ParseKindError};
pub use geometry::Gravity;
pub use grid::{dequantize, quantize, Grid};
pub use world::World;

/// Browser-facing handle: a seeded world plus a palette-index frame the
/// page reads straight out of WASM memory after each tick.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    world: World<StdRng>,
    frame: Vec<u8>,
}

impl Universe {
    fn from_world(world: World<StdRng>) -> Self {
        let len = world.grid().width() * world.grid().height();
        let mut universe = Self {
            world,
            frame: vec![0; len],
        };
        universe.refresh();
        universe
    }

    fn refresh(&mut self) {
        self.world.render_into(&mut self.frame);
    }

    #[must_use]
    pub fn world(&self) -> &World<StdRng> {
        &self.world
    }

    #[must_use]
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }
}

#[wasm_bindgen]
impl Universe {
    /// `width` and `height` in cells.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: u32, height: u32, element_size: u32, seed: u64) -> Universe {
        let element_size = NonZeroU32::new(element_size).unwrap_or_else(|| {
            warn!("element size 0 clamped to 1");
            NonZeroU32::MIN
        });
        Self::from_world(World::new(
            width as usize,
            height as usize,
            element_size,
            StdRng::seed_from_u64(seed),
        ))
    }

    /// Build from a JSON [`WorldConfig`].
    pub fn from_config(json: &str) -> Result<Universe, JsError> {
        let config = WorldConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        let world = World::from_config(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self::from_world(world))
    }

    /// Components are reduced to their sign.
    pub fn set_gravity(&mut self, dx: i32, dy: i32) {
        self.world.set_gravity(Gravity::new(dx, dy));
    }

    pub fn rotate_gravity(&mut self) {
        let next = self.world.gravity().rotated();
        self.world.set_gravity(next);
    }

    /// Feed an accelerometer reading.
    pub fn tilt(&mut self, ax: f32, ay: f32) {
        self.world.set_gravity(Gravity::from_acceleration(ax, ay));
    }

    #[must_use]
    pub fn gravity_x(&self) -> i32 {
        self.world.gravity().dx()
    }

    #[must_use]
    pub fn gravity_y(&self) -> i32 {
        self.world.gravity().dy()
    }

    pub fn tick(&mut self) {
        self.world.step();
        self.refresh();
    }

    /// Pen placement in pixels. Returns how many elements were placed.
    pub fn spawn(&mut self, x: i32, y: i32, radius: i32, kind: u8) -> u32 {
        let Some(kind) = Kind::from_u8(kind) else {
            warn!("ignoring spawn of unknown kind {kind}");
            return 0;
        };
        let placed = self.world.add_elements(x, y, radius, kind);
        self.refresh();
        placed as u32
    }

    pub fn reset(&mut self) {
        self.world.reset();
        self.refresh();
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.world.grid().width() as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.world.grid().height() as u32
    }

    #[must_use]
    pub fn frame_ptr(&self) -> *const u8 {
        self.frame.as_ptr()
    }

    #[must_use]
    pub fn frame_len(&self) -> usize {
        self.frame.len()
    }

    /// RGB for a palette index found in the frame.
    #[must_use]
    pub fn palette_rgb(index: u8) -> u32 {
        Color(index).rgb()
    }

    #[must_use]
    pub fn cell_count(&self) -> u32 {
        self.world.grid().occupied_count() as u32
    }
}
