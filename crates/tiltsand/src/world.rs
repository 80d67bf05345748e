//! Simulation engine: owns the grid, the gravity and the random source.

use std::num::NonZeroU32;

use log::{debug, info};
use rand::Rng;

use crate::api::CellView;
use crate::cell::Color;
use crate::elements;
use crate::geometry::Gravity;
use crate::grid::Grid;

/// In-place Fisher–Yates: walk from the last index down, swapping each slot
/// with a uniformly chosen slot at or below it.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Grid plus everything a step needs.
///
/// The random source is injected so runs can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct World<R> {
    grid: Grid,
    gravity: Gravity,
    element_size: NonZeroU32,
    parity: bool,
    rng: R,
    scan_x: Vec<i32>,
    scan_y: Vec<i32>,
}

impl<R: Rng> World<R> {
    /// `width` and `height` are in cells; `element_size` is pixels per cell.
    pub fn new(width: usize, height: usize, element_size: NonZeroU32, rng: R) -> Self {
        info!("world {width}x{height} cells, {element_size} px per cell");
        Self {
            grid: Grid::new(width, height),
            gravity: Gravity::DOWN,
            element_size,
            parity: false,
            rng,
            scan_x: Vec::with_capacity(width),
            scan_y: Vec::with_capacity(height),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[must_use]
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Gravity) {
        if gravity != self.gravity {
            debug!("gravity {} -> {}", self.gravity, gravity);
            self.gravity = gravity;
        }
    }

    #[must_use]
    pub fn element_size(&self) -> NonZeroU32 {
        self.element_size
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Flips every step. Nothing reads it yet.
    #[must_use]
    pub fn parity(&self) -> bool {
        self.parity
    }

    /// Advance the simulation by one tick.
    ///
    /// Rows and columns are each visited in a freshly shuffled order. Each
    /// occupied cell asks its rule for a target and is swapped into it on
    /// the spot, so an element carried ahead of the scan can move again in
    /// the same step, and one carried behind it is skipped.
    pub fn step(&mut self) {
        let mut xs = std::mem::take(&mut self.scan_x);
        let mut ys = std::mem::take(&mut self.scan_y);
        xs.clear();
        xs.extend(0..self.grid.width() as i32);
        ys.clear();
        ys.extend(0..self.grid.height() as i32);
        shuffle(&mut xs, &mut self.rng);
        shuffle(&mut ys, &mut self.rng);

        self.parity = !self.parity;

        for &y in &ys {
            for &x in &xs {
                let Some(&cell) = self.grid.get(x, y) else {
                    continue;
                };
                if cell.is_empty() {
                    continue;
                }
                let view = CellView::new(&self.grid, x, y, self.gravity);
                if let Some(target) = elements::next_move(&cell, &view, &mut self.rng) {
                    self.grid.swap((x, y), target);
                }
            }
        }

        self.scan_x = xs;
        self.scan_y = ys;
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        debug!("reset, dropping {} elements", self.grid.occupied_count());
        self.grid.reset();
    }

    /// Every element as `(x, y, color)` in grid units, column by column.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.grid.occupied_cells()
    }

    /// Write palette indices for a row-major frame of `width * height`
    /// bytes: background everywhere, element colors on occupied cells.
    /// Cells past the end of a short frame are dropped.
    pub fn render_into(&self, frame: &mut [u8]) {
        frame.fill(Color::BACKGROUND.0);
        let width = self.grid.width();
        for (x, y, color) in self.occupied_cells() {
            if let Some(px) = frame.get_mut(y * width + x) {
                *px = color.0;
            }
        }
    }
}
