//! Relative-offset view of the grid for element movement rules.

use crate::cell::Cell;
use crate::geometry::Gravity;
use crate::grid::Grid;

/// Read-only neighborhood around one cell. Rules query it and return a
/// target; the scheduler performs the swap.
#[derive(Debug, Clone, Copy)]
pub struct CellView<'a> {
    pub grid: &'a Grid,
    pub x: i32,
    pub y: i32,
    pub gravity: Gravity,
}

impl<'a> CellView<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid, x: i32, y: i32, gravity: Gravity) -> Self {
        Self { grid, x, y, gravity }
    }

    /// `None` when the offset leaves the grid.
    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Option<&'a Cell> {
        self.grid.get(self.x + dx, self.y + dy)
    }

    /// Absolute coordinate of an offset.
    #[must_use]
    pub fn target(&self, dx: i32, dy: i32) -> (i32, i32) {
        (self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn is_empty(&self, dx: i32, dy: i32) -> bool {
        self.get(dx, dy).is_some_and(Cell::is_empty)
    }

    #[must_use]
    pub fn is_empty_or_water(&self, dx: i32, dy: i32) -> bool {
        matches!(self.get(dx, dy), Some(Cell::Empty | Cell::Water { .. }))
    }
}
