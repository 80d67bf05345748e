//! Fixed-size cell storage and the pixel/grid coordinate transforms.

use std::num::NonZeroU32;

use crate::cell::{Cell, Color};

/// 2D grid of cells in a flat row-major buffer.
///
/// Out-of-bounds reads return `None`, writes are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y).then_some(y as usize * self.width + x as usize)
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// True iff `(x, y)` is inside the grid and holds nothing.
    #[must_use]
    pub fn can_place_at(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Cell::is_empty)
    }

    /// Exchange the contents of two cells. No-op if either is out of bounds.
    pub fn swap(&mut self, (ax, ay): (i32, i32), (bx, by): (i32, i32)) {
        if let (Some(a), Some(b)) = (self.index(ax, ay), self.index(bx, by)) {
            self.cells.swap(a, b);
        }
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Every non-empty cell as `(x, y, color)`, column by column.
    ///
    /// The order depends only on the current contents, never on history.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.height).filter_map(move |y| {
                self.cells[y * self.width + x]
                    .color()
                    .map(|color| (x, y, color))
            })
        })
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/// Pixel coordinate to the grid cell containing it (floor division).
#[must_use]
pub fn quantize(px: i32, py: i32, element_size: NonZeroU32) -> (i32, i32) {
    let size = i64::from(element_size.get());
    (
        i64::from(px).div_euclid(size) as i32,
        i64::from(py).div_euclid(size) as i32,
    )
}

/// Top-left pixel of a grid cell.
#[must_use]
pub fn dequantize(gx: i32, gy: i32, element_size: NonZeroU32) -> (i64, i64) {
    let size = i64::from(element_size.get());
    (i64::from(gx) * size, i64::from(gy) * size)
}
