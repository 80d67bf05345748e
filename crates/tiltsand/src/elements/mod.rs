//! Per-element movement rules dispatched from the step loop.

mod sand;
mod water;


use rand::Rng;

use crate::api::CellView;
use crate::cell::Cell;

/// Where `cell` wants to go this step, if anywhere.
///
/// Rules only read the grid; the caller swaps origin and target. Stone
/// and Empty never move.
pub fn next_move<R: Rng + ?Sized>(cell: &Cell, view: &CellView, rng: &mut R) -> Option<(i32, i32)> {
    match cell {
        Cell::Sand { .. } => sand::next_move(view),
        Cell::Water { .. } => water::next_move(view, rng),
        Cell::Stone { .. } | Cell::Empty => None,
    }
}
