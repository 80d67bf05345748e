//! Sand element: falls with gravity, then slides to either side; sinks through Water.

use crate::api::CellView;
use crate::geometry::Gravity;

/// Fallback offsets tried after the straight fall, in order.
fn laterals(gravity: Gravity) -> [(i32, i32); 2] {
    let (dx, dy) = (gravity.dx(), gravity.dy());
    match (dx, dy) {
        // Vertical gravity: slide diagonally along x.
        (0, _) => [(1, dy), (-1, dy)],
        // Horizontal gravity: slide diagonally along y.
        (_, 0) => [(dx, 1), (dx, -1)],
        // Diagonal gravity: slide along either axis component.
        _ => [(dx, 0), (0, dy)],
    }
}

pub fn next_move(view: &CellView) -> Option<(i32, i32)> {
    let gravity = view.gravity;
    if gravity.is_zero() {
        return None;
    }

    let [first, second] = laterals(gravity);
    [(gravity.dx(), gravity.dy()), first, second]
        .into_iter()
        .find(|&(dx, dy)| view.is_empty_or_water(dx, dy))
        .map(|(dx, dy)| view.target(dx, dy))
}
