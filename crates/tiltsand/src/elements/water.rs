//! Water element: falls with gravity, otherwise disperses sideways.
//!
//! The side tried first is picked at random on every call, so a blocked
//! column spreads evenly in both directions over time. Water only ever
//! moves into Empty cells.

use rand::Rng;

use crate::api::CellView;

pub fn next_move<R: Rng + ?Sized>(view: &CellView, rng: &mut R) -> Option<(i32, i32)> {
    let gravity = view.gravity;
    let (px, py) = gravity.perpendicular();
    let sign = if rng.gen_bool(0.5) { 1 } else { -1 };
    let (px, py) = (px * sign, py * sign);

    [(gravity.dx(), gravity.dy()), (px, py), (-px, -py)]
        .into_iter()
        .find(|&(dx, dy)| view.is_empty(dx, dy))
        .map(|(dx, dy)| view.target(dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, Color, Kind};
    use crate::geometry::Gravity;
    use crate::grid::Grid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn water_move(grid: &Grid, x: i32, y: i32, gravity: Gravity, seed: u64) -> Option<(i32, i32)> {
        let mut rng = StdRng::seed_from_u64(seed);
        next_move(&CellView::new(grid, x, y, gravity), &mut rng)
    }

    #[test]
    fn falls_when_path_is_clear() {
        let grid = Grid::new(5, 5);
        for seed in 0..16 {
            assert_eq!(water_move(&grid, 2, 2, Gravity::DOWN, seed), Some((2, 3)));
            assert_eq!(water_move(&grid, 2, 2, Gravity::LEFT, seed), Some((1, 2)));
        }
    }

    #[test]
    fn disperses_to_both_sides_when_blocked() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 3, Cell::new(Kind::Stone, Color(5)));
        let mut seen = Vec::new();
        for seed in 0..64 {
            let target = water_move(&grid, 2, 2, Gravity::DOWN, seed).unwrap();
            assert!(target == (1, 2) || target == (3, 2), "unexpected {target:?}");
            if !seen.contains(&target) {
                seen.push(target);
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn takes_the_open_side() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 3, Cell::new(Kind::Stone, Color(5)));
        grid.set(1, 2, Cell::new(Kind::Sand, Color(1)));
        for seed in 0..16 {
            assert_eq!(water_move(&grid, 2, 2, Gravity::DOWN, seed), Some((3, 2)));
        }
    }

    #[test]
    fn cannot_displace_water_or_sand() {
        let mut grid = Grid::new(3, 2);
        grid.set(1, 1, Cell::new(Kind::Water, Color(9)));
        grid.set(0, 0, Cell::new(Kind::Water, Color(9)));
        grid.set(2, 0, Cell::new(Kind::Sand, Color(1)));
        for seed in 0..16 {
            assert_eq!(water_move(&grid, 1, 0, Gravity::DOWN, seed), None);
        }
    }

    #[test]
    fn diagonal_gravity_disperses_along_perpendicular() {
        let mut grid = Grid::new(5, 5);
        grid.set(3, 3, Cell::new(Kind::Stone, Color(5)));
        // perpendicular of (1, 1) is (1, -1)
        for seed in 0..16 {
            let target = water_move(&grid, 2, 2, Gravity::new(1, 1), seed).unwrap();
            assert!(target == (3, 1) || target == (1, 3), "unexpected {target:?}");
        }
    }

    #[test]
    fn zero_gravity_never_moves() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::new(Kind::Water, Color(8)));
        for seed in 0..16 {
            assert_eq!(water_move(&grid, 1, 1, Gravity::ZERO, seed), None);
        }
    }
}
