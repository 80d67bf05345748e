//! Pen placement: drop new elements into a disc of pixel space.

use log::debug;
use rand::Rng;

use crate::cell::{Cell, Kind};
use crate::grid::quantize;
use crate::world::World;

impl<R: Rng> World<R> {
    /// Fill the disc of `pen_radius` pixels around `(center_x, center_y)`.
    ///
    /// Offsets are sampled on a lattice one element wide across the square
    /// `[-pen_radius, pen_radius)`, keeping those strictly inside the
    /// circle. Occupied cells are left alone. Returns how many elements
    /// were placed.
    pub fn add_elements(
        &mut self,
        center_x: i32,
        center_y: i32,
        pen_radius: i32,
        kind: Kind,
    ) -> usize {
        let pen_radius = pen_radius.max(0);
        let stride = self.element_size().get() as usize;
        let radius_sq = i64::from(pen_radius) * i64::from(pen_radius);
        let mut placed = 0;

        for ox in (-pen_radius..pen_radius).step_by(stride) {
            for oy in (-pen_radius..pen_radius).step_by(stride) {
                let dist_sq = i64::from(ox) * i64::from(ox) + i64::from(oy) * i64::from(oy);
                if dist_sq >= radius_sq {
                    continue;
                }
                let (x, y) = (center_x.saturating_add(ox), center_y.saturating_add(oy));
                if self.add_single_element(x, y, kind) {
                    placed += 1;
                }
            }
        }

        debug!("placed {placed} {kind} around ({center_x}, {center_y}) r={pen_radius}");
        placed
    }

    /// Place one `kind` element in the cell under pixel `(x, y)` if that
    /// cell exists and is empty. Returns whether it was placed.
    pub fn add_single_element(&mut self, x: i32, y: i32, kind: Kind) -> bool {
        let (gx, gy) = quantize(x, y, self.element_size());
        if !self.grid().can_place_at(gx, gy) {
            return false;
        }
        let cell = Cell::spawn(kind, self.rng_mut());
        self.grid_mut().set(gx, gy, cell);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::cell::{Cell, Color, Kind};
    use crate::World;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::num::NonZeroU32;

    fn world(width: usize, height: usize, element_size: u32) -> World<StdRng> {
        World::new(
            width,
            height,
            NonZeroU32::new(element_size).unwrap(),
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn single_element_lands_in_quantized_cell() {
        let mut world = world(10, 10, 5);
        assert!(world.add_single_element(12, 27, Kind::Water));
        let cell = world.grid().get(2, 5).copied().unwrap();
        assert_eq!(cell.kind(), Some(Kind::Water));
        assert_eq!(world.grid().occupied_count(), 1);
    }

    #[test]
    fn occupied_cell_is_left_unchanged() {
        let mut world = world(4, 4, 1);
        let stone = Cell::new(Kind::Stone, Color(5));
        world.grid_mut().set(1, 1, stone);
        assert!(!world.add_single_element(1, 1, Kind::Sand));
        assert_eq!(world.grid().get(1, 1), Some(&stone));
    }

    #[test]
    fn out_of_bounds_is_noop() {
        let mut world = world(4, 4, 2);
        let before = world.grid().clone();
        assert!(!world.add_single_element(8, 0, Kind::Sand));
        assert!(!world.add_single_element(-1, 0, Kind::Sand));
        assert!(!world.add_single_element(0, 100, Kind::Sand));
        assert_eq!(world.grid(), &before);
    }

    #[test]
    fn radius_two_disc_is_a_three_by_three_block() {
        // Lattice offsets in [-2, 2) with ox² + oy² < 4 are -1..=1 on both axes.
        let mut world = world(9, 9, 1);
        assert_eq!(world.add_elements(4, 4, 2, Kind::Sand), 9);
        let cells: Vec<(usize, usize)> =
            world.occupied_cells().map(|(x, y, _)| (x, y)).collect();
        let expected: Vec<(usize, usize)> =
            (3..=5).flat_map(|x| (3..=5).map(move |y| (x, y))).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn zero_radius_places_nothing() {
        let mut world = world(4, 4, 1);
        assert_eq!(world.add_elements(2, 2, 0, Kind::Water), 0);
        assert_eq!(world.add_elements(2, 2, -3, Kind::Water), 0);
        assert_eq!(world.grid().occupied_count(), 0);
    }

    #[test]
    fn lattice_steps_by_element_size() {
        let mut world = world(20, 20, 5);
        // Offsets -10, -5, 0, 5 on each axis; those inside r=10 land in
        // cells 9..=11 on both axes.
        let placed = world.add_elements(50, 50, 10, Kind::Stone);
        assert_eq!(placed, 9);
        assert_eq!(placed, world.grid().occupied_count());
        assert!(world.grid().get(10, 10).is_some_and(|c| c.kind() == Some(Kind::Stone)));
        assert!(world.grid().get(8, 10).is_some_and(Cell::is_empty));
    }

    proptest! {
        #[test]
        fn prop_spawn_never_overwrites(
            cx in -10i32..40,
            cy in -10i32..40,
            radius in 0i32..12,
            raw in 0u8..3,
        ) {
            let mut world = world(24, 24, 1);
            for i in 0..24 {
                world.grid_mut().set(i, i, Cell::new(Kind::Stone, Color(6)));
            }
            let before = world.grid().clone();
            let kind = Kind::from_u8(raw).unwrap();
            let placed = world.add_elements(cx, cy, radius, kind);

            prop_assert_eq!(world.grid().occupied_count(), before.occupied_count() + placed);
            for (old, new) in before.cells().iter().zip(world.grid().cells()) {
                if !old.is_empty() {
                    prop_assert_eq!(old, new);
                } else if !new.is_empty() {
                    prop_assert_eq!(new.kind(), Some(kind));
                }
            }
        }
    }
}
