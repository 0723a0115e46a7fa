//! Tests for random slot assignment and collision retry behavior

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;
    use wordgrid::layout::placement::{assign_slot, draw_candidate};
    use wordgrid::model::grid::SlotGrid;

    #[test]
    fn test_candidates_fall_within_grid_bounds() {
        let grid = SlotGrid::new(12, 8);
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..500 {
            let slot = draw_candidate(&grid, &mut rng);
            assert!((1..=12).contains(&slot.column));
            assert!((1..=8).contains(&slot.row));
        }
    }

    #[test]
    fn test_assignment_avoids_occupied_slots_below_capacity() {
        let mut grid = SlotGrid::new(12, 8);
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = HashSet::new();

        for rank in 0..60 {
            let slot = assign_slot(&mut grid, rank, 50, &mut rng);
            seen.insert(slot);
        }

        // 60 words into 96 cells should essentially never exhaust the
        // retry budget for a fixed seed
        assert_eq!(seen.len(), 60);
        assert_eq!(grid.collisions(), 0);
    }

    #[test]
    fn test_full_grid_accepts_collision_after_budget() {
        let mut grid = SlotGrid::new(2, 2);
        let mut rng = StdRng::seed_from_u64(7);

        for rank in 0..4 {
            assign_slot(&mut grid, rank, 50, &mut rng);
        }
        assert_eq!(grid.collisions(), 0);

        // Fifth placement has nowhere to go; it must land somewhere
        // rather than block the pass
        let slot = assign_slot(&mut grid, 4, 50, &mut rng);
        assert!((1..=2).contains(&slot.column));
        assert!((1..=2).contains(&slot.row));
        assert_eq!(grid.collisions(), 1);
    }

    #[test]
    fn test_single_attempt_budget_accepts_first_draw() {
        let mut grid = SlotGrid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(1);

        for rank in 0..9 {
            assign_slot(&mut grid, rank, 1, &mut rng);
        }

        // With one draw per word some cells collide and others stay free
        let occupied: usize = (1..=3)
            .flat_map(|column| (1..=3).map(move |row| (column, row)))
            .filter(|&(column, row)| {
                !grid.is_free(wordgrid::model::grid::GridSlot::new(column, row))
            })
            .count();
        assert_eq!(occupied + grid.collisions(), 9);
    }
}
