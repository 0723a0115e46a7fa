//! Random grid slot assignment with bounded collision retry
//!
//! Words are placed in descending-frequency order so larger words get
//! first pick of free cells. Each word draws uniform random candidates
//! until a free cell is found or the attempt budget runs out, at which
//! point the colliding cell is accepted rather than blocking the pass.
//! Best-effort packing: expected O(1) draws per word while occupancy
//! stays well below capacity.

use crate::model::grid::{GridSlot, SlotGrid};
use rand::{Rng, rngs::StdRng};

/// Draw one uniform random slot from the grid
pub fn draw_candidate(grid: &SlotGrid, rng: &mut StdRng) -> GridSlot {
    let column = rng.random_range(0..grid.columns()) as u32 + 1;
    let row = rng.random_range(0..grid.rows()) as u32 + 1;
    GridSlot::new(column, row)
}

/// Assign a slot to the word at the given rank, marking it occupied
///
/// Redraws on occupied cells up to `max_attempts` times; the final draw is
/// accepted unconditionally, so a full or near-full grid degrades to a
/// counted collision instead of an unbounded search.
pub fn assign_slot(
    grid: &mut SlotGrid,
    rank: usize,
    max_attempts: usize,
    rng: &mut StdRng,
) -> GridSlot {
    let mut candidate = draw_candidate(grid, rng);
    let mut attempts = 1;

    while !grid.is_free(candidate) && attempts < max_attempts {
        candidate = draw_candidate(grid, rng);
        attempts += 1;
    }

    grid.occupy(candidate, rank);
    candidate
}
