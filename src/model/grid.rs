//! Placement grid slots and per-pass occupancy state
//!
//! The grid is a fixed set of discrete cells; occupancy is tracked for a
//! single layout pass and discarded on return. Cells store the rank of the
//! occupying word (offset by one, 0 = free), mirroring how the renderer
//! later resolves which word claimed a cell first.

use ndarray::Array2;

/// One cell of the placement grid, identified by 1-based column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSlot {
    /// Column index in `[1, columns]`
    pub column: u32,
    /// Row index in `[1, rows]`
    pub row: u32,
}

impl GridSlot {
    /// Create a slot from 1-based column and row indices
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// Occupancy state over a fixed columns × rows grid
///
/// Local to one layout pass. Tracks which ranks claimed which cells and
/// how many placements landed on an already-claimed cell after the retry
/// budget was exhausted.
#[derive(Debug, Clone)]
pub struct SlotGrid {
    /// Rank + 1 of the first occupant per cell (0 = free), indexed (row, column)
    occupancy: Array2<u32>,
    dimensions: (usize, usize),
    collisions: usize,
}

impl SlotGrid {
    /// Create an empty grid with the given dimensions
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            occupancy: Array2::zeros((rows, columns)),
            dimensions: (columns, rows),
            collisions: 0,
        }
    }

    /// Number of columns in the grid
    pub const fn columns(&self) -> usize {
        self.dimensions.0
    }

    /// Number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.dimensions.1
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.dimensions.0 * self.dimensions.1
    }

    /// Whether the given slot is unoccupied
    pub fn is_free(&self, slot: GridSlot) -> bool {
        self.occupant(slot).is_none()
    }

    /// Rank of the first word that claimed the slot, if any
    pub fn occupant(&self, slot: GridSlot) -> Option<usize> {
        let index = Self::cell_index(slot);
        let value = self.occupancy.get(index).copied().unwrap_or(0);
        value.checked_sub(1).map(|rank| rank as usize)
    }

    /// Claim a slot for the word at the given rank
    ///
    /// Returns `true` if the slot was free. Claiming an occupied slot is
    /// permitted (the retry budget bounds how often this happens) and is
    /// counted as a collision; the original occupant is retained.
    pub fn occupy(&mut self, slot: GridSlot, rank: usize) -> bool {
        let index = Self::cell_index(slot);
        match self.occupancy.get_mut(index) {
            Some(cell) if *cell == 0 => {
                *cell = rank as u32 + 1;
                true
            }
            _ => {
                self.collisions += 1;
                false
            }
        }
    }

    /// Number of placements that landed on an occupied cell
    pub const fn collisions(&self) -> usize {
        self.collisions
    }

    const fn cell_index(slot: GridSlot) -> (usize, usize) {
        // Slots are 1-based; the backing array is 0-based (row, column)
        (
            slot.row.saturating_sub(1) as usize,
            slot.column.saturating_sub(1) as usize,
        )
    }
}
