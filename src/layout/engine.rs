//! Layout orchestration: one pass from ranked list to placed words
//!
//! The engine runs the three stages in order: frequency normalization and
//! size scaling, grid slot assignment, then decorative styling. A pass is
//! single-threaded, performs no I/O, and owns no state beyond the seeded
//! random stream; every pass rebuilds its occupancy grid from scratch.

use crate::io::configuration::{
    DEFAULT_SEED, GRID_COLUMNS, GRID_ROWS, MAX_DISPLAYED_WORDS, MAX_PLACEMENT_ATTEMPTS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::{placement, scale, style};
use crate::model::entry::{self, FrequencyEntry};
use crate::model::grid::SlotGrid;
use crate::model::placed::{LayoutResult, PlacedWord};
use rand::{SeedableRng, rngs::StdRng};

/// Layout parameters controlling grid geometry and selection behavior
#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig {
    /// Number of columns in the placement grid
    pub grid_columns: usize,
    /// Number of rows in the placement grid
    pub grid_rows: usize,
    /// Maximum number of words placed per pass
    pub max_words: usize,
    /// Random slot draws per word before a collision is accepted
    pub max_attempts: usize,
    /// Seed for the random stream, making layouts reproducible
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_columns: GRID_COLUMNS,
            grid_rows: GRID_ROWS,
            max_words: MAX_DISPLAYED_WORDS,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            seed: DEFAULT_SEED,
        }
    }
}

impl LayoutConfig {
    /// Validate grid geometry and selection bounds
    ///
    /// The word cap must fit within the grid: exceeding capacity would
    /// silently degrade every pass to guaranteed overlap, so it is
    /// rejected here instead of at layout time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a grid dimension is zero, the word
    /// cap is zero, the attempt budget is zero, or the cap exceeds the
    /// grid cell count.
    pub fn validate(&self) -> Result<()> {
        if self.grid_columns == 0 {
            return Err(invalid_parameter(
                "grid_columns",
                &self.grid_columns,
                &"grid must have at least one column",
            ));
        }
        if self.grid_rows == 0 {
            return Err(invalid_parameter(
                "grid_rows",
                &self.grid_rows,
                &"grid must have at least one row",
            ));
        }
        if self.max_words == 0 {
            return Err(invalid_parameter(
                "max_words",
                &self.max_words,
                &"at least one word must be displayable",
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"at least one placement attempt is required",
            ));
        }
        let cells = self.grid_columns * self.grid_rows;
        if self.max_words > cells {
            return Err(invalid_parameter(
                "max_words",
                &self.max_words,
                &format!("word cap exceeds grid capacity of {cells} cells"),
            ));
        }
        Ok(())
    }
}

/// Word cloud layout engine with a seeded random stream
///
/// Safe to invoke repeatedly; passes are independent apart from the
/// advancing random stream. Re-seed by constructing a new engine.
pub struct LayoutEngine {
    config: LayoutConfig,
    rng: StdRng,
}

impl LayoutEngine {
    /// Create an engine from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Create an engine with default geometry and the given seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the default configuration fails
    /// validation (which would indicate broken defaults)
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::new(LayoutConfig {
            seed,
            ..LayoutConfig::default()
        })
    }

    /// The configuration this engine was built with
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Run one layout pass over a ranked frequency list
    ///
    /// The list is re-sorted descending defensively (stable, so tied words
    /// keep their incoming order). Normalization spans the extremes of the
    /// full list even though only the top `max_words` entries are placed.
    /// Empty input yields an empty result, not an error.
    pub fn layout(&mut self, entries: &[FrequencyEntry]) -> LayoutResult {
        let mut ranked = entries.to_vec();
        entry::sort_descending(&mut ranked);

        let Some((min_frequency, max_frequency)) = entry::frequency_extremes(&ranked) else {
            return LayoutResult::default();
        };

        let selected = ranked.len().min(self.config.max_words);
        let mut grid = SlotGrid::new(self.config.grid_columns, self.config.grid_rows);
        let mut items = Vec::with_capacity(selected);

        for (rank, entry) in ranked.iter().take(selected).enumerate() {
            let font_size_px =
                scale::scaled_font_size(entry.frequency, min_frequency, max_frequency, rank);
            let slot =
                placement::assign_slot(&mut grid, rank, self.config.max_attempts, &mut self.rng);

            items.push(PlacedWord {
                word: entry.word.clone(),
                frequency: entry.frequency,
                slot,
                font_size_px,
                palette_index: style::palette_index(rank),
                rotation_deg: style::draw_rotation(&mut self.rng),
                emphasized: style::emphasized(entry.frequency, max_frequency),
            });
        }

        LayoutResult {
            items,
            total_word_count: ranked.len(),
            max_frequency,
            min_frequency,
            collisions: grid.collisions(),
        }
    }
}
