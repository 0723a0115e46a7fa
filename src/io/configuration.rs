//! Layout constants and runtime configuration defaults

// Placement grid geometry
/// Number of columns in the placement grid
pub const GRID_COLUMNS: usize = 12;
/// Number of rows in the placement grid
pub const GRID_ROWS: usize = 8;

/// Maximum number of words placed per pass
pub const MAX_DISPLAYED_WORDS: usize = 60;

// Bounds expected per-word cost: <= 50 redraws before accepting a collision
/// Maximum random slot draws per word before a collision is accepted
pub const MAX_PLACEMENT_ATTEMPTS: usize = 50;

// Font scaling parameters
/// Smallest display font size in pixels
pub const MIN_FONT_SIZE_PX: f64 = 10.0;
/// Largest display font size in pixels
pub const MAX_FONT_SIZE_PX: f64 = 50.0;

/// Exponent of the concave frequency response curve
///
/// Values below one compress low frequencies less harshly than a linear
/// scale, widening the visual gap between headline words and the rest.
pub const RESPONSE_EXPONENT: f64 = 0.6;

/// Number of top-ranked words receiving the size bonus
pub const RANK_BONUS_COUNT: usize = 10;
/// Size multiplier applied to the top-ranked words, re-clamped after
pub const RANK_BONUS_FACTOR: f64 = 1.2;

/// Fraction of the maximum frequency above which a word is rendered bold
pub const EMPHASIS_THRESHOLD: f64 = 0.7;

/// Rotation choices in degrees; repeated zeros bias toward upright text
pub const ROTATION_CHOICES: [i16; 7] = [0, 0, 0, 15, -15, 30, -30];

/// Fixed display palette cycled by word rank
///
/// Adjacent ranks always receive distinct colors because the cycle runs
/// over rank, not over the randomized grid position.
pub const PALETTE: [[u8; 3]; 20] = [
    [0xFF, 0x6B, 0x6B],
    [0x4E, 0xCD, 0xC4],
    [0x45, 0xB7, 0xD1],
    [0x96, 0xCE, 0xB4],
    [0xFF, 0xEA, 0xA7],
    [0xDD, 0xA0, 0xDD],
    [0x98, 0xD8, 0xC8],
    [0xF7, 0xDC, 0x6F],
    [0xBB, 0x8F, 0xCE],
    [0x85, 0xC1, 0xE9],
    [0xF8, 0xC4, 0x71],
    [0x82, 0xE0, 0xAA],
    [0xF1, 0x94, 0x8A],
    [0x85, 0xC1, 0xE9],
    [0xD7, 0xBD, 0xE2],
    [0xAE, 0xD6, 0xF1],
    [0xA9, 0xDF, 0xBF],
    [0xF9, 0xE7, 0x9F],
    [0xF5, 0xB7, 0xB1],
    [0xD2, 0xB4, 0xDE],
];

// Default values for configurable parameters
/// Fixed seed for reproducible layouts
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_cloud";
/// Pixel width of one grid cell in the PNG preview
pub const CELL_WIDTH_PX: u32 = 80;
/// Pixel height of one grid cell in the PNG preview
pub const CELL_HEIGHT_PX: u32 = 60;
/// Background color of the PNG preview
pub const PREVIEW_BACKGROUND: [u8; 3] = [0xF5, 0xF7, 0xFA];

/// Number of entries shown in the top-words listing
pub const TOP_WORDS_LISTED: usize = 20;
