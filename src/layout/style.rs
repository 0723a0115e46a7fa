//! Decorative attribute assignment: color, rotation, and emphasis
//!
//! Purely cosmetic and total over valid scaling/placement output. Color
//! cycles deterministically by rank; rotation is a random draw from an
//! upright-biased set; emphasis marks words near the frequency ceiling.

use crate::io::configuration::{EMPHASIS_THRESHOLD, PALETTE, ROTATION_CHOICES};
use rand::{Rng, rngs::StdRng};

/// Palette index for a word at the given rank
///
/// Cycles over the fixed palette by rank (not grid position), so adjacent
/// high-rank words stay visually distinct despite randomized placement.
pub const fn palette_index(rank: usize) -> usize {
    rank % PALETTE.len()
}

/// RGB bytes of the palette entry at the given index
pub fn palette_color(index: usize) -> [u8; 3] {
    PALETTE
        .get(index % PALETTE.len())
        .copied()
        .unwrap_or([0, 0, 0])
}

/// CSS hex string of the palette entry at the given index
pub fn palette_css(index: usize) -> String {
    let [r, g, b] = palette_color(index);
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Draw a rotation in degrees from the fixed choice set
pub fn draw_rotation(rng: &mut StdRng) -> i16 {
    let choice = rng.random_range(0..ROTATION_CHOICES.len());
    ROTATION_CHOICES.get(choice).copied().unwrap_or(0)
}

/// Whether a word is emphasized (bold) given the full-list maximum
pub fn emphasized(frequency: u64, max_frequency: u64) -> bool {
    frequency as f64 > EMPHASIS_THRESHOLD * max_frequency as f64
}
