//! Frequency normalization and font size scaling
//!
//! Sizes are derived from each word's position within the frequency range
//! of the full input list, passed through a concave response curve so the
//! very top words separate visually from the mid-ranks, then clamped.

use crate::io::configuration::{
    MAX_FONT_SIZE_PX, MIN_FONT_SIZE_PX, RANK_BONUS_COUNT, RANK_BONUS_FACTOR, RESPONSE_EXPONENT,
};

/// Normalize a frequency into `[0, 1]` over the full-list extremes
///
/// A degenerate range (`max == min`) maps every entry to 1.0, producing
/// uniform sizing rather than an error.
pub fn normalized_frequency(frequency: u64, min_frequency: u64, max_frequency: u64) -> f64 {
    if max_frequency == min_frequency {
        return 1.0;
    }
    frequency.saturating_sub(min_frequency) as f64 / (max_frequency - min_frequency) as f64
}

/// Apply the concave response curve to a normalized frequency
pub fn response_curve(t: f64) -> f64 {
    t.powf(RESPONSE_EXPONENT)
}

/// Map a curved value into the clamped font size range
pub fn base_font_size(curved: f64) -> f64 {
    let span = MAX_FONT_SIZE_PX - MIN_FONT_SIZE_PX;
    curved
        .mul_add(span, MIN_FONT_SIZE_PX)
        .clamp(MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX)
}

/// Apply the rank bonus for the highest-frequency words and re-clamp
///
/// The bonus guarantees headline words stay visually dominant even when
/// the curve alone would not separate them from ranks just below the cut.
pub fn rank_bonus(base_size: f64, rank: usize) -> f64 {
    if rank < RANK_BONUS_COUNT {
        (base_size * RANK_BONUS_FACTOR).min(MAX_FONT_SIZE_PX)
    } else {
        base_size
    }
}

/// Full scaling pipeline: normalize, curve, clamp, then rank bonus
pub fn scaled_font_size(
    frequency: u64,
    min_frequency: u64,
    max_frequency: u64,
    rank: usize,
) -> f64 {
    let t = normalized_frequency(frequency, min_frequency, max_frequency);
    let base = base_font_size(response_curve(t));
    rank_bonus(base, rank)
}
