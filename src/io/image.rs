//! PNG schematic preview of a layout result
//!
//! Draws one filled block per placed word, scaled by font size and colored
//! from the palette, into the cell it was assigned. The preview verifies
//! placement and scaling at a glance; glyph rendering and rotation stay
//! with the HTML output.

use crate::io::configuration::{CELL_HEIGHT_PX, CELL_WIDTH_PX, PREVIEW_BACKGROUND};
use crate::io::error::{LayoutError, Result};
use crate::layout::style;
use crate::model::placed::{LayoutResult, PlacedWord};
use image::{Rgba, RgbaImage};
use std::path::Path;

// Inner margin keeping blocks off the cell edges
const CELL_MARGIN_PX: u32 = 2;
// Approximate glyph aspect ratio used to widen blocks per character
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Export the layout as a PNG preview
///
/// Empty layouts produce a background-only image, mirroring the HTML
/// renderer's "no data" placeholder.
///
/// # Errors
///
/// Returns `ImageExport` if the image cannot be saved
pub fn export_layout_as_png(
    result: &LayoutResult,
    columns: usize,
    rows: usize,
    path: &Path,
) -> Result<()> {
    let width = columns as u32 * CELL_WIDTH_PX;
    let height = rows as u32 * CELL_HEIGHT_PX;

    let [br, bg, bb] = PREVIEW_BACKGROUND;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([br, bg, bb, 255]));

    for placed in &result.items {
        draw_word_block(&mut img, placed);
    }

    img.save(path).map_err(|source| LayoutError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}

// Fill a centered block in the word's cell, sized by its font size and
// word length, clamped to the cell interior
fn draw_word_block(img: &mut RgbaImage, placed: &PlacedWord) {
    let cell_x = placed.slot.column.saturating_sub(1) * CELL_WIDTH_PX;
    let cell_y = placed.slot.row.saturating_sub(1) * CELL_HEIGHT_PX;

    let glyphs = placed.word.chars().count().max(1) as f64;
    let block_w = (glyphs * placed.font_size_px * GLYPH_WIDTH_RATIO)
        .clamp(placed.font_size_px, f64::from(CELL_WIDTH_PX - 2 * CELL_MARGIN_PX))
        as u32;
    let block_h =
        (placed.font_size_px.round() as u32).min(CELL_HEIGHT_PX - 2 * CELL_MARGIN_PX);

    let x0 = cell_x + (CELL_WIDTH_PX - block_w) / 2;
    let y0 = cell_y + (CELL_HEIGHT_PX - block_h) / 2;

    let [r, g, b] = style::palette_color(placed.palette_index);
    let fill = Rgba([r, g, b, 255]);
    // Emphasized words get a darker outline so they read as bold
    let outline = Rgba([r / 2, g / 2, b / 2, 255]);

    for y in y0..y0 + block_h {
        for x in x0..x0 + block_w {
            if x >= img.width() || y >= img.height() {
                continue;
            }
            let on_edge =
                y == y0 || y == y0 + block_h - 1 || x == x0 || x == x0 + block_w - 1;
            let pixel = if placed.emphasized && on_edge {
                outline
            } else {
                fill
            };
            img.put_pixel(x, y, pixel);
        }
    }
}
