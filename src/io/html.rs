//! Self-contained HTML rendering of a layout result
//!
//! Emits a fixed-size CSS grid container with one cell-placed `<div>` per
//! word carrying its font size, palette color, rotation, and weight, plus
//! the summary caption underneath. Empty layouts render a placeholder
//! instead of an empty grid.

use crate::io::error::{Result, file_system_error};
use crate::layout::style;
use crate::model::placed::{LayoutResult, PlacedWord};
use crate::summary::report::LayoutSummary;
use std::fmt::Write as _;
use std::path::Path;

/// Render a layout result as a standalone HTML document
pub fn render_html(
    result: &LayoutResult,
    summary: &LayoutSummary,
    columns: usize,
    rows: usize,
) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Word cloud</title>\n</head>\n<body>\n",
    );

    if result.is_empty() {
        html.push_str("<p class=\"no-data\">No data available</p>\n");
    } else {
        let _ = write!(
            html,
            "<div style=\"position: relative; width: 100%; height: 500px; \
             background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%); \
             border-radius: 10px; overflow: hidden; padding: 20px; \
             box-sizing: border-box; display: grid; \
             grid-template-columns: repeat({columns}, 1fr); \
             grid-template-rows: repeat({rows}, 1fr); gap: 5px;\">\n",
        );

        for placed in &result.items {
            html.push_str(&render_word(placed));
        }

        html.push_str("</div>\n");
    }

    let _ = write!(
        html,
        "<div style=\"margin-top: 10px; text-align: center; color: #666; font-size: 14px;\">{}</div>\n",
        escape(&summary.caption()),
    );

    html.push_str("</body>\n</html>\n");
    html
}

/// Render a layout result to an HTML file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be written
pub fn write_html(
    result: &LayoutResult,
    summary: &LayoutSummary,
    columns: usize,
    rows: usize,
    path: &Path,
) -> Result<()> {
    let html = render_html(result, summary, columns, rows);
    std::fs::write(path, html).map_err(|source| file_system_error(path, "write", source))
}

// One grid-placed div per word; hover/interaction styling is the host
// page's concern, not the renderer's
fn render_word(placed: &PlacedWord) -> String {
    let weight = if placed.emphasized { "bold" } else { "normal" };
    let color = style::palette_css(placed.palette_index);

    format!(
        "<div style=\"grid-column: {col}; grid-row: {row}; display: flex; \
         align-items: center; justify-content: center; \
         font-size: {size:.1}px; color: {color}; font-weight: {weight}; \
         transform: rotate({rot}deg); white-space: nowrap; overflow: hidden;\" \
         title=\"{word}: {freq}\">{word}</div>\n",
        col = placed.slot.column,
        row = placed.slot.row,
        size = placed.font_size_px,
        rot = placed.rotation_deg,
        word = escape(&placed.word),
        freq = placed.frequency,
    )
}

// Minimal escaping for text placed into HTML bodies and attributes
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
