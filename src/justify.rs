//! Per-row height normalization and width justification.
//!
//! Both passes resize one dimension and then re-derive the other from the
//! frame's previous aspect ratio. That second hop is kept even where the
//! result looks redundant, because its truncation is part of the output.

use alloc::vec::Vec;

use crate::aspect::{floor_to_u32, height_for_width, width_for_height};
use crate::frame::{Frame, Row, row_height, row_width};

/// Rescale every frame in `row` to a shared height.
///
/// The shared height is the tallest frame's height, clamped down to
/// `max_row_height`. Rows shorter than the limit are never stretched up.
/// Each frame gets its width at that height, and then its height
/// recomputed from the new width.
///
/// Returns an empty row when `row` is empty or `max_row_height` is zero.
pub fn normalize_row_height(row: &[Frame], max_row_height: u32) -> Row {
    if row.is_empty() || max_row_height == 0 {
        return Vec::new();
    }
    let adjusted = row_height(row).min(max_row_height);
    row.iter()
        .map(|f| {
            let width = width_for_height(f.height, f.width, adjusted);
            Frame::new(width, height_for_width(f.height, f.width, width))
        })
        .collect()
}

/// Shrink `row` proportionally so its total width fits `container_width`.
///
/// Rows already at or under the container width come back unchanged; they
/// are not widened to fill it. Otherwise each width becomes
/// `floor(width / total * container_width)` and each height follows from
/// the frame's own pre-shrink aspect ratio.
///
/// Returns an empty row when `row` is empty or `container_width` is zero.
pub fn justify_row(row: &[Frame], container_width: u32) -> Row {
    if row.is_empty() || container_width == 0 {
        return Vec::new();
    }
    let width_total = row_width(row);
    if width_total <= u64::from(container_width) {
        return row.to_vec();
    }
    tracing::trace!(width_total, container_width, "shrinking row");
    let total = width_total as f64;
    let container = f64::from(container_width);
    row.iter()
        .map(|f| {
            let width = floor_to_u32((f64::from(f.width) / total) * container);
            Frame::new(width, height_for_width(f.height, f.width, width))
        })
        .collect()
}
