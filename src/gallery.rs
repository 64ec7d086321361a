//! Layout engine and gallery configuration.
//!
//! [`layout_frames`] is the lenient pipeline: bucket frames into rows, then
//! normalize each row's height and justify its width. Invalid input comes
//! back as an empty [`Layout`], never as an error.
//!
//! [`Gallery`] wraps the same pipeline with presentation settings and a
//! validating [`Gallery::compute`] for callers that need to tell bad input
//! apart from an empty gallery.
//!
//! # Example
//!
//! ```
//! use zenjustify::{Frame, Gallery};
//!
//! let frames = [
//!     Frame::new(1000, 360),
//!     Frame::new(400, 600),
//!     Frame::new(600, 400),
//! ];
//! let gallery = Gallery::new(800, 360).spacing(10).compute(&frames).unwrap();
//!
//! assert_eq!(gallery.layout.rows()[0], vec![Frame::new(800, 288)]);
//! let second = gallery.placements().nth(1).unwrap();
//! assert_eq!((second.row, second.column, second.y), (1, 0, 288));
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::frame::{Frame, Layout, row_height, row_width};
use crate::justify::{justify_row, normalize_row_height};
use crate::rows::build_rows;

/// Lay out `frames` in justified rows no taller than `max_row_height` and
/// no wider than `container_width`.
///
/// Returns an empty layout when `frames` is empty or either size is zero.
pub fn layout_frames(frames: &[Frame], max_row_height: u32, container_width: u32) -> Layout {
    if frames.is_empty() || max_row_height == 0 || container_width == 0 {
        return Layout::default();
    }
    let rows: Vec<_> = build_rows(frames, max_row_height, container_width)
        .iter()
        .map(|row| justify_row(&normalize_row_height(row, max_row_height), container_width))
        .collect();
    tracing::debug!(
        frames = frames.len(),
        rows = rows.len(),
        max_row_height,
        container_width,
        "layout computed"
    );
    Layout::new(rows)
}

/// Gallery configuration: container size plus presentation spacing.
///
/// Spacing and row gap only offset frames in [`GalleryLayout::placements`];
/// they never change frame sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Gallery {
    pub container_width: u32,
    pub max_row_height: u32,
    /// Horizontal gap between neighbouring frames in a row.
    pub spacing: u32,
    /// Vertical gap between rows.
    pub row_gap: u32,
}

impl Gallery {
    /// Create a gallery with no spacing.
    pub const fn new(container_width: u32, max_row_height: u32) -> Self {
        Self {
            container_width,
            max_row_height,
            spacing: 0,
            row_gap: 0,
        }
    }

    /// Set the horizontal gap between frames in a row.
    pub const fn spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the vertical gap between rows.
    pub const fn row_gap(mut self, row_gap: u32) -> Self {
        self.row_gap = row_gap;
        self
    }

    /// Lenient layout, same as [`layout_frames`].
    pub fn layout(&self, frames: &[Frame]) -> Layout {
        layout_frames(frames, self.max_row_height, self.container_width)
    }

    /// Validate the configuration and every frame, then lay them out.
    ///
    /// An empty `frames` slice is valid and yields an empty layout.
    pub fn compute(&self, frames: &[Frame]) -> Result<GalleryLayout, GalleryError> {
        if self.container_width == 0 {
            return Err(GalleryError::ZeroContainerWidth);
        }
        if self.max_row_height == 0 {
            return Err(GalleryError::ZeroMaxRowHeight);
        }
        if let Some(index) = frames.iter().position(Frame::is_empty) {
            return Err(GalleryError::ZeroFrameDimension { index });
        }
        Ok(GalleryLayout {
            layout: self.layout(frames),
            spacing: self.spacing,
            row_gap: self.row_gap,
        })
    }
}

/// Gallery validation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GalleryError {
    /// Container width is zero.
    ZeroContainerWidth,
    /// Maximum row height is zero.
    ZeroMaxRowHeight,
    /// The frame at `index` has zero width or height.
    ZeroFrameDimension { index: usize },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroContainerWidth => f.write_str("container width is zero"),
            Self::ZeroMaxRowHeight => f.write_str("maximum row height is zero"),
            Self::ZeroFrameDimension { index } => {
                write!(f, "frame {index} has a zero width or height")
            }
        }
    }
}

impl core::error::Error for GalleryError {}

/// A frame positioned in the gallery.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index within the row, left to right.
    pub column: usize,
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Resized frame.
    pub frame: Frame,
}

/// A computed layout together with the spacing used to place it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GalleryLayout {
    pub layout: Layout,
    pub spacing: u32,
    pub row_gap: u32,
}

impl GalleryLayout {
    /// Position every frame, in row-major order.
    ///
    /// Each frame after the first in a row is preceded by `spacing`; each
    /// row after the first starts `row_gap` below the tallest frame of the
    /// row above it.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        let row_gap = self.row_gap;
        let spacing = self.spacing;
        self.layout
            .rows()
            .iter()
            .enumerate()
            .scan(0u32, move |y, (row_index, row)| {
                let top = *y;
                *y = top
                    .saturating_add(row_height(row))
                    .saturating_add(row_gap);
                Some((row_index, top, row))
            })
            .flat_map(move |(row_index, top, row)| {
                row.iter()
                    .enumerate()
                    .scan(0u32, move |x, (column, frame)| {
                        let left = *x;
                        *x = left.saturating_add(frame.width).saturating_add(spacing);
                        Some(Placement {
                            row: row_index,
                            column,
                            x: left,
                            y: top,
                            frame: *frame,
                        })
                    })
            })
    }

    /// Bounding box of all placements: the widest row including spacing by
    /// the summed row heights including row gaps.
    pub fn size(&self) -> Frame {
        let rows = self.layout.rows();
        let width = rows
            .iter()
            .map(|row| {
                let gaps = row.len().saturating_sub(1) as u64 * u64::from(self.spacing);
                row_width(row) + gaps
            })
            .max()
            .unwrap_or(0);
        let height = rows.iter().map(|row| u64::from(row_height(row))).sum::<u64>()
            + rows.len().saturating_sub(1) as u64 * u64::from(self.row_gap);
        Frame::new(saturate(width), saturate(height))
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
