//! Frame, row and layout value types.

use alloc::vec::Vec;

/// Width × height of an image in pixels, at some stage of layout.
///
/// Native input frames describe the source image; every layout stage
/// produces new frames rather than mutating its input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Frame {
    /// Create a new frame.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height, or `None` when either side is zero.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.width as f64 / self.height as f64)
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Frame {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Frames placed side by side, left to right.
pub type Row = Vec<Frame>;

/// Sum of the widths of every frame in a row.
pub fn row_width(row: &[Frame]) -> u64 {
    row.iter().map(|f| u64::from(f.width)).sum()
}

/// Height of the tallest frame in a row, `0` for an empty row.
pub fn row_height(row: &[Frame]) -> u32 {
    row.iter().map(|f| f.height).max().unwrap_or(0)
}

/// Rows of resized frames, top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Layout {
    /// Rows in placement order.
    pub rows: Vec<Row>,
}

impl Layout {
    /// Wrap a sequence of rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Rows in placement order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of frames across all rows.
    pub fn frame_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Every frame in row-major order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.rows.iter().flatten()
    }

    /// Take ownership of the rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl From<Vec<Row>> for Layout {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl IntoIterator for Layout {
    type Item = Row;
    type IntoIter = alloc::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a Row;
    type IntoIter = core::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn aspect_ratio_of_empty_frame_is_none() {
        assert_eq!(Frame::new(0, 10).aspect_ratio(), None);
        assert_eq!(Frame::new(10, 0).aspect_ratio(), None);
        assert_eq!(Frame::new(300, 150).aspect_ratio(), Some(2.0));
    }

    #[test]
    fn row_measurements() {
        let row = vec![Frame::new(100, 50), Frame::new(200, 80)];
        assert_eq!(row_width(&row), 300);
        assert_eq!(row_height(&row), 80);
        assert_eq!(row_width(&[]), 0);
        assert_eq!(row_height(&[]), 0);
    }

    #[test]
    fn row_width_does_not_overflow_u32() {
        let row = vec![Frame::new(u32::MAX, 1), Frame::new(u32::MAX, 1)];
        assert_eq!(row_width(&row), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn layout_counts_frames_across_rows() {
        let layout = Layout::new(vec![
            vec![Frame::new(1, 1)],
            vec![Frame::new(2, 2), Frame::new(3, 3)],
        ]);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.frame_count(), 3);
        let widths: Vec<u32> = layout.frames().map(|f| f.width).collect();
        assert_eq!(widths, vec![1, 2, 3]);
    }
}
