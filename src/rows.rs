//! Greedy row bucketing.

use alloc::vec::Vec;

use crate::aspect::width_for_height;
use crate::frame::{Frame, Row};

/// Running state of the greedy pass: closed rows, the open row, and the
/// open row's width with every member scaled to the target height.
#[derive(Default)]
struct Bucketing {
    rows: Vec<Row>,
    current: Row,
    width_total: u64,
}

impl Bucketing {
    fn close(&mut self) {
        tracing::trace!(
            row = self.rows.len(),
            frames = self.current.len(),
            width_total = self.width_total,
            "row closed"
        );
        self.rows.push(core::mem::take(&mut self.current));
        self.width_total = 0;
    }
}

/// Partition `frames` into rows, in input order, without resizing them.
///
/// Each frame is appended to the open row along with its width at
/// `max_row_height`. The row closes as soon as that running width reaches
/// `container_width`, so the closing frame belongs to the row it overflows.
/// The final row closes when input runs out, however narrow it is.
///
/// Returns no rows when `frames` is empty or either size is zero.
///
/// ```
/// use zenjustify::{Frame, rows::build_rows};
///
/// let frames = [Frame::new(800, 360), Frame::new(300, 440), Frame::new(200, 400)];
/// let rows = build_rows(&frames, 360, 800);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1], vec![Frame::new(300, 440), Frame::new(200, 400)]);
/// ```
pub fn build_rows(frames: &[Frame], max_row_height: u32, container_width: u32) -> Vec<Row> {
    if frames.is_empty() || max_row_height == 0 || container_width == 0 {
        return Vec::new();
    }
    let last = frames.len() - 1;
    let state = frames
        .iter()
        .enumerate()
        .fold(Bucketing::default(), |mut state, (index, frame)| {
            state.width_total += u64::from(width_for_height(frame.height, frame.width, max_row_height));
            state.current.push(*frame);
            if state.width_total >= u64::from(container_width) || index == last {
                state.close();
            }
            state
        });
    state.rows
}
