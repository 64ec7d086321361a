//! Justified-row gallery layout.
//!
//! Buckets images into rows that fill a container width, then resizes every
//! image so each row shares a height and fits the container, keeping aspect
//! ratios up to integer truncation.
//!
//! Pure geometry: no pixel operations, no I/O, `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`aspect`] — Derive a missing dimension from an aspect ratio
//! - [`rows`] — Greedy bucketing of frames into rows
//! - [`justify`] — Per-row height normalization and width justification
//! - [`gallery`] — Layout engine, gallery configuration, placement
//! - `svg` — SVG preview of a computed gallery (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenjustify::{Frame, layout_frames};
//!
//! let frames = [
//!     Frame::new(1000, 360),
//!     Frame::new(400, 600),
//!     Frame::new(600, 400),
//!     Frame::new(600, 400),
//!     Frame::new(300, 400),
//!     Frame::new(300, 400),
//! ];
//! let layout = layout_frames(&frames, 360, 800);
//!
//! let lens: Vec<usize> = layout.rows().iter().map(Vec::len).collect();
//! assert_eq!(lens, [1, 3, 2]);
//! assert_eq!(layout.rows()[0][0], Frame::new(800, 288));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod aspect;
mod frame;
pub mod gallery;
pub mod justify;
pub mod rows;
#[cfg(feature = "svg")]
pub mod svg;

pub use frame::{Frame, Layout, Row, row_height, row_width};
pub use gallery::{Gallery, GalleryError, GalleryLayout, Placement, layout_frames};
