//! # tricrop
//!
//! Cut a wide banner into three fixed square slots and export each one as a
//! PNG, a JPEG and a soft elliptical cutout PNG.
//!
//! # Pipeline
//!
//! ```text
//! banner.png ─ decode ─┬─ Left   (328,3)-(778,454)   ─┐
//!                      ├─ Center (556,3)-(1005,454)  ─┼─ crop → 450×450 → ellipse → export
//!                      └─ Right  (782,3)-(1232,454)  ─┘
//!
//! banner/banner-1.png  banner/banner-1.jpg  banner/banner-1_ellipse.png
//! banner/banner-2.png  ...                  banner/banner-3_ellipse.png
//! ```
//!
//! Each slot rectangle is checked against the source bounds before any
//! pixels are touched. A rectangle that does not fit is a hard error: it is
//! never clamped, and the run for that image stops there.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`batch`] | Ordered multi-file runs with abort / keep-going failure policy |
//! | [`crop`] | Per-image pipeline: load, slot loop, buffer lifetimes, progress events |
//! | [`regions`] | The three compiled-in slot rectangles and their output size |
//! | [`export`] | Sequence-numbered file writing and lazy output directory creation |
//! | [`naming`] | Output directory and file name derivation from the source path |
//! | [`config`] | Export options (formats, quality) |
//! | [`imaging`] | Rect validation, crop/resize, ellipse mask, codec backend |
//! | [`output`] | CLI output formatting for progress, failures and summary |
//!
//! # Design Decisions
//!
//! ## One Image at a Time
//!
//! Sources are processed sequentially and each gets its own [`crop::Cropper`].
//! Slot buffers are dropped at the end of every iteration, so memory stays
//! bounded by one source, one slot and one cutout regardless of batch size.
//!
//! ## Anti-Aliased Cutout
//!
//! The ellipse is rasterized at twice the output size and downsampled with
//! Lanczos3, which gives a soft edge without any feathering parameters.

pub mod batch;
pub mod config;
pub mod crop;
pub mod export;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod regions;

#[cfg(test)]
pub(crate) mod test_helpers;
