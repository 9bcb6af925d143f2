//! The three fixed crop slots.
//!
//! The geometry is tuned for a ~1280px wide banner. Slots overlap on purpose:
//! each one is a roughly square window centered on a different part of the
//! banner, and neighbouring windows share a strip of pixels.
//!
//! ```text
//!        328                778
//!  Left   |==================|
//!                  556                1005
//!  Center           |==================|
//!                              782                1232
//!  Right                        |==================|
//! ```
//!
//! Every slot spans rows 3..454 and is resized to 450×450.

use crate::imaging::{Dimensions, Rect};
use serde::Serialize;

/// Output size shared by every slot.
pub const SLOT_SIZE: Dimensions = Dimensions::new(450, 450);

/// Named crop slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Left,
    Center,
    Right,
}

/// Source rectangle and output size for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionConfig {
    pub region: Region,
    pub rect: Rect,
    pub size: Dimensions,
}

impl Region {
    /// All slots in processing order.
    pub const ALL: [Region; 3] = [Region::Left, Region::Center, Region::Right];

    pub const fn config(self) -> RegionConfig {
        let rect = match self {
            Region::Left => Rect::new(328, 3, 778, 454),
            Region::Center => Rect::new(556, 3, 1005, 454),
            Region::Right => Rect::new(782, 3, 1232, 454),
        };
        RegionConfig {
            region: self,
            rect,
            size: SLOT_SIZE,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Region::Left => "left",
            Region::Center => "center",
            Region::Right => "right",
        }
    }
}
