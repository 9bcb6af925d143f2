//! Rectangle geometry and crop validation.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! A [`Rect`] uses PIL-style box coordinates: `left` and `top` are inclusive,
//! `right` and `bottom` are exclusive, so `right - left` is the width.

use serde::Serialize;
use thiserror::Error;

/// Pixel dimensions of an image or an output slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The same box scaled by an integer factor on both axes.
    pub const fn scaled(self, factor: u32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Axis-aligned integer box `(left, top, right, bottom)`.
///
/// Construction never validates: a candidate crop may well be inverted or
/// out of bounds, and [`Rect::check`] is what reports that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Full bounds of an image: `(0, 0, width, height)`.
    ///
    /// Sides are saturated at `i32::MAX`, far beyond any decodable image.
    pub fn from_dimensions(dims: Dimensions) -> Self {
        Self::new(
            0,
            0,
            i32::try_from(dims.width).unwrap_or(i32::MAX),
            i32::try_from(dims.height).unwrap_or(i32::MAX),
        )
    }

    pub const fn left(&self) -> i32 {
        self.left
    }

    pub const fn top(&self) -> i32 {
        self.top
    }

    pub const fn right(&self) -> i32 {
        self.right
    }

    pub const fn bottom(&self) -> i32 {
        self.bottom
    }

    /// `right - left`, widened so inverted or extreme boxes cannot overflow.
    pub const fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    pub const fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// Check that `candidate` lies inside `self` with positive width and height.
    ///
    /// Sides are checked in the order left, right, top, bottom and the first
    /// failure is returned; later sides are not looked at. Bounds are computed
    /// in `i64`, so any pair of `i32` boxes is accepted or rejected, never
    /// overflowed.
    pub fn check(&self, candidate: &Rect) -> Result<(), ValidationError> {
        let (ol, ot, or, ob) = self.sides();
        let (l, t, r, b) = candidate.sides();
        if l < ol || l > r - 1 {
            return Err(ValidationError::InvalidLeft {
                value: l,
                min: ol,
                max: r - 1,
            });
        }
        if r < l + 1 || r > or {
            return Err(ValidationError::InvalidRight {
                value: r,
                min: l + 1,
                max: or,
            });
        }
        if t < ot || t > b - 1 {
            return Err(ValidationError::InvalidTop {
                value: t,
                min: ot,
                max: b - 1,
            });
        }
        if b < t + 1 || b > ob {
            return Err(ValidationError::InvalidBottom {
                value: b,
                min: t + 1,
                max: ob,
            });
        }
        Ok(())
    }

    fn sides(&self) -> (i64, i64, i64, i64) {
        (
            self.left.into(),
            self.top.into(),
            self.right.into(),
            self.bottom.into(),
        )
    }
}

/// A crop rectangle that does not fit its outer bound.
///
/// `min` and `max` are the inclusive range the offending side had to fall in.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid left value: {value} (Min: {min}, Max: {max}).")]
    InvalidLeft { value: i64, min: i64, max: i64 },
    #[error("Invalid right value: {value} (Min: {min}, Max: {max}).")]
    InvalidRight { value: i64, min: i64, max: i64 },
    #[error("Invalid top value: {value} (Min: {min}, Max: {max}).")]
    InvalidTop { value: i64, min: i64, max: i64 },
    #[error("Invalid bottom value: {value} (Min: {min}, Max: {max}).")]
    InvalidBottom { value: i64, min: i64, max: i64 },
}
