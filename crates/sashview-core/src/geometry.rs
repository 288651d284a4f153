//! Axis vocabulary for a one-dimensional stack of views.
//!
//! A split view positions children along a single *primary* axis: vertical
//! stacks grow top-to-bottom, horizontal stacks left-to-right. The
//! [`Orientation`] is the strategy that projects pointer coordinates onto
//! that axis and stamps `(offset, extent)` placements into concrete
//! rectangles.
//!
//! # Invariants
//!
//! 1. `Orientation::place` puts `offset`/`extent` on the primary axis and
//!    `orthogonal` on the other one; the origin of the free axis is `0`.
//! 2. `primary(p)` of a [`PointerPosition`] is `p.y` for vertical stacks and
//!    `p.x` for horizontal ones.
//!
//! # Failure Modes
//!
//! None — all operations are infallible.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Axis along which a split view stacks its children.
///
/// `Vertical` stacks top-to-bottom (sashes are horizontal lines); its
/// primary axis is Y. `Horizontal` stacks left-to-right; primary axis X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Project a pointer position onto the primary axis.
    #[must_use]
    pub const fn primary(self, pointer: PointerPosition) -> i32 {
        match self {
            Self::Vertical => pointer.y,
            Self::Horizontal => pointer.x,
        }
    }

    /// Stamp a primary-axis placement into a rectangle.
    ///
    /// For vertical stacks `offset`/`extent` become `y`/`height` and
    /// `orthogonal` becomes `width`; horizontal stacks mirror this.
    #[must_use]
    pub const fn place(self, offset: u32, extent: u32, orthogonal: u32) -> Rect {
        match self {
            Self::Vertical => Rect {
                x: 0,
                y: offset,
                width: orthogonal,
                height: extent,
            },
            Self::Horizontal => Rect {
                x: offset,
                y: 0,
                width: extent,
                height: orthogonal,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// PointerPosition
// ---------------------------------------------------------------------------

/// Pointer coordinates on both axes, in container pixels.
///
/// Coordinates are signed: a drag may leave the container on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    /// Build a pointer position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// Axis-aligned pixel rectangle in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Build a rectangle.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub const fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub const fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the rectangle contains the given point.
    #[must_use]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && (x as u32) >= self.x
            && (x as u32) < self.right()
            && (y as u32) >= self.y
            && (y as u32) < self.bottom()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
