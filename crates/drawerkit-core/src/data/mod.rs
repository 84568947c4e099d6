//! Data models for the drawer layout
//!
//! This module provides:
//! - Drawer dimensions in real-world inches
//! - Blocks (rectangular compartments) in internal grid units
//! - Split lines separating blocks
//! - The axis vocabulary used by split and resize operations
//! - Materials catalog for the selected finish

pub mod materials;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a block within one layout
pub type BlockId = u64;

/// Stable identifier of a split line within one layout
pub type LineId = u64;

/// Axis along which geometry is measured or resized
///
/// A horizontal split line separates blocks along `Y` (it changes heights);
/// a vertical one separates them along `X` (it changes widths).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal axis (width)
    X,
    /// Vertical axis (depth on the drawer floor, height on the canvas)
    Y,
}

impl Axis {
    /// The perpendicular axis
    pub fn cross(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Drawer dimensions in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Interior width (left to right)
    pub width: f64,
    /// Interior depth (front to back)
    pub depth: f64,
    /// Divider height
    pub height: f64,
}

impl Dimensions {
    /// Creates new dimensions.
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Floor area in square inches
    pub fn footprint(&self) -> f64 {
        self.width * self.depth
    }

    /// True when every dimension is finite and positive
    pub fn is_valid(&self) -> bool {
        [self.width, self.depth, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\" x {}\" x {}\"", self.width, self.depth, self.height)
    }
}

/// A rectangular compartment, in internal grid units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Block {
    /// Creates a new block.
    pub fn new(id: BlockId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
        }
    }

    /// Leading edge along `axis`
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Trailing edge along `axis`
    pub fn end(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis)
    }

    /// Size along `axis`
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Moves the leading edge along `axis` without touching the extent.
    pub fn set_start(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    /// Sets the size along `axis`.
    pub fn set_extent(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.width = value,
            Axis::Y => self.height = value,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Point-in-rectangle test, edges inclusive.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// True when the interiors of the two blocks intersect by more than `epsilon`.
    pub fn overlaps(&self, other: &Block, epsilon: f64) -> bool {
        let overlap_x = self.end(Axis::X).min(other.end(Axis::X)) - self.x.max(other.x);
        let overlap_y = self.end(Axis::Y).min(other.end(Axis::Y)) - self.y.max(other.y);
        overlap_x > epsilon && overlap_y > epsilon
    }
}

/// A line segment separating blocks, in internal grid units
///
/// The endpoints are co-linear: `y1 == y2` when horizontal, `x1 == x2` when
/// vertical, and `(x1, y1)` is always the lower end of the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub id: LineId,
    pub is_horizontal: bool,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl SplitLine {
    /// Creates a horizontal line at `y` spanning `x1..x2`.
    pub fn horizontal(id: LineId, y: f64, x1: f64, x2: f64) -> Self {
        Self {
            id,
            is_horizontal: true,
            x1: x1.min(x2),
            y1: y,
            x2: x1.max(x2),
            y2: y,
        }
    }

    /// Creates a vertical line at `x` spanning `y1..y2`.
    pub fn vertical(id: LineId, x: f64, y1: f64, y2: f64) -> Self {
        Self {
            id,
            is_horizontal: false,
            x1: x,
            y1: y1.min(y2),
            x2: x,
            y2: y1.max(y2),
        }
    }

    /// The axis this line resizes when dragged
    pub fn axis(&self) -> Axis {
        if self.is_horizontal {
            Axis::Y
        } else {
            Axis::X
        }
    }

    /// Coordinate of the line on its resize axis
    pub fn position(&self) -> f64 {
        if self.is_horizontal {
            self.y1
        } else {
            self.x1
        }
    }

    /// Moves the line to `value` on its resize axis.
    pub fn set_position(&mut self, value: f64) {
        if self.is_horizontal {
            self.y1 = value;
            self.y2 = value;
        } else {
            self.x1 = value;
            self.x2 = value;
        }
    }

    /// `(start, end)` of the line along its spanning axis
    pub fn span(&self) -> (f64, f64) {
        if self.is_horizontal {
            (self.x1, self.x2)
        } else {
            (self.y1, self.y2)
        }
    }

    /// Replaces the span along the spanning axis.
    pub fn set_span(&mut self, start: f64, end: f64) {
        if self.is_horizontal {
            self.x1 = start;
            self.x2 = end;
        } else {
            self.y1 = start;
            self.y2 = end;
        }
    }

    pub fn length(&self) -> f64 {
        let (start, end) = self.span();
        end - start
    }
}
