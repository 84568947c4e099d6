//! Error handling for DrawerKit
//!
//! Provides [`LayoutError`], the reason the geometry engine refuses an edit.
//! File and serialization boundaries wrap it with `anyhow` context.

use thiserror::Error;

/// Layout error type
///
/// Describes why an edit was refused. The editor session treats every one of
/// these as a silent no-op; they exist so the engine can be tested and logged
/// precisely.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The referenced block does not exist in the layout
    #[error("Block {id} not found")]
    BlockNotFound {
        /// The missing block id.
        id: u64,
    },

    /// The referenced split line does not exist in the layout
    #[error("Split line {id} not found")]
    LineNotFound {
        /// The missing line id.
        id: u64,
    },

    /// Splitting the block would produce a child below the minimum size
    #[error("Block {id} is too small to split: {size} < {required}")]
    BlockTooSmall {
        /// The block that was asked to split.
        id: u64,
        /// Its extent along the split axis.
        size: f64,
        /// The extent needed for two minimum-size children.
        required: f64,
    },

    /// A resize would shrink a block below the minimum size
    #[error("Block {id} would shrink to {size} (minimum {min_size})")]
    BelowMinimumSize {
        /// The offending block.
        id: u64,
        /// Its resulting extent.
        size: f64,
        /// The configured minimum.
        min_size: f64,
    },

    /// A stored coordinate is not on the editing grid
    #[error("Element {id} has off-grid coordinate {value}")]
    OffGrid {
        /// The block or line carrying the coordinate.
        id: u64,
        /// The offending value in internal units.
        value: f64,
    },

    /// A split line does not separate blocks on both sides
    #[error("Split line {id} does not separate any blocks")]
    DanglingLine {
        /// The stray line.
        id: u64,
    },

    /// The resulting blocks no longer tile the drawer
    #[error("Layout no longer tiles the drawer: {reason}")]
    TilingViolation {
        /// What went wrong.
        reason: String,
    },

    /// Drawer dimensions are unusable
    #[error("Invalid drawer dimensions: {reason}")]
    InvalidDimensions {
        /// Why the dimensions were refused.
        reason: String,
    },
}

impl LayoutError {
    /// Create a tiling violation from a message
    pub fn tiling(reason: impl Into<String>) -> Self {
        LayoutError::TilingViolation {
            reason: reason.into(),
        }
    }

    /// Create an invalid-dimensions error from a message
    pub fn dimensions(reason: impl Into<String>) -> Self {
        LayoutError::InvalidDimensions {
            reason: reason.into(),
        }
    }
}
