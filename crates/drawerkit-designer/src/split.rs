//! Split engine: turns one block into two separated by a new split line.

use std::fmt;

use drawerkit_core::{Axis, Block, BlockId, LayoutError, LineId, SplitLine};

use crate::layout::Layout;

/// Which way a block is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Adds a horizontal line: top and bottom children.
    Row,
    /// Adds a vertical line: left and right children.
    Column,
}

impl SplitDirection {
    /// Axis whose extent is divided
    pub fn axis(self) -> Axis {
        match self {
            SplitDirection::Row => Axis::Y,
            SplitDirection::Column => Axis::X,
        }
    }
}

impl fmt::Display for SplitDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitDirection::Row => write!(f, "row"),
            SplitDirection::Column => write!(f, "column"),
        }
    }
}

/// Ids produced by a successful split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOutcome {
    pub removed: BlockId,
    /// Top (row) or left (column) child
    pub first: BlockId,
    /// Bottom (row) or right (column) child
    pub second: BlockId,
    pub line: LineId,
}

/// Splits `block_id` at its grid-snapped midpoint.
///
/// With `guard_undersized` set, blocks smaller than two minimum-size
/// compartments along the split axis are refused. Splits that would leave a
/// zero-size child are always refused. On error the layout is untouched.
pub fn split_block(
    layout: &mut Layout,
    block_id: BlockId,
    direction: SplitDirection,
    guard_undersized: bool,
) -> Result<SplitOutcome, LayoutError> {
    let grid = *layout.grid();
    let (index, block) = layout
        .blocks()
        .iter()
        .enumerate()
        .find(|(_, b)| b.id == block_id)
        .map(|(i, b)| (i, *b))
        .ok_or(LayoutError::BlockNotFound { id: block_id })?;

    let axis = direction.axis();
    let start = block.start(axis);
    let extent = block.extent(axis);

    if guard_undersized && extent < grid.min_splittable() - grid.epsilon {
        return Err(LayoutError::BlockTooSmall {
            id: block_id,
            size: extent,
            required: grid.min_splittable(),
        });
    }

    let at = grid.snap(start + extent / 2.0);
    let first_extent = at - start;
    let second_extent = extent - first_extent;
    if first_extent <= grid.epsilon || second_extent <= grid.epsilon {
        return Err(LayoutError::BelowMinimumSize {
            id: block_id,
            size: first_extent.min(second_extent),
            min_size: grid.min_size,
        });
    }

    let first_id = layout.allocate_id();
    let second_id = layout.allocate_id();
    let line_id = layout.allocate_id();

    let mut first = Block { id: first_id, ..block };
    first.set_extent(axis, first_extent);

    let mut second = Block { id: second_id, ..block };
    second.set_start(axis, at);
    second.set_extent(axis, second_extent);

    let line = match direction {
        SplitDirection::Row => SplitLine::horizontal(line_id, at, block.x, block.end(Axis::X)),
        SplitDirection::Column => {
            SplitLine::vertical(line_id, at, block.y, block.end(Axis::Y))
        }
    };

    let mut blocks = layout.blocks().to_vec();
    blocks[index] = first;
    blocks.insert(index + 1, second);
    let mut lines = layout.split_lines().to_vec();
    lines.push(line);
    layout.replace(blocks, lines);

    tracing::debug!(
        "Split block {} as {} at {}: {} + {}",
        block_id,
        direction,
        at,
        first_id,
        second_id
    );

    Ok(SplitOutcome {
        removed: block_id,
        first: first_id,
        second: second_id,
        line: line_id,
    })
}
