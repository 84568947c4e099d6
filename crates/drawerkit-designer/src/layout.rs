//! Layout model: the drawer's rectangular subdivision.
//!
//! A [`Layout`] holds the drawer dimensions, the grid it is edited on, and the
//! current blocks and split lines. Blocks always tile the outer rectangle
//! `[0, W] x [0, D]` (in internal units) with no gaps and no overlaps.

use drawerkit_core::units::GridSpec;
use drawerkit_core::{Axis, Block, BlockId, Dimensions, LayoutError, LineId, SplitLine};
use serde::{Deserialize, Serialize};

use crate::drag::find_affected_blocks;

/// Immutable `(blocks, split lines)` pair, the unit stored in history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub blocks: Vec<Block>,
    pub split_lines: Vec<SplitLine>,
}

/// The drawer layout being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    dimensions: Dimensions,
    grid: GridSpec,
    width: f64,
    depth: f64,
    blocks: Vec<Block>,
    split_lines: Vec<SplitLine>,
    next_id: u64,
}

impl Layout {
    /// Creates a layout with a single block covering the whole drawer.
    ///
    /// Width and depth are converted to internal units and snapped to the
    /// grid; each must be at least one minimum-size compartment.
    pub fn new(dimensions: Dimensions, grid: GridSpec) -> Result<Self, LayoutError> {
        let (width, depth) = Self::outer_size(&dimensions, &grid)?;
        let mut layout = Self {
            dimensions,
            grid,
            width,
            depth,
            blocks: Vec::new(),
            split_lines: Vec::new(),
            next_id: 1,
        };
        let id = layout.allocate_id();
        layout.blocks.push(Block::new(id, 0.0, 0.0, width, depth));
        Ok(layout)
    }

    /// Rebuilds a layout from stored parts.
    ///
    /// The parts must satisfy everything an edited layout does: blocks tile
    /// the drawer, sit on the grid and respect the minimum size, and every
    /// split line has blocks on both sides of it.
    pub fn from_parts(
        dimensions: Dimensions,
        grid: GridSpec,
        snapshot: LayoutSnapshot,
    ) -> Result<Self, LayoutError> {
        let (width, depth) = Self::outer_size(&dimensions, &grid)?;
        let next_id = snapshot
            .blocks
            .iter()
            .map(|b| b.id)
            .chain(snapshot.split_lines.iter().map(|l| l.id))
            .max()
            .unwrap_or(0)
            + 1;
        let layout = Self {
            dimensions,
            grid,
            width,
            depth,
            blocks: snapshot.blocks,
            split_lines: snapshot.split_lines,
            next_id,
        };
        layout.validate_parts()?;
        Ok(layout)
    }

    fn validate_parts(&self) -> Result<(), LayoutError> {
        self.validate_tiling()?;
        let grid = &self.grid;

        for block in &self.blocks {
            for value in [block.x, block.y, block.width, block.height] {
                if !grid.is_on_grid(value) {
                    return Err(LayoutError::OffGrid { id: block.id, value });
                }
            }
            let size = block.width.min(block.height);
            if size < grid.min_size - grid.epsilon {
                return Err(LayoutError::BelowMinimumSize {
                    id: block.id,
                    size,
                    min_size: grid.min_size,
                });
            }
        }

        for line in &self.split_lines {
            let (start, end) = line.span();
            for value in [line.position(), start, end] {
                if !grid.is_on_grid(value) {
                    return Err(LayoutError::OffGrid { id: line.id, value });
                }
            }
            let affected = find_affected_blocks(self, line);
            if affected.before.is_empty() || affected.after.is_empty() {
                return Err(LayoutError::DanglingLine { id: line.id });
            }
        }
        Ok(())
    }

    fn outer_size(dimensions: &Dimensions, grid: &GridSpec) -> Result<(f64, f64), LayoutError> {
        if !dimensions.is_valid() {
            return Err(LayoutError::dimensions(format!(
                "{} must be finite and positive",
                dimensions
            )));
        }
        let width = grid.snap(grid.to_units(dimensions.width));
        let depth = grid.snap(grid.to_units(dimensions.depth));
        if width < grid.min_size || depth < grid.min_size {
            return Err(LayoutError::dimensions(format!(
                "{} is smaller than one {}\" compartment",
                dimensions,
                grid.to_inches(grid.min_size)
            )));
        }
        Ok((width, depth))
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Outer width in internal units
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Outer depth in internal units
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Outer extent along `axis`
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.depth,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn split_lines(&self) -> &[SplitLine] {
        &self.split_lines
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn split_line(&self, id: LineId) -> Option<&SplitLine> {
        self.split_lines.iter().find(|l| l.id == id)
    }

    /// First block containing the point, edges inclusive.
    pub fn block_at(&self, x: f64, y: f64) -> Option<&Block> {
        self.blocks.iter().find(|b| b.contains_point(x, y))
    }

    /// Independent copy of the current blocks and split lines.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            blocks: self.blocks.clone(),
            split_lines: self.split_lines.clone(),
        }
    }

    /// Replaces blocks and split lines with a stored snapshot.
    ///
    /// Ids are never reused after a restore: the id counter only grows.
    pub fn restore(&mut self, snapshot: &LayoutSnapshot) {
        self.blocks = snapshot.blocks.clone();
        self.split_lines = snapshot.split_lines.clone();
    }

    /// Drops every split and returns to a single whole-drawer block.
    pub fn reset(&mut self) {
        let id = self.allocate_id();
        self.blocks = vec![Block::new(id, 0.0, 0.0, self.width, self.depth)];
        self.split_lines.clear();
    }

    pub(crate) fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Swaps in a fully computed block/line set in one step.
    pub(crate) fn replace(&mut self, blocks: Vec<Block>, split_lines: Vec<SplitLine>) {
        self.blocks = blocks;
        self.split_lines = split_lines;
    }

    /// Checks that `blocks` exactly tile this layout's outer rectangle.
    pub fn check_tiling(&self, blocks: &[Block]) -> Result<(), LayoutError> {
        let eps = self.grid.epsilon;
        if blocks.is_empty() {
            return Err(LayoutError::tiling("no blocks"));
        }

        let mut area = 0.0;
        for (i, block) in blocks.iter().enumerate() {
            if block.width <= 0.0 || block.height <= 0.0 {
                return Err(LayoutError::tiling(format!("block {} is empty", block.id)));
            }
            if block.x < -eps
                || block.y < -eps
                || block.end(Axis::X) > self.width + eps
                || block.end(Axis::Y) > self.depth + eps
            {
                return Err(LayoutError::tiling(format!(
                    "block {} leaves the drawer",
                    block.id
                )));
            }
            if let Some(other) = blocks[i + 1..].iter().find(|o| block.overlaps(o, eps)) {
                return Err(LayoutError::tiling(format!(
                    "blocks {} and {} overlap",
                    block.id, other.id
                )));
            }
            area += block.area();
        }

        let expected = self.width * self.depth;
        if (area - expected).abs() > expected * 1e-9 {
            return Err(LayoutError::tiling(format!(
                "blocks cover {} of {} square units",
                area, expected
            )));
        }
        Ok(())
    }

    /// Checks the current blocks tile the drawer.
    pub fn validate_tiling(&self) -> Result<(), LayoutError> {
        self.check_tiling(&self.blocks)
    }
}
