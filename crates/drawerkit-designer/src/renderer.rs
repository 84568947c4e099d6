//! Read-only view of a layout shared by the render adapters.

use drawerkit_core::{Block, BlockId, Dimensions, Material, SplitLine};

use crate::layout::Layout;

/// Everything a renderer may look at
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub dimensions: &'a Dimensions,
    /// Internal units per inch
    pub units_per_inch: f64,
    /// Outer width in internal units
    pub width: f64,
    /// Outer depth in internal units
    pub depth: f64,
    pub blocks: &'a [Block],
    pub split_lines: &'a [SplitLine],
    pub material: Option<&'a Material>,
    pub selected: Option<BlockId>,
    /// Dragged line at its live candidate position
    pub drag_preview: Option<SplitLine>,
}

impl<'a> RenderInput<'a> {
    pub fn from_layout(layout: &'a Layout, material: Option<&'a Material>) -> Self {
        Self {
            dimensions: layout.dimensions(),
            units_per_inch: layout.grid().units_per_inch,
            width: layout.width(),
            depth: layout.depth(),
            blocks: layout.blocks(),
            split_lines: layout.split_lines(),
            material,
            selected: None,
            drag_preview: None,
        }
    }

    pub fn with_selection(mut self, selected: Option<BlockId>) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_drag_preview(mut self, line: Option<SplitLine>) -> Self {
        self.drag_preview = line;
        self
    }
}
