//! Layout editing operations for designer state.

use drawerkit_core::{BlockId, Dimensions, LayoutEvent};

use super::DesignerState;
use crate::history::ActionType;
use crate::layout::Layout;
use crate::split::{split_block, SplitDirection};

impl DesignerState {
    /// Starts over with a single block for `dimensions`.
    ///
    /// Selection and history are reset. Invalid dimensions keep the current
    /// layout and return `false`.
    pub fn initialize(&mut self, dimensions: Dimensions) -> bool {
        let layout = match Layout::new(dimensions, self.settings.grid_spec()) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::debug!("Initialize ignored: {}", e);
                return false;
            }
        };

        let selection_was = self.selection.selected_id();
        self.layout = layout;
        self.selection.clear();
        self.drag = None;
        self.history
            .reset(self.layout.snapshot(), ActionType::Initialize);
        self.is_modified = false;
        tracing::info!("Initialized drawer layout {}", dimensions);
        self.notify(selection_was);
        true
    }

    /// Selects a block by id.
    pub fn select_block(&mut self, id: BlockId) -> bool {
        let changed = self.selection.select(&self.layout, id);
        if changed {
            self.events
                .publish(LayoutEvent::SelectionChanged(self.selection.selected_id()));
        }
        changed
    }

    /// Selects the block under a canvas point in internal units.
    pub fn select_at(&mut self, x: f64, y: f64) -> bool {
        let changed = self.selection.select_at(&self.layout, x, y);
        if changed {
            self.events
                .publish(LayoutEvent::SelectionChanged(self.selection.selected_id()));
        }
        changed
    }

    pub fn clear_selection(&mut self) -> bool {
        let changed = self.selection.clear();
        if changed {
            self.events.publish(LayoutEvent::SelectionChanged(None));
        }
        changed
    }

    /// Whether "Add Row" would succeed right now.
    pub fn can_add_row(&self) -> bool {
        self.can_split(SplitDirection::Row)
    }

    /// Whether "Add Column" would succeed right now.
    pub fn can_add_column(&self) -> bool {
        self.can_split(SplitDirection::Column)
    }

    fn can_split(&self, direction: SplitDirection) -> bool {
        let Some(block) = self
            .selection
            .selected_id()
            .and_then(|id| self.layout.block(id))
        else {
            return false;
        };
        let grid = self.layout.grid();
        let extent = block.extent(direction.axis());
        if self.settings.grid.guard_undersized_split {
            extent >= grid.min_splittable() - grid.epsilon
        } else {
            extent >= 2.0 * grid.grid_size
        }
    }

    /// Splits the selected block into top and bottom halves.
    pub fn add_row(&mut self) -> bool {
        self.split_selected(SplitDirection::Row)
    }

    /// Splits the selected block into left and right halves.
    pub fn add_column(&mut self) -> bool {
        self.split_selected(SplitDirection::Column)
    }

    fn split_selected(&mut self, direction: SplitDirection) -> bool {
        let Some(selected) = self.selection.selected_id() else {
            tracing::debug!("Add {} ignored: no block selected", direction);
            return false;
        };

        let guard = self.settings.grid.guard_undersized_split;
        match split_block(&mut self.layout, selected, direction, guard) {
            Ok(_) => {
                self.selection.clear();
                let action = match direction {
                    SplitDirection::Row => ActionType::AddRow,
                    SplitDirection::Column => ActionType::AddColumn,
                };
                self.commit(action, Some(selected));
                true
            }
            Err(e) => {
                tracing::debug!("Add {} ignored: {}", direction, e);
                false
            }
        }
    }

    /// Returns to a single block, keeping the edit undoable.
    pub fn clear(&mut self) -> bool {
        if self.layout.split_lines().is_empty() {
            tracing::debug!("Clear ignored: layout has no splits");
            return false;
        }
        let selection_was = self.selection.selected_id();
        self.drag = None;
        self.layout.reset();
        self.selection.clear();
        self.commit(ActionType::Clear, selection_was);
        true
    }
}
