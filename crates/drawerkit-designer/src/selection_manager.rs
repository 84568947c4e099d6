use drawerkit_core::BlockId;

use crate::layout::Layout;

/// Tracks which block, if any, is selected.
///
/// `SelectionManager` is responsible for:
/// - Holding the single selected block id
/// - Point-based selection (clicking inside a block)
/// - Dropping selections that no longer refer to a live block
///
/// # Selection Model
///
/// At most one block is selected. Splitting the selected block, undo and redo
/// all clear the selection because the block they referred to may be gone.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the selected block, if any
    selected_id: Option<BlockId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use drawerkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected block.
    pub fn selected_id(&self) -> Option<BlockId> {
        self.selected_id
    }

    pub fn is_selected(&self, id: BlockId) -> bool {
        self.selected_id == Some(id)
    }

    /// Selects `id` if it names a block in `layout`.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed. Unknown ids leave the selection as is.
    pub fn select(&mut self, layout: &Layout, id: BlockId) -> bool {
        if layout.block(id).is_none() {
            tracing::debug!("Ignoring selection of unknown block {}", id);
            return false;
        }
        self.set(Some(id))
    }

    /// Selects the block under a point in internal units.
    ///
    /// Clicking outside the drawer clears the selection.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed.
    pub fn select_at(&mut self, layout: &Layout, x: f64, y: f64) -> bool {
        let hit = layout.block_at(x, y).map(|b| b.id);
        self.set(hit)
    }

    /// Clears the selection, returning `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.set(None)
    }

    /// Drops the selection if its block no longer exists.
    pub fn retain_valid(&mut self, layout: &Layout) -> bool {
        match self.selected_id {
            Some(id) if layout.block(id).is_none() => self.set(None),
            _ => false,
        }
    }

    fn set(&mut self, id: Option<BlockId>) -> bool {
        let changed = self.selected_id != id;
        self.selected_id = id;
        changed
    }
}
