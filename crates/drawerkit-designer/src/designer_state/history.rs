//! Undo/redo for designer state.

use super::DesignerState;

impl DesignerState {
    /// Restores the previous snapshot. No-op at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            tracing::debug!("Undo ignored: at oldest history entry");
            return false;
        };
        self.apply_history(snapshot);
        true
    }

    /// Reapplies the next snapshot. No-op at the newest entry.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            tracing::debug!("Redo ignored: at newest history entry");
            return false;
        };
        self.apply_history(snapshot);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    fn apply_history(&mut self, snapshot: crate::layout::LayoutSnapshot) {
        let selection_was = self.selection.selected_id();
        self.drag = None;
        self.layout.restore(&snapshot);
        self.selection.clear();
        self.is_modified = true;
        self.notify(selection_was);
    }
}
