//! Split-line dragging for designer state.

use drawerkit_core::{LineId, SplitLine};

use super::DesignerState;
use crate::drag::{commit_drag, DragSession};
use crate::history::ActionType;

impl DesignerState {
    /// Picks up a split line. Any drag already in progress is dropped.
    pub fn begin_drag(&mut self, line_id: LineId) -> bool {
        match DragSession::begin(&self.layout, line_id) {
            Ok(session) => {
                self.drag = Some(session);
                true
            }
            Err(e) => {
                tracing::debug!("Drag ignored: {}", e);
                false
            }
        }
    }

    /// Moves the live candidate; returns the snapped, clamped position.
    pub fn drag_to(&mut self, pointer: f64) -> Option<f64> {
        let session = self.drag.as_mut()?;
        Some(session.update(&self.layout, pointer))
    }

    /// Releases the line, committing the candidate position.
    ///
    /// Returns `true` if the layout changed. A rejected commit leaves the
    /// previous geometry in place.
    pub fn end_drag(&mut self) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };

        match commit_drag(&mut self.layout, session.line_id(), session.candidate()) {
            Ok(outcome) if outcome.changed() => {
                let selection_was = self.selection.selected_id();
                self.selection.retain_valid(&self.layout);
                self.commit(ActionType::Resize, selection_was);
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::debug!("Drag commit rejected: {}", e);
                false
            }
        }
    }

    /// Drops the drag without touching the layout.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Drags `line_id` to `pointer` and releases it in one step.
    pub fn drag_line(&mut self, line_id: LineId, pointer: f64) -> bool {
        if !self.begin_drag(line_id) {
            return false;
        }
        self.drag_to(pointer);
        self.end_drag()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The dragged line at its candidate position
    pub fn drag_preview(&self) -> Option<SplitLine> {
        self.drag.as_ref().map(|d| d.preview_line())
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }
}
