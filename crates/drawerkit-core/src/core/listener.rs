//! Layout listener interface
//!
//! Defines the listener trait for layout events

use crate::core::event::LayoutEvent;
use crate::data::{Block, BlockId};

/// Listener trait for layout events
///
/// Implement this trait to receive notifications of committed layout changes.
/// Every method has an empty default so implementors pick what they need.
pub trait LayoutListener {
    /// Called after every committed mutation with the current blocks
    fn on_compartments_changed(&mut self, _blocks: &[Block]) {}

    /// Called when the selected block changes
    fn on_selection_changed(&mut self, _selected: Option<BlockId>) {}

    /// Called when the history cursor moves or the history grows
    fn on_history_changed(&mut self, _index: usize, _len: usize) {}

    /// Route an event to the matching callback
    fn dispatch(&mut self, event: &LayoutEvent) {
        match event {
            LayoutEvent::CompartmentsChanged(blocks) => self.on_compartments_changed(blocks),
            LayoutEvent::SelectionChanged(selected) => self.on_selection_changed(*selected),
            LayoutEvent::HistoryChanged { index, len } => self.on_history_changed(*index, *len),
        }
    }
}
