//! Linear undo/redo over full layout snapshots.
//!
//! The history is a sliding window of at most `max_depth` snapshots with a
//! cursor pointing at the one currently displayed. Recording a new snapshot
//! discards everything after the cursor; once the window is full the oldest
//! snapshot is evicted.

use std::collections::VecDeque;
use std::fmt;

use crate::layout::LayoutSnapshot;

/// Kind of edit that produced a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Initialize,
    AddRow,
    AddColumn,
    Resize,
    Clear,
    Load,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::Initialize => write!(f, "Initialize"),
            ActionType::AddRow => write!(f, "Add Row"),
            ActionType::AddColumn => write!(f, "Add Column"),
            ActionType::Resize => write!(f, "Resize"),
            ActionType::Clear => write!(f, "Clear"),
            ActionType::Load => write!(f, "Load"),
        }
    }
}

/// One stored layout state
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub action: ActionType,
    pub snapshot: LayoutSnapshot,
}

/// Snapshot history with a cursor
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: VecDeque<HistoryEntry>,
    index: usize,
    max_depth: usize,
}

impl HistoryManager {
    /// Creates a history holding only `initial`.
    pub fn new(initial: LayoutSnapshot, max_depth: usize) -> Self {
        let mut history = Self {
            entries: VecDeque::with_capacity(max_depth.max(1)),
            index: 0,
            max_depth: max_depth.max(1),
        };
        history.reset(initial, ActionType::Initialize);
        history
    }

    /// Drops every entry and starts over from `snapshot`.
    pub fn reset(&mut self, snapshot: LayoutSnapshot, action: ActionType) {
        self.entries.clear();
        self.entries.push_back(HistoryEntry { action, snapshot });
        self.index = 0;
    }

    /// Records a new current state, discarding any redo entries.
    pub fn record(&mut self, action: ActionType, snapshot: LayoutSnapshot) {
        self.entries.truncate(self.index + 1);
        self.entries.push_back(HistoryEntry { action, snapshot });

        if self.entries.len() > self.max_depth {
            self.entries.pop_front();
        }
        self.index = self.entries.len() - 1;
        tracing::trace!("Recorded {} ({}/{})", action, self.index + 1, self.entries.len());
    }

    /// Steps back one entry and returns the snapshot to display.
    pub fn undo(&mut self) -> Option<&LayoutSnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).map(|e| &e.snapshot)
    }

    /// Steps forward one entry and returns the snapshot to display.
    pub fn redo(&mut self) -> Option<&LayoutSnapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index).map(|e| &e.snapshot)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of undo steps available
    pub fn undo_depth(&self) -> usize {
        self.index
    }

    /// Number of redo steps available
    pub fn redo_depth(&self) -> usize {
        self.entries.len() - self.index - 1
    }

    /// Label of the edit an undo would revert
    pub fn undo_description(&self) -> Option<String> {
        self.can_undo()
            .then(|| self.entries[self.index].action.to_string())
    }

    /// Label of the edit a redo would reapply
    pub fn redo_description(&self) -> Option<String> {
        self.can_redo()
            .then(|| self.entries[self.index + 1].action.to_string())
    }

    pub fn current(&self) -> Option<&LayoutSnapshot> {
        self.entries.get(self.index).map(|e| &e.snapshot)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
