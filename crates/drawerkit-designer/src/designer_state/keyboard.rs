//! Keyboard shortcut handling for designer state.

use super::DesignerState;
use crate::keyboard::{EditorAction, KeyChord, ShortcutMap};

impl DesignerState {
    /// Enables shortcut handling while the editor is on screen.
    pub fn mount(&mut self) {
        self.mounted = true;
        tracing::debug!("Editor shortcuts bound ({} chords)", self.shortcuts.len());
    }

    /// Disables shortcut handling and drops any drag in progress.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.drag = None;
        tracing::debug!("Editor shortcuts unbound");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn shortcuts(&self) -> &ShortcutMap {
        &self.shortcuts
    }

    pub fn shortcuts_mut(&mut self) -> &mut ShortcutMap {
        &mut self.shortcuts
    }

    /// Runs the action bound to `chord`.
    ///
    /// Returns the action when the chord is bound and the editor is mounted,
    /// whether or not it changed anything.
    pub fn handle_key(&mut self, chord: &KeyChord) -> Option<EditorAction> {
        if !self.mounted {
            return None;
        }
        let action = self.shortcuts.resolve(chord)?;
        match action {
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
        };
        Some(action)
    }
}
