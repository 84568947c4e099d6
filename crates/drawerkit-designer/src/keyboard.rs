//! Keyboard shortcuts for the layout editor.
//!
//! Chords are written the way menus show them (`"Ctrl+Z"`, `"Cmd+Shift+Z"`)
//! and resolve to an [`EditorAction`]. `Ctrl` and `Cmd` are bound side by
//! side so the same map works on every platform.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Action triggered by a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    Undo,
    Redo,
}

impl fmt::Display for EditorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorAction::Undo => write!(f, "Undo"),
            EditorAction::Redo => write!(f, "Redo"),
        }
    }
}

/// A key with its modifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub ctrl: bool,
    /// Command key on macOS, Super elsewhere
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    /// Key name, upper-cased (`"Z"`, `"F5"`)
    pub key: String,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            ctrl: false,
            meta: false,
            shift: false,
            alt: false,
            key: key.into().to_uppercase(),
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

impl FromStr for KeyChord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = match parts.pop() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(format!("Missing key in shortcut '{}'", s)),
        };

        let mut chord = KeyChord::new(key);
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => chord.ctrl = true,
                "cmd" | "command" | "meta" | "super" => chord.meta = true,
                "shift" => chord.shift = true,
                "alt" | "option" => chord.alt = true,
                other => return Err(format!("Unknown modifier '{}' in '{}'", other, s)),
            }
        }
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.meta {
            write!(f, "Cmd+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Chord to action bindings
#[derive(Debug, Clone, Default)]
pub struct ShortcutMap {
    bindings: HashMap<KeyChord, EditorAction>,
}

impl ShortcutMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Undo on Ctrl/Cmd+Z, redo on Ctrl/Cmd+Y and Ctrl/Cmd+Shift+Z.
    pub fn with_defaults() -> Self {
        let mut map = Self::new();
        for primary in [KeyChord::new("Z").ctrl(), KeyChord::new("Z").meta()] {
            map.bind(primary.clone(), EditorAction::Undo);
            map.bind(primary.shift(), EditorAction::Redo);
        }
        map.bind(KeyChord::new("Y").ctrl(), EditorAction::Redo);
        map.bind(KeyChord::new("Y").meta(), EditorAction::Redo);
        map
    }

    /// Binds `chord`, returning the action it replaced.
    pub fn bind(&mut self, chord: KeyChord, action: EditorAction) -> Option<EditorAction> {
        self.bindings.insert(chord, action)
    }

    pub fn unbind(&mut self, chord: &KeyChord) -> Option<EditorAction> {
        self.bindings.remove(chord)
    }

    pub fn resolve(&self, chord: &KeyChord) -> Option<EditorAction> {
        self.bindings.get(chord).copied()
    }

    /// Chords bound to `action`, sorted for display
    pub fn chords_for(&self, action: EditorAction) -> Vec<String> {
        let mut chords: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(c, _)| c.to_string())
            .collect();
        chords.sort();
        chords
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
