//! Editor session state.
//! Owns the layout, its history and selection, and routes every edit through
//! the split and drag engines.
//!
//! This module is split into submodules for better organization:
//! - `editing`: Initialize, selection, add row/column, clear
//! - `drag`: Live drag of split lines and commit on release
//! - `history`: Undo/redo functionality
//! - `keyboard`: Shortcut mounting and dispatch
//! - `file_io`: Save/load and export operations
//!
//! Every edit either applies completely, records exactly one history entry
//! and notifies subscribers, or changes nothing. Rejected edits return
//! `false` and are logged at debug level.

mod drag;
mod editing;
mod file_io;
mod history;
mod keyboard;

use std::path::PathBuf;

use drawerkit_core::{
    Dimensions, EventDispatcher, LayoutError, LayoutEvent, LayoutListener, Material,
    MaterialLibrary, Shared, SubscriptionId,
};
use drawerkit_settings::EditorSettings;

use crate::drag::DragSession;
use crate::history::{ActionType, HistoryManager};
use crate::keyboard::ShortcutMap;
use crate::layout::Layout;
use crate::pricing::{self, PriceQuote};
use crate::renderer::RenderInput;
use crate::selection_manager::SelectionManager;

/// Designer state for one editing session
#[derive(Debug)]
pub struct DesignerState {
    pub(crate) layout: Layout,
    pub(crate) history: HistoryManager,
    pub(crate) selection: SelectionManager,
    pub(crate) drag: Option<DragSession>,
    pub(crate) events: EventDispatcher,
    pub(crate) shortcuts: ShortcutMap,
    pub(crate) mounted: bool,
    pub(crate) materials: MaterialLibrary,
    pub(crate) selected_material: Option<String>,
    pub(crate) settings: EditorSettings,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
}

impl DesignerState {
    /// Creates a session for a drawer of `dimensions` (inches).
    pub fn new(settings: EditorSettings, dimensions: Dimensions) -> Result<Self, LayoutError> {
        let layout = Layout::new(dimensions, settings.grid_spec())?;
        let history = HistoryManager::new(layout.snapshot(), settings.history_depth);
        let materials = MaterialLibrary::with_defaults();
        let selected_material = settings
            .export
            .default_material
            .clone()
            .filter(|id| materials.contains(id))
            .or_else(|| materials.default_material().map(|m| m.id.clone()));

        tracing::info!("New drawer layout session for {}", dimensions);
        Ok(Self {
            layout,
            history,
            selection: SelectionManager::new(),
            drag: None,
            events: EventDispatcher::new(),
            shortcuts: ShortcutMap::with_defaults(),
            mounted: false,
            materials,
            selected_material,
            settings,
            current_file_path: None,
            is_modified: false,
            design_name: "Untitled".to_string(),
        })
    }

    /// Session with default settings
    pub fn with_dimensions(dimensions: Dimensions) -> Result<Self, LayoutError> {
        Self::new(EditorSettings::default(), dimensions)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn selected_block(&self) -> Option<u64> {
        self.selection.selected_id()
    }

    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    pub fn materials_mut(&mut self) -> &mut MaterialLibrary {
        &mut self.materials
    }

    pub fn selected_material_id(&self) -> Option<&str> {
        self.selected_material.as_deref()
    }

    pub fn selected_material(&self) -> Option<&Material> {
        self.selected_material
            .as_deref()
            .and_then(|id| self.materials.get(id))
    }

    /// Selects a material; unknown ids are ignored.
    pub fn set_material(&mut self, id: &str) -> bool {
        if !self.materials.contains(id) {
            tracing::warn!("Unknown material '{}'", id);
            return false;
        }
        if self.selected_material.as_deref() == Some(id) {
            return false;
        }
        self.selected_material = Some(id.to_string());
        self.is_modified = true;
        true
    }

    /// Live price at the configured rate
    pub fn price_quote(&self) -> PriceQuote {
        pricing::quote(&self.layout, self.settings.pricing.price_per_square_inch)
    }

    /// Read-only view for the 2D canvas and 3D preview
    pub fn render_input(&self) -> RenderInput<'_> {
        RenderInput::from_layout(&self.layout, self.selected_material())
            .with_selection(self.selection.selected_id())
            .with_drag_preview(self.drag.as_ref().map(|d| d.preview_line()))
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&LayoutEvent) + 'static,
    {
        self.events.subscribe(handler)
    }

    pub fn subscribe_listener<L>(&mut self, listener: Shared<L>) -> SubscriptionId
    where
        L: LayoutListener + 'static,
    {
        self.events.subscribe_listener(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Records the current layout and notifies subscribers of a committed edit.
    pub(crate) fn commit(&mut self, action: ActionType, selection_was: Option<u64>) {
        self.history.record(action, self.layout.snapshot());
        self.is_modified = true;
        self.notify(selection_was);
    }

    /// Publishes compartments, selection (if it changed) and history events.
    pub(crate) fn notify(&mut self, selection_was: Option<u64>) {
        self.events
            .publish(LayoutEvent::CompartmentsChanged(self.layout.blocks().to_vec()));
        let selected = self.selection.selected_id();
        if selected != selection_was {
            self.events.publish(LayoutEvent::SelectionChanged(selected));
        }
        self.events.publish(LayoutEvent::HistoryChanged {
            index: self.history.index(),
            len: self.history.len(),
        });
    }
}
