//! # DrawerKit Designer
//!
//! This crate provides the interactive drawer-layout editor: a drawer is
//! recursively split into rectangular compartments by draggable divider
//! lines, under grid-snapping and minimum-size constraints, with linear
//! undo/redo and a price derived from the geometry.
//!
//! ## Core Components
//!
//! - **Layout**: Blocks and split lines tiling the drawer floor
//! - **Split**: Add a row or column to a block at its snapped midpoint
//! - **Drag**: Neighbour discovery, legal range and atomic commit for a
//!   dragged split line
//! - **History**: Capped snapshot history with a cursor
//! - **Pricing**: Footprint plus divider area
//! - **Serialization**: Design export, cart item, manufacturing spec, design files
//! - **Rendering**: 2D SVG and 3D preview adapters over a read-only view
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (editor session)
//!   ├── Layout ── split / drag engines
//!   ├── HistoryManager (undo/redo)
//!   ├── SelectionManager
//!   ├── ShortcutMap (keyboard)
//!   └── EventDispatcher ──> PreviewScene, price display, ...
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use drawerkit_core::Dimensions;
//! use drawerkit_designer::DesignerState;
//!
//! let mut state = DesignerState::with_dimensions(Dimensions::new(30.0, 20.0, 3.0)).unwrap();
//! let block = state.layout().blocks()[0].id;
//! state.select_block(block);
//! assert!(state.add_row());
//! assert_eq!(state.layout().blocks().len(), 2);
//! assert!(state.undo());
//! ```

pub mod designer_state;
pub mod drag;
pub mod history;
pub mod keyboard;
pub mod layout;
pub mod preview3d;
pub mod pricing;
pub mod renderer;
pub mod selection_manager;
pub mod serialization;
pub mod split;
pub mod svg_renderer;

pub use designer_state::DesignerState;
pub use drag::{
    clamp_candidate, commit_drag, drag_range, find_affected_blocks, AffectedBlocks, DragOutcome,
    DragRange, DragSession,
};
pub use history::{ActionType, HistoryEntry, HistoryManager};
pub use keyboard::{EditorAction, KeyChord, ShortcutMap};
pub use layout::{Layout, LayoutSnapshot};
pub use preview3d::{MaterialCache, PartKind, PreviewScene, ScenePart};
pub use pricing::{dividers, quote, Divider, PriceQuote};
pub use renderer::RenderInput;
pub use selection_manager::SelectionManager;
pub use serialization::{CartItem, DesignExport, DesignFile, DesignMetadata, ManufacturingSpec};
pub use split::{split_block, SplitDirection, SplitOutcome};
