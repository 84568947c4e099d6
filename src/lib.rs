//! # DrawerKit
//!
//! A parametric drawer-organizer layout editor:
//! - Recursive row/column splitting of a drawer into compartments
//! - Drag-resizing of dividers with grid snapping and minimum sizes
//! - Linear undo/redo over full layout snapshots
//! - Area-based pricing, cart and manufacturing export
//!
//! ## Architecture
//!
//! DrawerKit is organized as a workspace with multiple crates:
//!
//! 1. **drawerkit-core** - Block/split-line model, units, errors, events, materials
//! 2. **drawerkit-settings** - Editor configuration (JSON/TOML)
//! 3. **drawerkit-designer** - Layout engine, history, pricing, export, render adapters
//! 4. **drawerkit** - Logging setup and the headless command-line tool

pub use drawerkit_core::{
    Axis, Block, BlockId, Dimensions, EventDispatcher, LayoutError, LayoutEvent, LayoutListener,
    LineId, Material, MaterialCategory, MaterialLibrary, SplitLine,
};

pub use drawerkit_designer as designer;
pub use drawerkit_designer::{
    ActionType, CartItem, DesignExport, DesignFile, DesignerState, Layout, LayoutSnapshot,
    ManufacturingSpec, PreviewScene, PriceQuote, SplitDirection,
};

pub use drawerkit_settings::{EditorSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
