//! # DrawerKit Core
//!
//! Core types, units and events for the DrawerKit drawer-layout editor.
//! Provides the block/split-line data model shared by the editing engine
//! and every read-only consumer (renderers, pricing, export).

pub mod core;
pub mod data;
pub mod error;
pub mod types;
pub mod units;

pub use core::{
    event::{EventDispatcher, LayoutEvent, SubscriptionId},
    listener::LayoutListener,
};

pub use data::{
    materials::{Material, MaterialCategory, MaterialLibrary},
    Axis, Block, BlockId, Dimensions, LineId, SplitLine,
};

pub use error::LayoutError;

pub use types::{shared, Shared};

pub use units::GridSpec;
