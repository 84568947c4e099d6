//! DrawerKit Settings Crate
//!
//! Handles editor configuration: grid scale, minimum compartment size,
//! history depth, pricing rate and manufacturing tolerance.

pub mod config;
pub mod error;

pub use config::{ConfigFormat, EditorSettings, ExportSettings, GridSettings, PricingSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
