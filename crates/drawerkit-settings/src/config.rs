//! Configuration and settings management for DrawerKit
//!
//! Provides configuration file handling and validation for the layout editor.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Grid settings (scale, snap quantum, minimum compartment size)
//! - Pricing (external $/area rate)
//! - Export (manufacturing tolerance)

use drawerkit_core::units::{
    GridSpec, DEFAULT_ADJACENCY_EPSILON, DEFAULT_GRID_SIZE, DEFAULT_MIN_SIZE,
    DEFAULT_UNITS_PER_INCH, MANUFACTURING_TOLERANCE_IN,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Default history cap
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

const CONFIG_DIR_NAME: &str = "drawerkit";
const CONFIG_FILE_NAME: &str = "editor.toml";

/// Config file format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

/// Grid and geometry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    /// Internal units per inch
    pub units_per_inch: f64,
    /// Snap quantum in internal units
    pub grid_size: f64,
    /// Minimum compartment width/height in internal units
    pub min_size: f64,
    /// Touch tolerance for adjacency checks, in internal units
    pub adjacency_epsilon: f64,
    /// Refuse to split blocks smaller than twice the minimum size
    #[serde(default = "default_true")]
    pub guard_undersized_split: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            units_per_inch: DEFAULT_UNITS_PER_INCH,
            grid_size: DEFAULT_GRID_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            adjacency_epsilon: DEFAULT_ADJACENCY_EPSILON,
            guard_undersized_split: true,
        }
    }
}

/// Pricing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Price per square inch of material area
    pub price_per_square_inch: f64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            price_per_square_inch: 1.0,
        }
    }
}

/// Manufacturing export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Reduction applied to width and depth, in inches
    pub manufacturing_tolerance_in: f64,
    /// Material used when a design names none
    #[serde(default)]
    pub default_material: Option<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            manufacturing_tolerance_in: MANUFACTURING_TOLERANCE_IN,
            default_material: None,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Maximum number of history snapshots
    pub history_depth: usize,
    /// Grid and geometry
    #[serde(default)]
    pub grid: GridSettings,
    /// Pricing
    #[serde(default)]
    pub pricing: PricingSettings,
    /// Export
    #[serde(default)]
    pub export: ExportSettings,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_depth: DEFAULT_HISTORY_DEPTH,
            grid: GridSettings::default(),
            pricing: PricingSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

impl EditorSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-user config file location
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the per-user config file, falling back to defaults when it
    /// does not exist.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let settings: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::info!("Loaded editor settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let grid = &self.grid;

        if !(grid.units_per_inch.is_finite() && grid.units_per_inch > 0.0) {
            return Err(SettingsError::invalid("grid.units_per_inch", "must be > 0"));
        }
        if !(grid.grid_size.is_finite() && grid.grid_size > 0.0) {
            return Err(SettingsError::invalid("grid.grid_size", "must be > 0"));
        }
        if !(grid.min_size.is_finite() && grid.min_size > 0.0) {
            return Err(SettingsError::invalid("grid.min_size", "must be > 0"));
        }
        let ratio = grid.min_size / grid.grid_size;
        if (ratio - ratio.round()).abs() > 1e-9 {
            return Err(SettingsError::invalid(
                "grid.min_size",
                "must be a multiple of grid_size",
            ));
        }
        if !(grid.adjacency_epsilon >= 0.0 && grid.adjacency_epsilon < grid.grid_size / 2.0) {
            return Err(SettingsError::invalid(
                "grid.adjacency_epsilon",
                "must be >= 0 and below half the grid size",
            ));
        }

        if self.history_depth == 0 {
            return Err(SettingsError::invalid("history_depth", "must be > 0"));
        }

        if !(self.pricing.price_per_square_inch.is_finite()
            && self.pricing.price_per_square_inch >= 0.0)
        {
            return Err(SettingsError::invalid(
                "pricing.price_per_square_inch",
                "must be >= 0",
            ));
        }

        if !(self.export.manufacturing_tolerance_in >= 0.0) {
            return Err(SettingsError::invalid(
                "export.manufacturing_tolerance_in",
                "must be >= 0",
            ));
        }

        Ok(())
    }

    /// Grid parameters for the layout engine
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            units_per_inch: self.grid.units_per_inch,
            grid_size: self.grid.grid_size,
            min_size: self.grid.min_size,
            epsilon: self.grid.adjacency_epsilon,
        }
    }
}
