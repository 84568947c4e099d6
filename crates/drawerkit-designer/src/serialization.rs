//! Serialization of drawer designs.
//!
//! Provides the opaque export handed to design storage, the cart item and
//! manufacturing spec derived from it, and `.drawer` design files with
//! metadata for local save/load.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use drawerkit_core::units::GridSpec;
use drawerkit_core::{Block, Dimensions, SplitLine};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::layout::{Layout, LayoutSnapshot};
use crate::pricing::{self, Divider};

/// Design file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Layout plus material, as stored by external persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignExport {
    pub blocks: Vec<Block>,
    pub split_lines: Vec<SplitLine>,
    pub selected_material: Option<String>,
}

impl DesignExport {
    pub fn from_layout(layout: &Layout, selected_material: Option<&str>) -> Self {
        Self {
            blocks: layout.blocks().to_vec(),
            split_lines: layout.split_lines().to_vec(),
            selected_material: selected_material.map(str::to_string),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize design export")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse design export")
    }

    /// Rebuilds a layout, refusing exports that are not a valid layout.
    pub fn to_layout(&self, dimensions: Dimensions, grid: GridSpec) -> Result<Layout> {
        let snapshot = LayoutSnapshot {
            blocks: self.blocks.clone(),
            split_lines: self.split_lines.clone(),
        };
        Layout::from_parts(dimensions, grid, snapshot).context("Design is not a valid layout for the drawer")
    }
}

/// Item added to the shopping cart when a design is committed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub design_id: Uuid,
    pub dimensions: Dimensions,
    pub dividers: Vec<Divider>,
    pub material: Option<String>,
    pub price: f64,
    pub design: DesignExport,
}

impl CartItem {
    pub fn from_layout(
        layout: &Layout,
        material: Option<&str>,
        price_per_square_inch: f64,
    ) -> Self {
        Self {
            design_id: Uuid::new_v4(),
            dimensions: *layout.dimensions(),
            dividers: pricing::dividers(layout),
            material: material.map(str::to_string),
            price: pricing::quote(layout, price_per_square_inch).price,
            design: DesignExport::from_layout(layout, material),
        }
    }
}

/// Cut dimensions sent to manufacturing
///
/// Width and depth are reduced by the tolerance so the organizer slides into
/// the drawer; height is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingSpec {
    pub width_in: f64,
    pub depth_in: f64,
    pub height_in: f64,
    pub tolerance_in: f64,
    pub dividers: Vec<Divider>,
    pub material: Option<String>,
}

impl ManufacturingSpec {
    pub fn from_layout(layout: &Layout, tolerance_in: f64, material: Option<&str>) -> Self {
        let grid = layout.grid();
        Self {
            width_in: grid.to_inches(layout.width()) - tolerance_in,
            depth_in: grid.to_inches(layout.depth()) - tolerance_in,
            height_in: layout.dimensions().height,
            tolerance_in,
            dividers: pricing::dividers(layout),
            material: material.map(str::to_string),
        }
    }
}

/// Design metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub id: Uuid,
    pub metadata: DesignMetadata,
    pub dimensions: Dimensions,
    pub design: DesignExport,
}

impl DesignFile {
    /// Create new empty design
    pub fn new(name: impl Into<String>, dimensions: Dimensions) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            id: Uuid::new_v4(),
            metadata: DesignMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            dimensions,
            design: DesignExport {
                blocks: Vec::new(),
                split_lines: Vec::new(),
                selected_material: None,
            },
        }
    }

    pub fn from_layout(
        name: impl Into<String>,
        layout: &Layout,
        selected_material: Option<&str>,
    ) -> Self {
        let mut file = Self::new(name, *layout.dimensions());
        file.design = DesignExport::from_layout(layout, selected_material);
        file
    }

    /// Save design to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize design")?;

        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;

        Ok(())
    }

    /// Load design from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read design file")?;

        let mut design: DesignFile =
            serde_json::from_str(&content).context("Failed to parse design file")?;

        design.metadata.modified = Utc::now();

        Ok(design)
    }

    pub fn to_layout(&self, grid: GridSpec) -> Result<Layout> {
        self.design.to_layout(self.dimensions, grid)
    }
}
