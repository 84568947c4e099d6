//! Materials catalog
//!
//! This module provides:
//! - Material categories
//! - Material finish and divider stock properties
//! - A small built-in library of selectable finishes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Material categories for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum MaterialCategory {
    /// Natural wood (hardwoods, softwoods)
    Wood,
    /// Engineered wood products (plywood, MDF)
    EngineeredWood,
    /// Plastic and acrylic sheet
    Plastic,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wood => write!(f, "Wood"),
            Self::EngineeredWood => write!(f, "Engineered Wood"),
            Self::Plastic => write!(f, "Plastic"),
        }
    }
}

/// A selectable organizer material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Stable identifier stored in exported designs
    pub id: String,
    /// Display name
    pub name: String,
    /// Category
    pub category: MaterialCategory,
    /// Finish color as `#rrggbb`
    pub finish_color: String,
    /// Divider stock thickness in inches
    pub thickness_in: f64,
}

impl Material {
    /// Create a new material
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: MaterialCategory,
        finish_color: impl Into<String>,
        thickness_in: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            finish_color: finish_color.into(),
            thickness_in,
        }
    }

    /// Parse the finish color into RGB components.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        let hex = self.finish_color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some([channel(0)?, channel(2)?, channel(4)?])
    }
}

/// Material library
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: HashMap<String, Material>,
    default_id: Option<String>,
}

impl MaterialLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the library of stock finishes; the first entry is the default.
    pub fn with_defaults() -> Self {
        let mut library = Self::new();
        library.add(Material::new(
            "maple",
            "Hard Maple",
            MaterialCategory::Wood,
            "#e8d3a9",
            0.25,
        ));
        library.add(Material::new(
            "walnut",
            "Black Walnut",
            MaterialCategory::Wood,
            "#5c4033",
            0.25,
        ));
        library.add(Material::new(
            "cherry",
            "American Cherry",
            MaterialCategory::Wood,
            "#9a4a2f",
            0.25,
        ));
        library.add(Material::new(
            "baltic-birch",
            "Baltic Birch Plywood",
            MaterialCategory::EngineeredWood,
            "#dcc7a1",
            0.25,
        ));
        library.add(Material::new(
            "acrylic-white",
            "White Acrylic",
            MaterialCategory::Plastic,
            "#f5f5f5",
            0.125,
        ));
        library
    }

    /// Add a material; the first one added becomes the default.
    pub fn add(&mut self, material: Material) {
        if self.default_id.is_none() {
            self.default_id = Some(material.id.clone());
        }
        self.materials.insert(material.id.clone(), material);
    }

    /// Get material by id
    pub fn get(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.materials.contains_key(id)
    }

    /// Default material, if the library is not empty
    pub fn default_material(&self) -> Option<&Material> {
        self.default_id.as_deref().and_then(|id| self.get(id))
    }

    /// Materials of one category, sorted by name
    pub fn by_category(&self, category: MaterialCategory) -> Vec<&Material> {
        let mut list: Vec<_> = self
            .materials
            .values()
            .filter(|m| m.category == category)
            .collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    /// All ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.materials.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
