//! # 3D Preview Module
//!
//! Builds a simple solid model of the organizer for the 3D preview: a floor
//! panel, four outer walls and one panel per divider, each an axis-aligned
//! box in inches. Scene coordinates are `x` across the drawer width, `y` up
//! and `z` along the depth.
//!
//! The scene never reads the editor state directly. It subscribes to layout
//! events, marks itself stale, and is rebuilt from a [`RenderInput`] when the
//! caller is ready to draw.

use std::collections::HashMap;

use drawerkit_core::{Block, LayoutListener, Material};
use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::renderer::RenderInput;

/// Panel stock thickness used when no material is selected
const DEFAULT_THICKNESS_IN: f64 = 0.25;
const DEFAULT_FINISH: [f32; 3] = [0.85, 0.77, 0.63];

/// What a box in the scene represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Floor,
    Wall,
    Divider,
}

/// Axis-aligned box in scene space
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePart {
    pub kind: PartKind,
    pub min: Point3<f64>,
    pub max: Point3<f64>,
    pub color: [f32; 3],
}

impl ScenePart {
    fn new(kind: PartKind, min: Point3<f64>, size: Vector3<f64>, color: [f32; 3]) -> Self {
        Self {
            kind,
            min,
            max: min + size,
            color,
        }
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn volume(&self) -> f64 {
        let size = self.size();
        size.x * size.y * size.z
    }
}

/// Finish colors resolved per material id.
///
/// Owned by one preview; nothing is shared between scenes.
#[derive(Debug, Clone, Default)]
pub struct MaterialCache {
    finishes: HashMap<String, [f32; 3]>,
    misses: usize,
}

impl MaterialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linear RGB for `material`, computed once per id
    pub fn finish(&mut self, material: &Material) -> [f32; 3] {
        if let Some(color) = self.finishes.get(&material.id) {
            return *color;
        }
        self.misses += 1;
        let color = match material.rgb() {
            Some([r, g, b]) => [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0],
            None => {
                debug!("Material {} has unreadable finish {}", material.id, material.finish_color);
                DEFAULT_FINISH
            }
        };
        self.finishes.insert(material.id.clone(), color);
        color
    }

    pub fn len(&self) -> usize {
        self.finishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finishes.is_empty()
    }

    /// Number of lookups that had to resolve a new material
    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.finishes.clear();
    }
}

/// Solid preview of the organizer
#[derive(Debug, Clone)]
pub struct PreviewScene {
    cache: MaterialCache,
    parts: Vec<ScenePart>,
    needs_rebuild: bool,
}

impl Default for PreviewScene {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewScene {
    pub fn new() -> Self {
        Self {
            cache: MaterialCache::new(),
            parts: Vec::new(),
            needs_rebuild: true,
        }
    }

    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    pub fn parts(&self) -> &[ScenePart] {
        &self.parts
    }

    pub fn cache(&self) -> &MaterialCache {
        &self.cache
    }

    pub fn parts_of(&self, kind: PartKind) -> impl Iterator<Item = &ScenePart> {
        self.parts.iter().filter(move |p| p.kind == kind)
    }

    /// Regenerates every part from `input`.
    pub fn rebuild(&mut self, input: &RenderInput<'_>) {
        let upi = input.units_per_inch;
        let width = input.width / upi;
        let depth = input.depth / upi;
        let height = input.dimensions.height;
        let thickness = input
            .material
            .map(|m| m.thickness_in)
            .filter(|t| *t > 0.0)
            .unwrap_or(DEFAULT_THICKNESS_IN);
        let color = match input.material {
            Some(material) => self.cache.finish(material),
            None => DEFAULT_FINISH,
        };

        let mut parts = Vec::with_capacity(5 + input.split_lines.len());
        parts.push(ScenePart::new(
            PartKind::Floor,
            Point3::new(0.0, -thickness, 0.0),
            Vector3::new(width, thickness, depth),
            color,
        ));

        // Front and back walls run along x, side walls along z
        for z in [-thickness, depth] {
            parts.push(ScenePart::new(
                PartKind::Wall,
                Point3::new(-thickness, 0.0, z),
                Vector3::new(width + 2.0 * thickness, height, thickness),
                color,
            ));
        }
        for x in [-thickness, width] {
            parts.push(ScenePart::new(
                PartKind::Wall,
                Point3::new(x, 0.0, 0.0),
                Vector3::new(thickness, height, depth),
                color,
            ));
        }

        let half = thickness / 2.0;
        for line in input.split_lines {
            let position = line.position() / upi;
            let (start, end) = line.span();
            let (start, end) = (start / upi, end / upi);
            let part = if line.is_horizontal {
                ScenePart::new(
                    PartKind::Divider,
                    Point3::new(start, 0.0, position - half),
                    Vector3::new(end - start, height, thickness),
                    color,
                )
            } else {
                ScenePart::new(
                    PartKind::Divider,
                    Point3::new(position - half, 0.0, start),
                    Vector3::new(thickness, height, end - start),
                    color,
                )
            };
            parts.push(part);
        }

        debug!("Rebuilt 3D preview with {} parts", parts.len());
        self.parts = parts;
        self.needs_rebuild = false;
    }

    /// Scene bounds, or `None` before the first rebuild
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.parts.first()?;
        let (mut min, mut max) = (first.min, first.max);
        for part in &self.parts[1..] {
            min = min.inf(&part.min);
            max = max.sup(&part.max);
        }
        Some((min, max))
    }
}

impl LayoutListener for PreviewScene {
    fn on_compartments_changed(&mut self, _blocks: &[Block]) {
        self.needs_rebuild = true;
    }
}
