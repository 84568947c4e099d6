//! File I/O and export operations for designer state.

use anyhow::Context;

use super::DesignerState;
use crate::history::ActionType;
use crate::serialization::{CartItem, DesignExport, DesignFile, ManufacturingSpec};

impl DesignerState {
    /// Layout and material as opaque JSON-ready data
    pub fn export_design(&self) -> DesignExport {
        DesignExport::from_layout(&self.layout, self.selected_material_id())
    }

    /// Cart item priced at the configured rate
    pub fn cart_item(&self) -> CartItem {
        CartItem::from_layout(
            &self.layout,
            self.selected_material_id(),
            self.settings.pricing.price_per_square_inch,
        )
    }

    /// Cut list with the manufacturing tolerance applied
    pub fn manufacturing_spec(&self) -> ManufacturingSpec {
        ManufacturingSpec::from_layout(
            &self.layout,
            self.settings.export.manufacturing_tolerance_in,
            self.selected_material_id(),
        )
    }

    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let design =
            DesignFile::from_layout(&self.design_name, &self.layout, self.selected_material_id());
        design.save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!("Saved design to {}", path.as_ref().display());

        Ok(())
    }

    /// Load design from file.
    ///
    /// The stored layout must tile its drawer; otherwise the session is left
    /// unchanged and an error is returned.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let design = DesignFile::load_from_file(&path)?;
        let layout = design
            .to_layout(self.settings.grid_spec())
            .with_context(|| format!("Invalid layout in {}", path.as_ref().display()))?;

        let selection_was = self.selection.selected_id();
        self.layout = layout;
        self.selection.clear();
        self.drag = None;
        self.history.reset(self.layout.snapshot(), ActionType::Load);

        match design.design.selected_material.as_deref() {
            Some(id) if self.materials.contains(id) => {
                self.selected_material = Some(id.to_string());
            }
            Some(id) => tracing::warn!("Design uses unknown material '{}', keeping current", id),
            None => {}
        }

        self.design_name = design.metadata.name;
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!("Loaded design from {}", path.as_ref().display());

        self.notify(selection_was);
        Ok(())
    }
}
