//! File I/O operations (save, load, new) for designer state.

use cabinetkit_core::ImportError;

use super::DesignerState;
use crate::model::Design;
use crate::serialization::{export_design, import_design, DesignFile};

impl DesignerState {
    fn replace_design(&mut self, design: Design) {
        self.design = design;
        self.selected_cabinet = 0;
        self.selected_accessory = None;
    }

    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        DesignFile::from_design(&self.design).save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!("Saved '{}' to {}", self.design.name, path.as_ref().display());
        Ok(())
    }

    /// Load design from file.
    ///
    /// The current design is kept when the file cannot be read or imported.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let design = DesignFile::load_from_file(&path)?.into_design()?;

        self.replace_design(design);
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!(
            "Loaded '{}' from {}",
            self.design.name,
            path.as_ref().display()
        );
        Ok(())
    }

    /// Replace the design with one imported from a JSON document.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        let design = import_design(json).inspect_err(|e| tracing::warn!("Import failed: {}", e))?;
        self.replace_design(design);
        self.current_file_path = None;
        self.is_modified = true;
        Ok(())
    }

    /// Export the design as a JSON document.
    pub fn export_json(&self) -> serde_json::Result<String> {
        export_design(&self.design)
    }

    /// Create new design (clear all).
    pub fn new_design(&mut self, name: impl Into<String>) {
        self.replace_design(Design::new(name));
        self.current_file_path = None;
        self.is_modified = false;
    }
}
