//! Designer state manager for the editing surface.
//! Owns the design being edited together with selection, file and view state.
//!
//! This module is split into submodules:
//! - `editing`: cabinet and accessory edits, selection
//! - `file_io`: save/load/new operations

mod editing;
mod file_io;

use std::path::PathBuf;

use image::RgbaImage;
use uuid::Uuid;

use crate::model::Design;
use crate::renderer::{build_scene, render_scene, RenderOptions, Scene};
use crate::viewport::Viewport;
use cabinetkit_core::ViewSettings;

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub design: Design,
    pub viewport: Viewport,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub(crate) selected_cabinet: usize,
    pub(crate) selected_accessory: Option<Uuid>,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    /// Creates a new designer state with a one-cabinet design.
    pub fn new() -> Self {
        Self::with_design(Design::new("Untitled"), ViewSettings::default())
    }

    /// Wrap an existing design.
    pub fn with_design(design: Design, view: ViewSettings) -> Self {
        Self {
            design,
            viewport: Viewport::new(view),
            current_file_path: None,
            is_modified: false,
            selected_cabinet: 0,
            selected_accessory: None,
        }
    }

    pub fn selected_cabinet(&self) -> usize {
        self.selected_cabinet
    }

    pub fn selected_accessory(&self) -> Option<Uuid> {
        self.selected_accessory
    }

    /// Name shown in the title bar, with a marker when modified
    pub fn display_name(&self) -> String {
        if self.is_modified {
            format!("{} *", self.design.name)
        } else {
            self.design.name.clone()
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions::interactive(Some(self.selected_cabinet), self.selected_accessory)
    }

    /// Display list of the editing surface, including selection
    pub fn scene(&self) -> Scene {
        build_scene(&self.design, &self.viewport, &self.render_options())
    }

    /// Redraw the editing surface
    pub fn render(&self) -> RgbaImage {
        render_scene(&self.scene())
    }

    /// Export image of the design, without selection
    pub fn render_export(&self) -> RgbaImage {
        render_scene(&build_scene(
            &self.design,
            &self.viewport,
            &RenderOptions::export(),
        ))
    }
}
