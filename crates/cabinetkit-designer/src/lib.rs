//! # CabinetKit Designer
//!
//! Parametric layout and rendering of a row of modular cabinets. Cabinets
//! stand side by side under one ceiling and carry shelves, drawers, doors,
//! hanging rods, LED strips and dividers.
//!
//! ## Core Components
//!
//! - **Model**: designs, cabinets (tall or split) and tagged accessories
//! - **Constraints**: divider-aware horizontal spans, drawer stacking and
//!   clamping of every edit into bounds
//! - **Viewport**: centimeter to pixel layout of the front elevation
//! - **Renderer**: one display list drawn to raster or SVG, shared by the
//!   editing surface and exports
//! - **Serialization**: versioned JSON documents with legacy migration
//! - **Prompt**: text description of a design for the rendering service
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (selection, file state)
//!   └── Design
//!         └── Cabinet ── Accessory
//!
//! edit ─► constraints ─► renderer (scene ─► raster | svg)
//!                    └─► serialization / prompt ─► collaborators
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cabinetkit_designer::{AccessoryType, Design, RenderOptions, Viewport, render_design};
//!
//! let mut design = Design::new("Hallway");
//! let drawer = design.add_accessory(0, AccessoryType::Drawer)?;
//! design.set_accessory_height(0, drawer, 30.0)?;
//!
//! let image = render_design(&design, &Viewport::default(), &RenderOptions::export());
//! ```

pub mod constraints;
pub mod designer_state;
pub mod export;
pub mod font_manager;
pub mod model;
pub mod prompt;
pub mod render_service;
pub mod renderer;
pub mod serialization;
pub mod store;
pub mod viewport;

pub use constraints::{horizontal_span, EditOutcome, Span};
pub use designer_state::DesignerState;
pub use export::{encode_jpeg, encode_png, EncodedImage, ExportError};
pub use model::{
    Accessory, AccessoryKind, AccessoryType, Archetype, Cabinet, CabinetProfile, Design,
    FloorFinish, Hinge, LedPlacement,
};
pub use prompt::{compile_prompt, AspectRatio, DoorState, Environment, LightTemperature};
pub use render_service::{
    GeneratedImage, RenderGate, RenderParams, RenderRequest, RenderService, RenderSession,
};
pub use renderer::{build_scene, render_design, render_design_svg, RenderOptions, Scene};
pub use serialization::{export_design, import_design, DesignFile, FORMAT_VERSION};
pub use store::{DesignRepository, InMemoryDesignStore, JsonDirectoryStore, StoredDesign};
pub use viewport::{CabinetLayout, PixelRect, Viewport};
