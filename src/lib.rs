//! # CabinetKit
//!
//! A parametric designer for rows of modular cabinets with:
//! - Tall and split (base plus wall unit) cabinets under one ceiling
//! - Shelves, drawers, doors, hanging rods, LED strips and dividers
//! - Clamping and drawer stacking that keep every edit physically valid
//! - A schematic front-elevation drawing exported as PNG, JPEG or SVG
//! - A text prompt describing the design for photorealistic rendering
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-core** - Errors, length helpers, view layout, catalogs
//! 2. **cabinetkit-settings** - Application configuration
//! 3. **cabinetkit-designer** - Model, constraints, renderer, serialization, prompt
//! 4. **cabinetkit** - Main binary that integrates all crates

use std::path::{Path, PathBuf};

use anyhow::Context;

pub use cabinetkit_core::data;
pub use cabinetkit_designer as designer;

pub use cabinetkit_core::{
    format_cm, parse_cm, CatalogError, DesignError, Error, ImportError, MaterialAssignments,
    MaterialCatalog, MaterialZone, RenderServiceError, Result, StorageError, TextureLibrary,
    VendorSpecs, ViewSettings,
};

pub use cabinetkit_designer::{
    build_scene, compile_prompt, encode_jpeg, encode_png, export_design, import_design,
    render_design, render_design_svg, Accessory, AccessoryKind, AccessoryType, Archetype,
    AspectRatio, Cabinet, CabinetProfile, Design, DesignFile, DesignRepository, DesignerState,
    DoorState, EditOutcome, Environment, FloorFinish, Hinge, JsonDirectoryStore, LedPlacement,
    LightTemperature, RenderOptions, RenderParams, RenderService, RenderSession, Scene,
    Viewport,
};

pub use cabinetkit_settings::{
    Config, DesignDefaults, ExportSettings, ImageFormat, RenderServiceSettings, SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(())
}

/// A one-cabinet design built from the configured defaults
pub fn design_from_defaults(defaults: &DesignDefaults) -> std::result::Result<Design, DesignError> {
    Design::from_parts(
        defaults.design_name.clone(),
        defaults.ceiling_height,
        FloorFinish::default(),
        MaterialAssignments::new(),
        vec![Cabinet::tall(
            "Cabinet 1",
            defaults.cabinet_width,
            defaults.cabinet_height,
        )],
    )
}

/// Rendering service parameters from the configuration
pub fn render_session(settings: &RenderServiceSettings, export: &ExportSettings) -> RenderSession {
    let params = RenderParams {
        model: settings.model.clone(),
        temperature: settings.temperature,
        top_k: settings.top_k,
        top_p: settings.top_p,
    };
    RenderSession::new(
        settings.api_key().map(str::to_string),
        params,
        export.sketch_quality,
    )
}

/// Paths written by [`export_design_files`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFiles {
    pub image: PathBuf,
    pub svg: PathBuf,
}

/// Render a design and write the raster image and SVG into `out_dir`.
pub fn export_design_files(
    design: &Design,
    view: &ViewSettings,
    export: &ExportSettings,
    out_dir: &Path,
) -> anyhow::Result<ExportedFiles> {
    use cabinetkit_designer::export::{write_image, write_svg};

    let viewport = Viewport::new(view.clone());
    let options = RenderOptions::export();

    let image = render_design(design, &viewport, &options);
    let encoded = match export.image_format {
        ImageFormat::Png => encode_png(&image),
        ImageFormat::Jpeg => encode_jpeg(&image, export.jpeg_quality),
    }
    .with_context(|| format!("Failed to encode {} image", export.image_format))?;

    let image_path = out_dir.join(format!(
        "{}.{}",
        export.file_stem,
        export.image_format.extension()
    ));
    write_image(&encoded, &image_path)
        .with_context(|| format!("Failed to write {}", image_path.display()))?;

    let svg_path = out_dir.join(format!("{}.svg", export.file_stem));
    write_svg(&render_design_svg(design, &viewport, &options), &svg_path)
        .with_context(|| format!("Failed to write {}", svg_path.display()))?;

    Ok(ExportedFiles {
        image: image_path,
        svg: svg_path,
    })
}
