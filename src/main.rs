//! Command line front end.
//!
//! `cabinetkit [design.json] [out-dir]` loads a design (or starts from the
//! configured defaults), writes the front-elevation drawing as an image and
//! SVG, and prints the rendering prompt.

use std::path::PathBuf;

use anyhow::Context;
use cabinetkit::{
    compile_prompt, design_from_defaults, export_design_files, init_logging, render_session,
    Config, DesignerState, Environment, VendorSpecs, BUILD_DATE, VERSION,
};

fn load_config() -> anyhow::Result<Config> {
    match Config::default_path() {
        Ok(path) => Config::load_or_default(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        Err(e) => {
            tracing::warn!("No configuration directory ({}), using defaults", e);
            Ok(Config::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!("CabinetKit {} (built {})", VERSION, BUILD_DATE);

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let design_path = args.next();
    let out_dir = args.next();

    let config = load_config()?;
    let mut state =
        DesignerState::with_design(design_from_defaults(&config.defaults)?, config.view.clone());
    if let Some(path) = &design_path {
        state.load_from_file(path)?;
    }

    let out_dir = out_dir.unwrap_or_else(|| config.export.output_directory.clone());
    let files = export_design_files(&state.design, &config.view, &config.export, &out_dir)?;

    let environment = Environment::for_design(&state.design);
    let specs = VendorSpecs::with_defaults();
    let session = render_session(&config.render_service, &config.export);
    if let Err(e) = session.build_request(&state.design, &state.viewport, &specs, &environment) {
        tracing::info!("Photorealistic rendering unavailable: {}", e);
    }

    println!("{}", state.display_name());
    println!("{}", state.design.summary());
    println!("Image: {}", files.image.display());
    println!("SVG:   {}", files.svg.display());
    println!();
    println!("{}", compile_prompt(&state.design, &specs, &environment));

    Ok(())
}
