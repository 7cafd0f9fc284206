//! Scene renderer
//!
//! Draws the front elevation of a design: background, ceiling band, floor
//! band, then each cabinet left to right with its accessories and dimension
//! annotations. The scene is built once as a display list and handed to a
//! back end:
//! - [`raster`] for PNG/JPEG output and the interactive surface
//! - [`svg`] for vector export

pub mod raster;
pub mod scene;
pub mod svg;

use image::RgbaImage;

use crate::model::Design;
use crate::viewport::Viewport;

pub use raster::render_scene;
pub use scene::{
    build_scene, Color, GradientAxis, Primitive, RenderOptions, Scene, StrokeStyle, TextAnchor,
};
pub use svg::scene_to_svg;

/// Render a design straight to an RGBA image
pub fn render_design(design: &Design, viewport: &Viewport, options: &RenderOptions) -> RgbaImage {
    render_scene(&build_scene(design, viewport, options))
}

/// Render a design to an SVG document
pub fn render_design_svg(design: &Design, viewport: &Viewport, options: &RenderOptions) -> String {
    scene_to_svg(&build_scene(design, viewport, options))
}
