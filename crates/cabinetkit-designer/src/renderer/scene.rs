//! Scene construction.
//!
//! Builds a back-end independent display list for the whole design. The
//! interactive surface and every export path draw the same list; the only
//! difference between them is [`RenderOptions`].

use cabinetkit_core::format_cm;
use uuid::Uuid;

use crate::model::{Accessory, AccessoryKind, Cabinet, Design, FloorFinish, Hinge, LedPlacement};
use crate::viewport::{CabinetLayout, PixelRect, Viewport};

/// Door width (cm) from which an explicit door renders as a double door.
const DOUBLE_DOOR_MIN_WIDTH: f64 = cabinetkit_core::constants::SINGLE_DOOR_MAX_WIDTH;

/// RGBA color, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha given as a fraction
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Alpha as a fraction
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// `#rrggbb`, alpha ignored
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Drawing palette
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0x1e, 0x2a, 0x3a);
    pub const CEILING: Color = Color::rgb(0x94, 0xa3, 0xb8);
    pub const CABINET_STROKE: Color = Color::rgb(0x33, 0x41, 0x55);
    pub const CABINET_FILL: Color = Color::rgba(255, 255, 255, 10);
    pub const PANEL: Color = Color::rgb(0x2b, 0x3a, 0x4f);
    pub const SELECTED: Color = Color::rgb(0x3b, 0x82, 0xf6);
    pub const SELECTED_FILL: Color = Color::rgba(59, 130, 246, 38);
    pub const SHELF: Color = Color::rgb(0x64, 0x74, 0x8b);
    pub const DRAWER: Color = Color::rgb(0x8b, 0x5c, 0xf6);
    pub const DOOR: Color = Color::rgb(0x3b, 0x82, 0xf6);
    pub const ROD: Color = Color::rgb(0xf5, 0x9e, 0x0b);
    pub const LED: Color = Color::rgb(0x10, 0xb9, 0x81);
    pub const DIVIDER: Color = Color::rgb(0x94, 0xa3, 0xb8);
    pub const HARDWARE: Color = Color::rgb(0x94, 0xa3, 0xb8);
    pub const LABEL: Color = Color::rgb(0x64, 0x74, 0x8b);
    pub const LABEL_DIM: Color = Color::rgb(0x47, 0x55, 0x69);
    pub const LABEL_BRIGHT: Color = Color::rgb(0xe2, 0xe8, 0xf0);
    pub const LIGHT: Color = Color::rgb(0xfd, 0xe6, 0x8a);
}

/// Stroke parameters
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// Dash pattern (on, off, ...) in pixels; empty for solid
    pub dash: Vec<f64>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: Vec::new(),
        }
    }

    pub fn dashed(color: Color, width: f64, dash: &[f64]) -> Self {
        Self {
            color,
            width,
            dash: dash.to_vec(),
        }
    }
}

/// Horizontal alignment of a text run relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Direction a linear gradient runs in, from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientAxis {
    /// Top edge to bottom edge
    Vertical,
    /// Left edge to right edge
    Horizontal,
}

/// One drawing command. Coordinates are surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        rect: PixelRect,
        fill: Option<Color>,
        stroke: Option<StrokeStyle>,
        radius: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: StrokeStyle,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<StrokeStyle>,
    },
    /// Text with its baseline at `y`, rotated by `rotation` degrees
    /// (clockwise) around the anchor point
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
        color: Color,
        anchor: TextAnchor,
        rotation: f64,
    },
    Gradient {
        rect: PixelRect,
        from: Color,
        to: Color,
        axis: GradientAxis,
    },
}

/// Rendering parameters.
///
/// Selection is drawn only on the interactive surface; exports ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderOptions {
    pub interactive: bool,
    pub selected_cabinet: Option<usize>,
    pub selected_accessory: Option<Uuid>,
}

impl RenderOptions {
    /// Options for exported images
    pub fn export() -> Self {
        Self::default()
    }

    /// Options for the editing surface
    pub fn interactive(selected_cabinet: Option<usize>, selected_accessory: Option<Uuid>) -> Self {
        Self {
            interactive: true,
            selected_cabinet,
            selected_accessory,
        }
    }

    fn cabinet_selected(&self, index: usize) -> bool {
        self.interactive && self.selected_cabinet == Some(index)
    }

    fn accessory_selected(&self, id: Uuid) -> bool {
        self.interactive && self.selected_accessory == Some(id)
    }
}

/// A complete display list
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// All text runs, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn rect(&mut self, rect: PixelRect, fill: Option<Color>, stroke: Option<StrokeStyle>) {
        self.rounded_rect(rect, fill, stroke, 0.0);
    }

    fn rounded_rect(
        &mut self,
        rect: PixelRect,
        fill: Option<Color>,
        stroke: Option<StrokeStyle>,
        radius: f64,
    ) {
        self.push(Primitive::Rect {
            rect,
            fill,
            stroke,
            radius,
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: StrokeStyle) {
        self.push(Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        });
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64, fill: Color) {
        self.push(Primitive::Circle {
            cx,
            cy,
            radius,
            fill: Some(fill),
            stroke: None,
        });
    }

    fn text(&mut self, x: f64, y: f64, text: impl Into<String>, size: f64, color: Color) {
        self.text_rotated(x, y, text, size, color, TextAnchor::Middle, 0.0);
    }

    #[allow(clippy::too_many_arguments)]
    fn text_rotated(
        &mut self,
        x: f64,
        y: f64,
        text: impl Into<String>,
        size: f64,
        color: Color,
        anchor: TextAnchor,
        rotation: f64,
    ) {
        self.push(Primitive::Text {
            x,
            y,
            text: text.into(),
            size,
            color,
            anchor,
            rotation,
        });
    }

    fn gradient(&mut self, rect: PixelRect, from: Color, to: Color, axis: GradientAxis) {
        self.push(Primitive::Gradient {
            rect,
            from,
            to,
            axis,
        });
    }
}

/// Build the display list for a design.
pub fn build_scene(design: &Design, viewport: &Viewport, options: &RenderOptions) -> Scene {
    let (width, height) = viewport.surface_size(design);
    let mut scene = Scene::new(width, height, palette::BACKGROUND);

    draw_ceiling(&mut scene, design, viewport);
    draw_floor(&mut scene, design, viewport);

    for layout in viewport.layouts(design) {
        let Some(cabinet) = design.cabinets().get(layout.index) else {
            continue;
        };
        draw_cabinet(&mut scene, viewport, design, cabinet, &layout, options);
    }

    draw_total_width(&mut scene, design, viewport);
    draw_ceiling_dimension(&mut scene, design, viewport);
    scene
}

fn draw_ceiling(scene: &mut Scene, design: &Design, viewport: &Viewport) {
    let s = viewport.settings();
    let band = PixelRect::new(
        0.0,
        viewport.ceiling_band_top(),
        scene.width as f64,
        s.ceiling_band,
    );
    scene.rect(band, Some(palette::CEILING.with_opacity(0.12)), None);

    let y = viewport.ceiling_y();
    scene.line(
        0.0,
        y,
        scene.width as f64,
        y,
        StrokeStyle::dashed(palette::CEILING, 1.0, &[6.0, 3.0]),
    );
    scene.text(
        band.center_x(),
        band.center_y() + 3.5,
        format!("Ceiling {}", format_cm(design.ceiling_height())),
        10.0,
        palette::CEILING,
    );
}

/// Base color, stripe color and stripe pitch of a floor finish
fn floor_texture(finish: FloorFinish) -> (Color, Color, f64) {
    match finish {
        FloorFinish::Polished => (
            Color::rgb(0xcb, 0xd5, 0xe1).with_opacity(0.25),
            Color::rgb(0xf1, 0xf5, 0xf9).with_opacity(0.35),
            40.0,
        ),
        FloorFinish::WoodLight => (
            Color::rgb(0xd4, 0xa3, 0x73).with_opacity(0.35),
            Color::rgb(0xa8, 0x76, 0x4a).with_opacity(0.5),
            18.0,
        ),
        FloorFinish::WoodDark => (
            Color::rgb(0x7c, 0x4a, 0x2d).with_opacity(0.5),
            Color::rgb(0x4a, 0x2a, 0x18).with_opacity(0.6),
            14.0,
        ),
    }
}

fn draw_floor(scene: &mut Scene, design: &Design, viewport: &Viewport) {
    let band = PixelRect::new(
        0.0,
        viewport.floor_y(design),
        scene.width as f64,
        viewport.settings().floor_band,
    );
    let (base, stripe, pitch) = floor_texture(design.floor);
    scene.rect(band, Some(base), None);

    let mut x = pitch / 2.0;
    while x < band.right() {
        scene.line(x, band.y, x, band.bottom(), StrokeStyle::solid(stripe, 1.0));
        x += pitch;
    }
    scene.line(
        0.0,
        band.y,
        band.right(),
        band.y,
        StrokeStyle::solid(palette::CEILING, 1.0),
    );
    scene.text(
        band.center_x(),
        band.center_y() + 3.5,
        format!("Floor: {}", design.floor.label()),
        10.0,
        palette::LABEL_BRIGHT,
    );
}

fn draw_cabinet(
    scene: &mut Scene,
    viewport: &Viewport,
    design: &Design,
    cabinet: &Cabinet,
    layout: &CabinetLayout,
    options: &RenderOptions,
) {
    let selected = options.cabinet_selected(layout.index);
    let floor = viewport.floor_y(design);
    let t = viewport.to_pixels(viewport.settings().panel_thickness_cm);

    // Ceiling-mounted point light
    let cx = layout.center_x();
    let ceiling = viewport.ceiling_y();
    scene.line(
        cx,
        ceiling,
        cx,
        ceiling + 3.0,
        StrokeStyle::solid(palette::HARDWARE, 1.0),
    );
    scene.circle(cx, ceiling + 6.0, 7.0, palette::LIGHT.with_opacity(0.2));
    scene.circle(cx, ceiling + 6.0, 3.0, palette::LIGHT);

    if selected {
        for frame in &layout.frames {
            scene.rounded_rect(
                frame.outer.inflate(4.0),
                None,
                Some(StrokeStyle::solid(palette::SELECTED.with_opacity(0.25), 6.0)),
                4.0,
            );
        }
    }

    if let Some(splash) = layout.backsplash {
        scene.rect(
            splash,
            Some(palette::CEILING.with_opacity(0.1)),
            Some(StrokeStyle::dashed(palette::LABEL_DIM, 1.0, &[4.0, 3.0])),
        );
    }

    let (stroke_color, stroke_width) = if selected {
        (palette::SELECTED, 2.0)
    } else {
        (palette::CABINET_STROKE, 1.5)
    };
    for frame in &layout.frames {
        let outer = frame.outer;
        scene.rounded_rect(
            outer,
            Some(palette::PANEL),
            Some(StrokeStyle::solid(stroke_color, stroke_width)),
            2.0,
        );
        let kick = frame.kick.map_or(0.0, |k| k.height);
        let interior =
            PixelRect::from_edges(outer.x + t, outer.y + t, outer.right() - t, outer.bottom() - kick - t);
        scene.rect(interior, Some(palette::BACKGROUND), None);
        scene.rect(
            interior,
            Some(if selected {
                palette::SELECTED_FILL
            } else {
                palette::CABINET_FILL
            }),
            Some(StrokeStyle::solid(
                if selected {
                    palette::SELECTED.with_opacity(0.4)
                } else {
                    Color::rgba(255, 255, 255, 20)
                },
                1.0,
            )),
        );
        if let Some(kick) = frame.kick {
            scene.rect(
                kick,
                Some(palette::CABINET_STROKE.with_opacity(0.5)),
                Some(StrokeStyle::solid(palette::LABEL, 1.0)),
            );
        }
    }

    for accessory in &cabinet.accessories {
        let rect = viewport.accessory_rect(layout, cabinet, accessory);
        draw_accessory(scene, viewport, layout, cabinet, accessory, rect);
        if options.accessory_selected(accessory.id) {
            let highlight = if rect.height < 4.0 || rect.width < 4.0 {
                rect.inflate(2.0)
            } else {
                rect
            };
            scene.rounded_rect(
                highlight.inflate(3.0),
                None,
                Some(StrokeStyle::solid(palette::SELECTED.with_opacity(0.3), 4.0)),
                3.0,
            );
            scene.rect(
                highlight,
                None,
                Some(StrokeStyle::solid(palette::SELECTED, 2.0)),
            );
        }
    }

    draw_cabinet_labels(scene, viewport, cabinet, layout, floor);
}

fn draw_cabinet_labels(
    scene: &mut Scene,
    viewport: &Viewport,
    cabinet: &Cabinet,
    layout: &CabinetLayout,
    floor: f64,
) {
    // Width dimension along the top
    let dim_y = layout.top - 4.0;
    let dim = StrokeStyle::solid(palette::LABEL_DIM, 1.0);
    scene.line(layout.left, dim_y, layout.right, dim_y, dim.clone());
    scene.line(layout.left, dim_y - 3.0, layout.left, dim_y + 3.0, dim.clone());
    scene.line(layout.right, dim_y - 3.0, layout.right, dim_y + 3.0, dim);
    scene.text(
        layout.center_x(),
        layout.top - 8.0,
        format_cm(cabinet.width),
        10.0,
        palette::LABEL,
    );

    // Height, rotated, just right of the cabinet
    scene.text_rotated(
        layout.right + 8.0,
        (layout.top + floor) / 2.0,
        format_cm(cabinet.height()),
        10.0,
        palette::LABEL,
        TextAnchor::Middle,
        -90.0,
    );

    let kick = viewport.to_pixels(viewport.settings().kick_height_cm);
    scene.text(
        layout.center_x(),
        floor - kick / 2.0 + 3.0,
        format!("#{}", layout.index + 1),
        9.0,
        palette::LABEL_DIM,
    );
    scene.text(
        layout.center_x(),
        floor + viewport.settings().floor_band + 14.0,
        cabinet.name.clone(),
        11.0,
        palette::CEILING,
    );
}

fn draw_accessory(
    scene: &mut Scene,
    viewport: &Viewport,
    layout: &CabinetLayout,
    cabinet: &Cabinet,
    accessory: &Accessory,
    rect: PixelRect,
) {
    match accessory.kind {
        AccessoryKind::Shelf { .. } => {
            let bar = PixelRect::new(rect.x, rect.y, rect.width, rect.height.max(3.0));
            scene.rect(bar, Some(palette::SHELF), None);
            let bracket = StrokeStyle::solid(palette::HARDWARE, 1.0);
            for (x, dir) in [(rect.x + 5.0, 1.0), (rect.right() - 5.0, -1.0)] {
                scene.line(x, bar.bottom(), x, bar.bottom() + 5.0, bracket.clone());
                scene.line(
                    x,
                    bar.bottom() + 5.0,
                    x + 4.0 * dir,
                    bar.bottom(),
                    bracket.clone(),
                );
            }
        }
        AccessoryKind::Drawer { .. } => {
            scene.rounded_rect(
                rect,
                Some(palette::DRAWER.with_opacity(0.2)),
                Some(StrokeStyle::solid(palette::DRAWER, 1.5)),
                3.0,
            );
            scene.line(
                rect.x + rect.width * 0.35,
                rect.center_y(),
                rect.x + rect.width * 0.65,
                rect.center_y(),
                StrokeStyle::solid(palette::DRAWER, 2.0),
            );
        }
        AccessoryKind::Door { width, hinge } => {
            draw_door(scene, viewport, layout, cabinet, rect, width, hinge);
        }
        AccessoryKind::HangingRod { .. } => {
            let y = rect.center_y();
            scene.line(
                rect.x + 4.0,
                y,
                rect.right() - 4.0,
                y,
                StrokeStyle::solid(palette::ROD, 3.0),
            );
            let bracket = StrokeStyle::solid(palette::HARDWARE, 2.0);
            for x in [rect.x + 4.0, rect.right() - 4.0] {
                scene.line(x, y - 6.0, x, y + 1.5, bracket.clone());
            }
        }
        AccessoryKind::Led { placement, .. } => draw_led(scene, rect, placement),
        AccessoryKind::Divider { .. } => {
            scene.rect(
                rect,
                Some(palette::DIVIDER),
                Some(StrokeStyle::solid(palette::CABINET_STROKE, 0.5)),
            );
        }
    }
}

fn hinge_dots(scene: &mut Scene, x: f64, panel: PixelRect) {
    let inset = (panel.height * 0.1).min(10.0);
    scene.circle(x, panel.y + inset, 2.0, palette::HARDWARE);
    scene.circle(x, panel.bottom() - inset, 2.0, palette::HARDWARE);
}

fn door_handle(scene: &mut Scene, x: f64, panel: PixelRect) {
    scene.line(
        x,
        panel.y + panel.height * 0.4,
        x,
        panel.y + panel.height * 0.6,
        StrokeStyle::solid(palette::HARDWARE, 2.0),
    );
}

fn door_panel(scene: &mut Scene, panel: PixelRect) {
    scene.rect(
        panel,
        Some(palette::DOOR.with_opacity(0.08)),
        Some(StrokeStyle::solid(palette::DOOR, 1.5)),
    );
}

/// Single leaf hinged on `hinge`, handle on the opposite edge
fn single_door(scene: &mut Scene, panel: PixelRect, hinge: Hinge) {
    door_panel(scene, panel);
    let (hinge_x, handle_x) = match hinge {
        Hinge::Left => (panel.x + 4.0, panel.right() - 6.0),
        Hinge::Right => (panel.right() - 4.0, panel.x + 6.0),
    };
    hinge_dots(scene, hinge_x, panel);
    door_handle(scene, handle_x, panel);
}

fn draw_door(
    scene: &mut Scene,
    viewport: &Viewport,
    layout: &CabinetLayout,
    cabinet: &Cabinet,
    rect: PixelRect,
    width: Option<f64>,
    hinge: Option<Hinge>,
) {
    let Some(width) = width else {
        single_door(scene, rect, hinge.unwrap_or_default());
        return;
    };

    let door_px = viewport.accessory_x(layout, cabinet, width) - layout.inner.x;
    if width >= DOUBLE_DOOR_MIN_WIDTH {
        let half = door_px / 2.0;
        let mid = rect.center_x();
        let left = PixelRect::new(mid - half, rect.y, half, rect.height);
        let right = PixelRect::new(mid, rect.y, half, rect.height);
        single_door(scene, left, Hinge::Left);
        single_door(scene, right, Hinge::Right);
    } else {
        let hinge = hinge.unwrap_or_default();
        let x = match hinge {
            Hinge::Left => rect.x,
            Hinge::Right => rect.right() - door_px,
        };
        single_door(scene, PixelRect::new(x, rect.y, door_px, rect.height), hinge);
    }
}

fn draw_led(scene: &mut Scene, rect: PixelRect, placement: LedPlacement) {
    const GLOW: f64 = 18.0;
    let bright = palette::LED.with_opacity(0.6);
    let glow = palette::LED.with_opacity(0.35);
    let clear = palette::LED.with_opacity(0.0);

    match placement {
        LedPlacement::Top | LedPlacement::Bottom => {
            let bar = PixelRect::new(rect.x, rect.y, rect.width, rect.height.clamp(2.0, 4.0));
            if placement == LedPlacement::Top {
                let halo = PixelRect::new(bar.x, bar.bottom(), bar.width, GLOW);
                scene.gradient(halo, glow, clear, GradientAxis::Vertical);
            } else {
                let halo = PixelRect::new(bar.x, bar.y - GLOW, bar.width, GLOW);
                scene.gradient(halo, clear, glow, GradientAxis::Vertical);
            }
            scene.rect(bar, Some(bright), None);
        }
        LedPlacement::Left | LedPlacement::Right => {
            // Vertical strip along the span edge, `height` is its length
            let strip_h = rect.height.max(4.0);
            let (bar, halo, from, to) = if placement == LedPlacement::Left {
                let bar = PixelRect::new(rect.x, rect.y, 3.0, strip_h);
                let halo = PixelRect::new(bar.right(), bar.y, GLOW, strip_h);
                (bar, halo, glow, clear)
            } else {
                let bar = PixelRect::new(rect.right() - 3.0, rect.y, 3.0, strip_h);
                let halo = PixelRect::new(bar.x - GLOW, bar.y, GLOW, strip_h);
                (bar, halo, clear, glow)
            };
            scene.gradient(halo, from, to, GradientAxis::Horizontal);
            scene.rect(bar, Some(bright), None);
        }
    }
}

fn draw_total_width(scene: &mut Scene, design: &Design, viewport: &Viewport) {
    if design.cabinet_count() < 2 {
        return;
    }
    let left = viewport.settings().padding_left;
    let right = viewport.row_right(design);
    let y = viewport.floor_y(design) + viewport.settings().floor_band + 30.0;
    let dim = StrokeStyle::solid(palette::LABEL, 1.0);
    scene.line(left, y, right, y, dim.clone());
    scene.line(left, y - 4.0, left, y + 4.0, dim.clone());
    scene.line(right, y - 4.0, right, y + 4.0, dim);
    scene.text(
        (left + right) / 2.0,
        y + 14.0,
        format!("Total {}", format_cm(design.total_width())),
        10.0,
        palette::LABEL,
    );
}

fn draw_ceiling_dimension(scene: &mut Scene, design: &Design, viewport: &Viewport) {
    let x = viewport.settings().padding_left - 28.0;
    let top = viewport.ceiling_y();
    let bottom = viewport.floor_y(design);
    let dim = StrokeStyle::solid(palette::LABEL_DIM, 1.0);
    scene.line(x, top, x, bottom, dim.clone());
    scene.line(x - 4.0, top, x + 4.0, top, dim.clone());
    scene.line(x - 4.0, bottom, x + 4.0, bottom, dim);
    scene.text_rotated(
        x - 6.0,
        (top + bottom) / 2.0,
        format_cm(design.ceiling_height()),
        10.0,
        palette::LABEL_DIM,
        TextAnchor::Middle,
        -90.0,
    );
}
