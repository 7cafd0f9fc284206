//! Geometry and scale of the front-elevation drawing.
//!
//! Converts centimeter geometry to drawing-surface pixels. The surface is laid
//! out top to bottom as: top padding, ceiling band, the room height at the
//! view scale, floor band, bottom padding. Cabinets stand on the floor line
//! left to right, separated by a fixed gap.
//!
//! Each bay of a cabinet is mapped linearly onto the interior of its unit, so
//! accessories of a split cabinet never reach into the gap between units:
//! ```text
//! pixel_y = interior.y + ((y - bay.top) / bay.height) * interior.height
//! ```

use std::fmt;

use cabinetkit_core::ViewSettings;
use uuid::Uuid;

use crate::constraints::horizontal_span;
use crate::model::{Accessory, AccessoryKind, Bay, Cabinet, CabinetProfile, Design};

/// Minimum pixel thickness used when hit-testing thin accessories.
const HIT_SLOP: f64 = 3.0;

/// Axis-aligned rectangle in drawing-surface pixels (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from edges
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// Grow by `d` on every side
    pub fn inflate(&self, d: f64) -> Self {
        Self::new(
            self.x - d,
            self.y - d,
            self.width + 2.0 * d,
            self.height + 2.0 * d,
        )
    }
}

/// One carcass body of a cabinet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitFrame {
    /// Outer edge of the panels
    pub outer: PixelRect,
    /// Kick plate band of floor-standing units
    pub kick: Option<PixelRect>,
}

/// Pixel layout of one cabinet.
#[derive(Debug, Clone, PartialEq)]
pub struct CabinetLayout {
    pub index: usize,
    /// Carcass bodies, bottom unit first
    pub frames: Vec<UnitFrame>,
    /// Gap between the units of a split cabinet, when it has a backsplash
    pub backsplash: Option<PixelRect>,
    /// Inner content rectangle of the whole cabinet
    pub inner: PixelRect,
    /// Accessory bays and the unit interiors they map onto, top first
    pub interiors: Vec<(Bay, PixelRect)>,
    /// Horizontal extent of the cabinet
    pub left: f64,
    pub right: f64,
    /// Topmost pixel of the cabinet
    pub top: f64,
}

impl CabinetLayout {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Bounding box of all frames
    pub fn bounds(&self, floor_y: f64) -> PixelRect {
        PixelRect::from_edges(self.left, self.top, self.right, floor_y)
    }

    /// Interior rectangle of `bay`, or the whole inner rectangle
    pub fn interior(&self, bay: Bay) -> PixelRect {
        self.interiors
            .iter()
            .find(|(b, _)| *b == bay)
            .map(|(_, rect)| *rect)
            .unwrap_or(self.inner)
    }
}

/// Maps design geometry onto the drawing surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewport {
    settings: ViewSettings,
}

impl Viewport {
    pub fn new(settings: ViewSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// Scale a centimeter length to pixels.
    pub fn to_pixels(&self, cm: f64) -> f64 {
        cm * self.settings.scale
    }

    /// Scale a pixel length to centimeters.
    pub fn to_cm(&self, px: f64) -> f64 {
        px / self.settings.scale
    }

    /// Drawing-surface size in whole pixels
    pub fn surface_size(&self, design: &Design) -> (u32, u32) {
        let s = &self.settings;
        let cabinets: f64 = design
            .cabinets()
            .iter()
            .map(|c| self.to_pixels(c.width))
            .sum();
        let gaps = s.cabinet_gap * design.cabinet_count().saturating_sub(1) as f64;
        let width = s.padding_left + cabinets + gaps + s.padding_right;
        let height = s.padding_top
            + s.ceiling_band
            + self.to_pixels(design.ceiling_height())
            + s.floor_band
            + s.padding_bottom;
        (width.ceil() as u32, height.ceil() as u32)
    }

    /// Top edge of the ceiling band
    pub fn ceiling_band_top(&self) -> f64 {
        self.settings.padding_top
    }

    /// The ceiling line (bottom edge of the ceiling band)
    pub fn ceiling_y(&self) -> f64 {
        self.settings.padding_top + self.settings.ceiling_band
    }

    /// The floor line cabinets stand on
    pub fn floor_y(&self, design: &Design) -> f64 {
        self.ceiling_y() + self.to_pixels(design.ceiling_height())
    }

    /// Left edge of every cabinet, in row order
    pub fn cabinet_offsets(&self, design: &Design) -> Vec<f64> {
        let mut x = self.settings.padding_left;
        design
            .cabinets()
            .iter()
            .map(|c| {
                let left = x;
                x += self.to_pixels(c.width) + self.settings.cabinet_gap;
                left
            })
            .collect()
    }

    /// Right edge of the last cabinet
    pub fn row_right(&self, design: &Design) -> f64 {
        let gaps = self.settings.cabinet_gap * design.cabinet_count().saturating_sub(1) as f64;
        self.settings.padding_left + self.to_pixels(design.total_width()) + gaps
    }

    fn unit_frame(&self, left: f64, right: f64, top: f64, bottom: f64, kick: bool) -> UnitFrame {
        let t = self.to_pixels(self.settings.panel_thickness_cm);
        let k = self.to_pixels(self.settings.kick_height_cm);
        UnitFrame {
            outer: PixelRect::from_edges(left, top, right, bottom),
            kick: kick.then(|| PixelRect::from_edges(left + t, bottom - k, right - t, bottom)),
        }
    }

    /// Pixel layout of one cabinet standing at `left`
    pub fn cabinet_layout(&self, design: &Design, index: usize, left: f64) -> Option<CabinetLayout> {
        let cabinet = design.cabinets().get(index)?;
        let floor = self.floor_y(design);
        let right = left + self.to_pixels(cabinet.width);
        let t = self.to_pixels(self.settings.panel_thickness_cm);
        let k = self.to_pixels(self.settings.kick_height_cm);

        let bays = cabinet.profile.bays();
        let (frames, backsplash, top, interiors) = match cabinet.profile {
            CabinetProfile::Tall { height } => {
                let top = floor - self.to_pixels(height);
                let interior = PixelRect::from_edges(left + t, top + t, right - t, floor - k - t);
                (
                    vec![self.unit_frame(left, right, top, floor, true)],
                    None,
                    top,
                    vec![interior],
                )
            }
            CabinetProfile::Split {
                lower_height,
                upper_height,
                upper_elevation,
                has_backsplash,
            } => {
                let lower_top = floor - self.to_pixels(lower_height);
                let upper_bottom = floor - self.to_pixels(upper_elevation);
                let upper_top = upper_bottom - self.to_pixels(upper_height);
                let backsplash = (has_backsplash && upper_bottom < lower_top)
                    .then(|| PixelRect::from_edges(left, upper_bottom, right, lower_top));
                (
                    vec![
                        self.unit_frame(left, right, lower_top, floor, true),
                        self.unit_frame(left, right, upper_top, upper_bottom, false),
                    ],
                    backsplash,
                    upper_top,
                    vec![
                        PixelRect::from_edges(left + t, upper_top + t, right - t, upper_bottom - t),
                        PixelRect::from_edges(left + t, lower_top + t, right - t, floor - k - t),
                    ],
                )
            }
        };

        Some(CabinetLayout {
            index,
            frames,
            backsplash,
            inner: PixelRect::from_edges(left + t, top + t, right - t, floor - k - t),
            interiors: bays.into_iter().zip(interiors).collect(),
            left,
            right,
            top,
        })
    }

    /// Layouts of every cabinet, left to right
    pub fn layouts(&self, design: &Design) -> Vec<CabinetLayout> {
        self.cabinet_offsets(design)
            .into_iter()
            .enumerate()
            .filter_map(|(i, left)| self.cabinet_layout(design, i, left))
            .collect()
    }

    /// Map a vertical offset (cm) inside `bay` onto that bay's interior
    pub fn bay_y(&self, layout: &CabinetLayout, bay: Bay, y: f64) -> f64 {
        let rect = layout.interior(bay);
        if bay.height() <= 0.0 {
            return rect.y;
        }
        rect.y + ((y - bay.top) / bay.height()) * rect.height
    }

    /// Map a cabinet-local vertical offset (cm) onto the interior of the
    /// nearest bay
    pub fn accessory_y(&self, layout: &CabinetLayout, cabinet: &Cabinet, y: f64) -> f64 {
        self.bay_y(layout, cabinet.profile.bay_at(y), y)
    }

    /// Map a cabinet-local horizontal offset (cm) onto the inner rectangle
    pub fn accessory_x(&self, layout: &CabinetLayout, cabinet: &Cabinet, x: f64) -> f64 {
        layout.inner.x + (x / cabinet.width) * layout.inner.width
    }

    /// Pixel rectangle an accessory occupies: its resolved span across, its
    /// own range down. Dividers are a thin bar at their position.
    pub fn accessory_rect(
        &self,
        layout: &CabinetLayout,
        cabinet: &Cabinet,
        accessory: &Accessory,
    ) -> PixelRect {
        let bay = cabinet.bay_of(accessory);
        let top = self.bay_y(layout, bay, accessory.y);
        let bottom = self.bay_y(layout, bay, accessory.bottom());
        match accessory.kind {
            AccessoryKind::Divider { x } => {
                let cx = self.accessory_x(layout, cabinet, x);
                PixelRect::from_edges(cx - 1.5, top, cx + 1.5, bottom)
            }
            _ => {
                let span = horizontal_span(cabinet, accessory);
                PixelRect::from_edges(
                    self.accessory_x(layout, cabinet, span.left),
                    top,
                    self.accessory_x(layout, cabinet, span.right),
                    bottom,
                )
            }
        }
    }

    /// Cabinet under a pointer x coordinate.
    ///
    /// Scans left to right accumulating widths and gaps; pointers in a gap or
    /// outside the row hit nothing.
    pub fn cabinet_at(&self, design: &Design, px: f64) -> Option<usize> {
        let mut x = self.settings.padding_left;
        for (i, cabinet) in design.cabinets().iter().enumerate() {
            let width = self.to_pixels(cabinet.width);
            if px >= x && px <= x + width {
                return Some(i);
            }
            x += width + self.settings.cabinet_gap;
        }
        None
    }

    /// Topmost accessory of a cabinet under a pointer, if any
    pub fn accessory_at(&self, design: &Design, index: usize, px: f64, py: f64) -> Option<Uuid> {
        let left = *self.cabinet_offsets(design).get(index)?;
        let layout = self.cabinet_layout(design, index, left)?;
        let cabinet = design.cabinets().get(index)?;

        // Drawn last is on top
        cabinet
            .accessories
            .iter()
            .rev()
            .find(|a| {
                let rect = self.accessory_rect(&layout, cabinet, a);
                let slop = if rect.height.min(rect.width) < HIT_SLOP * 2.0 {
                    HIT_SLOP
                } else {
                    0.0
                };
                rect.inflate(slop).contains(px, py)
            })
            .map(|a| a.id)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.1}px/cm | Gap: {:.0}px",
            self.settings.scale, self.settings.cabinet_gap
        )
    }
}
