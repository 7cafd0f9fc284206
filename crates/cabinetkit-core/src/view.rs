//! Drawing-surface layout parameters
//!
//! Fixed paddings, band heights and the pixels-per-centimeter scale used to
//! lay cabinets out on the front-elevation drawing. Panel thickness and kick
//! height are physical (cm) and are scaled with everything else.

use serde::{Deserialize, Serialize};

/// Layout parameters for the front-elevation drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Pixels per centimeter
    pub scale: f64,
    /// Horizontal gap between neighbouring cabinets, in pixels
    pub cabinet_gap: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    /// Height of the ceiling band, in pixels
    pub ceiling_band: f64,
    /// Height of the floor band, in pixels
    pub floor_band: f64,
    /// Carcass board thickness, in centimeters
    pub panel_thickness_cm: f64,
    /// Kick plate height of floor-standing units, in centimeters
    pub kick_height_cm: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            scale: 3.0,
            cabinet_gap: 12.0,
            padding_left: 64.0,
            padding_right: 48.0,
            padding_top: 40.0,
            padding_bottom: 56.0,
            ceiling_band: 18.0,
            floor_band: 22.0,
            panel_thickness_cm: 1.8,
            kick_height_cm: 8.0,
        }
    }
}

impl ViewSettings {
    /// Checks that every parameter is usable for layout.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err("Scale must be > 0".to_string());
        }
        let non_negative = [
            ("cabinet_gap", self.cabinet_gap),
            ("padding_left", self.padding_left),
            ("padding_right", self.padding_right),
            ("padding_top", self.padding_top),
            ("padding_bottom", self.padding_bottom),
            ("ceiling_band", self.ceiling_band),
            ("floor_band", self.floor_band),
            ("panel_thickness_cm", self.panel_thickness_cm),
            ("kick_height_cm", self.kick_height_cm),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{} must be >= 0", name));
            }
        }
        Ok(())
    }
}
