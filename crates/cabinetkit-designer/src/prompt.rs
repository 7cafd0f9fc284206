//! Prompt compiler.
//!
//! Turns a design, the vendor specifications and the environment settings
//! into the text sent to the rendering service alongside the sketch.

use std::fmt;

use cabinetkit_core::{format_cm, VendorSpecs};
use serde::{Deserialize, Serialize};

use crate::model::{Cabinet, CabinetProfile, Design, FloorFinish};

/// Used when no vendor specification is listed
pub const DEFAULT_SPECS_TEXT: &str = "18mm particle board, standard hardware";

/// Used when no material is assigned
pub const DEFAULT_MATERIALS_TEXT: &str = "white tones";

/// Instructions that keep the generated image faithful to the sketch
pub const HARD_CONSTRAINTS: [&str; 5] = [
    "Keep the number, order and proportions of the cabinets exactly as drawn.",
    "Show only the accessories listed above; do not invent shelves, drawers, doors, rods or lights.",
    "Do not add appliances, decorations, plants or furniture that are not in the drawing.",
    "Do not add text, labels or dimension lines.",
    "Keep the ceiling height and floor type as specified.",
];

/// Spotlight color temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LightTemperature {
    #[serde(rename = "3000K")]
    Warm,
    #[default]
    #[serde(rename = "4000K")]
    Natural,
    #[serde(rename = "6000K")]
    Cool,
}

impl LightTemperature {
    pub const ALL: [LightTemperature; 3] = [Self::Warm, Self::Natural, Self::Cool];

    pub fn kelvin(&self) -> u32 {
        match self {
            Self::Warm => 3000,
            Self::Natural => 4000,
            Self::Cool => 6000,
        }
    }

    /// Descriptive label used in the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::Warm => "warm white 3000K",
            Self::Natural => "natural light 4000K",
            Self::Cool => "cool white 6000K",
        }
    }
}

/// Whether doors are shown open or closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

/// Output aspect ratio requested from the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:4")]
    Portrait,
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ratio = match self {
            Self::Wide => "16:9",
            Self::Standard => "4:3",
            Self::Square => "1:1",
            Self::Portrait => "3:4",
        };
        write!(f, "{}", ratio)
    }
}

/// Scene environment for the rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Environment {
    pub floor: FloorFinish,
    pub light: LightTemperature,
    pub doors: DoorState,
    pub aspect_ratio: AspectRatio,
}

impl Environment {
    /// Default environment using the design's floor finish
    pub fn for_design(design: &Design) -> Self {
        Self {
            floor: design.floor,
            ..Self::default()
        }
    }
}

/// Archetype-specific dimensions of one cabinet
fn describe_dimensions(cabinet: &Cabinet) -> String {
    match cabinet.profile {
        CabinetProfile::Tall { height } => format!(
            "tall, {} wide, {} high",
            format_cm(cabinet.width),
            format_cm(height)
        ),
        CabinetProfile::Split {
            lower_height,
            upper_height,
            upper_elevation,
            has_backsplash,
        } => {
            let mut text = format!(
                "split, {} wide, base unit {} high, wall unit {} high mounted {} above the floor",
                format_cm(cabinet.width),
                format_cm(lower_height),
                format_cm(upper_height),
                format_cm(upper_elevation)
            );
            if has_backsplash {
                text.push_str(", backsplash between the units");
            }
            text
        }
    }
}

/// "2 drawers, 1 shelf", or "no accessories"
pub fn describe_accessories(cabinet: &Cabinet) -> String {
    let counts = cabinet.accessory_counts();
    if counts.is_empty() {
        return "no accessories".to_string();
    }
    counts
        .iter()
        .map(|(ty, n)| ty.count_label(*n))
        .collect::<Vec<_>>()
        .join(", ")
}

fn materials_text(design: &Design) -> String {
    let text = design
        .materials
        .iter()
        .map(|(zone, material)| format!("{} in {}", zone.label(), material))
        .collect::<Vec<_>>()
        .join(", ");
    if text.is_empty() {
        DEFAULT_MATERIALS_TEXT.to_string()
    } else {
        text
    }
}

fn specs_text(specs: &VendorSpecs) -> String {
    let text = specs
        .listed()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("; ");
    if text.is_empty() {
        DEFAULT_SPECS_TEXT.to_string()
    } else {
        text
    }
}

/// Compile the rendering prompt.
pub fn compile_prompt(design: &Design, specs: &VendorSpecs, environment: &Environment) -> String {
    Prompt {
        design,
        specs,
        environment,
    }
    .to_string()
}

struct Prompt<'a> {
    design: &'a Design,
    specs: &'a VendorSpecs,
    environment: &'a Environment,
}

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Prompt {
            design,
            specs,
            environment,
        } = *self;
        writeln!(
            out,
            "Render this modular cabinet line drawing as a high-quality photorealistic interior image."
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "Design: {}. {}.",
            design.name,
            design.summary().replace(" | ", ", ")
        )?;
        writeln!(out, "Cabinets (left to right):")?;
        for (i, cabinet) in design.cabinets().iter().enumerate() {
            writeln!(
                out,
                "{}. {}: {}; {}",
                i + 1,
                cabinet.name,
                describe_dimensions(cabinet),
                describe_accessories(cabinet)
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Materials: {}", materials_text(design))?;
        writeln!(out, "Vendor specifications: {}", specs_text(specs))?;
        writeln!(out, "Environment:")?;
        writeln!(out, "- Ceiling: flat white ceiling")?;
        writeln!(
            out,
            "- Lighting: one spotlight above each cabinet, {}",
            environment.light.label()
        )?;
        writeln!(out, "- Floor: {} floor", environment.floor.label())?;
        writeln!(
            out,
            "- Doors: {}",
            match environment.doors {
                DoorState::Closed => "closed",
                DoorState::Open => "open, showing the interior",
            }
        )?;
        writeln!(
            out,
            "View: straight-on front view, aspect ratio {}",
            environment.aspect_ratio
        )?;
        writeln!(
            out,
            "Style: modern minimalist, realistic interior design rendering, sharp high-resolution detail"
        )?;
        writeln!(out)?;
        writeln!(out, "Hard constraints:")?;
        for constraint in HARD_CONSTRAINTS {
            writeln!(out, "- {}", constraint)?;
        }

        if let Some(notes) = specs.notes() {
            writeln!(out)?;
            write!(out, "{}", notes)?;
        }
        Ok(())
    }
}
