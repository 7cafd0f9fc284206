//! Accessories placed inside a cabinet.
//!
//! Every accessory shares an identifier, a vertical offset `y` and an extent
//! `height`, both in centimeters. `y` is measured downward from the top of the
//! cabinet, so a drawer moving down has a growing `y`. An accessory always
//! lies inside one bay of its cabinet (see [`Bay`](super::cabinet::Bay)).
//! Variant-specific fields live in [`AccessoryKind`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cabinet::Cabinet;

/// Side a single door leaf is hinged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hinge {
    #[default]
    Left,
    Right,
}

impl Hinge {
    /// The other side.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl std::fmt::Display for Hinge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Edge an LED strip is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedPlacement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl LedPlacement {
    /// Whether the strip runs horizontally.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

impl std::fmt::Display for LedPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Accessory variant without its data, used for creation and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccessoryType {
    Shelf,
    Drawer,
    Door,
    HangingRod,
    Led,
    Divider,
}

impl AccessoryType {
    /// All types in display order
    pub const ALL: [AccessoryType; 6] = [
        AccessoryType::Shelf,
        AccessoryType::Drawer,
        AccessoryType::Door,
        AccessoryType::HangingRod,
        AccessoryType::Led,
        AccessoryType::Divider,
    ];

    /// Singular English noun
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shelf => "shelf",
            Self::Drawer => "drawer",
            Self::Door => "door",
            Self::HangingRod => "hanging rod",
            Self::Led => "LED strip",
            Self::Divider => "divider",
        }
    }

    /// Plural English noun
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Shelf => "shelves",
            Self::Drawer => "drawers",
            Self::Door => "doors",
            Self::HangingRod => "hanging rods",
            Self::Led => "LED strips",
            Self::Divider => "dividers",
        }
    }

    /// `"1 shelf"`, `"2 shelves"`
    pub fn count_label(&self, count: usize) -> String {
        if count == 1 {
            format!("1 {}", self.label())
        } else {
            format!("{} {}", count, self.plural())
        }
    }
}

impl std::fmt::Display for AccessoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Variant-specific accessory data.
///
/// `x` is the horizontal anchor in centimeters from the cabinet's left edge.
/// Shelves, drawers, rods and LED strips fill whatever span the dividers
/// around `x` leave them; a divider stands at `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AccessoryKind {
    Shelf {
        #[serde(default)]
        x: f64,
    },
    Drawer {
        #[serde(default)]
        x: f64,
    },
    Door {
        /// Explicit door width; `None` covers the full cabinet width.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f64>,
        /// Hinge side of a single leaf.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hinge: Option<Hinge>,
    },
    HangingRod {
        #[serde(default)]
        x: f64,
    },
    Led {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        placement: LedPlacement,
    },
    Divider {
        x: f64,
    },
}

impl AccessoryKind {
    /// The variant's type tag
    pub fn accessory_type(&self) -> AccessoryType {
        match self {
            Self::Shelf { .. } => AccessoryType::Shelf,
            Self::Drawer { .. } => AccessoryType::Drawer,
            Self::Door { .. } => AccessoryType::Door,
            Self::HangingRod { .. } => AccessoryType::HangingRod,
            Self::Led { .. } => AccessoryType::Led,
            Self::Divider { .. } => AccessoryType::Divider,
        }
    }
}

/// An accessory owned by one cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    pub id: Uuid,
    /// Offset from the top of the cabinet (cm)
    pub y: f64,
    /// Vertical extent (cm); thickness for shelves, rods and LED strips
    pub height: f64,
    #[serde(flatten)]
    pub kind: AccessoryKind,
}

impl Accessory {
    /// Create an accessory with a fresh identifier
    pub fn new(kind: AccessoryKind, y: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            y,
            height,
            kind,
        }
    }

    /// Default geometry for a new accessory of `ty` in `cabinet`.
    ///
    /// Positions are relative to the floor-standing bay; on a split cabinet
    /// that is the base unit.
    pub fn with_defaults(ty: AccessoryType, cabinet: &Cabinet) -> Self {
        let bay = cabinet.profile.base_bay();
        let (top, h) = (bay.top, bay.height());
        match ty {
            AccessoryType::Shelf => Self::new(AccessoryKind::Shelf { x: 0.0 }, top + h / 2.0, 2.0),
            AccessoryType::Drawer => {
                Self::new(AccessoryKind::Drawer { x: 0.0 }, top + h * 0.6, 20.0)
            }
            AccessoryType::Door => Self::new(
                AccessoryKind::Door {
                    width: None,
                    hinge: None,
                },
                top,
                h,
            ),
            AccessoryType::HangingRod => {
                Self::new(AccessoryKind::HangingRod { x: 0.0 }, top + h * 0.4, 4.0)
            }
            AccessoryType::Led => Self::new(
                AccessoryKind::Led {
                    x: 0.0,
                    placement: LedPlacement::Top,
                },
                top + 10.0,
                2.0,
            ),
            AccessoryType::Divider => Self::new(
                AccessoryKind::Divider {
                    x: cabinet.width / 2.0,
                },
                top,
                h,
            ),
        }
    }

    pub fn accessory_type(&self) -> AccessoryType {
        self.kind.accessory_type()
    }

    pub fn is_drawer(&self) -> bool {
        matches!(self.kind, AccessoryKind::Drawer { .. })
    }

    pub fn is_divider(&self) -> bool {
        matches!(self.kind, AccessoryKind::Divider { .. })
    }

    /// Lower edge (`y + height`)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal anchor; doors have none and report 0.
    pub fn anchor_x(&self) -> f64 {
        match self.kind {
            AccessoryKind::Shelf { x }
            | AccessoryKind::Drawer { x }
            | AccessoryKind::HangingRod { x }
            | AccessoryKind::Led { x, .. }
            | AccessoryKind::Divider { x } => x,
            AccessoryKind::Door { .. } => 0.0,
        }
    }

    /// Set the horizontal anchor. Returns false for doors.
    pub(crate) fn set_anchor_x(&mut self, value: f64) -> bool {
        match &mut self.kind {
            AccessoryKind::Shelf { x }
            | AccessoryKind::Drawer { x }
            | AccessoryKind::HangingRod { x }
            | AccessoryKind::Led { x, .. }
            | AccessoryKind::Divider { x } => {
                *x = value;
                true
            }
            AccessoryKind::Door { .. } => false,
        }
    }

    /// Whether the accessory always spans the full cabinet width
    pub fn spans_full_width(&self) -> bool {
        matches!(
            self.kind,
            AccessoryKind::Door { .. } | AccessoryKind::Divider { .. }
        )
    }
}
