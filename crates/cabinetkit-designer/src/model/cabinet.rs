//! Cabinets and their height profiles.

use cabinetkit_core::constants::{
    DEFAULT_LOWER_HEIGHT, DEFAULT_UPPER_ELEVATION, DEFAULT_UPPER_HEIGHT,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::accessory::{Accessory, AccessoryType};

/// Archetype selector without dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    /// One floor-standing body
    Tall,
    /// Base unit plus an elevated wall unit
    Split,
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tall => write!(f, "tall"),
            Self::Split => write!(f, "split"),
        }
    }
}

/// Vertical band of accessory space inside one carcass unit, in centimeters
/// from the top of the cabinet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bay {
    pub top: f64,
    pub bottom: f64,
}

impl Bay {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Distance from `y` to the bay; zero inside it
    pub fn distance(&self, y: f64) -> f64 {
        if y < self.top {
            self.top - y
        } else if y > self.bottom {
            y - self.bottom
        } else {
            0.0
        }
    }

    /// Whether `[top, bottom]` lies inside the bay, within `tolerance`
    pub fn contains(&self, top: f64, bottom: f64, tolerance: f64) -> bool {
        top >= self.top - tolerance && bottom <= self.bottom + tolerance
    }
}

/// Upper and base unit bays of a split profile
fn split_bays(lower_height: f64, upper_height: f64, upper_elevation: f64) -> (Bay, Bay) {
    let overall = upper_elevation + upper_height;
    (
        Bay::new(0.0, upper_height),
        Bay::new(overall - lower_height, overall),
    )
}

/// Height profile of a cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "archetype", rename_all = "lowercase")]
pub enum CabinetProfile {
    Tall {
        height: f64,
    },
    Split {
        lower_height: f64,
        upper_height: f64,
        /// Floor to the underside of the upper unit
        upper_elevation: f64,
        #[serde(default)]
        has_backsplash: bool,
    },
}

impl CabinetProfile {
    /// Split profile with the default base/wall unit dimensions
    pub fn default_split() -> Self {
        CabinetProfile::Split {
            lower_height: DEFAULT_LOWER_HEIGHT,
            upper_height: DEFAULT_UPPER_HEIGHT,
            upper_elevation: DEFAULT_UPPER_ELEVATION,
            has_backsplash: true,
        }
    }

    pub fn archetype(&self) -> Archetype {
        match self {
            Self::Tall { .. } => Archetype::Tall,
            Self::Split { .. } => Archetype::Split,
        }
    }

    /// Floor to the top of the highest unit
    pub fn overall_height(&self) -> f64 {
        match *self {
            Self::Tall { height } => height,
            Self::Split {
                upper_height,
                upper_elevation,
                ..
            } => upper_elevation + upper_height,
        }
    }

    /// Accessory bays, top first. A split cabinet has one per unit and none
    /// across the gap between them.
    pub fn bays(&self) -> Vec<Bay> {
        match *self {
            Self::Tall { height } => vec![Bay::new(0.0, height)],
            Self::Split {
                lower_height,
                upper_height,
                upper_elevation,
                ..
            } => {
                let (upper, lower) = split_bays(lower_height, upper_height, upper_elevation);
                vec![upper, lower]
            }
        }
    }

    /// The floor-standing bay, where new accessories go
    pub fn base_bay(&self) -> Bay {
        match *self {
            Self::Tall { height } => Bay::new(0.0, height),
            Self::Split {
                lower_height,
                upper_height,
                upper_elevation,
                ..
            } => split_bays(lower_height, upper_height, upper_elevation).1,
        }
    }

    /// Bay nearest to a vertical position; the upper one on ties
    pub fn bay_at(&self, y: f64) -> Bay {
        match *self {
            Self::Tall { height } => Bay::new(0.0, height),
            Self::Split {
                lower_height,
                upper_height,
                upper_elevation,
                ..
            } => {
                let (upper, lower) = split_bays(lower_height, upper_height, upper_elevation);
                if lower.distance(y) < upper.distance(y) {
                    lower
                } else {
                    upper
                }
            }
        }
    }
}

/// One modular storage unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabinet {
    pub id: Uuid,
    pub name: String,
    /// Width in centimeters
    pub width: f64,
    #[serde(flatten)]
    pub profile: CabinetProfile,
    #[serde(default)]
    pub accessories: Vec<Accessory>,
}

impl Cabinet {
    /// Create an empty tall cabinet
    pub fn tall(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            width,
            profile: CabinetProfile::Tall { height },
            accessories: Vec::new(),
        }
    }

    /// Create an empty split cabinet
    pub fn split(
        name: impl Into<String>,
        width: f64,
        lower_height: f64,
        upper_height: f64,
        upper_elevation: f64,
        has_backsplash: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            width,
            profile: CabinetProfile::Split {
                lower_height,
                upper_height,
                upper_elevation,
                has_backsplash,
            },
            accessories: Vec::new(),
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.profile.archetype()
    }

    /// Floor to the top of the cabinet
    pub fn height(&self) -> f64 {
        self.profile.overall_height()
    }

    /// Bay an accessory belongs to, by its vertical center
    pub fn bay_of(&self, accessory: &Accessory) -> Bay {
        self.profile.bay_at(accessory.y + accessory.height / 2.0)
    }

    pub fn accessory(&self, id: Uuid) -> Option<&Accessory> {
        self.accessories.iter().find(|a| a.id == id)
    }

    pub(crate) fn accessory_index(&self, id: Uuid) -> Option<usize> {
        self.accessories.iter().position(|a| a.id == id)
    }

    /// Accessories of one type
    pub fn accessories_of(&self, ty: AccessoryType) -> impl Iterator<Item = &Accessory> {
        self.accessories
            .iter()
            .filter(move |a| a.accessory_type() == ty)
    }

    /// Accessory counts by type, in display order, omitting zero counts
    pub fn accessory_counts(&self) -> Vec<(AccessoryType, usize)> {
        AccessoryType::ALL
            .iter()
            .map(|ty| (*ty, self.accessories_of(*ty).count()))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}
