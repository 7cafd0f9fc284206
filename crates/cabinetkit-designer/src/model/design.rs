//! The design aggregate and its constraint-aware edit operations.
//!
//! Every edit clamps instead of failing and re-resolves the affected
//! cabinet before returning. Drawers squeezed out by a shrinking cabinet are
//! removed and counted in the returned [`EditOutcome`]. Errors are reserved
//! for structural problems:
//! unknown cabinets or accessories, removing the last cabinet, a full drawer
//! stack, or an edit that does not apply to the target.

use cabinetkit_core::constants::{
    DEFAULT_CABINET_HEIGHT, DEFAULT_CABINET_WIDTH, DEFAULT_CEILING_HEIGHT, MAX_CABINET_WIDTH,
    MAX_CEILING_HEIGHT, MIN_CABINET_WIDTH, MIN_CEILING_HEIGHT,
    MIN_DOOR_WIDTH,
};
use cabinetkit_core::{format_cm, DesignError, MaterialAssignments, MaterialZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::accessory::{Accessory, AccessoryKind, AccessoryType, Hinge, LedPlacement};
use super::cabinet::{Archetype, Cabinet, CabinetProfile};
use crate::constraints::{
    self, clamp_cabinet, clamp_height, clamp_range, horizontal_span, EditOutcome, Span,
};

/// Floor finish shown in the drawing and described in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloorFinish {
    Polished,
    #[default]
    WoodLight,
    WoodDark,
}

impl FloorFinish {
    pub const ALL: [FloorFinish; 3] = [
        FloorFinish::Polished,
        FloorFinish::WoodLight,
        FloorFinish::WoodDark,
    ];

    /// Descriptive name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Polished => "polished tile",
            Self::WoodLight => "light wood",
            Self::WoodDark => "dark wood",
        }
    }
}

impl std::fmt::Display for FloorFinish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Polished => write!(f, "polished"),
            Self::WoodLight => write!(f, "wood-light"),
            Self::WoodDark => write!(f, "wood-dark"),
        }
    }
}

/// A row of cabinets under one ceiling.
///
/// Invariant: at least one cabinet.
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    pub name: String,
    ceiling_height: f64,
    pub floor: FloorFinish,
    pub materials: MaterialAssignments,
    cabinets: Vec<Cabinet>,
}

impl Default for Design {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl Design {
    /// Create a design with one default cabinet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ceiling_height: DEFAULT_CEILING_HEIGHT,
            floor: FloorFinish::default(),
            materials: MaterialAssignments::new(),
            cabinets: vec![Cabinet::tall(
                "Cabinet 1",
                DEFAULT_CABINET_WIDTH,
                DEFAULT_CABINET_HEIGHT,
            )],
        }
    }

    /// Assemble a design from parts, clamping everything into bounds.
    pub fn from_parts(
        name: impl Into<String>,
        ceiling_height: f64,
        floor: FloorFinish,
        materials: MaterialAssignments,
        cabinets: Vec<Cabinet>,
    ) -> Result<Self, DesignError> {
        if cabinets.is_empty() {
            return Err(DesignError::LastCabinet);
        }
        let ceiling_height = clamp_range(ceiling_height, MIN_CEILING_HEIGHT, MAX_CEILING_HEIGHT);
        let mut design = Self {
            name: name.into(),
            ceiling_height,
            floor,
            materials,
            cabinets,
        };
        for cabinet in &mut design.cabinets {
            clamp_cabinet(cabinet, ceiling_height);
        }
        Ok(design)
    }

    pub fn ceiling_height(&self) -> f64 {
        self.ceiling_height
    }

    pub fn cabinets(&self) -> &[Cabinet] {
        &self.cabinets
    }

    pub fn cabinet_count(&self) -> usize {
        self.cabinets.len()
    }

    pub fn cabinet(&self, index: usize) -> Result<&Cabinet, DesignError> {
        self.cabinets
            .get(index)
            .ok_or(DesignError::CabinetIndexOutOfRange {
                index,
                count: self.cabinets.len(),
            })
    }

    fn cabinet_mut(&mut self, index: usize) -> Result<&mut Cabinet, DesignError> {
        let count = self.cabinets.len();
        self.cabinets
            .get_mut(index)
            .ok_or(DesignError::CabinetIndexOutOfRange { index, count })
    }

    /// Position of the cabinet with the given identifier
    pub fn cabinet_index(&self, id: Uuid) -> Result<usize, DesignError> {
        self.cabinets
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DesignError::CabinetNotFound { id: id.to_string() })
    }

    /// Sum of all cabinet widths (cm)
    pub fn total_width(&self) -> f64 {
        self.cabinets.iter().map(|c| c.width).sum()
    }

    /// One-line description: cabinet count, ceiling and total width
    pub fn summary(&self) -> String {
        let count = self.cabinets.len();
        format!(
            "{} {} side by side | ceiling {} | total width {}",
            count,
            if count == 1 { "cabinet" } else { "cabinets" },
            format_cm(self.ceiling_height),
            format_cm(self.total_width())
        )
    }

    /// Change the ceiling height; every cabinet is clamped to fit under it.
    pub fn set_ceiling_height(&mut self, height: f64) -> EditOutcome {
        let applied = clamp_range(height, MIN_CEILING_HEIGHT, MAX_CEILING_HEIGHT);
        self.ceiling_height = applied;
        let mut removed = 0;
        for cabinet in &mut self.cabinets {
            let before = cabinet.height();
            removed += clamp_cabinet(cabinet, applied).len();
            if cabinet.height() != before {
                tracing::debug!(
                    "Cabinet {} lowered from {} to {} under the ceiling",
                    cabinet.name,
                    before,
                    cabinet.height()
                );
            }
        }
        EditOutcome::with_removed(height, applied, removed)
    }

    /// Append a tall cabinet and return its index
    pub fn add_cabinet(&mut self, width: f64, height: f64) -> usize {
        let name = format!("Cabinet {}", self.cabinets.len() + 1);
        self.push_cabinet(Cabinet::tall(name, width, height))
    }

    /// Append a cabinet, clamped to the current ceiling, and return its index
    pub fn push_cabinet(&mut self, mut cabinet: Cabinet) -> usize {
        clamp_cabinet(&mut cabinet, self.ceiling_height);
        self.cabinets.push(cabinet);
        self.cabinets.len() - 1
    }

    /// Remove a cabinet. The last remaining cabinet cannot be removed.
    pub fn remove_cabinet(&mut self, index: usize) -> Result<Cabinet, DesignError> {
        self.cabinet(index)?;
        if self.cabinets.len() <= 1 {
            return Err(DesignError::LastCabinet);
        }
        Ok(self.cabinets.remove(index))
    }

    pub fn set_cabinet_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), DesignError> {
        self.cabinet_mut(index)?.name = name.into();
        Ok(())
    }

    pub fn set_cabinet_width(&mut self, index: usize, width: f64) -> Result<EditOutcome, DesignError> {
        let cabinet = self.cabinet_mut(index)?;
        cabinet.width = clamp_range(width, MIN_CABINET_WIDTH, MAX_CABINET_WIDTH);
        let removed = constraints::revalidate_accessories(cabinet).len();
        Ok(EditOutcome::with_removed(width, cabinet.width, removed))
    }

    /// Set the overall height. For a split cabinet this moves the upper unit.
    pub fn set_cabinet_height(
        &mut self,
        index: usize,
        height: f64,
    ) -> Result<EditOutcome, DesignError> {
        let ceiling = self.ceiling_height;
        let cabinet = self.cabinet_mut(index)?;
        match &mut cabinet.profile {
            CabinetProfile::Tall { height: h } => *h = height,
            CabinetProfile::Split {
                upper_height,
                upper_elevation,
                ..
            } => *upper_elevation = height - *upper_height,
        }
        let removed = clamp_cabinet(cabinet, ceiling).len();
        Ok(EditOutcome::with_removed(height, cabinet.height(), removed))
    }

    /// Switch archetype, deriving the new profile from the current height
    pub fn set_archetype(&mut self, index: usize, archetype: Archetype) -> Result<(), DesignError> {
        let ceiling = self.ceiling_height;
        let cabinet = self.cabinet_mut(index)?;
        if cabinet.archetype() == archetype {
            return Ok(());
        }
        cabinet.profile = match archetype {
            Archetype::Tall => CabinetProfile::Tall {
                height: cabinet.height(),
            },
            Archetype::Split => CabinetProfile::default_split(),
        };
        let removed = clamp_cabinet(cabinet, ceiling);
        tracing::debug!(
            "Cabinet {} is now {}, {} drawers removed",
            cabinet.name,
            archetype,
            removed.len()
        );
        Ok(())
    }

    fn split_field(
        &mut self,
        index: usize,
        value: f64,
        apply: impl FnOnce(&mut CabinetProfile, f64) -> Option<f64>,
        read: impl Fn(&CabinetProfile) -> f64,
    ) -> Result<EditOutcome, DesignError> {
        let ceiling = self.ceiling_height;
        let cabinet = self.cabinet_mut(index)?;
        if apply(&mut cabinet.profile, value).is_none() {
            return Err(DesignError::ArchetypeMismatch {
                cabinet: cabinet.name.clone(),
                expected: Archetype::Split.to_string(),
            });
        }
        let removed = clamp_cabinet(cabinet, ceiling).len();
        Ok(EditOutcome::with_removed(
            value,
            read(&cabinet.profile),
            removed,
        ))
    }

    pub fn set_lower_height(&mut self, index: usize, value: f64) -> Result<EditOutcome, DesignError> {
        self.split_field(
            index,
            value,
            |profile, v| match profile {
                CabinetProfile::Split { lower_height, .. } => Some(std::mem::replace(lower_height, v)),
                CabinetProfile::Tall { .. } => None,
            },
            |profile| match profile {
                CabinetProfile::Split { lower_height, .. } => *lower_height,
                CabinetProfile::Tall { .. } => 0.0,
            },
        )
    }

    pub fn set_upper_height(&mut self, index: usize, value: f64) -> Result<EditOutcome, DesignError> {
        self.split_field(
            index,
            value,
            |profile, v| match profile {
                CabinetProfile::Split { upper_height, .. } => Some(std::mem::replace(upper_height, v)),
                CabinetProfile::Tall { .. } => None,
            },
            |profile| match profile {
                CabinetProfile::Split { upper_height, .. } => *upper_height,
                CabinetProfile::Tall { .. } => 0.0,
            },
        )
    }

    pub fn set_upper_elevation(
        &mut self,
        index: usize,
        value: f64,
    ) -> Result<EditOutcome, DesignError> {
        self.split_field(
            index,
            value,
            |profile, v| match profile {
                CabinetProfile::Split {
                    upper_elevation, ..
                } => Some(std::mem::replace(upper_elevation, v)),
                CabinetProfile::Tall { .. } => None,
            },
            |profile| match profile {
                CabinetProfile::Split {
                    upper_elevation, ..
                } => *upper_elevation,
                CabinetProfile::Tall { .. } => 0.0,
            },
        )
    }

    pub fn set_backsplash(&mut self, index: usize, enabled: bool) -> Result<(), DesignError> {
        let cabinet = self.cabinet_mut(index)?;
        match &mut cabinet.profile {
            CabinetProfile::Split { has_backsplash, .. } => {
                *has_backsplash = enabled;
                Ok(())
            }
            CabinetProfile::Tall { .. } => Err(DesignError::ArchetypeMismatch {
                cabinet: cabinet.name.clone(),
                expected: Archetype::Split.to_string(),
            }),
        }
    }

    /// Add an accessory with default geometry and return its identifier
    pub fn add_accessory(&mut self, index: usize, ty: AccessoryType) -> Result<Uuid, DesignError> {
        let accessory = Accessory::with_defaults(ty, self.cabinet(index)?);
        self.insert_accessory(index, accessory)
    }

    /// Add a prepared accessory, clamped into the bay nearest its center.
    ///
    /// A drawer is moved to the nearest free slot of its stack; when the
    /// stack has no gap tall enough the drawer is rejected.
    pub fn insert_accessory(
        &mut self,
        index: usize,
        mut accessory: Accessory,
    ) -> Result<Uuid, DesignError> {
        let cabinet = self.cabinet_mut(index)?;
        constraints::clamp_accessory(&mut accessory, cabinet.width, &cabinet.profile);

        if accessory.is_drawer() {
            accessory.y = constraints::find_drawer_slot(cabinet, &accessory).ok_or_else(|| {
                DesignError::NoRoom {
                    cabinet: cabinet.name.clone(),
                }
            })?;
        }

        let id = accessory.id;
        tracing::debug!("Added {} to {}", accessory.accessory_type(), cabinet.name);
        cabinet.accessories.push(accessory);
        constraints::settle_drawers(cabinet, None);
        Ok(id)
    }

    pub fn remove_accessory(&mut self, index: usize, id: Uuid) -> Result<Accessory, DesignError> {
        let cabinet = self.cabinet_mut(index)?;
        let position = cabinet
            .accessory_index(id)
            .ok_or_else(|| DesignError::AccessoryNotFound { id: id.to_string() })?;
        let removed = cabinet.accessories.remove(position);
        constraints::settle_drawers(cabinet, None);
        Ok(removed)
    }

    fn locate(&mut self, index: usize, id: Uuid) -> Result<(&mut Cabinet, usize), DesignError> {
        let cabinet = self.cabinet_mut(index)?;
        let position = cabinet
            .accessory_index(id)
            .ok_or_else(|| DesignError::AccessoryNotFound { id: id.to_string() })?;
        Ok((cabinet, position))
    }

    /// Move an accessory vertically.
    ///
    /// The accessory lands in the bay nearest its requested center, so on a
    /// split cabinet it can move between the units but never into the gap.
    /// Drawers snap against their stack and only change units when the
    /// target stack has room for them.
    pub fn set_accessory_y(
        &mut self,
        index: usize,
        id: Uuid,
        y: f64,
    ) -> Result<EditOutcome, DesignError> {
        let (cabinet, position) = self.locate(index, id)?;
        let current = &cabinet.accessories[position];
        let target = cabinet.profile.bay_at(y + current.height / 2.0);

        if !current.is_drawer() {
            let accessory = &mut cabinet.accessories[position];
            accessory.y = y;
            constraints::clamp_into_bay(accessory, target);
            let applied = accessory.y;
            let removed = constraints::settle_drawers(cabinet, None).len();
            return Ok(EditOutcome::with_removed(y, applied, removed));
        }

        let mut resolved = None;
        if target != cabinet.bay_of(current) {
            let mut candidate = current.clone();
            candidate.y = y;
            constraints::clamp_into_bay(&mut candidate, target);
            if candidate.height >= current.height {
                resolved = constraints::find_drawer_slot(cabinet, &candidate);
            }
        }
        let resolved =
            resolved.unwrap_or_else(|| constraints::resolve_drawer_y(cabinet, position, y));

        cabinet.accessories[position].y = resolved;
        constraints::settle_drawers(cabinet, Some(id));
        let applied = cabinet
            .accessory(id)
            .map(|a| a.y)
            .unwrap_or(resolved);
        Ok(EditOutcome::from_values(y, applied))
    }

    /// Resize an accessory. Drawers stop at the next drawer below.
    pub fn set_accessory_height(
        &mut self,
        index: usize,
        id: Uuid,
        height: f64,
    ) -> Result<EditOutcome, DesignError> {
        let (cabinet, position) = self.locate(index, id)?;
        let accessory = &cabinet.accessories[position];
        let limit = if accessory.is_drawer() {
            constraints::max_drawer_height(cabinet, position)
        } else {
            cabinet.bay_of(accessory).bottom - accessory.y
        };
        let applied = clamp_height(height, limit);
        cabinet.accessories[position].height = applied;
        let removed = constraints::settle_drawers(cabinet, Some(id)).len();
        Ok(EditOutcome::with_removed(height, applied, removed))
    }

    /// Move an accessory's horizontal anchor. Doors have none.
    ///
    /// A drawer moved into another column takes the nearest free slot there
    /// and stays put when that column is full. Moving a divider can merge
    /// columns; drawers left without room are removed.
    pub fn set_accessory_x(
        &mut self,
        index: usize,
        id: Uuid,
        x: f64,
    ) -> Result<EditOutcome, DesignError> {
        let (cabinet, position) = self.locate(index, id)?;
        let applied = clamp_range(x, 0.0, cabinet.width);
        let previous = cabinet.accessories[position].anchor_x();
        if !cabinet.accessories[position].set_anchor_x(applied) {
            return Err(DesignError::UnsupportedField {
                accessory: AccessoryType::Door.to_string(),
                field: "horizontal position".to_string(),
            });
        }

        if cabinet.accessories[position].is_drawer() {
            match constraints::find_drawer_slot(cabinet, &cabinet.accessories[position]) {
                Some(y) => cabinet.accessories[position].y = y,
                None => {
                    tracing::debug!("No room for drawer {} at x={:.1}", id, applied);
                    cabinet.accessories[position].set_anchor_x(previous);
                    return Ok(EditOutcome::Adjusted {
                        requested: x,
                        applied: previous,
                    });
                }
            }
        }

        let removed = constraints::settle_drawers(cabinet, Some(id)).len();
        Ok(EditOutcome::with_removed(x, applied, removed))
    }

    /// Set or clear an explicit door width
    pub fn set_door_width(
        &mut self,
        index: usize,
        id: Uuid,
        width: Option<f64>,
    ) -> Result<EditOutcome, DesignError> {
        let (cabinet, position) = self.locate(index, id)?;
        let cabinet_width = cabinet.width;
        let accessory = &mut cabinet.accessories[position];
        let ty = accessory.accessory_type();
        match &mut accessory.kind {
            AccessoryKind::Door { width: w, .. } => {
                *w = width.map(|v| clamp_range(v, MIN_DOOR_WIDTH.min(cabinet_width), cabinet_width));
                Ok(match (width, *w) {
                    (Some(requested), Some(applied)) => EditOutcome::from_values(requested, applied),
                    _ => EditOutcome::Applied,
                })
            }
            _ => Err(DesignError::UnsupportedField {
                accessory: ty.to_string(),
                field: "door width".to_string(),
            }),
        }
    }

    pub fn set_door_hinge(
        &mut self,
        index: usize,
        id: Uuid,
        hinge: Option<Hinge>,
    ) -> Result<(), DesignError> {
        let (cabinet, position) = self.locate(index, id)?;
        let accessory = &mut cabinet.accessories[position];
        let ty = accessory.accessory_type();
        match &mut accessory.kind {
            AccessoryKind::Door { hinge: h, .. } => {
                *h = hinge;
                Ok(())
            }
            _ => Err(DesignError::UnsupportedField {
                accessory: ty.to_string(),
                field: "hinge".to_string(),
            }),
        }
    }

    pub fn set_led_placement(
        &mut self,
        index: usize,
        id: Uuid,
        placement: LedPlacement,
    ) -> Result<(), DesignError> {
        let (cabinet, position) = self.locate(index, id)?;
        let accessory = &mut cabinet.accessories[position];
        let ty = accessory.accessory_type();
        match &mut accessory.kind {
            AccessoryKind::Led { placement: p, .. } => {
                *p = placement;
                Ok(())
            }
            _ => Err(DesignError::UnsupportedField {
                accessory: ty.to_string(),
                field: "LED placement".to_string(),
            }),
        }
    }

    /// Resolved horizontal span of an accessory
    pub fn accessory_span(&self, index: usize, id: Uuid) -> Result<Span, DesignError> {
        let cabinet = self.cabinet(index)?;
        let accessory = cabinet
            .accessory(id)
            .ok_or_else(|| DesignError::AccessoryNotFound { id: id.to_string() })?;
        Ok(horizontal_span(cabinet, accessory))
    }

    /// Assign a material to a zone; a blank name clears it
    pub fn set_material(&mut self, zone: MaterialZone, material: impl Into<String>) {
        self.materials.set(zone, material);
    }
}
