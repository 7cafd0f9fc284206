//! Edits and selection for designer state.
//!
//! Edits apply to the selected cabinet. Every successful edit marks the state
//! modified; clamped edits are logged at debug level and returned so the
//! caller may surface them.

use cabinetkit_core::{DesignError, MaterialZone};
use uuid::Uuid;

use super::DesignerState;
use crate::constraints::EditOutcome;
use crate::model::{Accessory, AccessoryType, Archetype, Cabinet, FloorFinish, Hinge, LedPlacement};

fn rejected<T>(result: Result<T, DesignError>) -> Result<T, DesignError> {
    if let Err(e) = &result {
        tracing::warn!("Edit rejected: {}", e);
    }
    result
}

impl DesignerState {
    fn applied(&mut self, what: &str, outcome: EditOutcome) -> EditOutcome {
        self.is_modified = true;
        match outcome {
            EditOutcome::Applied => {}
            EditOutcome::Adjusted { requested, applied } => {
                tracing::debug!("{} adjusted: requested {}, applied {}", what, requested, applied);
            }
            EditOutcome::DrawersRemoved {
                requested,
                applied,
                removed,
            } => {
                tracing::info!(
                    "{}: requested {}, applied {}, {} drawers removed",
                    what,
                    requested,
                    applied,
                    removed
                );
                if self.accessory().is_none() {
                    self.selected_accessory = None;
                }
            }
        }
        outcome
    }

    /// The selected cabinet
    pub fn cabinet(&self) -> &Cabinet {
        // Selection is kept in range by every edit that changes the row
        &self.design.cabinets()[self.selected_cabinet.min(self.design.cabinet_count() - 1)]
    }

    /// The selected accessory, if any
    pub fn accessory(&self) -> Option<&Accessory> {
        self.selected_accessory
            .and_then(|id| self.cabinet().accessory(id))
    }

    /// Select a cabinet by index, clearing the accessory selection.
    pub fn select_cabinet(&mut self, index: usize) -> Result<(), DesignError> {
        self.design.cabinet(index)?;
        self.selected_cabinet = index;
        self.selected_accessory = None;
        Ok(())
    }

    /// Select an accessory of the selected cabinet, or clear the selection.
    pub fn select_accessory(&mut self, id: Option<Uuid>) -> Result<(), DesignError> {
        if let Some(id) = id {
            if self.cabinet().accessory(id).is_none() {
                return Err(DesignError::AccessoryNotFound { id: id.to_string() });
            }
        }
        self.selected_accessory = id;
        Ok(())
    }

    /// Select whatever is under a pointer on the editing surface.
    ///
    /// Returns false when the pointer is not over a cabinet; the selection is
    /// left as it was.
    pub fn select_at(&mut self, px: f64, py: f64) -> bool {
        let Some(index) = self.viewport.cabinet_at(&self.design, px) else {
            return false;
        };
        self.selected_cabinet = index;
        self.selected_accessory = self.viewport.accessory_at(&self.design, index, px, py);
        true
    }

    pub fn set_design_name(&mut self, name: impl Into<String>) {
        self.design.name = name.into();
        self.is_modified = true;
    }

    pub fn set_ceiling_height(&mut self, height: f64) -> EditOutcome {
        let outcome = self.design.set_ceiling_height(height);
        self.applied("Ceiling height", outcome)
    }

    pub fn set_floor(&mut self, floor: FloorFinish) {
        self.design.floor = floor;
        self.is_modified = true;
    }

    pub fn set_material(&mut self, zone: MaterialZone, material: impl Into<String>) {
        self.design.set_material(zone, material);
        self.is_modified = true;
    }

    /// Append a cabinet and select it
    pub fn add_cabinet(&mut self, width: f64, height: f64) -> usize {
        let index = self.design.add_cabinet(width, height);
        self.selected_cabinet = index;
        self.selected_accessory = None;
        self.is_modified = true;
        index
    }

    /// Remove the selected cabinet and select the one before it.
    pub fn remove_selected_cabinet(&mut self) -> Result<Cabinet, DesignError> {
        let index = self.selected_cabinet;
        let removed = rejected(self.design.remove_cabinet(index))?;
        self.selected_cabinet = index.saturating_sub(1);
        self.selected_accessory = None;
        self.is_modified = true;
        Ok(removed)
    }

    pub fn rename_cabinet(&mut self, name: impl Into<String>) -> Result<(), DesignError> {
        self.design.set_cabinet_name(self.selected_cabinet, name)?;
        self.is_modified = true;
        Ok(())
    }

    pub fn set_cabinet_width(&mut self, width: f64) -> Result<EditOutcome, DesignError> {
        let outcome = self.design.set_cabinet_width(self.selected_cabinet, width)?;
        Ok(self.applied("Cabinet width", outcome))
    }

    pub fn set_cabinet_height(&mut self, height: f64) -> Result<EditOutcome, DesignError> {
        let outcome = self.design.set_cabinet_height(self.selected_cabinet, height)?;
        Ok(self.applied("Cabinet height", outcome))
    }

    pub fn set_archetype(&mut self, archetype: Archetype) -> Result<(), DesignError> {
        self.design.set_archetype(self.selected_cabinet, archetype)?;
        if self.accessory().is_none() {
            self.selected_accessory = None;
        }
        self.is_modified = true;
        Ok(())
    }

    pub fn set_lower_height(&mut self, value: f64) -> Result<EditOutcome, DesignError> {
        let result = self.design.set_lower_height(self.selected_cabinet, value);
        let outcome = rejected(result)?;
        Ok(self.applied("Base unit height", outcome))
    }

    pub fn set_upper_height(&mut self, value: f64) -> Result<EditOutcome, DesignError> {
        let result = self.design.set_upper_height(self.selected_cabinet, value);
        let outcome = rejected(result)?;
        Ok(self.applied("Wall unit height", outcome))
    }

    pub fn set_upper_elevation(&mut self, value: f64) -> Result<EditOutcome, DesignError> {
        let result = self.design.set_upper_elevation(self.selected_cabinet, value);
        let outcome = rejected(result)?;
        Ok(self.applied("Wall unit elevation", outcome))
    }

    pub fn set_backsplash(&mut self, enabled: bool) -> Result<(), DesignError> {
        let result = self.design.set_backsplash(self.selected_cabinet, enabled);
        rejected(result)?;
        self.is_modified = true;
        Ok(())
    }

    /// Add an accessory to the selected cabinet and select it
    pub fn add_accessory(&mut self, ty: AccessoryType) -> Result<Uuid, DesignError> {
        let result = self.design.add_accessory(self.selected_cabinet, ty);
        let id = rejected(result)?;
        self.selected_accessory = Some(id);
        self.is_modified = true;
        Ok(id)
    }

    pub fn remove_accessory(&mut self, id: Uuid) -> Result<Accessory, DesignError> {
        let removed = self.design.remove_accessory(self.selected_cabinet, id)?;
        if self.selected_accessory == Some(id) {
            self.selected_accessory = None;
        }
        self.is_modified = true;
        Ok(removed)
    }

    pub fn move_accessory(&mut self, id: Uuid, y: f64) -> Result<EditOutcome, DesignError> {
        let outcome = self.design.set_accessory_y(self.selected_cabinet, id, y)?;
        Ok(self.applied("Accessory position", outcome))
    }

    pub fn resize_accessory(&mut self, id: Uuid, height: f64) -> Result<EditOutcome, DesignError> {
        let outcome = self
            .design
            .set_accessory_height(self.selected_cabinet, id, height)?;
        Ok(self.applied("Accessory height", outcome))
    }

    pub fn set_accessory_x(&mut self, id: Uuid, x: f64) -> Result<EditOutcome, DesignError> {
        let result = self.design.set_accessory_x(self.selected_cabinet, id, x);
        let outcome = rejected(result)?;
        Ok(self.applied("Accessory horizontal position", outcome))
    }

    pub fn set_door_width(
        &mut self,
        id: Uuid,
        width: Option<f64>,
    ) -> Result<EditOutcome, DesignError> {
        let result = self.design.set_door_width(self.selected_cabinet, id, width);
        let outcome = rejected(result)?;
        Ok(self.applied("Door width", outcome))
    }

    pub fn set_door_hinge(&mut self, id: Uuid, hinge: Option<Hinge>) -> Result<(), DesignError> {
        let result = self.design.set_door_hinge(self.selected_cabinet, id, hinge);
        rejected(result)?;
        self.is_modified = true;
        Ok(())
    }

    pub fn set_led_placement(
        &mut self,
        id: Uuid,
        placement: LedPlacement,
    ) -> Result<(), DesignError> {
        let result = self
            .design
            .set_led_placement(self.selected_cabinet, id, placement);
        rejected(result)?;
        self.is_modified = true;
        Ok(())
    }
}
