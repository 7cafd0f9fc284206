//! Materials catalog module
//!
//! This module provides:
//! - Material zones of a cabinet (exterior, interior, door, drawer)
//! - Material assignments (zone → material name)
//! - Texture entries uploaded by the user
//! - The `MaterialCatalog` collaborator interface and an in-memory library
//!
//! The designer only ever references materials by name; it never checks that
//! an assigned name exists in the catalog.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::error::CatalogError;

/// Category filter value that matches every texture.
pub const CATEGORY_ALL: &str = "All";

/// Category used when a file name does not carry one.
pub const CATEGORY_OTHER: &str = "Other";

/// Surfaces of a cabinet that can carry their own material
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialZone {
    /// Outside carcass panels
    Exterior,
    /// Inside of the carcass, shelves
    Interior,
    /// Door fronts
    Door,
    /// Drawer fronts
    Drawer,
}

impl MaterialZone {
    /// All zones in display order
    pub const ALL: [MaterialZone; 4] = [
        MaterialZone::Exterior,
        MaterialZone::Interior,
        MaterialZone::Door,
        MaterialZone::Drawer,
    ];

    /// Human readable surface name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exterior => "exterior panels",
            Self::Interior => "interior",
            Self::Door => "door fronts",
            Self::Drawer => "drawer fronts",
        }
    }
}

impl std::fmt::Display for MaterialZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exterior => write!(f, "exterior"),
            Self::Interior => write!(f, "interior"),
            Self::Door => write!(f, "door"),
            Self::Drawer => write!(f, "drawer"),
        }
    }
}

/// Material name per zone. Unassigned zones are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialAssignments(BTreeMap<MaterialZone, String>);

impl MaterialAssignments {
    /// Create an empty assignment map
    pub fn new() -> Self {
        Self::default()
    }

    /// Material assigned to a zone
    pub fn get(&self, zone: MaterialZone) -> Option<&str> {
        self.0.get(&zone).map(String::as_str)
    }

    /// Assign a material to a zone. An empty name clears the zone.
    pub fn set(&mut self, zone: MaterialZone, material: impl Into<String>) {
        let material = material.into();
        if material.trim().is_empty() {
            self.0.remove(&zone);
        } else {
            self.0.insert(zone, material);
        }
    }

    /// Remove the assignment of a zone
    pub fn clear(&mut self, zone: MaterialZone) -> Option<String> {
        self.0.remove(&zone)
    }

    /// Assigned zones in zone order
    pub fn iter(&self) -> impl Iterator<Item = (MaterialZone, &str)> {
        self.0.iter().map(|(zone, name)| (*zone, name.as_str()))
    }

    /// Check if no zone has a material
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A texture uploaded to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureEntry {
    /// Unique texture identifier
    pub id: Uuid,
    /// Display name (file stem), the value stored in material assignments
    pub name: String,
    /// Category derived from the file name
    pub category: String,
    /// Original file name
    pub file_name: String,
    /// MIME type of the image data
    pub mime_type: String,
    /// Encoded image bytes
    pub image_data: Vec<u8>,
    /// Upload time
    pub created: DateTime<Utc>,
}

/// Material catalog collaborator
///
/// Lists the textures available for material assignment, optionally
/// restricted to one category.
pub trait MaterialCatalog {
    /// List materials, newest first. `None` or `Some("All")` lists everything.
    fn list_materials(&self, category: Option<&str>) -> Vec<TextureEntry>;
}

/// Check a texture file name against `space-material-number.(png|jpg|jpeg)`
pub fn is_valid_texture_file_name(file_name: &str) -> bool {
    static TEXTURE_NAME: OnceLock<Option<Regex>> = OnceLock::new();
    TEXTURE_NAME
        .get_or_init(|| Regex::new(r"(?i)^.+-.+-.+\.(png|jpe?g)$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(file_name))
}

/// Split a valid texture file name into (name, category)
fn describe_file_name(file_name: &str) -> (String, String) {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    let category = stem
        .split('-')
        .nth(1)
        .filter(|c| !c.is_empty())
        .unwrap_or(CATEGORY_OTHER);
    (stem.to_string(), category.to_string())
}

/// In-memory texture library
#[derive(Debug, Clone, Default)]
pub struct TextureLibrary {
    textures: Vec<TextureEntry>,
}

impl TextureLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an uploaded texture after validating its name and type
    pub fn add_texture(
        &mut self,
        file_name: &str,
        mime_type: &str,
        image_data: Vec<u8>,
    ) -> Result<Uuid, CatalogError> {
        if !is_valid_texture_file_name(file_name) {
            return Err(CatalogError::InvalidFileName {
                file_name: file_name.to_string(),
            });
        }
        if !mime_type.starts_with("image/") {
            return Err(CatalogError::NotAnImage {
                file_name: file_name.to_string(),
            });
        }

        let (name, category) = describe_file_name(file_name);
        let id = Uuid::new_v4();
        tracing::info!("Added texture '{}' ({})", name, category);
        self.textures.push(TextureEntry {
            id,
            name,
            category,
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            image_data,
            created: Utc::now(),
        });
        Ok(id)
    }

    /// Remove a texture from the library
    pub fn remove_texture(&mut self, id: Uuid) -> Option<TextureEntry> {
        let index = self.textures.iter().position(|t| t.id == id)?;
        Some(self.textures.remove(index))
    }

    /// Get a texture by ID
    pub fn get_texture(&self, id: Uuid) -> Option<&TextureEntry> {
        self.textures.iter().find(|t| t.id == id)
    }

    /// Distinct categories in upload order
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for texture in &self.textures {
            if !out.contains(&texture.category) {
                out.push(texture.category.clone());
            }
        }
        out
    }

    /// Get the number of textures in the library
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Check if library is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl MaterialCatalog for TextureLibrary {
    fn list_materials(&self, category: Option<&str>) -> Vec<TextureEntry> {
        let filter = category.filter(|c| *c != CATEGORY_ALL);
        self.textures
            .iter()
            .rev()
            .filter(|t| filter.is_none_or(|c| t.category == c))
            .cloned()
            .collect()
    }
}
