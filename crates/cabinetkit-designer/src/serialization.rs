//! Serialization and deserialization for design documents.
//!
//! A design document is JSON carrying a format tag, a version, metadata and
//! the full design. Import runs in stages, none of which touch an existing
//! in-memory design:
//! 1. parse JSON
//! 2. check the format tag and version
//! 3. migrate older documents and deprecated accessory variants
//! 4. decode and validate, clamping everything into bounds

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use cabinetkit_core::constants::DEFAULT_CEILING_HEIGHT;
use cabinetkit_core::{ImportError, MaterialAssignments};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::model::{Cabinet, Design, FloorFinish};

/// Format tag written into every document
pub const FORMAT_TAG: &str = "cabinetkit-design";

/// Current document version
pub const FORMAT_VERSION: u32 = 2;

/// Complete design document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFile {
    pub format: String,
    pub version: u32,
    pub metadata: DesignMetadata,
    pub ceiling_height: f64,
    #[serde(default)]
    pub floor: FloorFinish,
    #[serde(default)]
    pub materials: MaterialAssignments,
    pub cabinets: Vec<Cabinet>,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl DesignFile {
    /// Snapshot a design
    pub fn from_design(design: &Design) -> Self {
        let now = Utc::now();
        Self {
            format: FORMAT_TAG.to_string(),
            version: FORMAT_VERSION,
            metadata: DesignMetadata {
                name: design.name.clone(),
                created: now,
                modified: now,
            },
            ceiling_height: design.ceiling_height(),
            floor: design.floor,
            materials: design.materials.clone(),
            cabinets: design.cabinets().to_vec(),
        }
    }

    /// Validate the document and build a design from it.
    pub fn into_design(self) -> Result<Design, ImportError> {
        if self.cabinets.is_empty() {
            return Err(ImportError::Invalid {
                reason: "a design needs at least one cabinet".to_string(),
            });
        }

        let mut ids = HashSet::new();
        for cabinet in &self.cabinets {
            if !ids.insert(cabinet.id) {
                return Err(ImportError::Invalid {
                    reason: format!("duplicate cabinet id {}", cabinet.id),
                });
            }
            let mut accessory_ids = HashSet::new();
            for accessory in &cabinet.accessories {
                if !accessory_ids.insert(accessory.id) {
                    return Err(ImportError::Invalid {
                        reason: format!(
                            "duplicate accessory id {} in {}",
                            accessory.id, cabinet.name
                        ),
                    });
                }
            }
        }

        Design::from_parts(
            self.metadata.name,
            self.ceiling_height,
            self.floor,
            self.materials,
            self.cabinets,
        )
        .map_err(|e| ImportError::Invalid {
            reason: e.to_string(),
        })
    }

    /// Save to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize design")?;
        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read design file")?;
        let file = parse_document(&content).context("Failed to parse design file")?;
        Ok(file)
    }
}

/// Export a design as a pretty-printed JSON document
pub fn export_design(design: &Design) -> serde_json::Result<String> {
    let json = serde_json::to_string_pretty(&DesignFile::from_design(design))?;
    tracing::info!(
        "Exported design '{}' with {} cabinets",
        design.name,
        design.cabinet_count()
    );
    Ok(json)
}

/// Import a design document.
///
/// Fails without side effects; the caller's current design is untouched.
pub fn import_design(json: &str) -> Result<Design, ImportError> {
    let design = parse_document(json)?.into_design()?;
    tracing::info!(
        "Imported design '{}' with {} cabinets",
        design.name,
        design.cabinet_count()
    );
    Ok(design)
}

/// Parse, version-check and migrate a document without validating it
pub fn parse_document(json: &str) -> Result<DesignFile, ImportError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| ImportError::ParseError(e.to_string()))?;
    migrate_document(value)
}

/// Version-check and migrate an already parsed document
pub fn migrate_document(mut value: Value) -> Result<DesignFile, ImportError> {
    let root = value
        .as_object_mut()
        .ok_or_else(|| ImportError::ParseError("expected a JSON object".to_string()))?;

    let version = check_header(root)?;
    if version < FORMAT_VERSION {
        tracing::info!("Migrating design document from version {}", version);
        migrate_v1(root);
    }
    migrate_accessories(root);

    serde_json::from_value(value).map_err(|e| ImportError::ParseError(e.to_string()))
}

/// Check the format tag and return the document version.
///
/// Documents without a tag predate it and are read as version 1.
fn check_header(root: &Map<String, Value>) -> Result<u32, ImportError> {
    match root.get("format") {
        None => {}
        Some(Value::String(tag)) if tag == FORMAT_TAG => {}
        Some(other) => {
            let tag = other.as_str().map_or_else(|| other.to_string(), str::to_string);
            return Err(ImportError::UnsupportedFormat(tag));
        }
    }

    let version = match root.get("version") {
        None => 1,
        Some(v) => v
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| ImportError::ParseError(format!("invalid version {}", v)))?,
    };
    if version > FORMAT_VERSION {
        return Err(ImportError::FutureVersion {
            file_version: version,
            supported_version: FORMAT_VERSION,
        });
    }
    Ok(version)
}

/// Identifiers in version 1 documents were numbers
fn migrate_id(object: &mut Map<String, Value>) {
    let valid = object
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|s| Uuid::parse_str(s).is_ok());
    if !valid {
        object.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    }
}

/// Version 1: camelCase ceiling, numeric ids, no names, no archetypes,
/// blank material zones.
fn migrate_v1(root: &mut Map<String, Value>) {
    root.insert("format".to_string(), Value::from(FORMAT_TAG));
    root.insert("version".to_string(), Value::from(FORMAT_VERSION));

    let ceiling = root
        .remove("ceilingH")
        .unwrap_or_else(|| Value::from(DEFAULT_CEILING_HEIGHT));
    root.entry("ceiling_height").or_insert(ceiling);

    let name = root
        .remove("name")
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| "Imported design".to_string());
    if !root.contains_key("metadata") {
        let now = Value::from(Utc::now().to_rfc3339());
        let mut metadata = Map::new();
        metadata.insert("name".to_string(), Value::from(name));
        metadata.insert("created".to_string(), now.clone());
        metadata.insert("modified".to_string(), now);
        root.insert("metadata".to_string(), Value::Object(metadata));
    }

    if let Some(Value::Object(materials)) = root.get_mut("materials") {
        materials.retain(|_, v| v.as_str().is_some_and(|s| !s.trim().is_empty()));
    }

    if let Some(Value::Array(cabinets)) = root.get_mut("cabinets") {
        for (i, cabinet) in cabinets.iter_mut().enumerate() {
            let Some(cabinet) = cabinet.as_object_mut() else {
                continue;
            };
            migrate_id(cabinet);
            cabinet
                .entry("name")
                .or_insert_with(|| Value::from(format!("Cabinet {}", i + 1)));
            cabinet
                .entry("archetype")
                .or_insert_with(|| Value::from("tall"));
            if let Some(Value::Array(accessories)) = cabinet.get_mut("accessories") {
                for accessory in accessories.iter_mut().filter_map(Value::as_object_mut) {
                    migrate_id(accessory);
                }
            }
        }
    }
}

/// Rewrite deprecated accessory variants: `door-left` / `door-right` become a
/// `door` with a hinge, and a door's `opening` is read as its hinge.
fn migrate_accessories(root: &mut Map<String, Value>) {
    let Some(Value::Array(cabinets)) = root.get_mut("cabinets") else {
        return;
    };
    let accessories = cabinets
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .filter_map(|c| c.get_mut("accessories"))
        .filter_map(Value::as_array_mut)
        .flat_map(|a| a.iter_mut())
        .filter_map(Value::as_object_mut);

    for accessory in accessories {
        let hinge = match accessory.get("type").and_then(Value::as_str) {
            Some("door-left") => Some("left"),
            Some("door-right") => Some("right"),
            Some("door") => None,
            _ => continue,
        };
        accessory.insert("type".to_string(), Value::from("door"));

        let opening = accessory.remove("opening");
        if let Some(hinge) = hinge {
            accessory.insert("hinge".to_string(), Value::from(hinge));
        } else if let Some(opening) = opening.filter(|v| v.is_string()) {
            accessory.entry("hinge").or_insert(opening);
        }
    }
}
