//! Design persistence collaborator.
//!
//! Stores exported design documents under generated identifiers with
//! created/updated timestamps. Two implementations are provided: an
//! in-memory store and a directory of JSON files (`<id>.json`). Documents
//! read back from disk go through the same migration as imported files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cabinetkit_core::{ImportError, StorageError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::serialization::{self, DesignFile};

/// A stored design document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDesign {
    pub id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub document: DesignFile,
}

/// Persistence interface for design documents
pub trait DesignRepository {
    /// Store a new document and return its identifier
    fn save_design(&mut self, document: DesignFile) -> Result<Uuid, StorageError>;

    /// Replace the document stored under `id`
    fn update_design(&mut self, id: Uuid, document: DesignFile) -> Result<(), StorageError>;

    fn load_design(&self, id: Uuid) -> Result<StoredDesign, StorageError>;

    /// All stored designs, most recently updated first
    fn list_designs(&self) -> Result<Vec<StoredDesign>, StorageError>;

    fn delete_design(&mut self, id: Uuid) -> Result<(), StorageError>;
}

/// Record fields stored next to the document
#[derive(Deserialize)]
struct RecordHeader {
    id: Uuid,
    name: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

/// Decode a stored record, migrating a document saved by an older version
fn read_record(content: &str) -> Result<StoredDesign, StorageError> {
    let mut value: Value = serde_json::from_str(content)?;
    let document = value
        .as_object_mut()
        .and_then(|record| record.remove("document"))
        .ok_or_else(|| ImportError::ParseError("stored record has no document".to_string()))?;
    let document = serialization::migrate_document(document)?;
    let header: RecordHeader = serde_json::from_value(value)?;
    Ok(StoredDesign {
        id: header.id,
        name: header.name,
        created: header.created,
        updated: header.updated,
        document,
    })
}

fn not_found(id: Uuid) -> StorageError {
    StorageError::NotFound { id: id.to_string() }
}

fn newest_first(records: &mut [StoredDesign]) {
    records.sort_by(|a, b| b.updated.cmp(&a.updated));
}

/// Volatile store for tests and single-session use
#[derive(Debug, Default)]
pub struct InMemoryDesignStore {
    records: HashMap<Uuid, StoredDesign>,
}

impl InMemoryDesignStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DesignRepository for InMemoryDesignStore {
    fn save_design(&mut self, document: DesignFile) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        self.records.insert(
            id,
            StoredDesign {
                id,
                name: document.metadata.name.clone(),
                created: now,
                updated: now,
                document,
            },
        );
        Ok(id)
    }

    fn update_design(&mut self, id: Uuid, document: DesignFile) -> Result<(), StorageError> {
        let record = self.records.get_mut(&id).ok_or_else(|| not_found(id))?;
        record.name = document.metadata.name.clone();
        record.updated = Utc::now();
        record.document = document;
        Ok(())
    }

    fn load_design(&self, id: Uuid) -> Result<StoredDesign, StorageError> {
        self.records.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    fn list_designs(&self) -> Result<Vec<StoredDesign>, StorageError> {
        let mut records: Vec<StoredDesign> = self.records.values().cloned().collect();
        newest_first(&mut records);
        Ok(records)
    }

    fn delete_design(&mut self, id: Uuid) -> Result<(), StorageError> {
        self.records.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}

/// One JSON file per design in a directory
#[derive(Debug, Clone)]
pub struct JsonDirectoryStore {
    root: PathBuf,
}

impl JsonDirectoryStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        tracing::debug!("Design store at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    fn write(&self, record: &StoredDesign) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(self.path_for(record.id), json)?;
        Ok(())
    }
}

impl DesignRepository for JsonDirectoryStore {
    fn save_design(&mut self, document: DesignFile) -> Result<Uuid, StorageError> {
        let now = Utc::now();
        let record = StoredDesign {
            id: Uuid::new_v4(),
            name: document.metadata.name.clone(),
            created: now,
            updated: now,
            document,
        };
        self.write(&record)?;
        tracing::info!("Saved design '{}' as {}", record.name, record.id);
        Ok(record.id)
    }

    fn update_design(&mut self, id: Uuid, document: DesignFile) -> Result<(), StorageError> {
        let mut record = self.load_design(id)?;
        record.name = document.metadata.name.clone();
        record.updated = Utc::now();
        record.document = document;
        self.write(&record)?;
        tracing::info!("Updated design '{}' ({})", record.name, id);
        Ok(())
    }

    fn load_design(&self, id: Uuid) -> Result<StoredDesign, StorageError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(not_found(id));
        }
        let content = std::fs::read_to_string(path)?;
        read_record(&content)
    }

    fn list_designs(&self) -> Result<Vec<StoredDesign>, StorageError> {
        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = std::fs::read_to_string(&path)?;
            match read_record(&content) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("Skipping unreadable design {}: {}", path.display(), e),
            }
        }
        newest_first(&mut records);
        Ok(records)
    }

    fn delete_design(&mut self, id: Uuid) -> Result<(), StorageError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(not_found(id));
        }
        std::fs::remove_file(path)?;
        tracing::info!("Deleted design {}", id);
        Ok(())
    }
}
