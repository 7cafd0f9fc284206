//! Error handling for CabinetKit
//!
//! Provides error types for every layer that can fail:
//! - Design errors (structural invariants of the cabinet row)
//! - Import errors (malformed or unsupported design documents)
//! - Rendering service errors (external image generation)
//! - Storage errors (design persistence collaborator)
//! - Catalog errors (texture library uploads)
//!
//! Out-of-range dimension edits are not errors: they are clamped by the
//! designer and reported through its edit outcome instead.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Design error type
///
/// Raised when an edit would break a structural invariant of the design.
/// The design is left unchanged whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// Removing the last cabinet would leave an empty design
    #[error("A design needs at least one cabinet")]
    LastCabinet,

    /// No cabinet with the given identifier
    #[error("Cabinet not found: {id}")]
    CabinetNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// No cabinet at the given position in the row
    #[error("No cabinet at index {index} (design has {count})")]
    CabinetIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of cabinets in the design.
        count: usize,
    },

    /// No accessory with the given identifier in the cabinet
    #[error("Accessory not found: {id}")]
    AccessoryNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The drawer stack has no free space left for another drawer
    #[error("No room for another drawer in cabinet {cabinet}")]
    NoRoom {
        /// Display name of the cabinet.
        cabinet: String,
    },

    /// The edit only applies to another cabinet archetype
    #[error("Cabinet {cabinet} is not a {expected} cabinet")]
    ArchetypeMismatch {
        /// Display name of the cabinet.
        cabinet: String,
        /// Archetype the edit applies to.
        expected: String,
    },

    /// The accessory has no such field
    #[error("A {accessory} has no {field}")]
    UnsupportedField {
        /// Accessory type label.
        accessory: String,
        /// The field the edit targeted.
        field: String,
    },
}

/// Import error type
///
/// Represents failures while reading a design document. Import never
/// touches an existing in-memory design, so these are always recoverable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    /// The document is not valid JSON or is missing a required field
    #[error("Failed to parse design document: {0}")]
    ParseError(String),

    /// The document carries a format tag this build does not understand
    #[error("Unknown design format: {0}")]
    UnsupportedFormat(String),

    /// The document was written by a newer version
    #[error("Design version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        /// Version recorded in the document.
        file_version: u32,
        /// Newest version this build reads.
        supported_version: u32,
    },

    /// The document parsed but describes an impossible design
    #[error("Invalid design document: {reason}")]
    Invalid {
        /// What is wrong with the document.
        reason: String,
    },
}

/// Rendering service error type
///
/// Failures reported by the external image generation collaborator. The
/// message is shown to the user verbatim; nothing retries automatically.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderServiceError {
    /// No API key has been configured
    #[error("No rendering service API key configured")]
    MissingApiKey,

    /// A render request initiated by the user is still outstanding
    #[error("A render request is already in progress")]
    Busy,

    /// The service answered but returned no image
    #[error("The rendering service returned no image")]
    NoImage,

    /// The service reported a failure (auth, quota, content policy, ...)
    #[error("{message}")]
    Service {
        /// Human readable message from the service.
        message: String,
    },
}

impl RenderServiceError {
    /// Create a service error from the message the collaborator reported
    pub fn service(message: impl Into<String>) -> Self {
        RenderServiceError::Service {
            message: message.into(),
        }
    }
}

/// Storage error type
///
/// Failures of the design persistence collaborator.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No stored design with the given identifier
    #[error("Stored design not found: {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored record could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored document failed its header check or migration
    #[error("Stored document rejected: {0}")]
    Document(#[from] ImportError),
}

/// Catalog error type
///
/// Raised when a texture cannot be added to the material catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// File name does not follow `space-material-number.ext`
    #[error("Invalid texture file name '{file_name}' (expected space-material-number.png)")]
    InvalidFileName {
        /// The rejected file name.
        file_name: String,
    },

    /// The upload is not an image
    #[error("{file_name} is not an image")]
    NotAnImage {
        /// The rejected file name.
        file_name: String,
    },
}

/// Main error type for CabinetKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Design invariant error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Document import error
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Rendering service error
    #[error(transparent)]
    RenderService(#[from] RenderServiceError),

    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error should be shown as a user-visible notice
    /// rather than a failure of the surrounding application.
    pub fn is_user_notice(&self) -> bool {
        matches!(
            self,
            Error::Design(_) | Error::Import(_) | Error::RenderService(_) | Error::Catalog(_)
        )
    }

    /// Check if this is an import error
    pub fn is_import_error(&self) -> bool {
        matches!(self, Error::Import(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
