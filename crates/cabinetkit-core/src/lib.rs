//! # CabinetKit Core
//!
//! Core types and utilities shared by the CabinetKit crates.
//! Provides the error taxonomy, length helpers, drawing-surface layout
//! parameters and the material/vendor catalog types.

pub mod constants;
pub mod data;
pub mod error;
pub mod units;
pub mod view;

pub use data::{
    materials::{MaterialAssignments, MaterialCatalog, MaterialZone, TextureEntry, TextureLibrary},
    vendor::VendorSpecs,
};

pub use error::{
    CatalogError, DesignError, Error, ImportError, RenderServiceError, Result, StorageError,
};

pub use units::{approx_eq, format_cm, parse_cm};
pub use view::ViewSettings;
