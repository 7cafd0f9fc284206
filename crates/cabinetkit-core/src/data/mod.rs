//! Catalog data shared by the designer and the application shell
//!
//! This module provides:
//! - Material zones and per-zone material assignments
//! - The texture library backing the material catalog collaborator
//! - Vendor specification key/value pairs fed to the prompt compiler

pub mod materials;
pub mod vendor;
