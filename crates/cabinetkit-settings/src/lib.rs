//! CabinetKit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, DesignDefaults, ExportSettings, ImageFormat, RenderServiceSettings};
pub use error::{SettingsError, SettingsResult};
