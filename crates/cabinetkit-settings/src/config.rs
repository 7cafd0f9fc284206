//! Configuration and settings management for CabinetKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - View layout (scale, gaps, paddings, bands)
//! - Export encodings (JPEG qualities, file stem)
//! - Rendering service (API key, model, sampling parameters)
//! - Defaults for new designs and cabinets
//! - Recently used design files

use cabinetkit_core::constants::{
    DEFAULT_CABINET_HEIGHT, DEFAULT_CABINET_WIDTH, DEFAULT_CEILING_HEIGHT, MAX_CABINET_WIDTH,
    MAX_CEILING_HEIGHT, MIN_CABINET_HEIGHT, MIN_CABINET_WIDTH, MIN_CEILING_HEIGHT,
};
use cabinetkit_core::ViewSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "cabinetkit";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Raster encoding for the shared scene image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless PNG
    Png,
    /// JPEG at the configured quality
    #[default]
    Jpeg,
}

impl ImageFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Jpeg => write!(f, "JPEG"),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Encoding of the shared scene image
    pub image_format: ImageFormat,
    /// JPEG quality of the shared scene image (1-100)
    pub jpeg_quality: u8,
    /// JPEG quality of the sketch sent to the rendering service (1-100)
    pub sketch_quality: u8,
    /// File stem used for exported files
    pub file_stem: String,
    /// Default output directory
    pub output_directory: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            image_format: ImageFormat::default(),
            jpeg_quality: 95,
            sketch_quality: 90,
            file_stem: "cabinet-design".to_string(),
            output_directory: PathBuf::from("."),
        }
    }
}

/// Rendering service settings
///
/// The API key is handed explicitly to whatever client is built from these
/// settings; nothing reads it from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderServiceSettings {
    /// API key, if one has been entered
    pub api_key: Option<String>,
    /// Image generation model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling
    pub top_k: u32,
    /// Nucleus sampling
    pub top_p: f32,
}

impl Default for RenderServiceSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash-exp".to_string(),
            temperature: 1.0,
            top_k: 40,
            top_p: 0.95,
        }
    }
}

impl RenderServiceSettings {
    /// The API key if it is set and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

/// Lengths written either as centimeters or as a string with a unit
/// (`"2.4m"`, `"600mm"`)
mod length {
    use cabinetkit_core::parse_cm;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(value),
            Raw::Text(text) => parse_cm(&text).map_err(D::Error::custom),
        }
    }
}

/// Defaults for new designs and cabinets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignDefaults {
    /// Display name of a new design
    pub design_name: String,
    /// Ceiling height of a new design (cm)
    #[serde(deserialize_with = "length::deserialize")]
    pub ceiling_height: f64,
    /// Width of a newly added cabinet (cm)
    #[serde(deserialize_with = "length::deserialize")]
    pub cabinet_width: f64,
    /// Height of a newly added tall cabinet (cm)
    #[serde(deserialize_with = "length::deserialize")]
    pub cabinet_height: f64,
}

impl Default for DesignDefaults {
    fn default() -> Self {
        Self {
            design_name: "My Cabinets".to_string(),
            ceiling_height: DEFAULT_CEILING_HEIGHT,
            cabinet_width: DEFAULT_CABINET_WIDTH,
            cabinet_height: DEFAULT_CABINET_HEIGHT,
        }
    }
}

fn default_recent_designs_count() -> usize {
    10
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of recent designs to track
    #[serde(default = "default_recent_designs_count")]
    pub recent_designs_count: usize,
    /// Recently used design files, most recent first
    #[serde(default)]
    pub recent_designs: Vec<PathBuf>,
    /// Drawing layout
    #[serde(default)]
    pub view: ViewSettings,
    /// Export encodings
    #[serde(default)]
    pub export: ExportSettings,
    /// Rendering service
    #[serde(default)]
    pub render_service: RenderServiceSettings,
    /// Defaults for new designs
    #[serde(default)]
    pub defaults: DesignDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_designs_count: default_recent_designs_count(),
            recent_designs: Vec::new(),
            view: ViewSettings::default(),
            export: ExportSettings::default(),
            render_service: RenderServiceSettings::default(),
            defaults: DesignDefaults::default(),
        }
    }
}

#[derive(Clone, Copy)]
enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> SettingsResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FileFormat::Json),
        Some("toml") => Ok(FileFormat::Toml),
        _ => Err(SettingsError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform configuration file path
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| SettingsError::NoConfigDir(std::env::consts::OS.to_string()))?;
        Ok(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or defaults when the file does not exist yet
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No configuration at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content)
            .map_err(|source| SettingsError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.view
            .validate()
            .map_err(|reason| SettingsError::invalid("view", reason))?;

        for (key, quality) in [
            ("export.jpeg_quality", self.export.jpeg_quality),
            ("export.sketch_quality", self.export.sketch_quality),
        ] {
            if !(1..=100).contains(&quality) {
                return Err(SettingsError::invalid(key, "must be between 1 and 100"));
            }
        }
        if self.export.file_stem.trim().is_empty() {
            return Err(SettingsError::invalid("export.file_stem", "must not be empty"));
        }

        let service = &self.render_service;
        if service.model.trim().is_empty() {
            return Err(SettingsError::invalid("render_service.model", "must not be empty"));
        }
        if !(0.0..=2.0).contains(&service.temperature) {
            return Err(SettingsError::invalid(
                "render_service.temperature",
                "must be between 0 and 2",
            ));
        }
        if service.top_k == 0 {
            return Err(SettingsError::invalid("render_service.top_k", "must be > 0"));
        }
        if !(service.top_p > 0.0 && service.top_p <= 1.0) {
            return Err(SettingsError::invalid(
                "render_service.top_p",
                "must be in (0, 1]",
            ));
        }

        let defaults = &self.defaults;
        if !(MIN_CEILING_HEIGHT..=MAX_CEILING_HEIGHT).contains(&defaults.ceiling_height) {
            return Err(SettingsError::invalid(
                "defaults.ceiling_height",
                format!("must be between {} and {}", MIN_CEILING_HEIGHT, MAX_CEILING_HEIGHT),
            ));
        }
        if !(MIN_CABINET_WIDTH..=MAX_CABINET_WIDTH).contains(&defaults.cabinet_width) {
            return Err(SettingsError::invalid(
                "defaults.cabinet_width",
                format!("must be between {} and {}", MIN_CABINET_WIDTH, MAX_CABINET_WIDTH),
            ));
        }
        if !(MIN_CABINET_HEIGHT..=defaults.ceiling_height).contains(&defaults.cabinet_height) {
            return Err(SettingsError::invalid(
                "defaults.cabinet_height",
                "must be at least 30 and not above the ceiling",
            ));
        }

        if self.recent_designs_count == 0 {
            return Err(SettingsError::invalid("recent_designs_count", "must be > 0"));
        }

        Ok(())
    }

    /// Add file to recent designs list
    pub fn add_recent_design(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_designs.retain(|f| f != &path);

        self.recent_designs.insert(0, path);
        self.recent_designs.truncate(self.recent_designs_count);
    }
}
