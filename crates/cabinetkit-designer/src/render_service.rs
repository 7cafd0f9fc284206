//! Rendering service collaborator.
//!
//! The photorealistic rendering is produced by an external image generation
//! service. This module defines the request it receives, the interface a
//! concrete client implements, and [`RenderSession`], which assembles a
//! request from the current design and enforces that at most one request is
//! in flight.

use std::cell::Cell;
use std::rc::Rc;

use cabinetkit_core::{RenderServiceError, VendorSpecs};

use crate::export::{encode_jpeg, EncodedImage};
use crate::model::Design;
use crate::prompt::{compile_prompt, Environment};
use crate::renderer::{render_design, RenderOptions};
use crate::viewport::Viewport;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Sampling parameters forwarded to the service
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub model: String,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 1.0,
            top_k: 40,
            top_p: 0.95,
        }
    }
}

/// Everything a client needs to issue one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub api_key: String,
    /// Compressed front-elevation sketch
    pub sketch: EncodedImage,
    pub prompt: String,
    pub params: RenderParams,
}

/// Image returned by the service
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// External image generation service.
///
/// Implementations report failures with the service's own message; nothing
/// here retries.
pub trait RenderService {
    fn generate(&self, request: &RenderRequest) -> Result<GeneratedImage, RenderServiceError>;
}

/// Tracks whether a render request is outstanding
#[derive(Debug, Clone, Default)]
pub struct RenderGate {
    busy: Rc<Cell<bool>>,
}

impl RenderGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Claim the gate until the returned permit is dropped
    pub fn try_acquire(&self) -> Result<RenderPermit, RenderServiceError> {
        if self.busy.replace(true) {
            return Err(RenderServiceError::Busy);
        }
        Ok(RenderPermit {
            busy: Rc::clone(&self.busy),
        })
    }
}

/// Held while a request is in flight
#[derive(Debug)]
pub struct RenderPermit {
    busy: Rc<Cell<bool>>,
}

impl Drop for RenderPermit {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

/// Builds render requests from a design and sends them through a service.
#[derive(Debug, Clone)]
pub struct RenderSession {
    api_key: Option<String>,
    params: RenderParams,
    sketch_quality: u8,
    gate: RenderGate,
}

impl RenderSession {
    pub fn new(api_key: Option<String>, params: RenderParams, sketch_quality: u8) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            params,
            sketch_quality,
            gate: RenderGate::new(),
        }
    }

    pub fn gate(&self) -> &RenderGate {
        &self.gate
    }

    /// Assemble the request for a design without sending it
    pub fn build_request(
        &self,
        design: &Design,
        viewport: &Viewport,
        specs: &VendorSpecs,
        environment: &Environment,
    ) -> Result<RenderRequest, RenderServiceError> {
        let api_key = self
            .api_key
            .clone()
            .ok_or(RenderServiceError::MissingApiKey)?;

        let image = render_design(design, viewport, &RenderOptions::export());
        let sketch = encode_jpeg(&image, self.sketch_quality)
            .map_err(|e| RenderServiceError::service(format!("Failed to encode sketch: {}", e)))?;

        Ok(RenderRequest {
            api_key,
            sketch,
            prompt: compile_prompt(design, specs, environment),
            params: self.params.clone(),
        })
    }

    /// Render a design through `service`.
    ///
    /// Fails with [`RenderServiceError::Busy`] while another request from
    /// this session is outstanding.
    pub fn render(
        &self,
        service: &dyn RenderService,
        design: &Design,
        viewport: &Viewport,
        specs: &VendorSpecs,
        environment: &Environment,
    ) -> Result<GeneratedImage, RenderServiceError> {
        let request = self.build_request(design, viewport, specs, environment)?;
        let _permit = self.gate.try_acquire()?;

        tracing::info!(
            "Requesting rendering of '{}' from {}",
            design.name,
            request.params.model
        );
        match service.generate(&request) {
            Ok(image) if image.data.is_empty() => {
                tracing::warn!("Rendering service returned an empty image");
                Err(RenderServiceError::NoImage)
            }
            Ok(image) => {
                tracing::info!("Received {} ({} bytes)", image.mime_type, image.data.len());
                Ok(image)
            }
            Err(e) => {
                tracing::warn!("Rendering failed: {}", e);
                Err(e)
            }
        }
    }
}
