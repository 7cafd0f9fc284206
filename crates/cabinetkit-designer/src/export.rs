//! Image export.
//!
//! Encodes a rendered scene for sharing (PNG or JPEG) and for the rendering
//! service request (JPEG sketch).

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};
use thiserror::Error;

/// Errors from encoding or writing an exported image
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Encoded image bytes with their MIME type
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Encode as PNG
pub fn encode_png(image: &RgbaImage) -> Result<EncodedImage, ExportError> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(EncodedImage {
        mime_type: "image/png",
        bytes: out.into_inner(),
    })
}

/// Encode as JPEG at `quality` (1-100). Alpha is dropped.
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<EncodedImage, ExportError> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
    encoder.encode_image(&rgb)?;
    Ok(EncodedImage {
        mime_type: "image/jpeg",
        bytes,
    })
}

/// Write encoded bytes to `path`, creating parent directories
pub fn write_image(encoded: &EncodedImage, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &encoded.bytes)?;
    tracing::info!(
        "Exported {} ({} bytes) to {}",
        encoded.mime_type,
        encoded.bytes.len(),
        path.display()
    );
    Ok(())
}

/// Write an SVG document to `path`
pub fn write_svg(svg: &str, path: impl AsRef<Path>) -> Result<(), ExportError> {
    write_image(
        &EncodedImage {
            mime_type: "image/svg+xml",
            bytes: svg.as_bytes().to_vec(),
        },
        path,
    )
}
