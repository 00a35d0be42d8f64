//! Freehand signature capture.
//!
//! [`SignaturePad`] follows the pointer/touch events of the drawing surface
//! shown in the form and serializes the result as a PNG data URL, the same
//! representation the form submits. Submitted values are read back with
//! [`SignatureDataUrl::parse`].

use thiserror::Error;

mod data_url;
mod pad;
mod raster;

pub use data_url::SignatureDataUrl;
pub use pad::{Point, SignaturePad, Stroke};


/// Largest accepted image side in pixels, for drawn and submitted signatures
pub const MAX_SURFACE_SIDE: u32 = 4096;

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("Value is not a data URL")]
    NotADataUrl,
    #[error("Unsupported media type `{0}`, expected an image")]
    UnsupportedMediaType(String),
    #[error("Data URL payload is not base64 encoded")]
    NotBase64Encoded,
    #[error("Invalid base64 payload")]
    InvalidBase64,
    #[error("Image payload is empty")]
    EmptyImage,
    #[error("Payload is not a readable image: {0}")]
    InvalidImage(#[source] image::ImageError),
    #[error(
        "Drawing surface of {width}x{height} px is outside 1..={} px per side",
        MAX_SURFACE_SIDE
    )]
    InvalidSurfaceSize { width: f32, height: f32 },
    #[error("Image encoding error: {0}")]
    ImageEncoding(#[from] image::ImageError),
}
