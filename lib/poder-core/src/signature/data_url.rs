use std::io::Cursor;

use ct_codecs::{Base64, Decoder, Encoder};
use image::{ImageReader, Limits};

use super::{MAX_SURFACE_SIDE, SignatureError};

const SCHEME: &str = "data:";
const BASE64_PARAM: &str = "base64";

/// Image carried in a `data:image/...;base64,...` URL
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignatureDataUrl {
    media_type: String,
    bytes: Vec<u8>,
}

impl SignatureDataUrl {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn parse(value: &str) -> Result<Self, SignatureError> {
        let rest = value
            .trim()
            .strip_prefix(SCHEME)
            .ok_or(SignatureError::NotADataUrl)?;
        let (header, payload) = rest.split_once(',').ok_or(SignatureError::NotADataUrl)?;

        let mut params = header.split(';');
        let media_type = params.next().unwrap_or_default().to_ascii_lowercase();
        if !params.any(|param| param.eq_ignore_ascii_case(BASE64_PARAM)) {
            return Err(SignatureError::NotBase64Encoded);
        }

        if !media_type.starts_with("image/") {
            return Err(SignatureError::UnsupportedMediaType(media_type));
        }

        let bytes =
            Base64::decode_to_vec(payload, None).map_err(|_| SignatureError::InvalidBase64)?;
        if bytes.is_empty() {
            return Err(SignatureError::EmptyImage);
        }
        check_image(&bytes)?;

        Ok(Self { media_type, bytes })
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn encode(&self) -> Result<String, SignatureError> {
        let payload =
            Base64::encode_to_string(&self.bytes).map_err(|_| SignatureError::InvalidBase64)?;

        Ok(format!(
            "{SCHEME}{};{BASE64_PARAM},{payload}",
            self.media_type
        ))
    }
}

/// The payload must decode as an image no larger than [`MAX_SURFACE_SIDE`]
fn check_image(bytes: &[u8]) -> Result<(), SignatureError> {
    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|err| SignatureError::InvalidImage(err.into()))?;

    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_SURFACE_SIDE);
    limits.max_image_height = Some(MAX_SURFACE_SIDE);
    reader.limits(limits);

    reader.decode().map_err(SignatureError::InvalidImage)?;

    Ok(())
}
