use serde::{Deserialize, Serialize};
use strum::Display;

pub const DOCUMENT_FILENAME: &str = "poder_cultivo.pdf";
pub const DOCUMENT_MIME: &str = "application/pdf";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnvelopeRequest {
    pub signers: Vec<Signer>,
    pub document: Document,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Signer {
    pub name: String,
    pub email: String,
    pub rut: String,
    pub role: SignerRole,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
pub enum SignerRole {
    Cedente,
    Cesionario,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    pub filename: String,
    pub content_base64: String,
    pub mime: String,
}

impl Document {
    pub fn pdf(content_base64: String) -> Self {
        Self {
            filename: DOCUMENT_FILENAME.to_string(),
            content_base64,
            mime: DOCUMENT_MIME.to_string(),
        }
    }
}

/// Provider answer, passed through without interpretation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub status: u16,
    pub reason: String,
    pub raw: String,
}
