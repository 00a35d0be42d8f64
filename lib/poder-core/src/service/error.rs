use shared_types::PoderId;
use thiserror::Error;

use crate::provider::signing::error::SigningProviderError;
use crate::repository::error::DataLayerError;
use crate::signature::SignatureError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    MissingProvider(#[from] MissingProviderError),

    #[error("Signing provider error: `{0}`")]
    SigningProvider(#[from] SigningProviderError),
    #[error(transparent)]
    Repository(DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Poder `{0}` not found")]
    Poder(PoderId),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid form data: {0}")]
    InvalidFormData(#[from] validator::ValidationErrors),

    #[error("Invalid signature image in `{field}`: {source}")]
    InvalidSignatureImage {
        field: &'static str,
        source: SignatureError,
    },
}

#[derive(Debug, Error)]
pub enum MissingProviderError {
    #[error("Signing provider `{0}` not supported")]
    SigningProvider(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unmapped error code",
            ErrorCode::BR_0001 => "Poder not found",
            ErrorCode::BR_0002 => "Signing provider not supported",
            ErrorCode::BR_0003 => "Invalid form data",
            ErrorCode::BR_0004 => "Database error",
            ErrorCode::BR_0005 => "Signing provider error",
            ErrorCode::BR_0006 => "Invalid signature image",
            ErrorCode::BR_0007 => "Response mapping error",
        }
    }
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        Self::Repository(value)
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::MissingProvider(error) => error.error_code(),
            ServiceError::SigningProvider(_) => ErrorCode::BR_0005,
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::BR_0007,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Poder(_) => ErrorCode::BR_0001,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidFormData(_) => ErrorCode::BR_0003,
            ValidationError::InvalidSignatureImage { .. } => ErrorCode::BR_0006,
        }
    }
}

impl MissingProviderError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            MissingProviderError::SigningProvider(_) => ErrorCode::BR_0002,
        }
    }
}
