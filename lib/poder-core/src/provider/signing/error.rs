use thiserror::Error;

use crate::provider::http_client::HttpClientError;

#[derive(Debug, Error)]
pub enum SigningProviderError {
    #[error("Signing provider `{provider}` is missing `{key}` configuration")]
    MissingConfiguration {
        provider: &'static str,
        key: &'static str,
    },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] HttpClientError),
}
