//! IDOK (FirmaYa) envelope client.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Serialize;

use super::dto::{Document, EnvelopeRequest, ProviderResponse, Signer};
use super::error::SigningProviderError;
use super::{ENVELOPE_TITLE, IDOK, SigningProvider};
use crate::config::core_config::IdokConfig;
use crate::provider::http_client::HttpClient;


const API_KEY_HEADER: &str = "X-API-Key";

pub struct IdokSigningProvider {
    params: IdokConfig,
    callback_url: String,
    client: Arc<dyn HttpClient>,
}

#[derive(Serialize)]
struct CreateEnvelopeRequest<'a> {
    title: &'a str,
    callback_url: &'a str,
    signers: &'a [Signer],
    document: &'a Document,
}

impl IdokSigningProvider {
    pub fn new(params: IdokConfig, callback_url: String, client: Arc<dyn HttpClient>) -> Self {
        Self {
            params,
            callback_url,
            client,
        }
    }
}

#[async_trait::async_trait]
impl SigningProvider for IdokSigningProvider {
    async fn create_envelope(
        &self,
        request: &EnvelopeRequest,
    ) -> Result<ProviderResponse, SigningProviderError> {
        let base_url =
            self.params
                .base_url
                .as_deref()
                .ok_or(SigningProviderError::MissingConfiguration {
                    provider: IDOK,
                    key: "baseUrl",
                })?;
        let url = format!("{}/api/v1/envelopes", base_url.trim_end_matches('/'));

        let api_key = self
            .params
            .api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .unwrap_or_default();

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(CreateEnvelopeRequest {
                title: ENVELOPE_TITLE,
                callback_url: &self.callback_url,
                signers: &request.signers,
                document: &request.document,
            })?
            .send()
            .await?;

        tracing::info!(status = %response.status, "IDOK envelope requested");

        Ok(response.into())
    }
}
