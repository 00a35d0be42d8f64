//! ECERT (e-certchile) envelope client.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Serialize;

use super::dto::{Document, EnvelopeRequest, ProviderResponse, Signer};
use super::error::SigningProviderError;
use super::{ECERT, ENVELOPE_TITLE, SigningProvider};
use crate::config::core_config::EcertConfig;
use crate::provider::http_client::HttpClient;


pub struct EcertSigningProvider {
    params: EcertConfig,
    callback_url: String,
    client: Arc<dyn HttpClient>,
}

#[derive(Serialize)]
struct CreateEnvelopeRequest<'a> {
    name: &'a str,
    callback_url: &'a str,
    signers: &'a [Signer],
    document: &'a Document,
}

impl EcertSigningProvider {
    pub fn new(params: EcertConfig, callback_url: String, client: Arc<dyn HttpClient>) -> Self {
        Self {
            params,
            callback_url,
            client,
        }
    }
}

#[async_trait::async_trait]
impl SigningProvider for EcertSigningProvider {
    async fn create_envelope(
        &self,
        request: &EnvelopeRequest,
    ) -> Result<ProviderResponse, SigningProviderError> {
        let base_url = self.params.base_url.as_deref().ok_or(
            SigningProviderError::MissingConfiguration {
                provider: ECERT,
                key: "baseUrl",
            },
        )?;
        let url = format!("{}/v1/envelopes", base_url.trim_end_matches('/'));

        let mut builder = self.client.post(&url);
        if let Some(token) = &self.params.access_token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        let response = builder
            .json(CreateEnvelopeRequest {
                name: ENVELOPE_TITLE,
                callback_url: &self.callback_url,
                signers: &request.signers,
                document: &request.document,
            })?
            .send()
            .await?;

        tracing::info!(status = %response.status, "ECERT envelope requested");

        Ok(response.into())
    }
}
