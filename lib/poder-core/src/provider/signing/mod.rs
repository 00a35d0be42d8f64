//! E-signature provider clients.
//!
//! Each provider receives the rendered document together with both parties
//! as signers and answers with an HTTP response that is handed back to the
//! caller as-is. Results arrive later through the webhook endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use dto::{EnvelopeRequest, ProviderResponse};
use error::SigningProviderError;

use crate::config::core_config::CoreConfig;
use crate::provider::http_client::HttpClient;

pub mod dto;
pub mod ecert;
pub mod error;
pub mod idok;
pub mod provider;

mod mapper;


pub const ECERT: &str = "ecert";
pub const IDOK: &str = "idok";

/// Title of the envelope shown to signers
pub const ENVELOPE_TITLE: &str = "Poder simple traspaso de derechos de cultivo";

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait SigningProvider: Send + Sync {
    async fn create_envelope(
        &self,
        request: &EnvelopeRequest,
    ) -> Result<ProviderResponse, SigningProviderError>;
}

pub fn signing_providers_from_config(
    config: &CoreConfig,
    client: Arc<dyn HttpClient>,
) -> HashMap<String, Arc<dyn SigningProvider>> {
    let callback_url = |provider: &str| {
        format!(
            "{}/webhooks/{provider}",
            config.public_base_url.trim_end_matches('/')
        )
    };

    let ecert = ecert::EcertSigningProvider::new(
        config.signing_provider.ecert.clone(),
        callback_url(ECERT),
        client.clone(),
    );
    let idok = idok::IdokSigningProvider::new(
        config.signing_provider.idok.clone(),
        callback_url(IDOK),
        client,
    );

    HashMap::from([
        (ECERT.to_string(), Arc::new(ecert) as Arc<dyn SigningProvider>),
        (IDOK.to_string(), Arc::new(idok) as Arc<dyn SigningProvider>),
    ])
}
