use std::sync::Arc;

use crate::provider::signing::provider::SigningProviderRegistry;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct WebhookService {
    signing_provider_registry: Arc<dyn SigningProviderRegistry>,
}

impl WebhookService {
    pub fn new(signing_provider_registry: Arc<dyn SigningProviderRegistry>) -> Self {
        Self {
            signing_provider_registry,
        }
    }
}
