use std::sync::Arc;

use crate::proto::clock::Clock;
use crate::provider::signing::provider::SigningProviderRegistry;
use crate::repository::poder_repository::PoderRepository;

pub mod dto;
pub mod service;

pub(crate) mod mapper;
pub(crate) mod validator;

/// Value stored as `provider_envelope_id` until the provider reports the real one
pub const PENDING_ENVELOPE_ID: &str = "TBD";

#[derive(Clone)]
pub struct PoderService {
    poder_repository: Arc<dyn PoderRepository>,
    signing_provider_registry: Arc<dyn SigningProviderRegistry>,
    clock: Arc<dyn Clock>,
}

impl PoderService {
    pub fn new(
        poder_repository: Arc<dyn PoderRepository>,
        signing_provider_registry: Arc<dyn SigningProviderRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            poder_repository,
            signing_provider_registry,
            clock,
        }
    }
}
