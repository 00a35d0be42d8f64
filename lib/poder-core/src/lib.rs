use std::sync::Arc;

use config::core_config::CoreConfig;
use proto::clock::DefaultClock;
use provider::http_client::HttpClient;
use provider::signing::provider::{SigningProviderRegistry, SigningProviderRegistryImpl};
use provider::signing::signing_providers_from_config;
use repository::DataRepository;
use service::poder::PoderService;
use service::webhook::WebhookService;

pub mod config;
pub mod model;
pub mod proto;
pub mod provider;
pub mod renderer;
pub mod repository;
pub mod service;
pub mod signature;

#[derive(Clone)]
pub struct PoderCore {
    pub poder_service: PoderService,
    pub webhook_service: WebhookService,
    pub config: Arc<CoreConfig>,
}

impl PoderCore {
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
        client: Arc<dyn HttpClient>,
    ) -> Self {
        let signing_provider_registry: Arc<dyn SigningProviderRegistry> = Arc::new(
            SigningProviderRegistryImpl::new(signing_providers_from_config(&config, client)),
        );

        Self {
            poder_service: PoderService::new(
                data_provider.get_poder_repository(),
                signing_provider_registry.clone(),
                Arc::new(DefaultClock),
            ),
            webhook_service: WebhookService::new(signing_provider_registry),
            config: Arc::new(config),
        }
    }
}
