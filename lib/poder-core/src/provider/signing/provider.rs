use std::collections::HashMap;
use std::sync::Arc;

use super::SigningProvider;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SigningProviderRegistry: Send + Sync {
    fn get_signing_provider(&self, name: &str) -> Option<Arc<dyn SigningProvider>>;
}

pub struct SigningProviderRegistryImpl {
    providers: HashMap<String, Arc<dyn SigningProvider>>,
}

impl SigningProviderRegistryImpl {
    pub fn new(providers: HashMap<String, Arc<dyn SigningProvider>>) -> Self {
        Self { providers }
    }
}

impl SigningProviderRegistry for SigningProviderRegistryImpl {
    fn get_signing_provider(&self, name: &str) -> Option<Arc<dyn SigningProvider>> {
        self.providers.get(name).cloned()
    }
}
