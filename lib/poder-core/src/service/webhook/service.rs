use serde_json::Value;

use super::WebhookService;
use super::dto::WebhookAcknowledgeDTO;
use crate::service::error::{MissingProviderError, ServiceError};

impl WebhookService {
    /// Accepts a status notification from a signing provider.
    ///
    /// Notifications are acknowledged and logged only, the stored submission
    /// is left untouched.
    ///
    /// # Arguments
    ///
    /// * `provider` - name of the notifying provider
    /// * `payload` - notification body
    pub fn handle_callback(
        &self,
        provider: &str,
        payload: Value,
    ) -> Result<WebhookAcknowledgeDTO, ServiceError> {
        if self
            .signing_provider_registry
            .get_signing_provider(provider)
            .is_none()
        {
            return Err(MissingProviderError::SigningProvider(provider.to_owned()).into());
        }

        // TODO: verify the callback signature with a per-provider webhook secret
        // and move the submission to `signed`/`rejected` based on the payload
        tracing::info!(provider, %payload, "Received signing provider callback");

        Ok(WebhookAcknowledgeDTO { ok: true })
    }
}
