use super::dto::ProviderResponse;
use crate::provider::http_client::Response;

impl From<Response> for ProviderResponse {
    fn from(response: Response) -> Self {
        Self {
            status: response.status.0,
            reason: response.status.canonical_reason().to_string(),
            raw: response.body_lossy(),
        }
    }
}
