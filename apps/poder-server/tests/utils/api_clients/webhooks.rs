use serde_json::Value;

use super::{HttpClient, Response};

pub struct WebhooksApi {
    client: HttpClient,
}

impl WebhooksApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn notify(&self, provider: &str, body: Value) -> Response {
        let url = format!("/webhooks/{provider}");
        self.client.post(&url, body).await
    }

    pub async fn notify_raw(&self, provider: &str, body: &'static str) -> Response {
        let url = format!("/webhooks/{provider}");
        self.client.post_raw(&url, body).await
    }

    pub async fn notify_without_content_type(
        &self,
        provider: &str,
        body: &'static str,
    ) -> Response {
        let url = format!("/webhooks/{provider}");
        self.client.post_without_content_type(&url, body).await
    }
}
