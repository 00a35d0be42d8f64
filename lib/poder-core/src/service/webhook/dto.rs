#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookAcknowledgeDTO {
    pub ok: bool,
}
