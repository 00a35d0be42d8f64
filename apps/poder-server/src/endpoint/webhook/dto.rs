use one_dto_mapper::From;
use poder_core::service::webhook::dto::WebhookAcknowledgeDTO;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(WebhookAcknowledgeDTO)]
pub(crate) struct WebhookAcknowledgeRestDTO {
    #[schema(example = true)]
    pub ok: bool,
}
