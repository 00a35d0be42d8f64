use axum::body::Bytes;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use serde_json::Value;

use super::dto::WebhookAcknowledgeRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{ErrorResponse, OkOrErrorResponse};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/webhooks/{provider}",
    request_body = Object,
    responses(OkOrErrorResponse<WebhookAcknowledgeRestDTO>),
    params(
        ("provider" = String, Path, description = "Signing provider name (`ecert` or `idok`)")
    ),
    tag = "webhook",
    summary = "Signing provider callback",
    description = indoc::formatdoc! {"
        Receives status notifications of a signing provider. Notifications are logged and acknowledged.
        The body is read as JSON whatever the declared content type.
    "},
)]
pub(crate) async fn post_webhook(
    state: State<AppState>,
    WithRejection(Path(provider), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    body: Bytes,
) -> OkOrErrorResponse<WebhookAcknowledgeRestDTO> {
    // providers do not always declare `application/json`
    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(payload) => payload,
        Err(error) => {
            return OkOrErrorResponse::Error(ErrorResponse::BadRequest(error.into()));
        }
    };

    let result = state
        .core
        .webhook_service
        .handle_callback(&provider, payload);
    OkOrErrorResponse::from_result(result, state, "handling signing provider callback")
}
