use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};

const FORM_PAGE: &str = include_str!("../../assets/index.html");
const SIGNATURE_PAD_SCRIPT: &str = include_str!("../../assets/signature-pad.js");

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 204, description = "No content")
    ),
    tag = "other",
    summary = "Health check",
    description = "Returns a `204` response when the system is healthy.",
)]
pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Form page", content_type = "text/html")
    ),
    tag = "other",
    summary = "Form page",
    description = "Returns the submission form with the signature capture widgets.",
)]
pub(crate) async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

pub(crate) async fn signature_pad_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SIGNATURE_PAD_SCRIPT,
    )
}
