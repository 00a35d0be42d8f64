use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use shared_types::PoderId;

use super::dto::{
    CreatePoderRequestRestDTO, CreatePoderResponseRestDTO, GeneratePdfResponseRestDTO,
    GetPoderResponseRestDTO, SendToSignRequestRestDTO, SendToSignResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, OkOrErrorResponse};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/poder",
    request_body = CreatePoderRequestRestDTO,
    responses(CreatedOrErrorResponse<CreatePoderResponseRestDTO>),
    tag = "poder_management",
    summary = "Submit poder",
    description = indoc::formatdoc! {"
        Validates the submitted form and stores it as a new poder in `draft` state.
        Signatures are optional image data URLs.
    "},
)]
pub(crate) async fn post_poder(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreatePoderRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<CreatePoderResponseRestDTO> {
    let result = state.core.poder_service.create_poder(request.into()).await;
    CreatedOrErrorResponse::from_result(result, state, "creating poder")
}

#[utoipa::path(
    get,
    path = "/api/poder/{id}",
    responses(OkOrErrorResponse<GetPoderResponseRestDTO>),
    params(
        ("id" = PoderId, Path, description = "Poder id")
    ),
    tag = "poder_management",
    summary = "Retrieve poder",
    description = "Returns the stored form data and signing state of a poder.",
)]
pub(crate) async fn get_poder(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<PoderId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetPoderResponseRestDTO> {
    let result = state.core.poder_service.get_poder(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting poder")
}

#[utoipa::path(
    post,
    path = "/api/poder/{id}/pdf",
    responses(OkOrErrorResponse<GeneratePdfResponseRestDTO>),
    params(
        ("id" = PoderId, Path, description = "Poder id")
    ),
    tag = "poder_management",
    summary = "Generate document",
    description = indoc::formatdoc! {"
        Renders the poder document. PDF conversion is not available yet,
        the response carries the base64 encoded HTML.
    "},
)]
pub(crate) async fn generate_pdf(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<PoderId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GeneratePdfResponseRestDTO> {
    let result = state.core.poder_service.generate_pdf(&id).await;
    OkOrErrorResponse::from_result(result, state, "generating poder document")
}

#[utoipa::path(
    post,
    path = "/api/poder/{id}/send-to-sign",
    request_body = SendToSignRequestRestDTO,
    responses(OkOrErrorResponse<SendToSignResponseRestDTO>),
    params(
        ("id" = PoderId, Path, description = "Poder id")
    ),
    tag = "poder_management",
    summary = "Send to sign",
    description = indoc::formatdoc! {"
        Sends the rendered document to the selected e-signature provider (`ecert` or `idok`)
        and marks the poder as `sent_to_sign`. The provider answer is returned unchanged.
    "},
)]
pub(crate) async fn send_to_sign(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<PoderId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<SendToSignRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<SendToSignResponseRestDTO> {
    let result = state
        .core
        .poder_service
        .send_to_sign(&id, request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "sending poder to sign")
}
