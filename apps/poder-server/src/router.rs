#![cfg_attr(feature = "strict", deny(warnings))]

use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use poder_core::PoderCore;
use poder_core::config::core_config::AppConfig;
use poder_core::provider::http_client::reqwest_client::ReqwestClient;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ServerConfig;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, misc, poder, webhook};
use crate::middleware::get_http_request_context;

pub(crate) struct InternalAppState {
    pub core: PoderCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>, db_conn: DbConn) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener to non-blocking");

    let core = PoderCore::new(
        Arc::new(DataLayer::build(db_conn)),
        config.core,
        Arc::new(ReqwestClient::default()),
    );

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState { core, config });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router(state).into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState) -> Router {
    let openapi_documentation = gen_openapi_documentation();

    let api = Router::new()
        .route("/api/poder", post(poder::controller::post_poder))
        .route("/api/poder/{id}", get(poder::controller::get_poder))
        .route("/api/poder/{id}/pdf", post(poder::controller::generate_pdf))
        .route(
            "/api/poder/{id}/send-to-sign",
            post(poder::controller::send_to_sign),
        )
        .route(
            "/webhooks/{provider}",
            post(webhook::controller::post_webhook),
        );

    let form = Router::new()
        .route("/", get(misc::form_page))
        .route("/assets/signature-pad.js", get(misc::signature_pad_script));

    let technical_endpoints = Router::new().route("/health", get(misc::health_check));

    Router::new()
        .merge(api)
        .merge(form)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "poder-server",
                        RequestId = context.request_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi_documentation))
        .merge(technical_endpoints)
        .layer(
            CorsLayer::new()
                .allow_origin(CorsAny)
                .allow_methods(CorsAny)
                .allow_headers(CorsAny),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::poder::controller::post_poder,
            endpoint::poder::controller::get_poder,
            endpoint::poder::controller::generate_pdf,
            endpoint::poder::controller::send_to_sign,

            endpoint::webhook::controller::post_webhook,

            endpoint::misc::form_page,
            endpoint::misc::health_check,
        ),
        components(
            schemas(
                endpoint::poder::dto::CreatePoderRequestRestDTO,
                endpoint::poder::dto::CreatePoderResponseRestDTO,
                endpoint::poder::dto::GetPoderResponseRestDTO,
                endpoint::poder::dto::PoderDataRestDTO,
                endpoint::poder::dto::GeneratePdfResponseRestDTO,
                endpoint::poder::dto::SendToSignRequestRestDTO,
                endpoint::poder::dto::SendToSignResponseRestDTO,
                endpoint::poder::dto::ProviderResponseRestDTO,
                endpoint::poder::dto::FinalidadRestEnum,
                endpoint::poder::dto::VigenciaRestEnum,
                endpoint::poder::dto::PoderStatusRestEnum,

                endpoint::webhook::dto::WebhookAcknowledgeRestDTO,

                crate::dto::error::ErrorResponseRestDTO,
                crate::dto::error::ErrorCode,
                crate::dto::error::Cause,

                shared_types::PoderId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "poder_management", description = "Poder de cultivo submissions"),
            (name = "webhook", description = "Signing provider callbacks"),
        ),
    )]
    struct ApiDoc;

    let mut docs = ApiDoc::openapi();
    docs.info.title = "Poder de Cultivo".to_string();
    docs.info.version = env!("CARGO_PKG_VERSION").to_string();

    docs
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
