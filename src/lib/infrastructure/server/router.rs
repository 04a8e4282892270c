use super::docs::ApiDoc;
use super::dto::ErrorResponse;
use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use crate::application::Translator;
use crate::constants::TRANSLATE_ROUTE;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tracing::{error, info, warn};
use utoipa::OpenApi;

/// Builds the application router. Every response, errors and pre-flight
/// included, carries `Access-Control-Allow-Origin: *`.
pub fn router<T>(translator: Arc<T>) -> Router
where
    T: Translator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let state = Arc::new(ServerState::new(translator));
    Router::new()
        .route(TRANSLATE_ROUTE, post(routes::translate::translate_handler::<T>))
        .route("/health", get(routes::health::health_handler::<T>))
        .route("/api-doc/openapi.json", get(openapi_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .with_state(state)
}

pub(super) async fn serve<T>(translator: Arc<T>, addr: SocketAddr) -> Result<(), ServerError>
where
    T: Translator + 'static,
{
    info!(%addr, "Binding REST server");
    let app = router(translator);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "internal server error".to_string()
    };
    error!(%message, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
