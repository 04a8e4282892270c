use super::super::dto::HealthResponse;
use super::super::state::ServerState;
use crate::application::Translator;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler<T: Translator>(
    State(state): State<Arc<ServerState<T>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        secondary: state.translator().has_fallback(),
    })
}
