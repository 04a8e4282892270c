use super::super::dto::{ErrorResponse, RestTranslateRequest, RestTranslateResponse};
use super::super::state::ServerState;
use crate::application::Translator;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{error, info, warn};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}

/// The body is taken raw so that malformed JSON maps to 500 regardless of
/// the request's content type.
#[utoipa::path(
    post,
    path = "/api/translate",
    tag = "translate",
    request_body = RestTranslateRequest,
    responses(
        (status = 200, description = "Translation produced", body = RestTranslateResponse),
        (status = 400, description = "Text is missing or empty", body = ErrorResponse),
        (status = 405, description = "Method other than POST or OPTIONS"),
        (status = 500, description = "Malformed body or every provider failed", body = ErrorResponse)
    )
)]
pub async fn translate_handler<T: Translator>(
    State(state): State<Arc<ServerState<T>>>,
    body: Bytes,
) -> Result<Json<RestTranslateResponse>, ApiError> {
    let payload: RestTranslateRequest = serde_json::from_slice(&body).map_err(|err| {
        warn!(%err, bytes = body.len(), "Rejecting /api/translate request with malformed body");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    })?;

    let text = match payload.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            warn!("Rejecting /api/translate request without text");
            return Err(api_error(StatusCode::BAD_REQUEST, "Text is required"));
        }
    };

    info!(chars = text.chars().count(), "Received /api/translate request");

    match state.translator().translate(&text).await {
        Ok(translated_text) => {
            info!("Translation request completed successfully");
            Ok(Json(RestTranslateResponse { translated_text }))
        }
        Err(err) => {
            error!(%err, "Translation request failed");
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
        }
    }
}
