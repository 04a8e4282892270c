use super::dto::{ErrorResponse, HealthResponse, RestTranslateRequest, RestTranslateResponse};
use super::routes;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::translate::translate_handler,
        routes::health::health_handler
    ),
    components(
        schemas(
            RestTranslateRequest,
            RestTranslateResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "translate", description = "Kanji/English mixed-script translation"),
        (name = "health", description = "Liveness and fallback status")
    )
)]
pub(super) struct ApiDoc;
