mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use dto::{ErrorResponse, HealthResponse, RestTranslateRequest, RestTranslateResponse};
pub use error::ServerError;
pub use router::router;

use crate::application::Translator;
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn serve<T>(translator: Arc<T>, addr: SocketAddr) -> Result<(), ServerError>
where
    T: Translator + 'static,
{
    router::serve(translator, addr).await
}
