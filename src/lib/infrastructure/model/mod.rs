//! Model infrastructure module
//!
//! Chat-completion provider clients.
//!
//! # Structure
//! - `types` - call settings and the `ModelError` taxonomy
//! - `traits` - the `ModelClient` seam used by the orchestrator
//! - `factory` - key resolution and client construction from config
//! - `clients` - the OpenAI-compatible HTTP client

pub mod clients;
pub mod factory;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use clients::OpenAIClient;
pub use factory::{ProviderFactory, build_http_client, redact_secret, resolve_api_key};
pub use traits::ModelClient;
pub use types::{ModelError, ProviderCallConfig};
