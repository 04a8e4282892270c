pub mod app;
pub mod defaults;
pub mod error;
pub mod generation;
pub mod loader;
pub mod provider;
pub mod server;

pub use crate::constants::CONFIG_PATH;
pub use app::AppConfig;
pub use defaults::DEFAULT_SYSTEM_PROMPT;
pub use error::ConfigError;
pub use generation::GenerationConfig;
pub use provider::ModelProviderConfig;
pub use server::ServerConfig;
