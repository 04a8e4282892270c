//! Application constants
//!
//! Single source of truth for paths and provider defaults.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/kanji-mix.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Route served by the REST boundary
pub const TRANSLATE_ROUTE: &str = "/api/translate";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8788";

pub const DEFAULT_PRIMARY_ID: &str = "deepseek";
pub const DEFAULT_PRIMARY_ENDPOINT: &str = "https://api.deepseek.com";
pub const DEFAULT_PRIMARY_API_PATH: &str = "/chat/completions";
pub const DEFAULT_PRIMARY_MODEL: &str = "deepseek-chat";
pub const DEFAULT_PRIMARY_KEY_ENV: &str = "DEEPSEEK_API_KEY";

pub const DEFAULT_SECONDARY_ID: &str = "openai";
pub const DEFAULT_SECONDARY_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_SECONDARY_API_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_SECONDARY_MODEL: &str = "gpt-4o";
pub const DEFAULT_SECONDARY_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Upper bound on how much of a provider error body is kept in diagnostics
pub const ERROR_BODY_SNIPPET_CHARS: usize = 512;
