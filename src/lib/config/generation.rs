use super::error::ConfigError;
use crate::constants::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;
use std::time::Duration;

/// Sampling and transport settings shared by every provider call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Bound on a single provider attempt, connection included.
    pub timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawGeneration {
    pub(super) temperature: Option<f32>,
    pub(super) max_tokens: Option<u32>,
    pub(super) timeout_secs: Option<u64>,
}

impl TryFrom<RawGeneration> for GenerationConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGeneration) -> Result<Self, Self::Error> {
        let temperature = raw.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ConfigError::InvalidTemperature { value: temperature });
        }

        let max_tokens = raw.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
        if max_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens);
        }

        let timeout_secs = raw.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self {
            temperature,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
