use super::error::ConfigError;
use crate::constants::DEFAULT_BIND_ADDR;
use serde::Deserialize;
use std::net::SocketAddr;

/// REST boundary settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8788)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawServer {
    pub(super) bind: Option<String>,
}

impl TryFrom<RawServer> for ServerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawServer) -> Result<Self, Self::Error> {
        let value = raw.bind.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind = value
            .parse()
            .map_err(|source| ConfigError::InvalidBind { value, source })?;
        Ok(Self { bind })
    }
}
