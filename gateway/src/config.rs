use std::net::SocketAddr;

use url::Url;

use crate::error::{ConfigError, GatewayError};

const DEFAULT_SERVER_URL: &str = "http://localhost:9090";
const DEFAULT_GATEWAY_ADDR: &str = "127.0.0.1:8080";

pub struct Config {
    /// Base URL of the ShareIt server requests are forwarded to
    pub server_url: Url,
    pub gateway_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, GatewayError> {
        let server_url = std::env::var("SHAREIT_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "SHAREIT_SERVER_URL".to_string(),
                reason: e.to_string(),
            })?;

        let gateway_addr = std::env::var("GATEWAY_ADDR")
            .unwrap_or_else(|_| DEFAULT_GATEWAY_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "GATEWAY_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            server_url,
            gateway_addr,
        })
    }
}
