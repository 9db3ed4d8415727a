use std::net::SocketAddr;

use thiserror::Error;

/// Server configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Flat catalogue price until a real catalogue adapter exists.
    pub unit_price: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}

impl Config {
    /// LISTEN_ADDR defaults to 0.0.0.0:8080, UNIT_PRICE to 100.
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address"))?;

        let unit_price = match std::env::var("UNIT_PRICE") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("UNIT_PRICE", "must be a positive integer"))?,
            Err(_) => 100,
        };

        Ok(Config {
            listen_addr,
            unit_price,
        })
    }
}
