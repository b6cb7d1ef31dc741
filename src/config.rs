use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Lab Insight";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest batch accepted by the HTTP analyze endpoint.
pub const MAX_BATCH_SIZE: usize = 500;

pub const HOST_ENV: &str = "LAB_INSIGHT_HOST";
pub const PORT_ENV: &str = "LAB_INSIGHT_PORT";

const DEFAULT_PORT: u16 = 8787;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "lab_insight=info,tower_http=warn"
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid host in LAB_INSIGHT_HOST: {0}")]
    InvalidHost(String),

    #[error("Invalid port in LAB_INSIGHT_PORT: {0}")]
    InvalidPort(String),
}

/// Where the HTTP shell listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    /// `0` binds an ephemeral port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `LAB_INSIGHT_HOST` / `LAB_INSIGHT_PORT`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(HOST_ENV).ok().as_deref(),
            std::env::var(PORT_ENV).ok().as_deref(),
        )
    }

    fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match host.map(str::trim).filter(|h| !h.is_empty()) {
            Some(h) => h
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(h.to_string()))?,
            None => defaults.host,
        };
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => p
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(p.to_string()))?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_values(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8787");
    }

    #[test]
    fn blank_values_fall_back() {
        let config = ServerConfig::from_values(Some("  "), Some("")).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn parses_host_and_port() {
        let config = ServerConfig::from_values(Some("0.0.0.0"), Some("0")).unwrap();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 0);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            ServerConfig::from_values(Some("localhost:80"), None),
            Err(ConfigError::InvalidHost("localhost:80".into()))
        );
        assert_eq!(
            ServerConfig::from_values(None, Some("70000")),
            Err(ConfigError::InvalidPort("70000".into()))
        );
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn log_filter_targets_crate() {
        assert!(default_log_filter().starts_with("lab_insight="));
    }
}
