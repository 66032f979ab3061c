//! Configuration types and loading
//!
//! Values come from the process environment (the binary loads `.env` first
//! via `dotenvy`), falling back to defaults suitable for local development.

use serde::{Deserialize, Serialize};
use url::Url;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Reference service configuration
    pub server: ServerConfig,

    /// Resource client configuration
    pub client: ClientConfig,

    /// Route table configuration
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size_bytes: usize,
}

/// Resource client settings
///
/// There is deliberately no timeout or retry knob: every call is a single
/// attempt whose failure goes straight back to the caller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Absolute URL of the API root, e.g. `http://localhost:8080/api`
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// History base path the route table is mounted under
    pub base_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                max_body_size_bytes: 10 * 1024 * 1024, // 10MB
            },
            client: ClientConfig::default(),
            navigation: NavigationConfig {
                base_path: "/".to_string(),
            },
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Parse the base URL, rejecting relative or non-HTTP values
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            key: "IP_API_BASE_URL".to_string(),
            message: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidValue {
                key: "IP_API_BASE_URL".to_string(),
                message: format!("unsupported scheme {}", other),
            }),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Server
        if let Some(host) = var("HOST") {
            config.server.host = host;
        }
        if let Some(port) = var("PORT") {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("{:?} is not a port number", port),
            })?;
        }
        if let Some(limit) = var("IP_MAX_BODY_BYTES") {
            config.server.max_body_size_bytes =
                limit.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "IP_MAX_BODY_BYTES".to_string(),
                    message: format!("{:?} is not a byte count", limit),
                })?;
        }

        // Client
        if let Some(base_url) = var("IP_API_BASE_URL") {
            config.client.base_url = base_url;
        }
        config.client.parsed_base_url()?;

        // Navigation
        if let Some(base_path) = var("IP_APP_BASE_PATH") {
            if !base_path.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    key: "IP_APP_BASE_PATH".to_string(),
                    message: "must start with '/'".to_string(),
                });
            }
            config.navigation.base_path = base_path;
        }

        Ok(config)
    }

    /// Get the server address
    pub fn server_addr(&self) -> std::net::SocketAddr {
        use std::net::SocketAddr;
        let ip: std::net::IpAddr = self.server.host.parse().unwrap_or([0, 0, 0, 0].into());
        SocketAddr::new(ip, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.client.base_url, "http://localhost:8080/api");
        assert_eq!(config.navigation.base_path, "/");
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = AppConfig::from_vars(vars(&[
            ("PORT", "9090"),
            ("IP_MAX_BODY_BYTES", "2048"),
            ("IP_API_BASE_URL", "https://projects.example.gov/api"),
            ("IP_APP_BASE_PATH", "/portal/"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.max_body_size_bytes, 2048);
        assert_eq!(config.client.base_url, "https://projects.example.gov/api");
        assert_eq!(config.navigation.base_path, "/portal/");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_vars(vars(&[("PORT", "eighty")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            AppConfig::from_vars(vars(&[("IP_API_BASE_URL", "/api")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            AppConfig::from_vars(vars(&[("IP_API_BASE_URL", "ftp://host/api")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            AppConfig::from_vars(vars(&[("IP_MAX_BODY_BYTES", "10MB")])),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "IP_MAX_BODY_BYTES"
        ));
        assert!(matches!(
            AppConfig::from_vars(vars(&[("IP_APP_BASE_PATH", "portal")])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig::default();
        let addr = config.server_addr();
        assert_eq!(addr.port(), 8080);
    }
}
