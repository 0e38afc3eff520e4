//! Host configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 8080)
//! - `UPSTREAM_URL` - REST API origin that `/api` and `/uploads` are forwarded to
//!   (default: http://localhost:5000)
//! - `OPEN_BROWSER` - Open the storefront in the default browser on start (default: true)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub upstream_url: String,
    pub open_browser: bool,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get_or_default(&lookup, "HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_or_default(&lookup, "PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;
        let upstream_url = parse_upstream(&get_or_default(&lookup, "UPSTREAM_URL", "http://localhost:5000"))?;
        let open_browser = parse_flag("OPEN_BROWSER", &get_or_default(&lookup, "OPEN_BROWSER", "true"))?;

        Ok(Self {
            host,
            port,
            upstream_url,
            open_browser,
        })
    }

    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Address a browser should open; unspecified binds map to loopback.
    pub fn public_url(&self) -> String {
        let host = if self.host.is_unspecified() {
            "127.0.0.1".to_string()
        } else {
            self.host.to_string()
        };
        format!("http://{}:{}", host, self.port)
    }
}

fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_upstream(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::MissingEnvVar("UPSTREAM_URL".to_string()));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar(
            "UPSTREAM_URL".to_string(),
            "expected an http:// or https:// origin".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(key.to_string(), format!("not a boolean: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.upstream_url, "http://localhost:5000");
        assert!(config.open_browser);
    }

    #[test]
    fn reads_overrides_and_trims_trailing_slash() {
        let config = load(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("UPSTREAM_URL", "https://api.example.com/"),
            ("OPEN_BROWSER", "off"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.upstream_url, "https://api.example.com");
        assert!(!config.open_browser);
        assert_eq!(config.public_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(load(&[("PORT", "eighty")]), Err(ConfigError::InvalidEnvVar(key, _)) if key == "PORT"));
        assert!(matches!(load(&[("HOST", "nowhere")]), Err(ConfigError::InvalidEnvVar(key, _)) if key == "HOST"));
        assert!(matches!(
            load(&[("UPSTREAM_URL", "ftp://files")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "UPSTREAM_URL"
        ));
        assert!(load(&[("OPEN_BROWSER", "maybe")]).is_err());
    }
}
