//! Configuration management

use anyhow::{Context, Result};
use reqwest::Url;
use std::path::PathBuf;

/// Fixed backend port used when the base URL is derived rather than given
const DEFAULT_API_PORT: u16 = 8000;

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved API base URL
    pub base_url: Url,

    /// Path of the persisted token file
    pub token_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// If `MATRIMONY_API_URL` is set explicitly, use it. Otherwise derive the
    /// API origin from `MATRIMONY_API_HOST` (default `localhost`) with the
    /// fixed backend port, so the same build works for both local and LAN
    /// deployments without reconfiguration.
    pub fn from_env() -> Result<Self> {
        let base_url = match std::env::var("MATRIMONY_API_URL") {
            Ok(explicit) => Url::parse(&explicit)
                .with_context(|| format!("invalid MATRIMONY_API_URL: {explicit}"))?,
            Err(_) => {
                let host = std::env::var("MATRIMONY_API_HOST")
                    .unwrap_or_else(|_| "localhost".to_string());
                Url::parse(&format!("http://{host}:{DEFAULT_API_PORT}"))
                    .with_context(|| format!("invalid MATRIMONY_API_HOST: {host}"))?
            }
        };

        let token_path = std::env::var("MATRIMONY_TOKEN_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".matrimony")
                    .join("tokens.json")
            });

        Ok(Self {
            base_url,
            token_path,
        })
    }

    /// Build a config directly, bypassing the environment
    pub fn new(base_url: Url, token_path: PathBuf) -> Self {
        Self {
            base_url,
            token_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url_wins() {
        let config = Config::new(
            Url::parse("https://api.example.org").unwrap(),
            PathBuf::from("/tmp/tokens.json"),
        );
        assert_eq!(config.base_url.as_str(), "https://api.example.org/");
    }

    #[test]
    fn test_derived_base_url_uses_fixed_port() {
        let url = Url::parse(&format!("http://{}:{}", "192.168.1.50", DEFAULT_API_PORT)).unwrap();
        assert_eq!(url.port(), Some(8000));
        assert_eq!(url.host_str(), Some("192.168.1.50"));
    }
}
