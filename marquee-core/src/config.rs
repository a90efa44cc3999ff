//! Centralized configuration for Marquee.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

/// Central configuration for all Marquee components.
///
/// Groups related configuration settings into logical sections.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub omdb: OmdbConfig,
    pub search: SearchConfig,
    pub server: ServerConfig,
}

/// OMDb API access configuration.
///
/// The key and base URL are injected through this struct rather than read
/// from globals, so tests and alternate deployments can point elsewhere.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// API key appended to every request
    pub api_key: Option<String>,
    /// Base URL of the OMDb endpoint
    pub base_url: String,
    /// HTTP request timeout
    pub request_timeout: Duration,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://www.omdbapi.com/".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl OmdbConfig {
    /// Creates a configuration with the key taken from the `OMDB_API_KEY`
    /// environment variable when present.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OMDB_API_KEY").ok(),
            ..Self::default()
        }
    }
}

/// Search pipeline configuration.
///
/// Controls the debounce quiescence window and coordinator channel sizing.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How long the input must stay unchanged before a query settles
    pub debounce_window: Duration,
    /// Capacity of the coordinator command channel
    pub command_buffer: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(500),
            command_buffer: 64,
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}
