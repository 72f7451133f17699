//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Cross-origin policy applied to every route
    pub cors: CorsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// One CORS dimension: either everything, or an explicit list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowList {
    /// `*`
    Any,
    /// Comma-separated values from the environment
    List(Vec<String>),
}

impl AllowList {
    fn parse(raw: &str) -> Self {
        let items: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if items.is_empty() || items.iter().any(|s| s == "*") {
            AllowList::Any
        } else {
            AllowList::List(items)
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Origins allowed to call the API
    pub allow_origins: AllowList,
    /// Methods allowed in preflight
    pub allow_methods: AllowList,
    /// Request headers allowed in preflight
    pub allow_headers: AllowList,
    /// Whether cookies and auth headers may be sent
    pub allow_credentials: bool,
}

impl CorsConfig {
    /// True when any origin may make credentialed requests
    pub fn is_wide_open(&self) -> bool {
        self.allow_credentials && self.allow_origins == AllowList::Any
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: AllowList::Any,
            allow_methods: AllowList::Any,
            allow_headers: AllowList::Any,
            allow_credentials: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CorsConfig::default();

        Self {
            server: ServerConfig {
                port: lookup("PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
                host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            },
            cors: CorsConfig {
                allow_origins: lookup("CORS_ALLOW_ORIGINS")
                    .map(|v| AllowList::parse(&v))
                    .unwrap_or(defaults.allow_origins),
                allow_methods: lookup("CORS_ALLOW_METHODS")
                    .map(|v| AllowList::parse(&v))
                    .unwrap_or(defaults.allow_methods),
                allow_headers: lookup("CORS_ALLOW_HEADERS")
                    .map(|v| AllowList::parse(&v))
                    .unwrap_or(defaults.allow_headers),
                allow_credentials: lookup("CORS_ALLOW_CREDENTIALS")
                    .and_then(|v| parse_bool(&v))
                    .unwrap_or(defaults.allow_credentials),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Parse a loosely-spelled boolean (`true`/`t`/`1`/`yes`/`y`/`on` and their negatives)
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
