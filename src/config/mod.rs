//! Configuration module for the AI Club backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Output format for the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Optional JSON seed snapshot replacing the built-in records
    pub seed_path: Option<PathBuf>,
    /// Allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("AICLUB_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .expect("Invalid AICLUB_BIND_ADDR format");

        let log_level = env::var("AICLUB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = env::var("AICLUB_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or(LogFormat::Text);

        let seed_path = env::var("AICLUB_SEED_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let cors_origin = env::var("AICLUB_CORS_ORIGIN")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            bind_addr,
            log_level,
            log_format,
            seed_path,
            cors_origin,
        }
    }
}
