//! Configuration module for the TRL backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Lifetime of a login session
    pub session_ttl: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("TRL_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid TRL_BIND_ADDR format");

        let log_level = env::var("TRL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let session_ttl_secs = env::var("TRL_SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(28_800u64); // 8 hours

        Self {
            bind_addr,
            log_level,
            session_ttl: Duration::from_secs(session_ttl_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("TRL_BIND_ADDR");
        env::remove_var("TRL_LOG_LEVEL");
        env::remove_var("TRL_SESSION_TTL_SECS");

        let config = Config::from_env();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.session_ttl, Duration::from_secs(28_800));
    }
}
