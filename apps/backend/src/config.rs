//! Runtime configuration read from the environment

use anyhow::Context;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Upper bound on live study sessions of each kind
    pub max_sessions: usize,
}

impl Config {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    pub const DEFAULT_MAX_SESSIONS: usize = 1024;

    /// Load configuration from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", value))?,
            None => 3000,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is invalid: {}", value))?,
            None => Self::DEFAULT_MAX_CONNECTIONS,
        };

        let max_sessions = match lookup("MAX_SESSIONS") {
            Some(value) => value
                .parse()
                .with_context(|| format!("MAX_SESSIONS is invalid: {}", value))?,
            None => Self::DEFAULT_MAX_SESSIONS,
        };

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            max_sessions,
        })
    }

    /// Address to bind the HTTP listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
