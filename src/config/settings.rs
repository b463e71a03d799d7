//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_DATABASE_URL, DEFAULT_IMPORT_BATCH_SIZE,
    DEFAULT_SCAN_MIN_LENGTH, DEFAULT_SCAN_TIMEOUT_MS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub allowed_origins: Vec<String>,
    /// Accept any password once the employee id matches
    pub relaxed_login: bool,
    pub scan_timeout_ms: u64,
    pub scan_min_length: usize,
    pub import_batch_size: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("allowed_origins", &self.allowed_origins)
            .field("relaxed_login", &self.relaxed_login)
            .field("scan_timeout_ms", &self.scan_timeout_ms)
            .field("scan_min_length", &self.scan_min_length)
            .field("import_batch_size", &self.import_batch_size)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
            relaxed_login: false,
            scan_timeout_ms: DEFAULT_SCAN_TIMEOUT_MS,
            scan_min_length: DEFAULT_SCAN_MIN_LENGTH,
            import_batch_size: DEFAULT_IMPORT_BATCH_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let relaxed_login = env_flag("AUTH_RELAXED_LOGIN");
        if relaxed_login {
            tracing::warn!(
                "AUTH_RELAXED_LOGIN is enabled: any password is accepted for a known employee id"
            );
        }

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: env_parse("SERVER_PORT").unwrap_or(defaults.server_port),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.allowed_origins),
            relaxed_login,
            scan_timeout_ms: env_parse("SCAN_TIMEOUT_MS").unwrap_or(defaults.scan_timeout_ms),
            scan_min_length: env_parse("SCAN_MIN_LENGTH").unwrap_or(defaults.scan_min_length),
            import_batch_size: env_parse::<usize>("IMPORT_BATCH_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.import_batch_size),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Split a comma separated origin list, dropping blanks
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
