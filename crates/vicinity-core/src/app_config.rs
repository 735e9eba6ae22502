use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration, sourced from `VICINITY_*` environment variables.
///
/// Every field has a default; the config never fails to load on a bare
/// environment, only on values that fail to parse.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub categories_path: PathBuf,
    pub location_timeout_secs: u64,
    pub feed_base_url: Option<String>,
    pub feed_poll_interval_secs: u64,
    pub feed_request_timeout_secs: u64,
    pub feed_user_agent: String,
    pub feed_max_retries: u32,
    pub feed_retry_backoff_base_ms: u64,
}
