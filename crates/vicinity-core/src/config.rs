use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var carries a value that fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Useful for
/// testing or when the caller manages env setup itself.
///
/// # Errors
///
/// Returns `ConfigError` if any env var carries a value that fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Holds the parsing and validation logic, decoupled from the real environment
/// so tests can drive it with a plain `HashMap` lookup instead of `set_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("VICINITY_ENV", "development"))?;

    let log_level = or_default("VICINITY_LOG_LEVEL", "info");
    let categories_path = PathBuf::from(or_default(
        "VICINITY_CATEGORIES_PATH",
        "./config/categories.yaml",
    ));

    let location_timeout_secs = parse_u64("VICINITY_LOCATION_TIMEOUT_SECS", "10")?;

    let feed_base_url = lookup("VICINITY_FEED_BASE_URL").ok();
    let feed_poll_interval_secs = parse_u64("VICINITY_FEED_POLL_INTERVAL_SECS", "30")?;
    let feed_request_timeout_secs = parse_u64("VICINITY_FEED_REQUEST_TIMEOUT_SECS", "10")?;
    let feed_user_agent = or_default("VICINITY_FEED_USER_AGENT", "vicinity/0.1 (proximity-core)");
    let feed_max_retries = parse_u32("VICINITY_FEED_MAX_RETRIES", "3")?;
    let feed_retry_backoff_base_ms = parse_u64("VICINITY_FEED_RETRY_BACKOFF_BASE_MS", "500")?;

    if feed_poll_interval_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VICINITY_FEED_POLL_INTERVAL_SECS".to_string(),
            reason: "poll interval must be at least 1 second".to_string(),
        });
    }

    if location_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VICINITY_LOCATION_TIMEOUT_SECS".to_string(),
            reason: "acquisition timeout must be at least 1 second".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        categories_path,
        location_timeout_secs,
        feed_base_url,
        feed_poll_interval_secs,
        feed_request_timeout_secs,
        feed_user_agent,
        feed_max_retries,
        feed_retry_backoff_base_ms,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VICINITY_ENV".to_string(),
            reason: format!("unrecognized environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
