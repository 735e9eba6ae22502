use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "VICINITY_ENV"));
}

#[test]
fn build_app_config_succeeds_on_a_bare_environment() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.categories_path.to_string_lossy(),
        "./config/categories.yaml"
    );
    assert_eq!(cfg.location_timeout_secs, 10);
    assert!(cfg.feed_base_url.is_none());
    assert_eq!(cfg.feed_poll_interval_secs, 30);
    assert_eq!(cfg.feed_request_timeout_secs, 10);
    assert_eq!(cfg.feed_user_agent, "vicinity/0.1 (proximity-core)");
    assert_eq!(cfg.feed_max_retries, 3);
    assert_eq!(cfg.feed_retry_backoff_base_ms, 500);
}

#[test]
fn build_app_config_fails_on_invalid_vicinity_env() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VICINITY_ENV"),
        "expected InvalidEnvVar(VICINITY_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_picks_up_feed_base_url() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_BASE_URL", "https://feed.example.com/api");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.feed_base_url.as_deref(),
        Some("https://feed.example.com/api")
    );
}

#[test]
fn location_timeout_secs_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_LOCATION_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.location_timeout_secs, 5);
}

#[test]
fn location_timeout_secs_invalid() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_LOCATION_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VICINITY_LOCATION_TIMEOUT_SECS"),
        "expected InvalidEnvVar(VICINITY_LOCATION_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn location_timeout_secs_rejects_zero() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_LOCATION_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VICINITY_LOCATION_TIMEOUT_SECS"),
        "expected InvalidEnvVar(VICINITY_LOCATION_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn feed_poll_interval_secs_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_POLL_INTERVAL_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_poll_interval_secs, 60);
}

#[test]
fn feed_poll_interval_secs_invalid() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_POLL_INTERVAL_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VICINITY_FEED_POLL_INTERVAL_SECS"),
        "expected InvalidEnvVar(VICINITY_FEED_POLL_INTERVAL_SECS), got: {result:?}"
    );
}

#[test]
fn feed_poll_interval_secs_rejects_zero() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_POLL_INTERVAL_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VICINITY_FEED_POLL_INTERVAL_SECS"),
        "expected InvalidEnvVar(VICINITY_FEED_POLL_INTERVAL_SECS), got: {result:?}"
    );
}

#[test]
fn feed_request_timeout_secs_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_REQUEST_TIMEOUT_SECS", "20");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_request_timeout_secs, 20);
}

#[test]
fn feed_request_timeout_secs_invalid() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VICINITY_FEED_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(VICINITY_FEED_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn feed_user_agent_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_user_agent, "custom-agent/2.0");
}

#[test]
fn feed_max_retries_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_MAX_RETRIES", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_max_retries, 5);
}

#[test]
fn feed_max_retries_invalid() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VICINITY_FEED_MAX_RETRIES"),
        "expected InvalidEnvVar(VICINITY_FEED_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn feed_retry_backoff_base_ms_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_RETRY_BACKOFF_BASE_MS", "250");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_retry_backoff_base_ms, 250);
}

#[test]
fn feed_retry_backoff_base_ms_invalid() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VICINITY_FEED_RETRY_BACKOFF_BASE_MS", "half-a-second");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VICINITY_FEED_RETRY_BACKOFF_BASE_MS"),
        "expected InvalidEnvVar(VICINITY_FEED_RETRY_BACKOFF_BASE_MS), got: {result:?}"
    );
}

#[test]
fn environment_display() {
    assert_eq!(Environment::Development.to_string(), "development");
    assert_eq!(Environment::Test.to_string(), "test");
    assert_eq!(Environment::Production.to_string(), "production");
}
