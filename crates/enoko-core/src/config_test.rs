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

/// Returns a map with all required env vars populated with valid values.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("DISCORD_TOKEN", "test-token");
    m
}

#[test]
fn build_app_config_fails_without_discord_token() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "DISCORD_TOKEN"),
        "expected MissingEnvVar(DISCORD_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_blank_discord_token() {
    let mut map = full_env();
    map.insert("DISCORD_TOKEN", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DISCORD_TOKEN"),
        "expected InvalidEnvVar(DISCORD_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.discord_token, "test-token");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_host, "www.hpoi.net");
    assert_eq!(cfg.scraper_request_timeout_secs, 30);
    assert!(cfg.scraper_user_agent.is_none());
}

#[test]
fn log_level_override() {
    let mut map = full_env();
    map.insert("ENOKO_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn catalog_host_override() {
    let mut map = full_env();
    map.insert("ENOKO_CATALOG_HOST", "hpoi.example.test");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.catalog_host, "hpoi.example.test");
}

#[test]
fn catalog_host_blank_fails() {
    let mut map = full_env();
    map.insert("ENOKO_CATALOG_HOST", "");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENOKO_CATALOG_HOST"),
        "expected InvalidEnvVar(ENOKO_CATALOG_HOST), got: {result:?}"
    );
}

#[test]
fn scraper_request_timeout_secs_override() {
    let mut map = full_env();
    map.insert("ENOKO_SCRAPER_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scraper_request_timeout_secs, 5);
}

#[test]
fn scraper_request_timeout_secs_invalid() {
    let mut map = full_env();
    map.insert("ENOKO_SCRAPER_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENOKO_SCRAPER_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ENOKO_SCRAPER_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn scraper_user_agent_override() {
    let mut map = full_env();
    map.insert("ENOKO_SCRAPER_USER_AGENT", "enoko-test/1.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scraper_user_agent.as_deref(), Some("enoko-test/1.0"));
}

#[test]
fn scraper_user_agent_blank_is_ignored() {
    let mut map = full_env();
    map.insert("ENOKO_SCRAPER_USER_AGENT", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.scraper_user_agent.is_none());
}

#[test]
fn debug_output_redacts_token() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-token"), "token leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
