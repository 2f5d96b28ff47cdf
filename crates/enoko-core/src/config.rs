use crate::app_config::{AppConfig, DEFAULT_CATALOG_HOST};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require_non_empty = |var: &str| -> Result<String, ConfigError> {
        let raw = lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))?;
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(raw)
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let discord_token = require_non_empty("DISCORD_TOKEN")?;
    let log_level = or_default("ENOKO_LOG_LEVEL", "info");

    let catalog_host = or_default("ENOKO_CATALOG_HOST", DEFAULT_CATALOG_HOST);
    if catalog_host.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "ENOKO_CATALOG_HOST".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let scraper_request_timeout_secs = parse_u64("ENOKO_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = lookup("ENOKO_SCRAPER_USER_AGENT")
        .ok()
        .filter(|ua| !ua.trim().is_empty());

    Ok(AppConfig {
        discord_token,
        log_level,
        catalog_host,
        scraper_request_timeout_secs,
        scraper_user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
