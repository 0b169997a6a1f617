//! Environment-driven application configuration.

use std::{str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

static DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest";
static DEFAULT_REFRESH_CRON: &str = "0 0 */6 * * *";
static DEFAULT_CREDENTIAL_VALIDATION_CRON: &str = "0 30 * * * *";

const DEFAULT_ESI_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REFRESH_WORKER_COUNT: usize = 10;
const DEFAULT_REFRESH_REQUEST_DELAY_MS: u64 = 100;

pub struct Config {
    pub database_url: String,
    pub contact_email: String,
    pub user_agent: String,
    pub esi_url: String,
    pub esi_timeout: Duration,
    pub refresh_worker_count: usize,
    pub refresh_request_delay: Duration,
    pub refresh_cron: String,
    pub credential_validation_cron: String,
    pub deduplicate_cache_misses: bool,
}

impl Config {
    /// Loads configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using the provided variable lookup
    ///
    /// # Arguments
    /// - `lookup` - Returns the value for an environment variable name, `None` when unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String, ConfigError> {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let contact_email = required("CONTACT_EMAIL")?;
        let user_agent = format!(
            "{}/{} ({}; +{})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            contact_email,
            env!("CARGO_PKG_REPOSITORY")
        );

        let refresh_worker_count: usize = parse_or(
            &lookup,
            "REFRESH_WORKER_COUNT",
            DEFAULT_REFRESH_WORKER_COUNT,
        )?;
        if refresh_worker_count == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "REFRESH_WORKER_COUNT".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            contact_email,
            user_agent,
            esi_url: lookup("ESI_URL").unwrap_or_else(|| DEFAULT_ESI_URL.to_string()),
            esi_timeout: Duration::from_secs(parse_or(
                &lookup,
                "ESI_TIMEOUT_SECS",
                DEFAULT_ESI_TIMEOUT_SECS,
            )?),
            refresh_worker_count,
            refresh_request_delay: Duration::from_millis(parse_or(
                &lookup,
                "REFRESH_REQUEST_DELAY_MS",
                DEFAULT_REFRESH_REQUEST_DELAY_MS,
            )?),
            refresh_cron: lookup("REFRESH_CRON").unwrap_or_else(|| DEFAULT_REFRESH_CRON.to_string()),
            credential_validation_cron: lookup("CREDENTIAL_VALIDATION_CRON")
                .unwrap_or_else(|| DEFAULT_CREDENTIAL_VALIDATION_CRON.to_string()),
            deduplicate_cache_misses: parse_or(&lookup, "DEDUPLICATE_CACHE_MISSES", true)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}
