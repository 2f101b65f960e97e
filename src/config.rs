use crate::error::ConfigError;
use crate::market::SEARCH_URL;
use reqwest::Url;
use std::time::Duration;

pub const WEBHOOK_URL_VAR: &str = "DISCORD_WEBHOOK_URL";
pub const API_URL_VAR: &str = "P2P_API_URL";
pub const TIMEOUT_VAR: &str = "HTTP_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Process-wide settings, loaded once before any network activity.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: Url,
    pub api_url: Url,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let webhook_url = var(WEBHOOK_URL_VAR).ok_or(ConfigError::MissingVar {
            name: WEBHOOK_URL_VAR,
        })?;
        let webhook_url = parse_url(WEBHOOK_URL_VAR, &webhook_url)?;

        let api_url = parse_url(
            API_URL_VAR,
            &var(API_URL_VAR).unwrap_or_else(|| SEARCH_URL.to_string()),
        )?;

        let timeout = match var(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidValue {
                        name: TIMEOUT_VAR,
                        reason: e.to_string(),
                    }
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        name: TIMEOUT_VAR,
                        reason: "must be at least 1 second".into(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            webhook_url,
            api_url,
            timeout,
        })
    }
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        name,
        reason: e.to_string(),
    })
}
