// src/common/config.rs
//! Runtime configuration loaded from the environment, with CLI overrides

use std::env;
use tracing::warn;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_ENV: &str = "development";
const DEFAULT_MAX_BODY_BYTES: usize = 1_048_576;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub env: String,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            env: DEFAULT_ENV.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_or_default(&lookup, "PORT", defaults.port);
        let env = lookup("APP_ENV")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.env);
        let max_body_bytes = parse_or_default(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes);

        Self {
            port,
            env,
            max_body_bytes,
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {} value '{}', using default {}", key, raw, default);
            default
        }),
        None => default,
    }
}

/// Override config values from CLI args (`--port=<n>`, `--env=<name>`)
pub fn apply_cli_override<I>(mut config: Config, args: I) -> Config
where
    I: IntoIterator<Item = String>,
{
    for arg in args {
        if let Some(port) = arg.strip_prefix("--port=") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid --port value '{}'", port),
            }
        } else if let Some(env_name) = arg.strip_prefix("--env=") {
            if !env_name.is_empty() {
                config.env = env_name.to_string();
            }
        }
    }

    config
}
