// Start of file: /src/config/environment.rs

// * Environment configuration with a lazily-initialized singleton.
// * Values come from the process environment, plus `.env` outside production.

use std::{borrow::Cow, collections::HashMap, env::VarError};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
// * once_cell for lazy static initialization
use once_cell::sync::Lazy;
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
pub const DEFAULT_TIMEOUT: u64 = 30; // 30 seconds

// * Every key the service reads; nothing else in the environment is touched
const KEYS: [&str; 5] = [
    "ENVIRONMENT",
    "HOST",
    "PORT",
    "MAX_REQUEST_BODY_SIZE",
    "DEFAULT_TIMEOUT_SECONDS",
];

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables from the process (and .env).
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * .env values are already in the process environment at this point
        let mut vars: HashMap<&str, String> = HashMap::new();
        for key in KEYS {
            match std::env::var(key) {
                Ok(value) => {
                    vars.insert(key, value);
                }
                Err(VarError::NotPresent) => {}
                Err(err @ VarError::NotUnicode(_)) => {
                    return Err(err).with_context(|| format!("Invalid {key} value"));
                }
            }
        }

        Self::from_lookup(|key: &str| vars.get(key).map(String::as_str))
    }

    // * Builds the configuration from any key lookup, providing defaults if missing
    pub fn from_lookup<'a, F>(get_var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),
        })
    }

    /// The `host:port` pair the server binds to when no socket is inherited.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    // * Returns a reference to the lazily-initialized environment configuration
    pub fn instance() -> Result<&'static Self> {
        static INSTANCE: Lazy<Result<EnvironmentVariables, String>> = Lazy::new(|| {
            let config: EnvironmentVariables =
                EnvironmentVariables::load().map_err(|err| format!("{err:#}"))?;

            if cfg!(debug_assertions) {
                tracing::debug!("Loaded environment configuration: {:#?}", config);
            }

            Ok(config)
        });

        INSTANCE
            .as_ref()
            .map_err(|err| anyhow::anyhow!("Failed to load environment configuration: {err}"))
    }
}


// End of file: /src/config/environment.rs
