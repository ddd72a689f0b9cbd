//! Portal configuration.
//!
//! The web client cannot read the process environment at runtime, so it uses the values
//! captured at build time by [`Config::compiled`]. Native clients read the environment via
//! [`Config::from_env`].

use crate::error::ConfigError;

/// Housing API used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
/// Login entry point unauthenticated sessions are sent to.
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";

const API_URL_VAR: &str = "HOUSING_API_URL";
const LOGIN_PATH_VAR: &str = "HOUSING_LOGIN_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the housing API, without a trailing slash.
    pub api_url: String,
    /// Path of the login entry point.
    pub login_path: String,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - `HOUSING_API_URL` is set and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `HOUSING_API_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - a variable is set to an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR)
            .ok_or_else(|| ConfigError::MissingEnvVar(API_URL_VAR.to_string()))?;
        let api_url = parse_api_url(&api_url)?;

        let login_path = match lookup(LOGIN_PATH_VAR) {
            Some(path) => parse_login_path(&path)?,
            None => DEFAULT_LOGIN_PATH.to_string(),
        };

        Ok(Self {
            api_url,
            login_path,
        })
    }

    /// Configuration baked into the client at build time.
    ///
    /// Falls back to [`DEFAULT_API_URL`] when `HOUSING_API_URL` was unset or invalid during
    /// the build.
    pub fn compiled() -> Self {
        let api_url = option_env!("HOUSING_API_URL")
            .and_then(|url| parse_api_url(url).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

fn parse_api_url(value: &str) -> Result<String, ConfigError> {
    let value = value.trim();

    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvValue {
            var: API_URL_VAR.to_string(),
            reason: "must start with http:// or https://".to_string(),
        });
    }

    Ok(value.trim_end_matches('/').to_string())
}

fn parse_login_path(value: &str) -> Result<String, ConfigError> {
    let value = value.trim();

    if !value.starts_with('/') {
        return Err(ConfigError::InvalidEnvValue {
            var: LOGIN_PATH_VAR.to_string(),
            reason: "must be an absolute path starting with /".to_string(),
        });
    }

    Ok(value.to_string())
}
