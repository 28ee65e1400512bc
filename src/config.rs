use std::path::PathBuf;

use serde::Deserialize;

use crate::db::DEFAULT_REGISTRATION_FEE;
use crate::error::{AppError, AppResult};

/// Prefix for every environment variable read by [`Config::from_env`]
pub const ENV_PREFIX: &str = "AFTERFLIX_";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Flat file holding one user record per line
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,

    /// Membership fee charged to newly registered accounts
    #[serde(default = "default_registration_fee")]
    pub registration_fee: f64,
}

fn default_users_file() -> PathBuf {
    PathBuf::from("users.txt")
}

fn default_registration_fee() -> f64 {
    DEFAULT_REGISTRATION_FEE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_file: default_users_file(),
            registration_fee: default_registration_fee(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.users_file, PathBuf::from("users.txt"));
        assert_eq!(config.registration_fee, 9.99);
    }

    #[test]
    fn test_overrides_from_prefixed_vars() {
        let config = Config::from_vars(vars(&[
            ("AFTERFLIX_USERS_FILE", "/tmp/members.txt"),
            ("AFTERFLIX_REGISTRATION_FEE", "12.5"),
        ]))
        .unwrap();
        assert_eq!(config.users_file, PathBuf::from("/tmp/members.txt"));
        assert_eq!(config.registration_fee, 12.5);
    }

    #[test]
    fn test_bad_fee_is_config_error() {
        let result = Config::from_vars(vars(&[("AFTERFLIX_REGISTRATION_FEE", "free")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
