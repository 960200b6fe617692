use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::info;

use crate::models::auth::Role;
use crate::validation::Choice;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub default_role: Role,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bcrypt_cost: u32 = try_load(&lookup, "BCRYPT_COST", "10")?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }

        let role = lookup("DEFAULT_USER_ROLE").unwrap_or_else(|| Role::default().as_str().to_string());
        let default_role = Role::parse(role.trim()).ok_or_else(|| ConfigError::Invalid {
            key: "DEFAULT_USER_ROLE",
            value: role.clone(),
            reason: "expected entrepreneur, investor or admin".to_string(),
        })?;

        Ok(Self {
            database_url,
            host: try_load(&lookup, "HOST", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "5000")?,
            bcrypt_cost,
            default_role,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        value,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/investmatch")]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.default_role, Role::Entrepreneur);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_missing_database_url() {
        let err = config_from(&[("PORT", "8080")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_bcrypt_cost_range_and_role() {
        let err = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("BCRYPT_COST", "40")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BCRYPT_COST", .. }));

        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DEFAULT_USER_ROLE", "investor"),
        ])
        .unwrap();
        assert_eq!(config.default_role, Role::Investor);

        let err = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("DEFAULT_USER_ROLE", "user")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DEFAULT_USER_ROLE", .. }));
    }
}
