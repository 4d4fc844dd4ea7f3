use std::env;
use std::time::Duration;

/// S3 SigV4 pre-signed URLs cannot outlive one week.
pub const MAX_SIGNED_URL_EXPIRATION_SECS: u64 = 604_800;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has invalid value `{value}`: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Process-wide settings, read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub groups_table: String,
    pub images_table: String,
    pub images_bucket: String,
    pub signed_url_expiration: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(ConfigError::Missing(name)),
            }
        };

        let groups_table = required("GROUPS_TABLE")?;
        let images_table = required("IMAGES_TABLE")?;
        let images_bucket = required("IMAGES_S3_BUCKET")?;

        let raw_expiration = required("SIGNED_URL_EXPIRATION")?;
        let secs: u64 = raw_expiration
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                name: "SIGNED_URL_EXPIRATION",
                value: raw_expiration.clone(),
                reason: e.to_string(),
            })?;

        if secs == 0 || secs > MAX_SIGNED_URL_EXPIRATION_SECS {
            return Err(ConfigError::Invalid {
                name: "SIGNED_URL_EXPIRATION",
                value: raw_expiration,
                reason: format!("must be between 1 and {} seconds", MAX_SIGNED_URL_EXPIRATION_SECS),
            });
        }

        Ok(Self {
            groups_table,
            images_table,
            images_bucket,
            signed_url_expiration: Duration::from_secs(secs),
        })
    }
}
