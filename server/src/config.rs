//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_DEV_USER_NAME: &str = "Developer";
pub const DEFAULT_DEV_PROJECT_ID: &str = "demo";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid BIND_HOST: {0:?}")]
    InvalidBindHost(String),
    #[error("invalid boolean for {key}: {value:?}")]
    InvalidToggle { key: String, value: String },
}

/// Fixed identity answered by `/api/auth/me` when the development session is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevSession {
    pub user_name: String,
    pub project_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_host: IpAddr,
    pub port: u16,
    pub dev_session: Option<DevSession>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_HOST`: default `0.0.0.0`
    /// - `DEV_SESSION`: boolean, default off
    /// - `DEV_USER_NAME`: default `Developer`
    /// - `DEV_PROJECT_ID`: default `demo`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an unparsable port, host, or toggle.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an unparsable port, host, or toggle.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let raw_host = lookup("BIND_HOST").unwrap_or_else(|| DEFAULT_BIND_HOST.to_owned());
        let bind_host = raw_host.trim().parse().map_err(|_| ConfigError::InvalidBindHost(raw_host.clone()))?;

        let dev_enabled = match lookup("DEV_SESSION") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidToggle { key: "DEV_SESSION".into(), value: raw.clone() })?,
            None => false,
        };
        let dev_session = dev_enabled.then(|| DevSession {
            user_name: lookup("DEV_USER_NAME").unwrap_or_else(|| DEFAULT_DEV_USER_NAME.to_owned()),
            project_id: lookup("DEV_PROJECT_ID").unwrap_or_else(|| DEFAULT_DEV_PROJECT_ID.to_owned()),
        });

        Ok(Self { bind_host, port, dev_session })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_host: IpAddr::from([0, 0, 0, 0]), port: DEFAULT_PORT, dev_session: None }
    }
}

/// `1/true/yes/on` and `0/false/no/off`, case-insensitive.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
