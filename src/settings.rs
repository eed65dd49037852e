//! Environment-driven settings. The binary loads `.env` via dotenvy before
//! calling `Settings::from_env`.

use crate::error::SettingsError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl Settings {
    /// Read settings from the environment. `DATABASE_URL` is required;
    /// `BIND_ADDR` and `MAX_CONNECTIONS` fall back to defaults.
    pub fn from_env() -> Result<Self, SettingsError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| SettingsError::Missing("DATABASE_URL"))?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let max_connections = match std::env::var("MAX_CONNECTIONS") {
            Ok(raw) => raw.parse().map_err(|_| SettingsError::Invalid {
                name: "MAX_CONNECTIONS",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
