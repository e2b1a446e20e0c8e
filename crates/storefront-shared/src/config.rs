//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl AppConfig {
    /// Loads defaults, `config/default`, `config/{APP_ENV}`, `APP__*` variables, then `PORT`.
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let port = std::env::var("PORT").ok();
        Self::from_sources(&env, port.as_deref())
    }

    pub fn from_sources(env: &str, port: Option<&str>) -> Result<Self, AppError> {
        let port = port.map(parse_port).transpose()?;

        let config = Config::builder()
            .set_default("app.env", env)?
            .set_default("app.name", "restaurant-store-app")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.static_dir", "public")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("APP").separator("__").try_parsing(true))
            .set_override_option("server.port", port.map(i64::from))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn parse_port(value: &str) -> Result<u16, AppError> {
    value.trim().parse::<u16>().map_err(|e| AppError::InvalidPort {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
