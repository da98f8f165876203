use crate::domain::air_quality::{Naaqs, NAAQS_PM25};
use config::builder::{ConfigBuilder, DefaultState};
use config::ConfigError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub charts: ChartSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    /// Threshold set used when a request doesn't name one
    pub naaqs: Naaqs,
    /// Category bar width in pixels
    pub bar_width: f64,
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("charts.naaqs", NAAQS_PM25)?
        .set_default("charts.bar_width", 6.0)
}

/// Defaults, then `config/service.toml` if present, then `PM25_DIURNAL__*` variables
pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = with_defaults()?
        .add_source(config::File::with_name("config/service").required(false))
        .add_source(config::Environment::with_prefix("PM25_DIURNAL").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
