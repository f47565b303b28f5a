use std::time::Duration;

use anyhow::Context;
use config::{Config as Settings, ConfigError, Environment, File};
use serde::Deserialize;

const ENV_PREFIX: &str = "IP_LOCATOR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub request_timeout_secs: u64,
    pub ipapi_base_url: Option<String>,
    pub ipinfo_base_url: Option<String>,
    #[serde(default)]
    pub self_ip_services: Vec<String>,
}

impl Config {
    /// Reads `.env`, then `config.toml`, then `IP_LOCATOR_*` variables.
    pub fn load() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();

        Self::from_sources(
            Settings::builder()
                .add_source(File::with_name("config.toml").required(false))
                .add_source(environment()),
        )
        .context("Failed to load configuration")
    }

    fn from_sources(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Config, ConfigError> {
        builder
            .set_default("request_timeout_secs", 5)?
            .build()?
            .try_deserialize()
    }

    /// Client settings; unset keys keep the library defaults.
    pub fn client_config(&self) -> ipgeo_rs::Config {
        let defaults = ipgeo_rs::Config::default();
        ipgeo_rs::Config {
            timeout: Duration::from_secs(self.request_timeout_secs),
            self_ip_services: if self.self_ip_services.is_empty() {
                defaults.self_ip_services
            } else {
                self.self_ip_services.clone()
            },
            ipapi_base_url: self
                .ipapi_base_url
                .clone()
                .unwrap_or(defaults.ipapi_base_url),
            ipinfo_base_url: self
                .ipinfo_base_url
                .clone()
                .unwrap_or(defaults.ipinfo_base_url),
        }
    }
}

/// `IP_LOCATOR_*` variables; `self_ip_services` is comma-separated.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("self_ip_services")
}
