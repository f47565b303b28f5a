use crate::types::Config;
use crate::utils::{fetch_json, non_empty, JsonObject};
use reqwest::Client;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{debug, instrument};

/// Finds the caller's public address through a list of "what is my IP" services.
#[derive(Clone)]
pub struct SelfIpResolver {
    client: Client,
    config: Arc<Config>,
}

impl SelfIpResolver {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    /// Tries each service in order; the first usable answer wins.
    #[cfg_attr(feature = "tracing", instrument(skip(self)))]
    pub async fn resolve(&self) -> Option<String> {
        for service in &self.config.self_ip_services {
            match fetch_json(&self.client, "self-ip service", service).await {
                Ok(body) => match address_from(&body) {
                    Some(ip) => return Some(ip),
                    None => {
                        #[cfg(feature = "tracing")]
                        debug!(%service, "No address in response, trying next service");
                    }
                },
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    debug!(%service, error = %_e, "Service failed, trying next");
                }
            }
        }
        None
    }
}

fn address_from(body: &JsonObject) -> Option<String> {
    ["ip", "query"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find_map(|value| value.as_str().and_then(|_| non_empty(value)))
}
