use crate::errors::LookupError;
use crate::maps::MapLinks;
use crate::merge::merge;
use crate::providers::{Provider, ProviderResponse};
use crate::resolver::SelfIpResolver;
use crate::types::{Config, IpDetails};
use reqwest::Client;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{instrument, warn};

#[derive(Clone)]
pub struct IpGeo {
    pub config: Arc<Config>,
    pub resolver: SelfIpResolver,
    pub ipapi: Provider,
    pub ipinfo: Provider,
}

impl IpGeo {
    /// Every outbound call shares one client carrying `config.timeout`.
    pub fn init(config: Option<Config>) -> Result<Self, LookupError> {
        let config = Arc::new(config.unwrap_or_default());
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            resolver: SelfIpResolver::new(client.clone(), config.clone()),
            ipapi: Provider::ipapi(&config.ipapi_base_url, client.clone()),
            ipinfo: Provider::ipinfo(&config.ipinfo_base_url, client),
            config,
        })
    }

    pub async fn my_ip(&self) -> Option<String> {
        self.resolver.resolve().await
    }

    /// Queries ipapi.co then ipinfo.io and merges their answers field by field.
    ///
    /// Fails only when neither provider produced data and at least one of
    /// them could not be reached or decoded.
    #[cfg_attr(feature = "tracing", instrument(skip(self)))]
    pub async fn details(&self, ip: &str) -> Result<IpDetails, LookupError> {
        let responses = [self.ipapi.fetch(ip).await, self.ipinfo.fetch(ip).await];

        let no_data = responses.iter().all(|r| r.data().is_none());
        if no_data && responses.iter().any(ProviderResponse::is_failed) {
            let reasons = [&self.ipapi, &self.ipinfo]
                .iter()
                .zip(&responses)
                .map(|(provider, response)| describe(provider.name, response))
                .collect::<Vec<_>>()
                .join("; ");
            #[cfg(feature = "tracing")]
            warn!(%reasons, "No provider returned data");
            return Err(LookupError::NoData {
                ip: ip.to_string(),
                reasons,
            });
        }

        Ok(merge(ip, responses[0].data(), responses[1].data()))
    }

    /// Map links for the address, or `None` when coordinates are unavailable.
    pub async fn map_links(&self, ip: &str) -> Option<MapLinks> {
        let details = self.details(ip).await.ok()?;
        MapLinks::from_details(&details)
    }
}

fn describe(provider: &str, response: &ProviderResponse) -> String {
    match response {
        ProviderResponse::Data(_) => format!("{provider}: ok"),
        ProviderResponse::Empty(status) => format!("{provider}: status {status}"),
        ProviderResponse::Failed(e) => format!("{provider}: {e}"),
    }
}
