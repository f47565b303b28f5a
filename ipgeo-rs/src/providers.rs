use crate::errors::LookupError;
use crate::utils::{fetch_json, JsonObject};
use reqwest::{Client, StatusCode};

pub const IPAPI: &str = "ipapi.co";
pub const IPINFO: &str = "ipinfo.io";

/// Outcome of one provider call. Keeps "no data" apart from "call failed".
#[derive(Debug)]
pub enum ProviderResponse {
    Data(JsonObject),
    Empty(StatusCode),
    Failed(LookupError),
}

impl ProviderResponse {
    pub fn data(&self) -> Option<&JsonObject> {
        match self {
            ProviderResponse::Data(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProviderResponse::Failed(_))
    }
}

/// A geolocation service addressed as `{base_url}/{ip}{suffix}`.
#[derive(Clone)]
pub struct Provider {
    pub name: &'static str,
    pub base_url: String,
    suffix: &'static str,
    client: Client,
}

impl Provider {
    pub fn ipapi(base_url: &str, client: Client) -> Self {
        Self::new(IPAPI, base_url, "/json/", client)
    }

    pub fn ipinfo(base_url: &str, client: Client) -> Self {
        Self::new(IPINFO, base_url, "/json", client)
    }

    fn new(name: &'static str, base_url: &str, suffix: &'static str, client: Client) -> Self {
        Self {
            name,
            base_url: base_url.trim_end_matches('/').to_string(),
            suffix,
            client,
        }
    }

    pub fn url_for(&self, ip: &str) -> String {
        format!("{}/{}{}", self.base_url, ip, self.suffix)
    }

    pub async fn fetch(&self, ip: &str) -> ProviderResponse {
        match fetch_json(&self.client, self.name, &self.url_for(ip)).await {
            Ok(map) => ProviderResponse::Data(map),
            Err(LookupError::ApiError { status, .. }) => ProviderResponse::Empty(status),
            Err(e) => ProviderResponse::Failed(e),
        }
    }
}
