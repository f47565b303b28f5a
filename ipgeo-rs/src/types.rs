use std::time::Duration;

use serde::Serialize;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub const ACCURACY_NOTE: &str = "medium (city/district)";

pub const NO_HOSTING_DATA: &str = "no data";

#[derive(Debug, Clone)]
pub struct Config {
    pub timeout: Duration,
    /// "What is my IP" endpoints, tried in order.
    pub self_ip_services: Vec<String>,
    pub ipapi_base_url: String,
    pub ipinfo_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            self_ip_services: vec![
                "https://api.ipify.org?format=json".to_string(),
                "https://api.myip.com".to_string(),
                "https://ipinfo.io/json".to_string(),
                "https://api.ip.sb/jsonip".to_string(),
            ],
            ipapi_base_url: "https://ipapi.co".to_string(),
            ipinfo_base_url: "https://ipinfo.io".to_string(),
        }
    }
}

/// Merged view of one address, built fresh for every lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IpDetails {
    pub ip: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub organization: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub timezone: Option<String>,
    pub postal_code: Option<String>,
    pub accuracy: String,
    pub asn: Option<String>,
    pub hosting: String,
}

impl IpDetails {
    /// Labelled fields in display order. Absent and empty values are skipped.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let fields = [
            ("ip", Some(self.ip.as_str())),
            ("city", self.city.as_deref()),
            ("region", self.region.as_deref()),
            ("country", self.country.as_deref()),
            ("organization", self.organization.as_deref()),
            ("latitude", self.latitude.as_deref()),
            ("longitude", self.longitude.as_deref()),
            ("timezone", self.timezone.as_deref()),
            ("postal code", self.postal_code.as_deref()),
            ("accuracy", Some(self.accuracy.as_str())),
            ("AS number", self.asn.as_deref()),
            ("hosting", Some(self.hosting.as_str())),
        ];
        fields
            .into_iter()
            .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
            .collect()
    }

    pub fn is_hosting(&self) -> bool {
        self.hosting == "true"
    }
}
