use std::sync::Mutex;

use ipgeo_rs::{IpDetails, LookupError};

use crate::domain::ports::geolocation::GeoLocator;

/// In-memory locator that echoes the requested address back.
pub struct FakeLocator {
    my_ip: Option<String>,
    requests: Mutex<Vec<String>>,
}

impl FakeLocator {
    pub fn new(my_ip: Option<&str>) -> Self {
        Self {
            my_ip: my_ip.map(str::to_owned),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl GeoLocator for FakeLocator {
    async fn my_ip(&self) -> Option<String> {
        self.my_ip.clone()
    }

    async fn details(&self, ip: &str) -> Result<IpDetails, LookupError> {
        self.requests.lock().unwrap().push(ip.to_string());
        Ok(IpDetails {
            ip: ip.to_string(),
            accuracy: "medium (city/district)".into(),
            hosting: "no data".into(),
            ..Default::default()
        })
    }
}
