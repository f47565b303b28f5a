use ipgeo_rs::{IpDetails, IpGeo, LookupError};

use crate::domain::ports::geolocation::GeoLocator;

#[derive(Clone)]
pub struct IpGeoRepository {
    ipgeo: IpGeo,
}

impl IpGeoRepository {
    pub fn new(config: ipgeo_rs::Config) -> Result<Self, LookupError> {
        let ipgeo = IpGeo::init(Some(config))?;
        Ok(Self { ipgeo })
    }
}

impl GeoLocator for IpGeoRepository {
    async fn my_ip(&self) -> Option<String> {
        self.ipgeo.my_ip().await
    }

    async fn details(&self, ip: &str) -> Result<IpDetails, LookupError> {
        self.ipgeo.details(ip).await
    }
}
