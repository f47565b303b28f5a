use ipgeo_rs::{IpDetails, LookupError, MapLinks};
use std::future::Future;

pub trait GeoLocator: Send + Sync + 'static {
    fn my_ip(&self) -> impl Future<Output = Option<String>> + Send;
    fn details(&self, ip: &str) -> impl Future<Output = Result<IpDetails, LookupError>> + Send;
    fn map_links(&self, details: &IpDetails) -> Option<MapLinks> {
        MapLinks::from_details(details)
    }
}
