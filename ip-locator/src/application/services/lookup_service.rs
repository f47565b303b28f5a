use ipgeo_rs::{IpDetails, LookupError, MapLinks};

use crate::domain::ports::geolocation::GeoLocator;

/// Everything shown for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub details: IpDetails,
    pub links: Option<MapLinks>,
}

#[derive(Clone)]
pub struct LookupService<R: GeoLocator> {
    repo: R,
}

impl<R: GeoLocator> LookupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
    pub async fn my_ip(&self) -> Option<String> {
        self.repo.my_ip().await
    }
    pub async fn report(&self, ip: &str) -> Result<Report, LookupError> {
        let details = self.repo.details(ip).await?;
        let links = self.repo.map_links(&details);
        tracing::debug!(%ip, has_links = links.is_some(), "Lookup complete");
        Ok(Report { details, links })
    }
    #[cfg(test)]
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
