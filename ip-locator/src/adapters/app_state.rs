use std::sync::Arc;

use crate::{
    application::services::lookup_service::LookupService, config::Config,
    domain::errors::AppError, infrastructure::repository::ipgeo_repository::IpGeoRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub lookup_service: Arc<LookupService<IpGeoRepository>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let repo = IpGeoRepository::new(config.client_config())?;
        Ok(Self {
            config,
            lookup_service: Arc::new(LookupService::new(repo)),
        })
    }
}
