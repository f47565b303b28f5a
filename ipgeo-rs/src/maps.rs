use serde::Serialize;

use crate::types::IpDetails;

/// Map provider name paired with a ready-to-open URL, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLinks(Vec<(&'static str, String)>);

impl MapLinks {
    /// Returns `None` unless both coordinates are present.
    pub fn from_details(details: &IpDetails) -> Option<Self> {
        match (details.latitude.as_deref(), details.longitude.as_deref()) {
            (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => {
                Some(Self::for_coordinates(lat, lon))
            }
            _ => None,
        }
    }

    pub fn for_coordinates(lat: &str, lon: &str) -> Self {
        Self(vec![
            ("Google Maps", format!("https://www.google.com/maps?q={lat},{lon}")),
            (
                "OpenStreetMap",
                format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}&zoom=12"),
            ),
            // Yandex takes longitude first.
            ("Yandex Maps", format!("https://yandex.ru/maps/?ll={lon},{lat}&z=12")),
        ])
    }

    pub fn get(&self, provider: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == provider)
            .map(|(_, url)| url.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, url)| (*name, url.as_str()))
    }
}
