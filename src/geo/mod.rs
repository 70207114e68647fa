pub mod nominatim;

use async_trait::async_trait;
use log::warn;
use thiserror::Error;

pub use nominatim::Nominatim;

/// A resolved place: coordinates plus the provider's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("geocoding service returned status {0}")]
    Status(u16),

    #[error("no match for {0:?}")]
    NotFound(String),

    #[error("unexpected geocoding payload: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// First match for a free-text query.
    async fn search(&self, query: &str) -> Result<Place, GeocodeError>;

    /// Like [`Geocoder::search`], with every failure reduced to `None`.
    async fn lookup(&self, query: &str) -> Option<Place> {
        match self.search(query).await {
            Ok(place) => Some(place),
            Err(e) => {
                warn!("location lookup for {query:?} failed: {e}");
                None
            }
        }
    }
}
