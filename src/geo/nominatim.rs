use async_trait::async_trait;
use log::{debug, info};
use reqwest::Url;
use serde::Deserialize;

use super::{GeocodeError, Geocoder, Place};
use crate::utils::config::GeocodingConfig;

/// OpenStreetMap Nominatim search client.
pub struct Nominatim {
    endpoint: String,
    user_agent: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

impl Nominatim {
    pub fn new(config: &GeocodingConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            user_agent: config.user_agent.clone(),
            client: reqwest::Client::new(),
        }
    }

    fn search_url(&self, query: &str) -> Result<Url, GeocodeError> {
        Url::parse_with_params(
            &self.endpoint,
            &[("q", query), ("format", "json"), ("limit", "1")],
        )
        .map_err(|e| GeocodeError::Malformed(format!("bad endpoint {}: {}", self.endpoint, e)))
    }
}

#[async_trait]
impl Geocoder for Nominatim {
    async fn search(&self, query: &str) -> Result<Place, GeocodeError> {
        info!("geocoding {query:?}");

        let response = self
            .client
            .get(self.search_url(query)?)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let hits: Vec<SearchHit> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Malformed(e.to_string()))?;

        let hit = hits
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;

        let latitude = hit
            .lat
            .parse::<f64>()
            .map_err(|_| GeocodeError::Malformed(format!("latitude {:?}", hit.lat)))?;
        let longitude = hit
            .lon
            .parse::<f64>()
            .map_err(|_| GeocodeError::Malformed(format!("longitude {:?}", hit.lon)))?;

        let place = Place {
            latitude,
            longitude,
            display_name: hit.display_name.unwrap_or_else(|| query.to_string()),
        };
        debug!("resolved {query:?} to {place:?}");

        Ok(place)
    }
}
