use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::geo::Place;
use crate::models::choices::InterviewKind;

pub const DEFAULT_LATITUDE: f64 = 28.6139;
pub const DEFAULT_LONGITUDE: f64 = 77.2090;
pub const DEFAULT_ADDRESS: &str = "New Delhi, India";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub global_insights: MapPageState,
    #[serde(default)]
    pub industry_trends: MapPageState,
    #[serde(default)]
    pub interview: InterviewState,
}

/// Selected position and last report of a map-driven page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPageState {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    /// Set once a search or a map pick has chosen a position.
    pub located: bool,
    pub report: String,
    pub last_updated: Option<DateTime<Local>>,
}

impl Default for MapPageState {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            address: DEFAULT_ADDRESS.to_string(),
            located: false,
            report: String::new(),
            last_updated: None,
        }
    }
}

impl MapPageState {
    pub fn with_place(&self, place: &Place) -> Self {
        Self {
            latitude: place.latitude,
            longitude: place.longitude,
            address: place.display_name.clone(),
            located: true,
            ..self.clone()
        }
    }

    /// Equivalent of clicking the map at a coordinate.
    pub fn with_pick(&self, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            address: format!("Lat: {latitude:.5}, Lon: {longitude:.5}"),
            located: true,
            ..self.clone()
        }
    }

    pub fn with_report(&self, report: String, at: DateTime<Local>) -> Self {
        Self {
            report,
            last_updated: Some(at),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterviewState {
    pub kind: Option<InterviewKind>,
    pub questions: Vec<String>,
    pub started_at: Option<DateTime<Local>>,
    pub feedback: Option<String>,
}
