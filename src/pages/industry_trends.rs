use chrono::{DateTime, Local};
use log::info;

use super::map::ensure_located;
use super::{Coach, PageError};
use crate::chat::prompts::INDUSTRY_TRENDS;
use crate::models::session::MapPageState;

pub const MAP_ZOOM: u8 = 12;
pub const TIMESTAMP_FORMAT: &str = "%A, %d %B %Y %I:%M %p";

/// Fetches an industry-trend analysis around the selected position.
pub async fn fetch(
    coach: &Coach,
    state: &MapPageState,
    now: DateTime<Local>,
) -> Result<MapPageState, PageError> {
    ensure_located(state)?;
    info!("fetching industry trends around {}", state.address);

    let report = coach
        .ask(
            &INDUSTRY_TRENDS,
            &[
                ("latitude", &state.latitude.to_string()),
                ("longitude", &state.longitude.to_string()),
            ],
        )
        .await?;

    Ok(state.with_report(report, now))
}
