use chrono::{DateTime, Local};
use log::info;

use super::map::ensure_located;
use super::{Coach, PageError};
use crate::chat::prompts::GLOBAL_INSIGHTS;
use crate::models::session::MapPageState;

pub const MAP_ZOOM: u8 = 6;
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fetches a job-market report for the selected position.
pub async fn fetch(
    coach: &Coach,
    state: &MapPageState,
    now: DateTime<Local>,
) -> Result<MapPageState, PageError> {
    ensure_located(state)?;
    info!("fetching global insights for {}", state.address);

    let report = coach
        .ask(
            &GLOBAL_INSIGHTS,
            &[
                ("location", &state.address),
                ("latitude", &state.latitude.to_string()),
                ("longitude", &state.longitude.to_string()),
            ],
        )
        .await?;

    Ok(state.with_report(report, now))
}
