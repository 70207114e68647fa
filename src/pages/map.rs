//! Position selection shared by the map-driven pages.

use chrono::{DateTime, Local};
use log::info;

use super::{Coach, PageError, global_insights, industry_trends, required};
use crate::models::session::MapPageState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPage {
    GlobalInsights,
    IndustryTrends,
}

/// What one run of a map page asked for, applied in field order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapSteps<'a> {
    pub search: Option<&'a str>,
    pub pick: Option<(f64, f64)>,
    pub fetch: bool,
}

/// Moves the page to the first geocoding match for `query`. On failure the
/// previous position stays as it was.
pub async fn search(
    coach: &Coach,
    state: &MapPageState,
    query: &str,
) -> Result<MapPageState, PageError> {
    let query = required(query, "Please enter a location to search for.")?;

    let place = coach
        .geocoder()
        .lookup(query)
        .await
        .ok_or_else(|| PageError::LocationNotFound(query.to_string()))?;

    info!("location set to {} ({}, {})", place.display_name, place.latitude, place.longitude);
    Ok(state.with_place(&place))
}

/// Moves the page to a picked coordinate.
pub fn pick(state: &MapPageState, latitude: f64, longitude: f64) -> Result<MapPageState, PageError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(PageError::Validation(format!(
            "({latitude}, {longitude}) is not a valid coordinate."
        )));
    }

    Ok(state.with_pick(latitude, longitude))
}

/// Runs search, pick and fetch in that order. The first failing step stops the
/// run; the state reached before it is returned together with the error.
pub async fn update(
    coach: &Coach,
    state: &MapPageState,
    steps: MapSteps<'_>,
    page: MapPage,
    now: DateTime<Local>,
) -> (MapPageState, Option<PageError>) {
    let mut current = state.clone();

    if let Some(query) = steps.search {
        match search(coach, &current, query).await {
            Ok(next) => current = next,
            Err(e) => return (current, Some(e)),
        }
    }

    if let Some((latitude, longitude)) = steps.pick {
        match pick(&current, latitude, longitude) {
            Ok(next) => current = next,
            Err(e) => return (current, Some(e)),
        }
    }

    if steps.fetch {
        let fetched = match page {
            MapPage::GlobalInsights => global_insights::fetch(coach, &current, now).await,
            MapPage::IndustryTrends => industry_trends::fetch(coach, &current, now).await,
        };
        match fetched {
            Ok(next) => current = next,
            Err(e) => return (current, Some(e)),
        }
    }

    (current, None)
}

pub(crate) fn ensure_located(state: &MapPageState) -> Result<(), PageError> {
    if !state.located {
        return Err(PageError::Validation(
            "Please select or search a location.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::chat::gateway::ServiceError;
    use crate::pages::fakes::{FixedGeocoder, ScriptedService, coach};

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    fn reported() -> MapPageState {
        MapPageState::default().with_report("earlier report".to_string(), noon())
    }

    fn tokyo() -> FixedGeocoder {
        FixedGeocoder::default().with("Tokyo", 35.6769, 139.7639, "Tokyo, Japan")
    }

    #[tokio::test]
    async fn failed_fetch_keeps_searched_position_and_old_report() {
        let service = ScriptedService::failing(500, "upstream exploded");
        let coach = coach(&service, &tokyo());
        let steps = MapSteps {
            search: Some("Tokyo"),
            fetch: true,
            ..MapSteps::default()
        };

        let (state, error) = update(&coach, &reported(), steps, MapPage::GlobalInsights, noon()).await;

        assert!(matches!(error, Some(PageError::Service(ServiceError::Api { status: 500, .. }))));
        assert_eq!(state.address, "Tokyo, Japan");
        assert!(state.located);
        assert_eq!(state.report, "earlier report");
        assert_eq!(state.last_updated, Some(noon()));
        assert_eq!(service.requests().len(), 1);
    }

    #[tokio::test]
    async fn failed_search_skips_fetch_and_keeps_state() {
        let service = ScriptedService::replying("unused");
        let coach = coach(&service, &tokyo());
        let steps = MapSteps {
            search: Some("Nowhereland123"),
            fetch: true,
            ..MapSteps::default()
        };

        let (state, error) = update(&coach, &reported(), steps, MapPage::IndustryTrends, noon()).await;

        assert!(matches!(error, Some(PageError::LocationNotFound(_))));
        assert_eq!(state, reported());
        assert!(service.requests().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_pick_keeps_prior_state() {
        let service = ScriptedService::replying("unused");
        let coach = coach(&service, &FixedGeocoder::default());
        let prior = reported().with_pick(10.0, 20.0);
        let steps = MapSteps {
            pick: Some((91.0, 0.0)),
            fetch: true,
            ..MapSteps::default()
        };

        let (state, error) = update(&coach, &prior, steps, MapPage::GlobalInsights, noon()).await;

        assert!(matches!(error, Some(PageError::Validation(_))));
        assert_eq!(state, prior);
        assert!(service.requests().is_empty());
    }

    #[tokio::test]
    async fn pick_then_fetch_stores_fresh_report() {
        let service = ScriptedService::replying("- fintech is hiring");
        let coach = coach(&service, &FixedGeocoder::default());
        let later = noon() + chrono::TimeDelta::hours(1);
        let steps = MapSteps {
            pick: Some((1.3521, 103.8198)),
            fetch: true,
            ..MapSteps::default()
        };

        let (state, error) = update(&coach, &reported(), steps, MapPage::IndustryTrends, later).await;

        assert!(error.is_none());
        assert_eq!(state.address, "Lat: 1.35210, Lon: 103.81980");
        assert_eq!(state.report, "- fintech is hiring");
        assert_eq!(state.last_updated, Some(later));
    }

    #[tokio::test]
    async fn no_steps_is_a_no_op() {
        let service = ScriptedService::default();
        let coach = coach(&service, &FixedGeocoder::default());

        let (state, error) =
            update(&coach, &reported(), MapSteps::default(), MapPage::GlobalInsights, noon()).await;

        assert!(error.is_none());
        assert_eq!(state, reported());
    }

    #[tokio::test]
    async fn search_moves_to_the_match() {
        let geocoder = FixedGeocoder::default().with("Tokyo", 35.6769, 139.7639, "Tokyo, Japan");
        let coach = coach(&ScriptedService::default(), &geocoder);

        let state = search(&coach, &MapPageState::default(), " Tokyo ").await.unwrap();

        assert_eq!(state.address, "Tokyo, Japan");
        assert_eq!((state.latitude, state.longitude), (35.6769, 139.7639));
        assert!(state.located);
        assert_eq!(geocoder.queries(), vec!["Tokyo".to_string()]);
    }

    #[tokio::test]
    async fn unknown_place_is_location_not_found() {
        let coach = coach(&ScriptedService::default(), &FixedGeocoder::default());

        let err = search(&coach, &MapPageState::default(), "Nowhereland123")
            .await
            .unwrap_err();

        assert!(matches!(err, PageError::LocationNotFound(q) if q == "Nowhereland123"));
    }

    #[test]
    fn pick_rejects_out_of_range_coordinates() {
        assert!(pick(&MapPageState::default(), 91.0, 0.0).is_err());
        assert!(pick(&MapPageState::default(), 0.0, -181.0).is_err());

        let state = pick(&MapPageState::default(), -33.8688, 151.2093).unwrap();
        assert_eq!(state.address, "Lat: -33.86880, Lon: 151.20930");
    }

    #[test]
    fn unlocated_state_is_rejected() {
        assert!(ensure_located(&MapPageState::default()).is_err());
        assert!(ensure_located(&MapPageState::default().with_pick(1.0, 1.0)).is_ok());
    }
}
