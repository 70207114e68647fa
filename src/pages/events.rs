use chrono::NaiveDate;
use clap::ValueEnum;
use log::{info, warn};

use super::{Coach, PageError, required};
use crate::chat::extractor::{Extraction, extract};
use crate::chat::prompts::{HACKATHONS, INTERNSHIPS};
use crate::geo::Place;

pub const DEFAULT_LOCATION: &str = "India";
pub const DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Listing {
    #[default]
    Hackathons,
    Internships,
}

pub struct EventsReport {
    pub place: Place,
    pub today: NaiveDate,
    pub listing: Listing,
    pub extraction: Extraction,
}

/// Resolves `location`, then asks for a list of upcoming events near it.
/// The completion service is only called once the location resolves.
pub async fn find(
    coach: &Coach,
    location: &str,
    listing: Listing,
    today: NaiveDate,
) -> Result<EventsReport, PageError> {
    let location = required(location, "Please enter your location.")?;

    let place = coach
        .geocoder()
        .lookup(location)
        .await
        .ok_or_else(|| PageError::LocationNotFound(location.to_string()))?;
    info!("location found: {} ({:.2}, {:.2})", place.display_name, place.latitude, place.longitude);

    let template = match listing {
        Listing::Hackathons => &HACKATHONS,
        Listing::Internships => &INTERNSHIPS,
    };
    let today_text = today.format(DATE_FORMAT).to_string();

    let raw = coach
        .ask(
            template,
            &[("location", &place.display_name), ("today", &today_text)],
        )
        .await?;

    let extraction = extract(&raw);
    if let Some(warning) = extraction.warning() {
        warn!("{warning}");
    }

    Ok(EventsReport {
        place,
        today,
        listing,
        extraction,
    })
}
