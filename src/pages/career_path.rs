use log::info;

use super::{Coach, PageError, required};
use crate::chat::prompts::CAREER_INSIGHTS;
use crate::models::choices::Country;
use crate::models::roadmap::{RoadmapChart, RoadmapLevel, build_roadmap};

pub struct CareerPathReport {
    pub insights: String,
    pub roadmap: RoadmapChart,
}

pub async fn explore(
    coach: &Coach,
    domain: &str,
    country: Country,
    level: RoadmapLevel,
) -> Result<CareerPathReport, PageError> {
    let domain = required(domain, "Please enter a domain (e.g. AI, Cybersecurity, Web Dev).")?;
    info!("exploring career paths for {domain:?} in {country}");

    let insights = coach
        .ask(
            &CAREER_INSIGHTS,
            &[("domain", domain), ("country", &country.to_string())],
        )
        .await?;

    Ok(CareerPathReport {
        insights,
        roadmap: build_roadmap(level),
    })
}
