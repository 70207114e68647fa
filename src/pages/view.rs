//! Terminal rendering for page results.

use chrono::{DateTime, Local};
use colored::Colorize;

use super::PageError;
use super::events::{DATE_FORMAT, EventsReport, Listing};
use super::interview::elapsed;
use crate::models::record::{Hackathon, Internship};
use crate::models::session::{InterviewState, MapPageState};
use crate::utils::misc::{format_elapsed, map_link};

pub fn section(title: &str, body: &str) -> String {
    format!("\n{}\n\n{}\n", format!("### {title}").cyan().bold(), body.trim_end())
}

/// Inline message for a failed page action.
pub fn page_error(err: &PageError) -> String {
    match err {
        PageError::Validation(message) => format!("⚠ {message}").yellow().to_string(),
        PageError::LocationNotFound(query) => {
            format!("✗ Location not found: {query}. Please try another place.")
                .red()
                .to_string()
        }
        PageError::Service(e) => format!("✗ Error: {e}").red().to_string(),
    }
}

pub fn location(state: &MapPageState, zoom: u8) -> String {
    format!(
        "📍 {} ({:.5}, {:.5})\n   {}",
        state.address.bold(),
        state.latitude,
        state.longitude,
        map_link(state.latitude, state.longitude, zoom).underline()
    )
}

/// The stored report of a map page, if there is one.
pub fn map_report(
    state: &MapPageState,
    heading: &str,
    stamp_label: &str,
    stamp_format: &str,
) -> Option<String> {
    if state.report.is_empty() {
        return None;
    }

    let mut out = format!("\n{}\n", format!("### {heading}: {}", state.address).cyan().bold());
    if let Some(updated) = state.last_updated {
        out.push_str(&format!(
            "{}\n",
            format!("🕒 {stamp_label}: {}", updated.format(stamp_format)).dimmed()
        ));
    }
    out.push('\n');
    out.push_str(state.report.trim_end());
    out.push('\n');

    Some(out)
}

pub fn hackathon_card(hack: &Hackathon) -> String {
    let mut out = format!("🚀 {}\n   📅 {}\n", hack.name.green().bold(), hack.date);
    if !hack.description.is_empty() {
        out.push_str(&format!("   {}\n", hack.description));
    }
    out
}

pub fn internship_card(internship: &Internship) -> String {
    let mut out = format!(
        "💼 {} at {}\n   📅 starts {}\n",
        internship.title.green().bold(),
        internship.company.bold(),
        internship.start
    );
    if !internship.description.is_empty() {
        out.push_str(&format!("   {}\n", internship.description));
    }
    out
}

pub fn events(report: &EventsReport) -> String {
    let mut out = format!(
        "{}\n   {}\n",
        format!(
            "📌 Location found: {} (Lat: {:.2}, Lon: {:.2})",
            report.place.display_name, report.place.latitude, report.place.longitude
        )
        .green(),
        map_link(report.place.latitude, report.place.longitude, 10).underline()
    );

    let records = report.extraction.records();
    let noun = match report.listing {
        Listing::Hackathons => "hackathons",
        Listing::Internships => "internships",
    };

    if records.is_empty() {
        if let Some(warning) = report.extraction.warning() {
            out.push_str(&format!("{}\n", format!("⚠ {warning}").yellow()));
        }
        out.push_str(&format!(
            "{}\n",
            format!("No {noun} found. Try another location or check later.").yellow()
        ));
        return out;
    }

    out.push_str(&format!(
        "\n{}\n\n",
        format!(
            "### {} After {}",
            match report.listing {
                Listing::Hackathons => "Hackathons",
                Listing::Internships => "Internships",
            },
            report.today.format(DATE_FORMAT)
        )
        .cyan()
        .bold()
    ));

    for record in records {
        out.push_str(&match report.listing {
            Listing::Hackathons => hackathon_card(&Hackathon::from(record)),
            Listing::Internships => internship_card(&Internship::from(record)),
        });
        out.push('\n');
    }

    out
}

pub fn interview(state: &InterviewState, now: DateTime<Local>) -> String {
    if state.questions.is_empty() {
        return "No interview in progress. Run `interview questions` to start one."
            .yellow()
            .to_string();
    }

    let mut out = format!(
        "\n{}\n\n",
        format!(
            "### Your Mock Interview Questions ({})",
            state.kind.unwrap_or_default()
        )
        .cyan()
        .bold()
    );
    for (i, question) in state.questions.iter().enumerate() {
        out.push_str(&format!("{}\n", format!("Q{}: {}", i + 1, question).bold()));
    }

    if let Some(spent) = elapsed(state, now) {
        out.push_str(&format!("\n⏱ Time Elapsed: {}\n", format_elapsed(spent)));
    }

    if let Some(feedback) = &state.feedback {
        out.push_str(&section("Interview Feedback", feedback));
    }

    out
}
