use log::info;

use super::{Coach, PageError, required};
use crate::chat::prompts::COURSES;

/// Comma-separated topics, trimmed, blanks dropped.
pub fn normalize_topics(topics: &str) -> String {
    topics
        .split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub async fn recommend(coach: &Coach, topics: &str) -> Result<String, PageError> {
    let topics = normalize_topics(topics);
    let topics = required(&topics, "Please enter at least one topic.")?;
    info!("recommending courses for: {topics}");

    coach.ask(&COURSES, &[("topics", topics)]).await
}
