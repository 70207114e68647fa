use log::info;

use super::{Coach, PageError};
use crate::chat::prompts::SKILL_BUILDER;

/// Shorter resumes are rejected before any remote call.
pub const MIN_RESUME_CHARS: usize = 100;

pub async fn analyze(coach: &Coach, resume: &str) -> Result<String, PageError> {
    let resume = resume.trim();
    if resume.chars().count() < MIN_RESUME_CHARS {
        return Err(PageError::Validation(
            "The resume text seems too short. Please provide a detailed resume.".to_string(),
        ));
    }

    info!("analyzing resume ({} chars)", resume.len());
    coach.ask(&SKILL_BUILDER, &[("resume", resume)]).await
}
