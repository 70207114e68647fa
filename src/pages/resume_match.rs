use log::info;

use super::{Coach, PageError};
use crate::chat::prompts::RESUME_MATCH;

pub async fn match_resume(coach: &Coach, resume: &str, job: &str) -> Result<String, PageError> {
    let (resume, job) = (resume.trim(), job.trim());
    if resume.is_empty() || job.is_empty() {
        return Err(PageError::Validation(
            "Please provide a resume and paste the job description.".to_string(),
        ));
    }

    info!(
        "matching resume ({} chars) against job description ({} chars)",
        resume.len(),
        job.len()
    );
    coach
        .ask(&RESUME_MATCH, &[("resume", resume), ("job", job)])
        .await
}
