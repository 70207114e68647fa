pub mod career_path;
pub mod courses;
pub mod events;
pub mod global_insights;
pub mod home;
pub mod industry_trends;
pub mod interview;
pub mod map;
pub mod resume_match;
pub mod skill_builder;
pub mod view;

#[cfg(test)]
pub mod fakes;

use log::debug;
use thiserror::Error;

use crate::chat::gateway::{CompletionService, ServiceError};
use crate::chat::prompts::Template;
use crate::geo::Geocoder;

/// Failure of a single page action. None of these end the program.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("{0}")]
    Validation(String),

    #[error("location not found: {0}")]
    LocationNotFound(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Collaborators shared by every page.
pub struct Coach {
    completions: Box<dyn CompletionService>,
    geocoder: Box<dyn Geocoder>,
    model: String,
}

impl Coach {
    pub fn new(
        completions: Box<dyn CompletionService>,
        geocoder: Box<dyn Geocoder>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            completions,
            geocoder,
            model: model.into(),
        }
    }

    pub fn geocoder(&self) -> &dyn Geocoder {
        self.geocoder.as_ref()
    }

    pub async fn ask(&self, template: &Template, vars: &[(&str, &str)]) -> Result<String, PageError> {
        let request = template.request(&self.model, vars);
        debug!("system instruction: {}", request.system_instruction);

        Ok(self.completions.complete(&request).await?)
    }
}

/// Trimmed input, or a validation error carrying `message`.
pub(crate) fn required<'a>(value: &'a str, message: &str) -> Result<&'a str, PageError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PageError::Validation(message.to_string()));
    }
    Ok(value)
}
