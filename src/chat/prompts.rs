use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::chat::gateway::CompletionRequest;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"));

/// A fixed instruction pair and the sampling parameters it is sent with.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub system: &'static str,
    pub user: &'static str,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: Option<f32>,
}

impl Template {
    /// Substitutes `{name}` placeholders in a single pass; unknown names are
    /// left as written, and substituted text is never rescanned.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        PLACEHOLDER
            .replace_all(self.user.trim_end(), |caps: &Captures| {
                vars.iter()
                    .find(|(name, _)| *name == &caps[1])
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    pub fn request(&self, model: &str, vars: &[(&str, &str)]) -> CompletionRequest {
        let request = CompletionRequest::new(
            self.system,
            self.render(vars),
            model,
            self.max_tokens,
            self.temperature,
        );

        match self.top_p {
            Some(top_p) => request.with_top_p(top_p),
            None => request,
        }
    }
}

pub const CAREER_INSIGHTS: Template = Template {
    system: "You are a career guidance expert.",
    user: include_str!("prompts/career_insights.txt"),
    max_tokens: 1000,
    temperature: 0.7,
    top_p: None,
};

pub const COURSES: Template = Template {
    system: "You are a helpful course recommender.",
    user: include_str!("prompts/courses.txt"),
    max_tokens: 1000,
    temperature: 1.0,
    top_p: None,
};

pub const GLOBAL_INSIGHTS: Template = Template {
    system: "You are an expert in global employment trends.",
    user: include_str!("prompts/global_insights.txt"),
    max_tokens: 1000,
    temperature: 0.7,
    top_p: None,
};

pub const HACKATHONS: Template = Template {
    system: "You generate realistic hackathon data in JSON format.",
    user: include_str!("prompts/hackathons.txt"),
    max_tokens: 1000,
    temperature: 0.9,
    top_p: None,
};

pub const INTERNSHIPS: Template = Template {
    system: "You generate realistic internship listings in JSON format.",
    user: include_str!("prompts/internships.txt"),
    max_tokens: 1000,
    temperature: 0.9,
    top_p: None,
};

pub const INDUSTRY_TRENDS: Template = Template {
    system: "You are a helpful industry trends assistant.",
    user: include_str!("prompts/industry_trends.txt"),
    max_tokens: 1000,
    temperature: 0.7,
    top_p: None,
};

pub const INTERVIEW_QUESTIONS: Template = Template {
    system: "You are a professional interviewer.",
    user: include_str!("prompts/interview_questions.txt"),
    max_tokens: 600,
    temperature: 0.8,
    top_p: None,
};

pub const INTERVIEW_FEEDBACK: Template = Template {
    system: "You are a helpful and objective interview evaluator.",
    user: include_str!("prompts/interview_feedback.txt"),
    max_tokens: 1000,
    temperature: 0.7,
    top_p: None,
};

pub const RESUME_MATCH: Template = Template {
    system: "You are a job-matching assistant.",
    user: include_str!("prompts/resume_match.txt"),
    max_tokens: 1000,
    temperature: 0.7,
    top_p: None,
};

pub const SKILL_BUILDER: Template = Template {
    system: "You are a helpful and insightful AI career coach.",
    user: include_str!("prompts/skill_builder.txt"),
    max_tokens: 1000,
    temperature: 0.7,
    top_p: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_substituted() {
        let prompt = CAREER_INSIGHTS.render(&[("domain", "Cybersecurity"), ("country", "Japan")]);

        assert!(prompt.contains("\"Cybersecurity\" field, focusing on Japan"));
        assert!(prompt.contains("specific to Japan"));
        assert!(!prompt.contains("{domain}"));
    }

    #[test]
    fn json_braces_in_templates_survive() {
        let prompt = HACKATHONS.render(&[("location", "Pune"), ("today", "June 27, 2025")]);

        assert!(prompt.contains(r#"{"name": "...", "date": "...", "description": "..."}"#));
        assert!(prompt.contains("after June 27, 2025"));
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let prompt = HACKATHONS.render(&[("location", "{today}"), ("today", "May 1, 2026")]);

        assert!(prompt.contains("in or near {today} after May 1, 2026"));
    }

    #[test]
    fn request_carries_template_sampling() {
        let request = INTERVIEW_QUESTIONS.request("gpt-4", &[("kind", "behavioral")]);

        assert_eq!(request.model_id, "gpt-4");
        assert_eq!(request.max_tokens, 600);
        assert_eq!(request.temperature, 0.8);
        assert_eq!(request.top_p, None);
        assert_eq!(request.system_instruction, "You are a professional interviewer.");
        assert!(request.user_prompt.contains("ten behavioral interview questions"));
    }
}
