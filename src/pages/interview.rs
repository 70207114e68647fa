use std::sync::LazyLock;

use chrono::{DateTime, Local, TimeDelta};
use log::info;
use regex::Regex;

use super::{Coach, PageError};
use crate::chat::prompts::{INTERVIEW_FEEDBACK, INTERVIEW_QUESTIONS};
use crate::models::choices::InterviewKind;
use crate::models::session::InterviewState;

static NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("numbering pattern is valid"));

/// One question per non-blank line, list numbering removed.
pub fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| NUMBERING.replace(line, "").trim().to_string())
        .collect()
}

/// "Q1: ...\nA1: ..." blocks separated by blank lines. Missing answers are empty.
pub fn transcript(questions: &[String], answers: &[String]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let answer = answers.get(i).map(String::as_str).unwrap_or("");
            format!("Q{n}: {question}\nA{n}: {answer}", n = i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Starts a new round: fresh questions, timer reset, previous feedback dropped.
pub async fn generate_questions(
    coach: &Coach,
    kind: InterviewKind,
    now: DateTime<Local>,
) -> Result<InterviewState, PageError> {
    info!("generating {kind} interview questions");

    let text = coach
        .ask(
            &INTERVIEW_QUESTIONS,
            &[("kind", &kind.to_string().to_lowercase())],
        )
        .await?;

    let questions = parse_questions(&text);
    info!("received {} questions", questions.len());

    Ok(InterviewState {
        kind: Some(kind),
        questions,
        started_at: Some(now),
        feedback: None,
    })
}

pub async fn submit_answers(
    coach: &Coach,
    state: &InterviewState,
    answers: &[String],
) -> Result<InterviewState, PageError> {
    if state.questions.is_empty() {
        return Err(PageError::Validation(
            "Generate interview questions first.".to_string(),
        ));
    }

    let answered = answers.iter().filter(|a| !a.trim().is_empty()).count();
    info!(
        "requesting feedback on {answered}/{} answered questions",
        state.questions.len()
    );

    let feedback = coach
        .ask(
            &INTERVIEW_FEEDBACK,
            &[("transcript", &transcript(&state.questions, answers))],
        )
        .await?;

    Ok(InterviewState {
        feedback: Some(feedback),
        ..state.clone()
    })
}

pub fn elapsed(state: &InterviewState, now: DateTime<Local>) -> Option<TimeDelta> {
    state.started_at.map(|start| now - start)
}
