use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::info;

/// Separator line between answers in an answers file.
pub const ANSWER_SEPARATOR: &str = "---";

/// Prompts for every question on stdin. An answer ends at the first empty line.
pub fn collect_answers_interactive(questions: &[String]) -> Vec<String> {
    println!("\n{}", "=== Mock Interview ===".cyan().bold());
    println!(
        "{}\n",
        "Type your answer below each question; finish an answer with an empty line.".cyan()
    );

    let stdin = io::stdin();
    let answers = read_answers(&mut stdin.lock(), questions, true);

    info!(
        "collected answers for {}/{} questions",
        answers.iter().filter(|a| !a.is_empty()).count(),
        questions.len()
    );
    answers
}

pub fn read_answers(reader: &mut impl BufRead, questions: &[String], echo: bool) -> Vec<String> {
    let mut answers = Vec::with_capacity(questions.len());

    for (i, question) in questions.iter().enumerate() {
        if echo {
            println!("{}", format!("Q{}: {}", i + 1, question).bold());
            print!("{}", "✍ Your answer: ".cyan());
            let _ = io::stdout().flush();
        }

        let mut lines = Vec::new();
        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) if line.trim().is_empty() => break,
                Ok(_) => lines.push(line.trim_end().to_string()),
                Err(e) => {
                    println!("{}", format!("Error reading input: {e}").red());
                    break;
                }
            }
        }

        answers.push(lines.join("\n"));
        if echo {
            println!();
        }
    }

    answers
}

/// Answers separated by `---` lines, in question order.
pub fn parse_answers_file(text: &str) -> Vec<String> {
    let mut answers = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim() == ANSWER_SEPARATOR {
            answers.push(current.join("\n").trim().to_string());
            current.clear();
        } else {
            current.push(line);
        }
    }

    let last = current.join("\n").trim().to_string();
    if !last.is_empty() {
        answers.push(last);
    }

    answers
}
