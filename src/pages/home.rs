use colored::Colorize;

/// Subcommand name and what the page does.
pub const PAGES: [(&str, &str); 8] = [
    (
        "resume-match",
        "Compare a resume with a job description: match score, matched and missing skills, improvement tips.",
    ),
    (
        "global-insights",
        "Search or pick a location and get a report on its job market and in-demand skills.",
    ),
    (
        "courses",
        "Enter topics you want to learn and get ten curated online courses.",
    ),
    (
        "career-path",
        "Career paths and hiring companies for a domain and country, plus a skill roadmap chart.",
    ),
    (
        "skill-builder",
        "Strengths, gaps and a personalized upskilling plan drawn from your resume.",
    ),
    (
        "interview",
        "Practice technical or behavioral questions and get scored feedback on your answers.",
    ),
    (
        "hackathons",
        "Upcoming (fictional but realistic) hackathons or internships near a location.",
    ),
    (
        "industry-trends",
        "Companies, technologies and hiring patterns around a location.",
    ),
];

pub fn render() -> String {
    let mut out = format!(
        "{}\n{}\n\n",
        "Career Coach for Students & Working Professionals".cyan().bold(),
        "Pick a page and run it as a subcommand:".cyan()
    );

    for (name, description) in PAGES {
        out.push_str(&format!("  {}\n      {}\n", name.bold(), description));
    }

    out
}
