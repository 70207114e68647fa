mod chat;
mod export;
mod geo;
mod input;
mod models;
mod pages;
mod utils;

use chrono::{DateTime, Local};
use clap::Parser;
use colored::Colorize;
use eyre::{Result, eyre};
use log::{debug, error, info};

use crate::chat::gateway::Gateway;
use crate::export::markdown;
use crate::export::pdf::PdfReport;
use crate::export::write_export;
use crate::geo::Nominatim;
use crate::input::job::JobReader;
use crate::input::resume::ResumeReader;
use crate::models::session::{MapPageState, SessionState};
use crate::pages::map::{MapPage, MapSteps};
use crate::pages::{
    Coach, PageError, career_path, courses, events, global_insights, home, industry_trends,
    interview, map, resume_match, skill_builder, view,
};
use crate::utils::answers::{collect_answers_interactive, parse_answers_file};
use crate::utils::cli::{Args, InterviewAction, JobSource, MapArgs, Page};
use crate::utils::config::{Config, config};
use crate::utils::log::Logger;
use crate::utils::session::SessionStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    info!(
        "starting career-coach {}",
        format!("v{}", env!("CARGO_PKG_VERSION")).magenta()
    );

    let Some(page) = args.page else {
        print!("{}", home::render());
        return Ok(());
    };

    let config: Config = config(args.config)?;
    let store = SessionStore::new(config.session.path.clone());
    debug!("session file: {}", store.path().display());
    let session = store.load();
    let now = Local::now();

    match page {
        Page::Home => print!("{}", home::render()),
        Page::ResetSession => store.clear()?,
        Page::ResumeMatch { resume, job } => {
            let coach = build_coach(&config)?;
            let resume = ResumeReader::from_file(&resume).await?;
            let job = read_job(&job).await?;

            show(
                resume_match::match_resume(&coach, &resume, &job)
                    .await
                    .map(|report| view::section("Match Report", &report)),
            );
        }
        Page::Courses { topics } => {
            let coach = build_coach(&config)?;

            show(
                courses::recommend(&coach, &topics)
                    .await
                    .map(|list| view::section("Top Course Recommendations", &list)),
            );
        }
        Page::SkillBuilder { resume } => {
            let coach = build_coach(&config)?;
            let resume = ResumeReader::from_file(&resume).await?;

            show(
                skill_builder::analyze(&coach, &resume)
                    .await
                    .map(|analysis| view::section("Career Analysis Result", &analysis)),
            );
        }
        Page::CareerPath {
            domain,
            country,
            level,
            export_pdf,
            export_md,
        } => {
            let coach = build_coach(&config)?;

            match career_path::explore(&coach, &domain, country, level).await {
                Ok(report) => {
                    print!("{}", view::section("Career Insights", &report.insights));
                    print!("{}", view::section("Skill Roadmap", &report.roadmap.render(40)));

                    if let Some(path) = export_md
                        && let Err(e) = write_export(&path, markdown::render(&report.insights)).await
                    {
                        error!("markdown export to {} failed: {e}", path.display());
                    }

                    if let Some(path) = export_pdf {
                        let pdf = PdfReport::new(format!("Career Insights: {domain}"), &report.insights);
                        let result = match pdf.render().await {
                            Ok(bytes) => write_export(&path, bytes).await,
                            Err(e) => Err(e),
                        };
                        if let Err(e) = result {
                            error!("PDF export to {} failed: {e}", path.display());
                        }
                    }
                }
                Err(e) => println!("{}", view::page_error(&e)),
            }
        }
        Page::GlobalInsights(map_args) => {
            let coach = build_coach(&config)?;
            let state =
                update_map_page(&coach, &session.global_insights, &map_args, MapPage::GlobalInsights, now)
                    .await;

            store.save(&SessionState {
                global_insights: state.clone(),
                ..session
            })?;
            println!("{}", view::location(&state, global_insights::MAP_ZOOM));
            if let Some(report) = view::map_report(
                &state,
                "Insights for",
                "Last checked",
                global_insights::TIMESTAMP_FORMAT,
            ) {
                print!("{report}");
            }
        }
        Page::IndustryTrends(map_args) => {
            let coach = build_coach(&config)?;
            let state =
                update_map_page(&coach, &session.industry_trends, &map_args, MapPage::IndustryTrends, now)
                    .await;

            store.save(&SessionState {
                industry_trends: state.clone(),
                ..session
            })?;
            println!("{}", view::location(&state, industry_trends::MAP_ZOOM));
            if let Some(report) = view::map_report(
                &state,
                "Trends for",
                "Last updated",
                industry_trends::TIMESTAMP_FORMAT,
            ) {
                print!("{report}");
            }
        }
        Page::Hackathons { location, listing } => {
            let coach = build_coach(&config)?;

            show(
                events::find(&coach, &location, listing, now.date_naive())
                    .await
                    .map(|report| view::events(&report)),
            );
        }
        Page::Interview { action } => run_interview(action, &config, &store, session, now).await?,
    }

    Ok(())
}

fn build_coach(config: &Config) -> Result<Coach> {
    let api_key = config.llm.resolve_api_key()?;
    let gateway = Gateway::new(api_key, config.llm.endpoint.clone());
    let geocoder = Nominatim::new(&config.geocoding);

    debug!("using model {} at {}", config.llm.model, config.llm.endpoint);
    Ok(Coach::new(
        Box::new(gateway),
        Box::new(geocoder),
        config.llm.model.clone(),
    ))
}

async fn read_job(source: &JobSource) -> Result<String> {
    if let Some(text) = &source.job {
        Ok(text.clone())
    } else if let Some(file) = &source.job_file {
        JobReader::from_file(file).await
    } else if let Some(url) = &source.job_url {
        JobReader::from_url(url).await
    } else {
        Err(eyre!("no job description provided"))
    }
}

fn show(result: Result<String, PageError>) {
    match result {
        Ok(out) => print!("{out}"),
        Err(e) => println!("{}", view::page_error(&e)),
    }
}

async fn update_map_page(
    coach: &Coach,
    state: &MapPageState,
    args: &MapArgs,
    page: MapPage,
    now: DateTime<Local>,
) -> MapPageState {
    let steps = MapSteps {
        search: args.location.as_deref(),
        pick: args.lat.zip(args.lon),
        fetch: args.fetch,
    };

    let (state, error) = map::update(coach, state, steps, page, now).await;
    if let Some(e) = error {
        println!("{}", view::page_error(&e));
    }
    state
}

async fn run_interview(
    action: InterviewAction,
    config: &Config,
    store: &SessionStore,
    session: SessionState,
    now: DateTime<Local>,
) -> Result<()> {
    let result = match action {
        InterviewAction::Status => {
            println!("{}", view::interview(&session.interview, now));
            return Ok(());
        }
        InterviewAction::Questions { kind } => {
            let coach = build_coach(config)?;
            interview::generate_questions(&coach, kind, now).await
        }
        InterviewAction::Answer { answers_file } => {
            let coach = build_coach(config)?;
            let answers = if session.interview.questions.is_empty() {
                Vec::new()
            } else if let Some(path) = answers_file {
                parse_answers_file(&tokio::fs::read_to_string(&path).await?)
            } else {
                collect_answers_interactive(&session.interview.questions)
            };

            interview::submit_answers(&coach, &session.interview, &answers).await
        }
    };

    match result {
        Ok(state) => {
            println!("{}", view::interview(&state, now));
            store.save(&SessionState {
                interview: state,
                ..session
            })?;
        }
        Err(e) => println!("{}", view::page_error(&e)),
    }

    Ok(())
}
