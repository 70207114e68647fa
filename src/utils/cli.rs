use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use log::LevelFilter;

use crate::models::choices::{Country, InterviewKind};
use crate::models::roadmap::RoadmapLevel;
use crate::pages::events::{DEFAULT_LOCATION, Listing};

#[derive(Parser, Debug)]
#[command(name = "career-coach")]
#[command(about = "AI career coaching for students and working professionals", long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,

    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    #[command(subcommand)]
    pub page: Option<Page>,
}

#[derive(Subcommand, Debug)]
pub enum Page {
    /// List every page and what it does
    Home,

    /// Compare a resume with a job description
    ResumeMatch {
        /// Resume file (PDF or plain text)
        #[arg(short, long, value_name = "FILE")]
        resume: PathBuf,

        #[command(flatten)]
        job: JobSource,
    },

    /// Job-market insights for a searched or picked location
    GlobalInsights(MapArgs),

    /// Online course recommendations for a set of topics
    Courses {
        /// Comma-separated topics, e.g. "Flutter, Cybersecurity"
        #[arg(short, long)]
        topics: String,
    },

    /// Career paths, hiring companies and a skill roadmap for a domain
    CareerPath {
        /// Domain, e.g. AI, Cybersecurity, Web Dev
        #[arg(short, long)]
        domain: String,

        #[arg(long, value_enum, default_value_t = Country::India)]
        country: Country,

        #[arg(short, long, value_enum, default_value_t = RoadmapLevel::Beginner)]
        level: RoadmapLevel,

        /// Also write the insights as PDF
        #[arg(long, value_name = "FILE")]
        export_pdf: Option<PathBuf>,

        /// Also write the insights as markdown
        #[arg(long, value_name = "FILE")]
        export_md: Option<PathBuf>,
    },

    /// Strengths, gaps and an upskilling plan from a resume
    SkillBuilder {
        /// Resume file (PDF or plain text)
        #[arg(short, long, value_name = "FILE")]
        resume: PathBuf,
    },

    /// Mock interview practice
    Interview {
        #[command(subcommand)]
        action: InterviewAction,
    },

    /// Upcoming hackathons or internships near a location
    Hackathons {
        /// City, state or country
        #[arg(short, long, default_value = DEFAULT_LOCATION)]
        location: String,

        #[arg(long, value_enum, default_value_t = Listing::Hackathons)]
        listing: Listing,
    },

    /// Industry trends around a searched or picked location
    IndustryTrends(MapArgs),

    /// Forget all stored session state
    ResetSession,
}

#[derive(ClapArgs, Debug)]
#[group(required = true, multiple = false)]
pub struct JobSource {
    /// Job description text
    #[arg(short, long)]
    pub job: Option<String>,

    /// File containing the job description
    #[arg(long, value_name = "FILE")]
    pub job_file: Option<PathBuf>,

    /// URL of the job posting
    #[arg(long, value_name = "URL")]
    pub job_url: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct MapArgs {
    /// Search for a location by name
    #[arg(short, long, conflicts_with_all = ["lat", "lon"])]
    pub location: Option<String>,

    /// Pick a position directly (latitude)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Pick a position directly (longitude)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Fetch a fresh report for the selected position
    #[arg(short, long)]
    pub fetch: bool,
}

#[derive(Subcommand, Debug)]
pub enum InterviewAction {
    /// Generate a fresh set of ten questions and start the timer
    Questions {
        #[arg(short, long, value_enum, default_value_t = InterviewKind::Technical)]
        kind: InterviewKind,
    },

    /// Answer the current questions and get feedback
    Answer {
        /// Answers separated by `---` lines instead of typing them in
        #[arg(long, value_name = "FILE")]
        answers_file: Option<PathBuf>,
    },

    /// Show the current questions, elapsed time and last feedback
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn map_pick_accepts_negative_coordinates() {
        let args = Args::try_parse_from([
            "career-coach",
            "industry-trends",
            "--lat",
            "-33.86",
            "--lon",
            "151.2",
            "--fetch",
        ])
        .unwrap();

        match args.page {
            Some(Page::IndustryTrends(map)) => {
                assert_eq!(map.lat, Some(-33.86));
                assert_eq!(map.lon, Some(151.2));
                assert!(map.fetch);
                assert!(map.location.is_none());
            }
            other => panic!("unexpected page: {other:?}"),
        }
    }

    #[test]
    fn search_and_pick_conflict() {
        assert!(
            Args::try_parse_from([
                "career-coach",
                "global-insights",
                "--location",
                "Tokyo",
                "--lat",
                "1",
                "--lon",
                "2",
            ])
            .is_err()
        );
    }

    #[test]
    fn resume_match_needs_exactly_one_job_source() {
        assert!(Args::try_parse_from(["career-coach", "resume-match", "-r", "cv.pdf"]).is_err());
        assert!(
            Args::try_parse_from([
                "career-coach",
                "resume-match",
                "-r",
                "cv.pdf",
                "--job",
                "Rust dev",
                "--job-file",
                "jd.txt",
            ])
            .is_err()
        );
        assert!(
            Args::try_parse_from(["career-coach", "resume-match", "-r", "cv.pdf", "-j", "Rust dev"])
                .is_ok()
        );
    }

    #[test]
    fn hackathons_default_to_india() {
        let args = Args::try_parse_from(["career-coach", "hackathons"]).unwrap();

        match args.page {
            Some(Page::Hackathons { location, listing }) => {
                assert_eq!(location, "India");
                assert_eq!(listing, Listing::Hackathons);
            }
            other => panic!("unexpected page: {other:?}"),
        }
    }

    #[test]
    fn internships_are_selected_by_listing() {
        let args = Args::try_parse_from([
            "career-coach",
            "hackathons",
            "-l",
            "Pune",
            "--listing",
            "internships",
        ])
        .unwrap();

        match args.page {
            Some(Page::Hackathons { location, listing }) => {
                assert_eq!(location, "Pune");
                assert_eq!(listing, Listing::Internships);
            }
            other => panic!("unexpected page: {other:?}"),
        }

        assert!(
            Args::try_parse_from(["career-coach", "hackathons", "--listing", "jobs"]).is_err()
        );
    }

    #[test]
    fn country_and_level_choices_parse() {
        let args = Args::try_parse_from([
            "career-coach",
            "career-path",
            "-d",
            "AI",
            "--country",
            "usa",
            "--level",
            "expert",
        ])
        .unwrap();

        match args.page {
            Some(Page::CareerPath { country, level, .. }) => {
                assert_eq!(country, Country::Usa);
                assert_eq!(level, RoadmapLevel::Expert);
            }
            other => panic!("unexpected page: {other:?}"),
        }
    }
}
