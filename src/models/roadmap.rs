use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use colored::Colorize;
use eyre::{Report, eyre};

pub const ROADMAP_SKILLS: [&str; 5] = [
    "Python",
    "Machine Learning",
    "Deep Learning",
    "Cloud Deployment",
    "AI Ethics",
];
const BEGINNER: [u8; 5] = [90, 60, 40, 30, 20];
const EXPERT: [u8; 5] = [100, 95, 90, 85, 70];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RoadmapLevel {
    #[default]
    Beginner,
    Expert,
}

impl fmt::Display for RoadmapLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoadmapLevel::Beginner => "Beginner",
            RoadmapLevel::Expert => "Expert",
        })
    }
}

impl FromStr for RoadmapLevel {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(RoadmapLevel::Beginner),
            "expert" => Ok(RoadmapLevel::Expert),
            other => Err(eyre!("unknown roadmap level: {other}")),
        }
    }
}

/// A single-series bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapChart {
    pub title: String,
    pub series_name: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub height: u32,
    pub bars: Vec<(&'static str, u8)>,
}

pub fn build_roadmap(level: RoadmapLevel) -> RoadmapChart {
    let values = match level {
        RoadmapLevel::Beginner => BEGINNER,
        RoadmapLevel::Expert => EXPERT,
    };

    RoadmapChart {
        title: format!("{level} Skill Roadmap"),
        series_name: format!("{level} Roadmap"),
        x_title: "Skill",
        y_title: "Proficiency (%)",
        height: 400,
        bars: ROADMAP_SKILLS.into_iter().zip(values).collect(),
    }
}

impl RoadmapChart {
    /// Horizontal bars, one per skill, `width` cells for 100%.
    pub fn render(&self, width: usize) -> String {
        let label_width = self
            .bars
            .iter()
            .map(|(skill, _)| skill.len())
            .max()
            .unwrap_or(0);

        let mut out = format!("{}\n", self.title.bold());
        out.push_str(&format!(
            "{:label_width$}  {}\n",
            self.x_title.dimmed(),
            self.y_title.dimmed()
        ));

        for (skill, value) in &self.bars {
            let filled = usize::from(*value) * width / 100;
            out.push_str(&format!(
                "{:label_width$}  {} {}%\n",
                skill,
                "█".repeat(filled).purple(),
                value
            ));
        }

        out
    }
}
