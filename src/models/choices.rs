use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Country {
    #[default]
    India,
    Usa,
    Germany,
    Canada,
    Japan,
    Remote,
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Country::India => "India",
            Country::Usa => "USA",
            Country::Germany => "Germany",
            Country::Canada => "Canada",
            Country::Japan => "Japan",
            Country::Remote => "Remote",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum InterviewKind {
    #[default]
    Technical,
    Behavioral,
}

impl fmt::Display for InterviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InterviewKind::Technical => "Technical",
            InterviewKind::Behavioral => "Behavioral",
        })
    }
}
