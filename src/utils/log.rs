use env_logger::{Builder, Target};
use log::LevelFilter;

pub struct Logger;

impl Logger {
    pub fn init(level: LevelFilter) {
        let mut builder: Builder = colog::default_builder();
        builder
            .target(Target::Stderr)
            .filter_level(level)
            .filter_module("hyper_util", LevelFilter::Warn)
            .filter_module("reqwest", LevelFilter::Warn);

        // a second call keeps the first logger
        let _ = builder.try_init();
    }
}
