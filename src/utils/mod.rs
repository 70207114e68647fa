pub mod answers;
pub mod cli;
pub mod config;
pub mod log;
pub mod misc;
pub mod session;

#[cfg(test)]
pub mod testing;
