pub mod extractor;
pub mod gateway;
pub mod prompts;
