pub mod choices;
pub mod record;
pub mod roadmap;
pub mod session;
