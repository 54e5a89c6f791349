pub mod aggregate;
pub mod generate;
pub mod orchestrator;

pub use orchestrator::{RunReport, run};
