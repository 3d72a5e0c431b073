//! Pipeline orchestration module.

mod orchestrator;
mod stats;

pub use orchestrator::{OutputFormat, Pipeline, PipelineConfig, PipelineState};
pub use stats::RunReport;
