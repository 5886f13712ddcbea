//! Error types for the tracking-plan crate.
//!
//! Plan construction itself never fails on well-formed string inputs;
//! the fallible surface is artifact serialization and sample generation
//! against an empty plan.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Error, Debug)]
pub enum TrackingPlanError {
    #[error("cannot draw sample events from a plan with no events")]
    EmptyPlan,

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Serialization failures from the artifact renderers and exporters.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}
