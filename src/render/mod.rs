//! Artifact renderers.
//!
//! Each renderer is a stateless, pure transform over a borrowed
//! [`crate::TrackingPlan`]; they never mutate the plan and can run in any
//! order.

pub mod dbt;
pub mod markdown;

pub use dbt::render_schema_manifest;
pub use markdown::render_report;
