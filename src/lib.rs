//! Tracking-plan generation for product analytics.
//!
//! This crate turns a feature description and a list of key user actions
//! into a structured tracking plan (a catalog of analytics events with
//! canonical names and property schemas), then derives three artifacts
//! from it: a Markdown report, a dbt-style schema manifest, and synthetic
//! sample event records.
//!
//! ## Pipeline
//! Raw inputs -> [`build_plan`] -> [`TrackingPlan`] -> renderers.
//! The renderers are independent and stateless; they borrow the plan and
//! never mutate it, so they can run in any order.
//!
//! ## Quick Start
//!
//! ```rust
//! use trackplan::{build_plan, render_report};
//!
//! let plan = build_plan("share", "", &["click invite".to_string()], "web", &[]);
//! assert_eq!(plan.events.len(), 4);
//! let report = render_report(&plan);
//! assert!(report.contains("share__click_invite"));
//! ```

// Core error handling
pub mod error;

// Identifier normalization
pub mod ident;

// Front-end input parsing helpers
pub mod input;

// Plan model, builder and taxonomy validation
pub mod plan;

// Report and schema-manifest renderers
pub mod render;

// Synthetic sample event generation and export
pub mod sample;

pub use error::{RenderError, TrackingPlanError};
pub use ident::{event_identifier, slugify};
pub use plan::{
    build_plan, default_properties, validate_taxonomy, EventCategory, EventDefinition, Property,
    PropertyType, TaxonomyIssue, TrackingPlan,
};
pub use render::{render_report, render_schema_manifest};
pub use sample::{generate_samples, generate_samples_with, Clock, SampleRecord, SystemClock};
