//! Tracking-plan data model.
//!
//! A [`TrackingPlan`] is built once per request from ephemeral input,
//! consumed by zero or more renderers and discarded. Funnel events come
//! first (in stage order), then behavior events (in action order); the
//! ordering is meaningful for rendering and preserved throughout. The plan
//! is never mutated after construction.

pub mod builder;
pub mod validate;

pub use builder::{build_plan, default_properties};
pub use validate::{validate_taxonomy, TaxonomyIssue};

use serde::{Deserialize, Serialize};

/// Semantic property type. Descriptive only, never enforced at
/// generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Datetime,
    Number,
    Boolean,
    Custom(String),
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::String => write!(f, "string"),
            PropertyType::Datetime => write!(f, "datetime"),
            PropertyType::Number => write!(f, "number"),
            PropertyType::Boolean => write!(f, "boolean"),
            PropertyType::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// One event attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Identifier, unique within an event's property list.
    pub name: String,

    #[serde(rename = "type")]
    pub prop_type: PropertyType,

    pub description: String,

    /// Drives both documentation and schema-manifest test generation.
    pub required: bool,
}

impl Property {
    pub fn required(name: &str, prop_type: PropertyType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            prop_type,
            description: description.to_string(),
            required: true,
        }
    }

    pub fn optional(name: &str, prop_type: PropertyType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            prop_type,
            description: description.to_string(),
            required: false,
        }
    }
}

/// Where an event came from: a funnel stage or a key user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Funnel,
    Behavior,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Funnel => write!(f, "funnel"),
            EventCategory::Behavior => write!(f, "behavior"),
        }
    }
}

/// One trackable event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDefinition {
    /// Canonical identifier: `slug(feature)__slug(label)`. Expected unique
    /// within a plan; violations are recorded as taxonomy issues, not
    /// rejected.
    pub event_name: String,

    pub friendly_name: String,
    pub description: String,
    pub when_triggered: String,

    /// Copied from the plan-level platform tag.
    pub platform: String,

    pub category: EventCategory,

    /// Ordered; always starts with `user_id`, `workspace_id`, `timestamp`.
    pub properties: Vec<Property>,
}

/// The root aggregate: every event for one feature plus the taxonomy
/// issues detected at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingPlan {
    pub feature_name: String,
    pub feature_description: String,
    pub platform: String,
    pub events: Vec<EventDefinition>,
    pub taxonomy_issues: Vec<TaxonomyIssue>,
}

impl TrackingPlan {
    /// Event names in plan order.
    pub fn event_names(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|ev| ev.event_name.as_str())
    }
}
