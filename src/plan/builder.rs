//! Plan construction: default property schemas and the plan builder.

use tracing::debug;

use super::{EventCategory, EventDefinition, Property, PropertyType, TrackingPlan};
use crate::ident::{capitalize, event_identifier};
use crate::plan::validate::validate_taxonomy;

/// Fallback funnel when the caller supplies no stages.
pub const DEFAULT_FUNNEL_STAGES: [&str; 3] = ["view", "start", "complete"];

/// One keyword-driven augmentation rule.
///
/// Rules are evaluated in listed order against the raw (not slugified)
/// label text, case-insensitively. Every matching rule appends its block;
/// rules are not mutually exclusive.
struct PropertyRule {
    keywords: &'static [&'static str],
    append: fn(&mut Vec<Property>),
}

const PROPERTY_RULES: &[PropertyRule] = &[
    PropertyRule {
        keywords: &["error"],
        append: |props| {
            props.push(Property::optional(
                "error_code",
                PropertyType::String,
                "Machine-readable error code",
            ));
            props.push(Property::optional(
                "error_message",
                PropertyType::String,
                "Human-readable error message",
            ));
        },
    },
    PropertyRule {
        keywords: &["click", "cta"],
        append: |props| {
            props.push(Property::optional(
                "element_id",
                PropertyType::String,
                "Frontend identifier for the clicked element",
            ));
            props.push(Property::optional(
                "page",
                PropertyType::String,
                "Page or screen where the action occurred",
            ));
        },
    },
];

/// Default property schema for an event derived from `label`.
///
/// Starts with the three mandatory properties, then appends the block of
/// every matching [`PropertyRule`].
pub fn default_properties(label: &str) -> Vec<Property> {
    let mut props = vec![
        Property::required(
            "user_id",
            PropertyType::String,
            "Unique identifier for the user",
        ),
        Property::required(
            "workspace_id",
            PropertyType::String,
            "Workspace or account identifier",
        ),
        Property::required(
            "timestamp",
            PropertyType::Datetime,
            "Event timestamp in ISO 8601",
        ),
    ];

    let needle = label.to_lowercase();
    for rule in PROPERTY_RULES {
        if rule.keywords.iter().any(|kw| needle.contains(kw)) {
            (rule.append)(&mut props);
        }
    }
    props
}

/// Assemble a [`TrackingPlan`] from raw caller inputs.
///
/// Funnel events first (stage order), then behavior events (action order,
/// blank actions skipped). Taxonomy validation runs once over the final
/// event list. Never fails on well-formed string inputs; degenerate inputs
/// (empty feature name, blank actions) degrade rather than error.
pub fn build_plan(
    feature_name: &str,
    feature_description: &str,
    key_actions: &[String],
    platform: &str,
    funnel_stages: &[String],
) -> TrackingPlan {
    let stages: Vec<&str> = if funnel_stages.is_empty() {
        DEFAULT_FUNNEL_STAGES.to_vec()
    } else {
        funnel_stages.iter().map(String::as_str).collect()
    };

    let mut events = Vec::with_capacity(stages.len() + key_actions.len());

    // Core funnel events
    for stage in &stages {
        events.push(EventDefinition {
            event_name: event_identifier(feature_name, stage),
            friendly_name: format!("{} - {}", feature_name, capitalize(stage)),
            description: format!("Fired when a user {}s the {} feature.", stage, feature_name),
            when_triggered: format!("User {}s the {} flow.", stage, feature_name),
            platform: platform.to_string(),
            category: EventCategory::Funnel,
            properties: default_properties(stage),
        });
    }

    // Key action events
    for action in key_actions {
        if action.trim().is_empty() {
            continue;
        }
        events.push(EventDefinition {
            event_name: event_identifier(feature_name, action),
            friendly_name: format!("{} - {}", feature_name, capitalize(action)),
            description: format!("Fired when a user performs key action: {}.", action),
            when_triggered: format!("User completes action: {}.", action),
            platform: platform.to_string(),
            category: EventCategory::Behavior,
            properties: default_properties(action),
        });
    }

    let taxonomy_issues = validate_taxonomy(&events);
    debug!(
        feature = feature_name,
        events = events.len(),
        issues = taxonomy_issues.len(),
        "built tracking plan"
    );

    TrackingPlan {
        feature_name: feature_name.to_string(),
        feature_description: feature_description.to_string(),
        platform: platform.to_string(),
        events,
        taxonomy_issues,
    }
}
