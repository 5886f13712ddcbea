//! Taxonomy validation over a built event list.
//!
//! Problems are reported as data, never raised as faults, so callers can
//! decide how to surface them.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::EventDefinition;

// Underscores are allowed, so the `__` scope separator passes unchanged.
static SNAKE_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").unwrap());

/// Checked on every event, in this order.
const REQUIRED_PROPERTIES: [&str; 3] = ["user_id", "workspace_id", "timestamp"];

/// One detected naming or schema inconsistency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyIssue {
    /// Rule code: T1 duplicate name, T2 not snake_case, T3 missing
    /// required property.
    pub rule: String,
    pub message: String,
}

impl TaxonomyIssue {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

impl std::fmt::Display for TaxonomyIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validate event names and property schemas. Returns all issues found.
///
/// Single pass in list order, no short-circuit. Per event: duplicate check
/// first (the name joins the seen set either way), then snake_case, then
/// missing-property checks in [`REQUIRED_PROPERTIES`] order. Duplicate
/// detection is case-sensitive and runs on the already-slugified names.
pub fn validate_taxonomy(events: &[EventDefinition]) -> Vec<TaxonomyIssue> {
    let mut issues = Vec::new();
    let mut seen_names: HashSet<&str> = HashSet::new();

    for ev in events {
        let name = ev.event_name.as_str();

        // T1: duplicate event names
        if !seen_names.insert(name) {
            issues.push(TaxonomyIssue::new(
                "T1",
                format!("Duplicate event name detected: {}", name),
            ));
        }

        // T2: snake_case naming
        if !SNAKE_CASE_RE.is_match(name) {
            issues.push(TaxonomyIssue::new(
                "T2",
                format!("Event name not snake_case: {}", name),
            ));
        }

        // T3: mandatory properties present
        for required_prop in REQUIRED_PROPERTIES {
            if !ev.properties.iter().any(|p| p.name == required_prop) {
                issues.push(TaxonomyIssue::new(
                    "T3",
                    format!(
                        "Missing required property '{}' in event: {}",
                        required_prop, name
                    ),
                ));
            }
        }
    }

    issues
}
