//! Markdown report renderer.

use crate::plan::TrackingPlan;

/// Render the human-readable tracking-plan report.
///
/// Pure function of the plan: the same plan yields byte-identical output
/// across calls. The taxonomy-warning section is emitted only when issues
/// exist.
pub fn render_report(plan: &TrackingPlan) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Tracking Plan: {}", plan.feature_name));
    lines.push(String::new());
    lines.push(plan.feature_description.clone());
    lines.push(String::new());
    lines.push("## Events".to_string());
    lines.push(String::new());

    for ev in &plan.events {
        lines.push(format!("### {}", ev.event_name));
        lines.push(format!("- **Friendly name:** {}", ev.friendly_name));
        lines.push(format!("- **Category:** {}", ev.category));
        lines.push(format!("- **Platform:** {}", ev.platform));
        lines.push(format!("- **When triggered:** {}", ev.when_triggered));
        lines.push(format!("- **Description:** {}", ev.description));
        lines.push("- **Properties:**".to_string());
        for p in &ev.properties {
            let req = if p.required { "required" } else { "optional" };
            lines.push(format!(
                "  - `{}` ({}, {}) - {}",
                p.name, p.prop_type, req, p.description
            ));
        }
        lines.push(String::new());
    }

    if !plan.taxonomy_issues.is_empty() {
        lines.push("## Taxonomy Warnings".to_string());
        lines.push(String::new());
        for issue in &plan.taxonomy_issues {
            lines.push(format!("- {}", issue));
        }
    }

    lines.join("\n")
}
