//! dbt-style schema manifest renderer.
//!
//! Each event becomes one model suggestion; required properties carry a
//! `not_null` test tag for downstream data-quality tooling.

use serde::Serialize;

use crate::error::RenderError;
use crate::plan::TrackingPlan;

#[derive(Debug, Serialize)]
struct DbtSchema {
    version: u32,
    models: Vec<DbtModel>,
}

#[derive(Debug, Serialize)]
struct DbtModel {
    name: String,
    description: String,
    columns: Vec<DbtColumn>,
}

#[derive(Debug, Serialize)]
struct DbtColumn {
    name: String,
    description: String,
    tests: Vec<String>,
}

/// Render the plan as a dbt-style YAML schema (`version: 2`).
///
/// One model per event in plan order; one column per property in property
/// order. Deterministic: field order follows the struct declarations, not
/// key sorting.
pub fn render_schema_manifest(plan: &TrackingPlan) -> Result<String, RenderError> {
    let models = plan
        .events
        .iter()
        .map(|ev| DbtModel {
            name: ev.event_name.clone(),
            description: ev.description.clone(),
            columns: ev
                .properties
                .iter()
                .map(|p| DbtColumn {
                    name: p.name.clone(),
                    description: p.description.clone(),
                    tests: if p.required {
                        vec!["not_null".to_string()]
                    } else {
                        Vec::new()
                    },
                })
                .collect(),
        })
        .collect();

    let schema = DbtSchema { version: 2, models };
    Ok(serde_yaml::to_string(&schema)?)
}
