//! Synthetic sample event generation.
//!
//! Fabricates plausible flat records from a plan's property schemas, for
//! testing or mocking downstream pipelines. Randomness and wall-clock time
//! are injectable so tests can pin both and assert exact output.

pub mod export;

pub use export::{samples_to_csv, samples_to_json, samples_to_jsonl};

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::error::TrackingPlanError;
use crate::plan::TrackingPlan;

/// One flat synthetic event record. Field sets differ across records
/// because different events declare different properties; that
/// heterogeneity is expected.
pub type SampleRecord = serde_json::Map<String, Value>;

/// Wall-clock abstraction for sample timestamps.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Default clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Generate `n` sample records with ambient randomness and time.
pub fn generate_samples(
    plan: &TrackingPlan,
    n: usize,
) -> Result<Vec<SampleRecord>, TrackingPlanError> {
    generate_samples_with(plan, n, &mut rand::thread_rng(), &SystemClock)
}

/// Deterministic core of sample generation.
///
/// Each draw picks one event uniformly at random, then synthesizes a value
/// for every declared property by name-based dispatch. Returns exactly `n`
/// records; drawing from a plan with no events is the one invalid-argument
/// condition.
pub fn generate_samples_with<R: Rng + ?Sized>(
    plan: &TrackingPlan,
    n: usize,
    rng: &mut R,
    clock: &dyn Clock,
) -> Result<Vec<SampleRecord>, TrackingPlanError> {
    if plan.events.is_empty() {
        if n == 0 {
            return Ok(Vec::new());
        }
        return Err(TrackingPlanError::EmptyPlan);
    }

    let now = clock.now_utc();
    let mut records = Vec::with_capacity(n);

    for _ in 0..n {
        let ev = &plan.events[rng.gen_range(0..plan.events.len())];
        let mut record = SampleRecord::new();
        record.insert(
            "event_name".to_string(),
            Value::String(ev.event_name.clone()),
        );
        for p in &ev.properties {
            record.insert(p.name.clone(), sample_value(&p.name, rng, now));
        }
        records.push(record);
    }

    debug!(feature = plan.feature_name.as_str(), n, "generated sample events");
    Ok(records)
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Synthesize one property value by property name.
///
/// Unrecognized names fall back to null so schema-only properties still
/// appear as columns in tabular exports.
fn sample_value<R: Rng + ?Sized>(name: &str, rng: &mut R, now: DateTime<Utc>) -> Value {
    match name {
        "user_id" => Value::String(format!("user_{}", rng.gen_range(1..=50))),
        "workspace_id" => Value::String(format!("ws_{}", rng.gen_range(1..=10))),
        "timestamp" => {
            // Up to 24h in the past, ISO 8601 with a literal trailing Z.
            let ts = now - Duration::minutes(rng.gen_range(0..=1440));
            Value::String(ts.to_rfc3339_opts(SecondsFormat::Micros, true))
        }
        "error_code" => Value::String(pick(rng, &["", "E_TIMEOUT", "E_500"]).to_string()),
        "error_message" => {
            Value::String(pick(rng, &["", "Timeout", "Internal server error"]).to_string())
        }
        "element_id" => {
            Value::String(pick(rng, &["cta_primary", "secondary_button", "link_text"]).to_string())
        }
        "page" => Value::String(pick(rng, &["settings", "dashboard", "feature_page"]).to_string()),
        _ => Value::Null,
    }
}
