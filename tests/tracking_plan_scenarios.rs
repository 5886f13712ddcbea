//! End-to-end scenarios: build a plan from raw inputs and check every
//! derived artifact against it.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use trackplan::sample::samples_to_csv;
use trackplan::{
    build_plan, generate_samples_with, render_report, render_schema_manifest, Clock,
};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn share_feature_with_click_action() {
    let plan = build_plan("share", "", &strings(&["click invite"]), "web", &[]);

    let names: Vec<&str> = plan.event_names().collect();
    assert_eq!(
        names,
        [
            "share__view",
            "share__start",
            "share__complete",
            "share__click_invite"
        ]
    );

    let click = plan.events.last().unwrap();
    let prop_names: Vec<&str> = click.properties.iter().map(|p| p.name.as_str()).collect();
    assert!(prop_names.contains(&"element_id"));
    assert!(prop_names.contains(&"page"));
    assert!(plan.taxonomy_issues.is_empty());
}

#[test]
fn blank_action_is_skipped_and_feature_name_normalized() {
    let plan = build_plan("a b", "", &strings(&["  "]), "web", &[]);
    assert_eq!(plan.events.len(), 3);
    assert!(plan.event_names().all(|n| n.starts_with("a_b__")));
}

#[test]
fn colliding_action_slugs_yield_a_duplicate_warning() {
    let plan = build_plan("share", "", &strings(&["Sync!", "sync"]), "web", &[]);
    assert!(plan
        .taxonomy_issues
        .iter()
        .any(|i| i.message == "Duplicate event name detected: share__sync"));
}

#[test]
fn event_count_matches_stages_plus_nonblank_actions() {
    let plan = build_plan(
        "checkout",
        "desc",
        &strings(&["pay", "", "cancel"]),
        "web",
        &strings(&["open", "confirm"]),
    );
    assert_eq!(plan.events.len(), 2 + 2);
}

#[test]
fn every_event_carries_the_mandatory_required_triple() {
    let plan = build_plan(
        "checkout",
        "",
        &strings(&["pay with error", "click cta"]),
        "mobile",
        &[],
    );
    for ev in &plan.events {
        for required in ["user_id", "workspace_id", "timestamp"] {
            let prop = ev
                .properties
                .iter()
                .find(|p| p.name == required)
                .unwrap_or_else(|| panic!("{} missing {}", ev.event_name, required));
            assert!(prop.required);
        }
    }
}

#[test]
fn report_and_manifest_agree_with_the_plan() {
    let plan = build_plan(
        "share",
        "Share a workspace.",
        &strings(&["click invite"]),
        "web",
        &[],
    );

    let report = render_report(&plan);
    for name in plan.event_names() {
        assert!(report.contains(&format!("### {}", name)));
    }

    let yaml = render_schema_manifest(&plan).unwrap();
    let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed["version"], serde_yaml::Value::from(2));
    let models = parsed["models"].as_sequence().unwrap();
    assert_eq!(models.len(), plan.events.len());

    // Required property -> exactly one not_null tag; optional -> none.
    let click_cols = models[3]["columns"].as_sequence().unwrap();
    let user_id = &click_cols[0];
    assert_eq!(
        user_id["tests"].as_sequence().unwrap(),
        &vec![serde_yaml::Value::from("not_null")]
    );
    let page = &click_cols[4];
    assert!(page["tests"].as_sequence().unwrap().is_empty());
}

#[test]
fn samples_export_as_csv_with_union_header() {
    let plan = build_plan("share", "", &strings(&["click invite"]), "web", &[]);
    let mut rng = StdRng::seed_from_u64(5);
    let samples = generate_samples_with(&plan, 120, &mut rng, &fixed_clock()).unwrap();
    assert_eq!(samples.len(), 120);

    let csv = samples_to_csv(&samples).unwrap();
    let header = csv.lines().next().unwrap();
    assert!(header.starts_with("event_name,"));
    // 120 draws over 4 events virtually guarantee at least one click row,
    // so the union header carries the click-only columns too.
    assert!(header.contains("element_id"));
    assert_eq!(csv.lines().count(), 121);
}
