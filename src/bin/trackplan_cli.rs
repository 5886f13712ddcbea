//! Thin command-line front end for the tracking-plan generator.
//!
//! Supplies strings and lists to the core and prints the returned
//! artifact; no plan logic lives here.

use anyhow::Result;
use clap::{Parser, ValueEnum};

use trackplan::input::parse_comma_list;
use trackplan::sample::{samples_to_csv, samples_to_json};
use trackplan::{build_plan, generate_samples, render_report, render_schema_manifest};

#[derive(Parser)]
#[command(
    name = "trackplan_cli",
    about = "Generate an event tracking plan and derived artifacts for a feature"
)]
struct Args {
    /// Feature name, e.g. "workspace_sharing"
    #[arg(long)]
    feature: String,

    /// Free-text feature description
    #[arg(long, default_value = "")]
    description: String,

    /// Primary platform tag (web, mobile, desktop, api, ...)
    #[arg(long, default_value = "web")]
    platform: String,

    /// Key user action; repeat the flag for multiple actions
    #[arg(long = "action")]
    actions: Vec<String>,

    /// Comma-separated funnel stages; empty means view,start,complete
    #[arg(long, default_value = "")]
    stages: String,

    /// Number of synthetic sample events to generate
    #[arg(long, default_value_t = 10)]
    samples: usize,

    /// Which artifact to print
    #[arg(long, value_enum, default_value_t = Output::Report)]
    output: Output,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Report,
    Schema,
    SamplesJson,
    SamplesCsv,
    Issues,
    PlanJson,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let stages = parse_comma_list(&args.stages);
    let plan = build_plan(
        &args.feature,
        &args.description,
        &args.actions,
        &args.platform,
        &stages,
    );

    match args.output {
        Output::Report => println!("{}", render_report(&plan)),
        Output::Schema => println!("{}", render_schema_manifest(&plan)?),
        Output::SamplesJson => {
            let samples = generate_samples(&plan, args.samples)?;
            println!("{}", samples_to_json(&samples)?);
        }
        Output::SamplesCsv => {
            let samples = generate_samples(&plan, args.samples)?;
            print!("{}", samples_to_csv(&samples)?);
        }
        Output::Issues => {
            if plan.taxonomy_issues.is_empty() {
                println!("No taxonomy issues detected.");
            } else {
                for issue in &plan.taxonomy_issues {
                    println!("- {}", issue);
                }
            }
        }
        Output::PlanJson => println!("{}", serde_json::to_string_pretty(&plan)?),
    }

    Ok(())
}
