use crate::infra::{parse_payload, read_payload_file};
use clap::Args;
use dunk_calc::calculators::{CalculatorKind, CalculatorService, CatalogEntry};
use dunk_calc::config::AppConfig;
use dunk_calc::error::AppError;
use dunk_calc::evaluator::EvaluationResult;
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Calculator slug, e.g. can-i-dunk or hang-time
    pub(crate) slug: String,
    /// Input set as inline JSON
    #[arg(long, conflicts_with = "input_file", required_unless_present = "input_file")]
    pub(crate) input: Option<String>,
    /// Path to a JSON file holding the input set
    #[arg(long)]
    pub(crate) input_file: Option<PathBuf>,
    /// Print the raw evaluation result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

fn load_service() -> Result<CalculatorService, AppError> {
    let config = AppConfig::load()?;
    Ok(CalculatorService::new(config.site))
}

pub(crate) fn run_list() -> Result<(), AppError> {
    let service = load_service()?;

    println!("Available calculators");
    for entry in service.catalog() {
        println!("- {} ({})", entry.title, entry.slug);
        println!("  {}", entry.summary);
        println!("  {}", entry.canonical_url);
    }

    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        slug,
        input,
        input_file,
        json,
    } = args;

    let payload = match (input, input_file) {
        (Some(raw), _) => parse_payload(&raw)?,
        (None, Some(path)) => read_payload_file(&path)?,
        (None, None) => parse_payload("{}")?,
    };

    let service = load_service()?;
    let entry = service.entry(&slug)?.clone();
    let result = service.evaluate(&slug, payload)?;

    if json {
        let rendered = serde_json::to_string_pretty(&result).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_result(&entry, &result);
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = load_service()?;

    println!("Dunk calculator demo");
    println!("Sample athlete: 6'0\" male, 24 in vertical, 176 lb");
    for kind in CalculatorKind::ordered() {
        let entry = service.entry(kind.slug())?.clone();
        match service.evaluate(kind.slug(), demo_payload(kind)) {
            Ok(result) => {
                println!();
                render_result(&entry, &result);
            }
            Err(err) => println!("\n{}: evaluation unavailable ({err})", entry.title),
        }
    }

    Ok(())
}

/// Canned input set describing the same sample athlete for each calculator.
pub(crate) fn demo_payload(kind: CalculatorKind) -> Value {
    match kind {
        CalculatorKind::CanIDunk => json!({
            "standing_reach_in": 96.0,
            "vertical_jump_in": 24.0,
            "style": "one_hand",
        }),
        CalculatorKind::HangTime => json!({ "vertical_jump_in": 24.0 }),
        CalculatorKind::ApproachVsStanding => json!({
            "standing_jump_in": 24.0,
            "approach_jump_in": 30.0,
        }),
        CalculatorKind::StandingReach => json!({
            "height_in": 72.0,
            "gender": "male",
            "arm_span_in": 74.0,
            "sport": "basketball",
        }),
        CalculatorKind::Fatigue => json!({
            "rested_jump_in": 24.0,
            "fatigued_jump_in": 21.5,
        }),
        CalculatorKind::VerticalRating => json!({
            "vertical_jump_in": 24.0,
            "gender": "male",
        }),
        CalculatorKind::TrainingTimeline => json!({
            "current_vertical_in": 24.0,
            "target_vertical_in": 30.0,
            "experience": "intermediate",
            "goal": "dunk",
        }),
        CalculatorKind::JumpPower => json!({
            "vertical_jump_in": 24.0,
            "body_weight_lb": 176.0,
        }),
    }
}

pub(crate) fn render_result(entry: &CatalogEntry, result: &EvaluationResult) {
    println!("{}", entry.title);
    for metric in &result.metrics {
        match result.tier(metric.key) {
            Some(tier) => println!(
                "- {}: {} -> {} ({}/{})",
                metric.label,
                metric.formatted(),
                tier.tier,
                tier.rank + 1,
                tier.levels
            ),
            None => println!("- {}: {}", metric.label, metric.formatted()),
        }
    }

    if !result.recommendations.is_empty() {
        println!("Recommendations");
        for line in &result.recommendations {
            println!("  - {line}");
        }
    }
    println!("More: {}", entry.canonical_url);
}
