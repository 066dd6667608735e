use axum::response::Response;
use serde_json::Value;

use crate::calculators::{
    ApproachInput, DunkInput, DunkStyle, Experience, FatigueInput, Gender, HangTimeInput,
    PowerInput, RatingInput, ReachInput, Sport, TimelineInput, TrainingGoal,
};
use crate::config::SiteConfig;
use crate::evaluator::{EvaluationResult, TierAssignment};

pub(super) fn dunk(standing_reach_in: f64, vertical_jump_in: f64, style: DunkStyle) -> DunkInput {
    DunkInput {
        standing_reach_in,
        vertical_jump_in,
        rim_height_in: None,
        style,
    }
}

pub(super) fn hang_time(vertical_jump_in: f64) -> HangTimeInput {
    HangTimeInput { vertical_jump_in }
}

pub(super) fn approach(standing_jump_in: f64, approach_jump_in: f64) -> ApproachInput {
    ApproachInput {
        standing_jump_in,
        approach_jump_in,
    }
}

pub(super) fn reach(height_in: f64, arm_span_in: Option<f64>, sport: Sport) -> ReachInput {
    ReachInput {
        height_in,
        gender: Gender::Male,
        arm_span_in,
        sport,
    }
}

pub(super) fn fatigue(rested_jump_in: f64, fatigued_jump_in: f64) -> FatigueInput {
    FatigueInput {
        rested_jump_in,
        fatigued_jump_in,
    }
}

pub(super) fn rating(vertical_jump_in: f64, gender: Gender) -> RatingInput {
    RatingInput {
        vertical_jump_in,
        gender,
    }
}

pub(super) fn timeline(current: f64, target: f64, experience: Experience) -> TimelineInput {
    TimelineInput {
        current_vertical_in: current,
        target_vertical_in: target,
        experience,
        goal: TrainingGoal::Dunk,
    }
}

pub(super) fn power(vertical_jump_in: f64, body_weight_lb: f64) -> PowerInput {
    PowerInput {
        vertical_jump_in,
        body_weight_lb,
    }
}

pub(super) fn site() -> SiteConfig {
    SiteConfig::new("https://dunkcalc.test/").expect("valid base url")
}

pub(super) fn metric_value(result: &EvaluationResult, key: &str) -> f64 {
    result
        .metric(key)
        .unwrap_or_else(|| panic!("metric {key} missing from {result:?}"))
        .value
}

pub(super) fn headline(result: &EvaluationResult) -> &TierAssignment {
    result.headline_tier().expect("a classified metric")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
