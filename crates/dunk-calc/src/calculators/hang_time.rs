use serde::{Deserialize, Serialize};

use super::constants::{CENTIMETERS_PER_INCH, GRAVITY_MPS2, METERS_PER_INCH};
use super::intake::{FieldRange, InputError, Validate};
use super::{Calculator, CalculatorKind};
use crate::evaluator::{tiers, Bands, EvaluationResult, Metric, ThresholdEvaluator, Unit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HangTimeInput {
    pub vertical_jump_in: f64,
}

const VERTICAL_JUMP: FieldRange = FieldRange::new("vertical_jump_in", 0.0, 60.0);

impl Validate for HangTimeInput {
    fn validate(&self) -> Result<(), InputError> {
        VERTICAL_JUMP.check(self.vertical_jump_in)
    }
}

tiers! {
    pub enum HangTimeTier {
        BelowAverage => "Below Average",
        Average => "Average",
        AboveAverage => "Above Average",
        Excellent => "Excellent",
        Elite => "Elite",
    }
}

pub static HANG_TIME_BANDS: Bands<HangTimeTier> = Bands::new(
    &[
        (0.55, HangTimeTier::BelowAverage),
        (0.70, HangTimeTier::Average),
        (0.80, HangTimeTier::AboveAverage),
        (0.90, HangTimeTier::Excellent),
    ],
    HangTimeTier::Elite,
);

/// Total flight time, `2·sqrt(2h/g)`, for a jump of height `h`.
pub fn flight_time_s(jump_height_in: f64) -> f64 {
    let height_m = jump_height_in.max(0.0) * METERS_PER_INCH;
    2.0 * (2.0 * height_m / GRAVITY_MPS2).sqrt()
}

fn hang_time(input: &HangTimeInput) -> f64 {
    flight_time_s(input.vertical_jump_in)
}

fn jump_height_cm(input: &HangTimeInput) -> f64 {
    input.vertical_jump_in.max(0.0) * CENTIMETERS_PER_INCH
}

const JUMP_HEIGHT: Metric<HangTimeInput> =
    Metric::new("jump_height_cm", "Jump height", Unit::Centimeters, 1, jump_height_cm);

pub const HANG_TIME: ThresholdEvaluator<HangTimeInput, HangTimeTier> = ThresholdEvaluator::new(
    Metric::new("hang_time_s", "Hang time", Unit::Seconds, 2, hang_time),
    |_| &HANG_TIME_BANDS,
    recommendations,
);

fn recommendations(tier: HangTimeTier, _input: &HangTimeInput, seconds: f64) -> Vec<String> {
    let mut lines = vec![format!(
        "You spend about {:.2} seconds in the air, half of it rising and half falling.",
        seconds
    )];
    let advice: &[&str] = match tier {
        HangTimeTier::BelowAverage => &[
            "Hang time only grows with jump height; focus on leg strength before flashy drills.",
            "Start with bodyweight squats, lunges, and calf raises three times a week.",
        ],
        HangTimeTier::Average => &[
            "Add low box jumps and broad jumps to teach fast force production.",
            "Track your vertical every two weeks to see hang time climb with it.",
        ],
        HangTimeTier::AboveAverage => &[
            "Layer depth jumps onto your strength work to improve reactive strength.",
            "Tuck the knees late at the peak to make the float look longer.",
        ],
        HangTimeTier::Excellent => &[
            "Your flight time is in the range of strong college athletes.",
            "Prioritize recovery and sprint work to keep the elastic qualities sharp.",
        ],
        HangTimeTier::Elite => &[
            "Few athletes break 0.9 seconds; you are in professional territory.",
            "Maintain rather than chase volume; small gains now cost a lot of training stress.",
        ],
    };
    lines.extend(advice.iter().map(|line| line.to_string()));
    lines
}

/// Flight time from vertical jump height.
pub struct HangTimeCalculator;

impl Calculator for HangTimeCalculator {
    type Input = HangTimeInput;
    const KIND: CalculatorKind = CalculatorKind::HangTime;

    fn evaluate(input: &HangTimeInput) -> EvaluationResult {
        EvaluationResult::new(Self::KIND.slug())
            .with_assessment(HANG_TIME.assess(input))
            .with_metric(JUMP_HEIGHT.measure(input))
    }
}
