use serde::{Deserialize, Serialize};

use super::constants::{clearance_in, RIM_HEIGHT_IN};
use super::domain::DunkStyle;
use super::intake::{FieldRange, InputError, Validate};
use super::{Calculator, CalculatorKind};
use crate::evaluator::{round_to, tiers, Bands, EvaluationResult, Metric, ThresholdEvaluator, Unit};

/// Form fields for the "can I dunk" calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DunkInput {
    pub standing_reach_in: f64,
    pub vertical_jump_in: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rim_height_in: Option<f64>,
    #[serde(default)]
    pub style: DunkStyle,
}

impl DunkInput {
    pub fn rim_height(&self) -> f64 {
        self.rim_height_in.unwrap_or(RIM_HEIGHT_IN)
    }
}

const STANDING_REACH: FieldRange = FieldRange::new("standing_reach_in", 48.0, 132.0);
const VERTICAL_JUMP: FieldRange = FieldRange::new("vertical_jump_in", 0.0, 60.0);
const RIM_HEIGHT: FieldRange = FieldRange::new("rim_height_in", 60.0, 132.0);

impl Validate for DunkInput {
    fn validate(&self) -> Result<(), InputError> {
        STANDING_REACH.check(self.standing_reach_in)?;
        VERTICAL_JUMP.check(self.vertical_jump_in)?;
        RIM_HEIGHT.check_optional(self.rim_height_in)
    }
}

tiers! {
    /// How close the athlete is to finishing the chosen dunk.
    pub enum DunkReadiness {
        LongWayToGo => "Long Way to Go",
        BuildingUp => "Building Up",
        AlmostThere => "Almost There",
        CanDunk => "Can Dunk",
        DunkingWithEase => "Dunking With Ease",
    }
}

pub static READINESS_BANDS: Bands<DunkReadiness> = Bands::new(
    &[
        (-12.0, DunkReadiness::LongWayToGo),
        (-6.0, DunkReadiness::BuildingUp),
        (0.0, DunkReadiness::AlmostThere),
        (4.0, DunkReadiness::CanDunk),
    ],
    DunkReadiness::DunkingWithEase,
);

fn required_jump(input: &DunkInput) -> f64 {
    (input.rim_height() + clearance_in(input.style) - input.standing_reach_in).max(0.0)
}

fn jump_margin(input: &DunkInput) -> f64 {
    input.vertical_jump_in - required_jump(input)
}

fn max_reach(input: &DunkInput) -> f64 {
    input.standing_reach_in + input.vertical_jump_in
}

const REQUIRED_JUMP: Metric<DunkInput> = Metric::new(
    "required_jump",
    "Required vertical jump",
    Unit::Inches,
    1,
    required_jump,
);

const MAX_REACH: Metric<DunkInput> =
    Metric::new("max_reach", "Maximum touch height", Unit::Inches, 1, max_reach);

pub const READINESS: ThresholdEvaluator<DunkInput, DunkReadiness> = ThresholdEvaluator::new(
    Metric::new("jump_margin", "Jump margin", Unit::Inches, 1, jump_margin),
    |_| &READINESS_BANDS,
    recommendations,
);

fn recommendations(tier: DunkReadiness, input: &DunkInput, margin: f64) -> Vec<String> {
    let shown = round_to(margin, 1);
    let headline = if shown < 0.0 {
        format!(
            "Add {:.1} inches to your vertical to finish a {}.",
            -shown,
            input.style.label()
        )
    } else {
        format!(
            "You clear the {} requirement by {:.1} inches.",
            input.style.label(),
            shown
        )
    };

    let mut lines = vec![headline];
    lines.extend(readiness_advice(tier).iter().map(|line| line.to_string()));
    lines
}

fn readiness_advice(tier: DunkReadiness) -> &'static [&'static str] {
    match tier {
        DunkReadiness::LongWayToGo => &[
            "Build a strength base with squats and Romanian deadlifts two to three times a week.",
            "Use a lower rim or a smaller ball to practice the dunk motion safely.",
        ],
        DunkReadiness::BuildingUp => &[
            "Combine heavy lower-body lifts with low-volume plyometrics such as box jumps.",
            "Work on a consistent two-step or three-step approach to add approach lift.",
        ],
        DunkReadiness::AlmostThere => &[
            "Sharpen approach speed and penultimate step mechanics for the last few inches.",
            "Practice palming or grip strength so the ball stays secure at the rim.",
            "Test your jump fresh, after a rest day, to see your true ceiling.",
        ],
        DunkReadiness::CanDunk => &[
            "Repeat dunks in short, fresh sets to make the movement automatic.",
            "Maintain jump strength with one heavy lower-body session per week.",
        ],
        DunkReadiness::DunkingWithEase => &[
            "Progress to harder variations such as two-hand, reverse, or windmill dunks.",
            "Keep plyometric volume moderate to protect knees and ankles.",
        ],
    }
}

/// Required jump, margin, and max reach for a chosen dunk style.
pub struct DunkCalculator;

impl Calculator for DunkCalculator {
    type Input = DunkInput;
    const KIND: CalculatorKind = CalculatorKind::CanIDunk;

    fn evaluate(input: &DunkInput) -> EvaluationResult {
        EvaluationResult::new(Self::KIND.slug())
            .with_metric(REQUIRED_JUMP.measure(input))
            .with_assessment(READINESS.assess(input))
            .with_metric(MAX_REACH.measure(input))
    }
}
