use serde::{Deserialize, Serialize};

use super::intake::{FieldRange, InputError, Validate};
use super::{Calculator, CalculatorKind};
use crate::evaluator::{
    guarded_percent, tiers, Bands, EvaluationResult, Metric, ThresholdEvaluator, Unit,
};

/// Standing versus running-approach vertical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachInput {
    pub standing_jump_in: f64,
    pub approach_jump_in: f64,
}

const STANDING_JUMP: FieldRange = FieldRange::new("standing_jump_in", 0.0, 60.0);
const APPROACH_JUMP: FieldRange = FieldRange::new("approach_jump_in", 0.0, 70.0);

impl Validate for ApproachInput {
    fn validate(&self) -> Result<(), InputError> {
        STANDING_JUMP.check(self.standing_jump_in)?;
        APPROACH_JUMP.check(self.approach_jump_in)
    }
}

tiers! {
    /// Jumper profile by how much the approach adds over a standing jump.
    pub enum JumperProfile {
        PowerJumper => "Power Jumper",
        DevelopingApproach => "Developing Approach",
        BalancedJumper => "Balanced Jumper",
        ElasticJumper => "Elastic Jumper",
    }
}

pub static PROFILE_BANDS: Bands<JumperProfile> = Bands::new(
    &[
        (5.0, JumperProfile::PowerJumper),
        (15.0, JumperProfile::DevelopingApproach),
        (30.0, JumperProfile::BalancedJumper),
    ],
    JumperProfile::ElasticJumper,
);

fn approach_advantage(input: &ApproachInput) -> f64 {
    input.approach_jump_in - input.standing_jump_in
}

fn advantage_pct(input: &ApproachInput) -> f64 {
    guarded_percent(approach_advantage(input), input.standing_jump_in)
}

const ADVANTAGE: Metric<ApproachInput> = Metric::new(
    "approach_advantage",
    "Approach advantage",
    Unit::Inches,
    1,
    approach_advantage,
);

pub const PROFILE: ThresholdEvaluator<ApproachInput, JumperProfile> = ThresholdEvaluator::new(
    Metric::new(
        "advantage_pct",
        "Approach advantage",
        Unit::Percent,
        1,
        advantage_pct,
    ),
    |_| &PROFILE_BANDS,
    recommendations,
);

fn recommendations(tier: JumperProfile, input: &ApproachInput, pct: f64) -> Vec<String> {
    let mut lines = Vec::new();
    if approach_advantage(input) < 0.0 {
        lines.push(
            "Your approach jump is lower than your standing jump; slow the approach down until the plant feels controlled."
                .to_string(),
        );
    } else {
        lines.push(format!(
            "Your approach adds {:.1}% on top of your standing vertical.",
            pct
        ));
    }

    let advice: &[&str] = match tier {
        JumperProfile::PowerJumper => &[
            "You rely on raw strength; approach technique is your biggest untapped gain.",
            "Drill the penultimate step and arm swing with run-up jumps at submaximal speed.",
        ],
        JumperProfile::DevelopingApproach => &[
            "Gradually lengthen the approach and add speed while keeping the final two steps quick.",
            "Add bounding and single-leg hops to build elastic stiffness.",
        ],
        JumperProfile::BalancedJumper => &[
            "Strength and elasticity are in balance; train both with heavy lifts and plyometrics.",
            "Test one-foot and two-foot takeoffs to find your stronger style.",
        ],
        JumperProfile::ElasticJumper => &[
            "You convert speed into height very well; more strength will raise both jumps.",
            "Emphasize squats, trap-bar deadlifts, and loaded jumps in the next training block.",
        ],
    };
    lines.extend(advice.iter().map(|line| line.to_string()));
    lines
}

/// Approach advantage in inches and as a share of standing jump.
pub struct ApproachCalculator;

impl Calculator for ApproachCalculator {
    type Input = ApproachInput;
    const KIND: CalculatorKind = CalculatorKind::ApproachVsStanding;

    fn evaluate(input: &ApproachInput) -> EvaluationResult {
        EvaluationResult::new(Self::KIND.slug())
            .with_metric(ADVANTAGE.measure(input))
            .with_assessment(PROFILE.assess(input))
    }
}
