use serde::{Deserialize, Serialize};

use super::intake::{FieldRange, InputError, Validate};
use super::{Calculator, CalculatorKind};
use crate::evaluator::{
    guarded_percent, tiers, Bands, EvaluationResult, Metric, ThresholdEvaluator, Unit,
};

/// Jump heights measured fresh and after a fatiguing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueInput {
    pub rested_jump_in: f64,
    pub fatigued_jump_in: f64,
}

const RESTED_JUMP: FieldRange = FieldRange::new("rested_jump_in", 0.0, 60.0);
const FATIGUED_JUMP: FieldRange = FieldRange::new("fatigued_jump_in", 0.0, 60.0);

impl Validate for FatigueInput {
    fn validate(&self) -> Result<(), InputError> {
        RESTED_JUMP.check(self.rested_jump_in)?;
        FATIGUED_JUMP.check(self.fatigued_jump_in)
    }
}

tiers! {
    /// Declared from most to least fatigued so rank grows with freshness.
    pub enum FatigueTier {
        SevereFatigue => "Severe Fatigue",
        HighFatigue => "High Fatigue",
        ModerateFatigue => "Moderate Fatigue",
        MildFatigue => "Mild Fatigue",
        MinimalFatigue => "Minimal Fatigue",
    }
}

pub static FATIGUE_BANDS: Bands<FatigueTier> = Bands::new(
    &[
        (5.0, FatigueTier::MinimalFatigue),
        (10.0, FatigueTier::MildFatigue),
        (20.0, FatigueTier::ModerateFatigue),
        (30.0, FatigueTier::HighFatigue),
    ],
    FatigueTier::SevereFatigue,
);

fn jump_loss(input: &FatigueInput) -> f64 {
    (input.rested_jump_in - input.fatigued_jump_in).max(0.0)
}

fn performance_drop(input: &FatigueInput) -> f64 {
    guarded_percent(jump_loss(input), input.rested_jump_in)
}

const JUMP_LOSS: Metric<FatigueInput> =
    Metric::new("jump_loss", "Jump height lost", Unit::Inches, 1, jump_loss);

const PERFORMANCE_DROP: Metric<FatigueInput> = Metric::new(
    "performance_drop_pct",
    "Performance drop",
    Unit::Percent,
    2,
    performance_drop,
);

pub const FATIGUE_INDEX: ThresholdEvaluator<FatigueInput, FatigueTier> = ThresholdEvaluator::new(
    Metric::new(
        "fatigue_index",
        "Fatigue index",
        Unit::Percent,
        1,
        performance_drop,
    ),
    |_| &FATIGUE_BANDS,
    recommendations,
);

fn recommendations(tier: FatigueTier, _input: &FatigueInput, _index: f64) -> Vec<String> {
    let advice: &[&str] = match tier {
        FatigueTier::MinimalFatigue => &[
            "Your nervous system is fresh; this is a good day for max-effort jumps.",
            "Keep sessions short enough that the last rep still looks like the first.",
        ],
        FatigueTier::MildFatigue => &[
            "Some fatigue is showing; cap remaining jump sets at two or three quality reps.",
            "Allow 24 hours before the next high-intensity plyometric session.",
        ],
        FatigueTier::ModerateFatigue => &[
            "Stop maximal jumping for today; further reps train you to jump lower.",
            "Allow 48 hours of recovery with light mobility and easy aerobic work.",
            "Review sleep and nutrition if moderate fatigue shows up after short sessions.",
        ],
        FatigueTier::HighFatigue => &[
            "High fatigue raises injury risk; end explosive work for this session.",
            "Take two to three days before the next jump-focused workout.",
            "Reduce weekly jump volume by a third until fresh scores return.",
        ],
        FatigueTier::SevereFatigue => &[
            "Severe drop-off suggests accumulated overreaching rather than one hard session.",
            "Schedule a deload week with no plyometrics and reduced lifting volume.",
            "Retest rested vertical after the deload before resuming normal training.",
        ],
    };
    advice.iter().map(|line| line.to_string()).collect()
}

/// Jump drop-off between rested and fatigued attempts.
pub struct FatigueCalculator;

impl Calculator for FatigueCalculator {
    type Input = FatigueInput;
    const KIND: CalculatorKind = CalculatorKind::Fatigue;

    fn evaluate(input: &FatigueInput) -> EvaluationResult {
        EvaluationResult::new(Self::KIND.slug())
            .with_metric(JUMP_LOSS.measure(input))
            .with_metric(PERFORMANCE_DROP.measure(input))
            .with_assessment(FATIGUE_INDEX.assess(input))
    }
}
