use serde::{Deserialize, Serialize};

use super::constants::{reach_ratio, sport_modifier, APE_INDEX_WEIGHT, RIM_HEIGHT_IN};
use super::domain::{Gender, Sport};
use super::intake::{FieldRange, InputError, Validate};
use super::{Calculator, CalculatorKind};
use crate::evaluator::{
    guarded_ratio, tiers, Bands, EvaluationResult, Metric, ThresholdEvaluator, Unit,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReachInput {
    pub height_in: f64,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_span_in: Option<f64>,
    #[serde(default)]
    pub sport: Sport,
}

const HEIGHT: FieldRange = FieldRange::new("height_in", 48.0, 96.0);
const ARM_SPAN: FieldRange = FieldRange::new("arm_span_in", 48.0, 108.0);

/// Arm span outside this multiple of height is almost certainly a typo.
const ARM_SPAN_TO_HEIGHT: (f64, f64) = (0.85, 1.2);

impl Validate for ReachInput {
    fn validate(&self) -> Result<(), InputError> {
        HEIGHT.check(self.height_in)?;
        ARM_SPAN.check_optional(self.arm_span_in)?;

        if let Some(span) = self.arm_span_in {
            let ratio = span / self.height_in;
            if ratio < ARM_SPAN_TO_HEIGHT.0 || ratio > ARM_SPAN_TO_HEIGHT.1 {
                return Err(InputError::Inconsistent {
                    field: "arm_span_in",
                    reason: "arm span must be within 85% to 120% of height",
                });
            }
        }

        Ok(())
    }
}

tiers! {
    pub enum ReachTier {
        BelowAverage => "Below Average",
        Average => "Average",
        AboveAverage => "Above Average",
        Excellent => "Excellent",
        Exceptional => "Exceptional",
    }
}

pub static REACH_BANDS: Bands<ReachTier> = Bands::new(
    &[
        (1.28, ReachTier::BelowAverage),
        (1.31, ReachTier::Average),
        (1.34, ReachTier::AboveAverage),
        (1.37, ReachTier::Excellent),
    ],
    ReachTier::Exceptional,
);

fn ape_adjustment(input: &ReachInput) -> f64 {
    input
        .arm_span_in
        .map(|span| APE_INDEX_WEIGHT * guarded_ratio(span - input.height_in, input.height_in))
        .unwrap_or(0.0)
}

fn estimated_reach(input: &ReachInput) -> f64 {
    let ratio = reach_ratio(input.gender) + ape_adjustment(input);
    input.height_in * ratio * sport_modifier(input.sport)
}

fn reach_to_height(input: &ReachInput) -> f64 {
    guarded_ratio(estimated_reach(input), input.height_in)
}

fn rim_gap(input: &ReachInput) -> f64 {
    (RIM_HEIGHT_IN - estimated_reach(input)).max(0.0)
}

const ESTIMATED_REACH: Metric<ReachInput> = Metric::new(
    "estimated_reach",
    "Estimated standing reach",
    Unit::Inches,
    1,
    estimated_reach,
);

const RIM_GAP: Metric<ReachInput> =
    Metric::new("rim_gap", "Distance to the rim", Unit::Inches, 1, rim_gap);

pub const REACH_RATIO: ThresholdEvaluator<ReachInput, ReachTier> = ThresholdEvaluator::new(
    Metric::new(
        "reach_ratio",
        "Reach-to-height ratio",
        Unit::Ratio,
        2,
        reach_to_height,
    ),
    |_| &REACH_BANDS,
    recommendations,
);

fn recommendations(tier: ReachTier, input: &ReachInput, _ratio: f64) -> Vec<String> {
    let advice: &[&str] = match tier {
        ReachTier::BelowAverage => &[
            "Your reach is short for your height, so every inch of vertical matters more.",
            "Measure reach against a wall with the arm fully extended to confirm the estimate.",
        ],
        ReachTier::Average => &[
            "Your reach is typical for your height; the rim gap comes down to jump training.",
            "Shoulder mobility work can add a little usable reach at full extension.",
        ],
        ReachTier::AboveAverage => &[
            "Your reach gives you a head start on the rim compared with most athletes your height.",
            "Pair it with a solid approach jump to turn the reach advantage into dunks.",
        ],
        ReachTier::Excellent => &[
            "Long arms relative to height cut the vertical you need for every dunk.",
            "Reach-heavy athletes benefit most from one-hand finishes on the dominant side.",
        ],
        ReachTier::Exceptional => &[
            "Your reach is rare; small vertical gains translate directly into rim height.",
            "Confirm with a measured standing reach before planning training around it.",
        ],
    };

    let mut lines: Vec<String> = advice.iter().map(|line| line.to_string()).collect();
    lines.push(sport_tip(input.sport).to_string());
    lines
}

fn sport_tip(sport: Sport) -> &'static str {
    match sport {
        Sport::Basketball => {
            "Basketball combines measure reach flat-footed with both arms; match that when you compare."
        }
        Sport::Volleyball => {
            "Volleyball reach is taken one arm overhead on the toes of the flat foot, which reads slightly higher."
        }
        Sport::General => {
            "Retest reach every few months while still growing; it tracks height closely."
        }
    }
}

/// Standing reach estimate from height, gender, and optional arm span.
pub struct ReachCalculator;

impl Calculator for ReachCalculator {
    type Input = ReachInput;
    const KIND: CalculatorKind = CalculatorKind::StandingReach;

    fn evaluate(input: &ReachInput) -> EvaluationResult {
        EvaluationResult::new(Self::KIND.slug())
            .with_metric(ESTIMATED_REACH.measure(input))
            .with_assessment(REACH_RATIO.assess(input))
            .with_metric(RIM_GAP.measure(input))
    }
}
