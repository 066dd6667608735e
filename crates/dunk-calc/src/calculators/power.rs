use serde::{Deserialize, Serialize};

use super::constants::{sayers, CENTIMETERS_PER_INCH, KILOGRAMS_PER_POUND};
use super::intake::{FieldRange, InputError, Validate};
use super::{Calculator, CalculatorKind};
use crate::evaluator::{
    guarded_ratio, tiers, Bands, EvaluationResult, Metric, ThresholdEvaluator, Unit,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerInput {
    pub vertical_jump_in: f64,
    pub body_weight_lb: f64,
}

impl PowerInput {
    fn mass_kg(&self) -> f64 {
        self.body_weight_lb * KILOGRAMS_PER_POUND
    }
}

const VERTICAL_JUMP: FieldRange = FieldRange::new("vertical_jump_in", 0.0, 60.0);
const BODY_WEIGHT: FieldRange = FieldRange::new("body_weight_lb", 60.0, 400.0);

impl Validate for PowerInput {
    fn validate(&self) -> Result<(), InputError> {
        VERTICAL_JUMP.check(self.vertical_jump_in)?;
        BODY_WEIGHT.check(self.body_weight_lb)
    }
}

tiers! {
    pub enum PowerTier {
        BelowAverage => "Below Average",
        Average => "Average",
        AboveAverage => "Above Average",
        Excellent => "Excellent",
        Elite => "Elite",
    }
}

pub static POWER_BANDS: Bands<PowerTier> = Bands::new(
    &[
        (40.0, PowerTier::BelowAverage),
        (50.0, PowerTier::Average),
        (60.0, PowerTier::AboveAverage),
        (70.0, PowerTier::Excellent),
    ],
    PowerTier::Elite,
);

fn peak_power(input: &PowerInput) -> f64 {
    let jump_cm = input.vertical_jump_in * CENTIMETERS_PER_INCH;
    (sayers::JUMP_COEFFICIENT * jump_cm + sayers::MASS_COEFFICIENT * input.mass_kg()
        - sayers::INTERCEPT)
        .max(0.0)
}

fn power_to_weight(input: &PowerInput) -> f64 {
    guarded_ratio(peak_power(input), input.mass_kg())
}

const PEAK_POWER: Metric<PowerInput> =
    Metric::new("peak_power_w", "Peak power", Unit::Watts, 0, peak_power);

pub const POWER_TO_WEIGHT: ThresholdEvaluator<PowerInput, PowerTier> = ThresholdEvaluator::new(
    Metric::new(
        "power_to_weight",
        "Power-to-weight",
        Unit::WattsPerKilogram,
        1,
        power_to_weight,
    ),
    |_| &POWER_BANDS,
    recommendations,
);

fn recommendations(tier: PowerTier, _input: &PowerInput, _watts_per_kg: f64) -> Vec<String> {
    let advice: &[&str] = match tier {
        PowerTier::BelowAverage => &[
            "Build maximal strength first; power rests on the force you can produce.",
            "Add two full-body strength sessions per week with progressive loading.",
        ],
        PowerTier::Average => &[
            "Combine strength work with jump squats at light loads to raise rate of force development.",
            "Track body weight alongside jump height; both move this number.",
        ],
        PowerTier::AboveAverage => &[
            "Olympic lift derivatives such as hang cleans can push power output further.",
            "Keep rest periods long between explosive sets so every rep is maximal.",
        ],
        PowerTier::Excellent => &[
            "You produce power well above typical athletes for your size.",
            "Focus on transferring it with sport-specific jumps and sprint starts.",
        ],
        PowerTier::Elite => &[
            "Your power-to-weight is elite; manage fatigue to keep it there.",
            "Use velocity-based training to keep sessions explosive rather than grinding.",
        ],
    };
    advice.iter().map(|line| line.to_string()).collect()
}

/// Sayers peak power and power-to-weight from a vertical jump.
pub struct PowerCalculator;

impl Calculator for PowerCalculator {
    type Input = PowerInput;
    const KIND: CalculatorKind = CalculatorKind::JumpPower;

    fn evaluate(input: &PowerInput) -> EvaluationResult {
        EvaluationResult::new(Self::KIND.slug())
            .with_metric(PEAK_POWER.measure(input))
            .with_assessment(POWER_TO_WEIGHT.assess(input))
    }
}
