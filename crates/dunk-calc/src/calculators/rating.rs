use serde::{Deserialize, Serialize};

use super::constants::CENTIMETERS_PER_INCH;
use super::domain::Gender;
use super::intake::{FieldRange, InputError, Validate};
use super::{Calculator, CalculatorKind};
use crate::evaluator::{
    guarded_percent, tiers, Bands, EvaluationResult, Metric, ThresholdEvaluator, Unit,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingInput {
    pub vertical_jump_in: f64,
    pub gender: Gender,
}

const VERTICAL_JUMP: FieldRange = FieldRange::new("vertical_jump_in", 0.0, 60.0);

impl Validate for RatingInput {
    fn validate(&self) -> Result<(), InputError> {
        VERTICAL_JUMP.check(self.vertical_jump_in)
    }
}

tiers! {
    pub enum VerticalRating {
        BelowAverage => "Below Average",
        Average => "Average",
        AboveAverage => "Above Average",
        VeryGood => "Very Good",
        Excellent => "Excellent",
        Elite => "Elite",
    }
}

pub static MALE_BANDS: Bands<VerticalRating> = Bands::new(
    &[
        (16.0, VerticalRating::BelowAverage),
        (20.0, VerticalRating::Average),
        (24.0, VerticalRating::AboveAverage),
        (28.0, VerticalRating::VeryGood),
        (34.0, VerticalRating::Excellent),
    ],
    VerticalRating::Elite,
);

pub static FEMALE_BANDS: Bands<VerticalRating> = Bands::new(
    &[
        (12.0, VerticalRating::BelowAverage),
        (15.0, VerticalRating::Average),
        (18.0, VerticalRating::AboveAverage),
        (22.0, VerticalRating::VeryGood),
        (27.0, VerticalRating::Excellent),
    ],
    VerticalRating::Elite,
);

pub fn bands_for(gender: Gender) -> &'static Bands<VerticalRating> {
    match gender {
        Gender::Male => &MALE_BANDS,
        Gender::Female => &FEMALE_BANDS,
    }
}

/// Lower bound of the elite band for the given gender.
fn elite_threshold(gender: Gender) -> f64 {
    bands_for(gender).bounds().last().unwrap_or(0.0)
}

fn vertical_jump(input: &RatingInput) -> f64 {
    input.vertical_jump_in
}

fn vertical_jump_cm(input: &RatingInput) -> f64 {
    input.vertical_jump_in * CENTIMETERS_PER_INCH
}

fn percent_of_elite(input: &RatingInput) -> f64 {
    guarded_percent(input.vertical_jump_in, elite_threshold(input.gender))
}

const VERTICAL_CM: Metric<RatingInput> = Metric::new(
    "vertical_jump_cm",
    "Vertical jump",
    Unit::Centimeters,
    1,
    vertical_jump_cm,
);

const PERCENT_OF_ELITE: Metric<RatingInput> = Metric::new(
    "percent_of_elite",
    "Share of elite threshold",
    Unit::Percent,
    1,
    percent_of_elite,
);

pub const RATING: ThresholdEvaluator<RatingInput, VerticalRating> = ThresholdEvaluator::new(
    Metric::new(
        "vertical_jump_in",
        "Vertical jump",
        Unit::Inches,
        1,
        vertical_jump,
    ),
    |input| bands_for(input.gender),
    recommendations,
);

fn recommendations(tier: VerticalRating, input: &RatingInput, vertical: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let elite = elite_threshold(input.gender);
    if vertical < elite {
        lines.push(format!(
            "You are {:.1} inches short of the elite mark for {} athletes.",
            elite - vertical,
            input.gender.label().to_lowercase()
        ));
    }

    let advice: &[&str] = match tier {
        VerticalRating::BelowAverage => &[
            "Start with general strength: squats, step-ups, and glute bridges.",
            "Practice jump landings so you can train plyometrics safely later.",
        ],
        VerticalRating::Average => &[
            "Add two short plyometric sessions per week alongside strength training.",
            "Work on a full arm swing; it is worth several inches on its own.",
        ],
        VerticalRating::AboveAverage => &[
            "Use contrast training: pair a heavy lift with an explosive jump in the same set.",
            "Focus on hip extension power with trap-bar jumps and kettlebell swings.",
        ],
        VerticalRating::VeryGood => &[
            "Refine approach mechanics to convert your standing power into game jumps.",
            "Periodize training in blocks so strength and speed peak together.",
        ],
        VerticalRating::Excellent => &[
            "You jump at a level most competitive athletes never reach.",
            "Small gains now come from reactive strength; introduce depth jumps carefully.",
        ],
        VerticalRating::Elite => &[
            "Your vertical is elite; protect it with recovery and tendon health work.",
            "Track jump height under fatigue to manage training load week to week.",
        ],
    };
    lines.extend(advice.iter().map(|line| line.to_string()));
    lines
}

/// Rates a vertical jump against gender-specific norms.
pub struct RatingCalculator;

impl Calculator for RatingCalculator {
    type Input = RatingInput;
    const KIND: CalculatorKind = CalculatorKind::VerticalRating;

    fn evaluate(input: &RatingInput) -> EvaluationResult {
        EvaluationResult::new(Self::KIND.slug())
            .with_assessment(RATING.assess(input))
            .with_metric(VERTICAL_CM.measure(input))
            .with_metric(PERCENT_OF_ELITE.measure(input))
    }
}
