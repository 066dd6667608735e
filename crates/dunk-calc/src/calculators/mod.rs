//! Concrete jump calculators, their intake validation, catalog, and HTTP surface.
//!
//! Each calculator is a unit struct implementing [`Calculator`]; [`CalculatorKind`] is the
//! strategy table that maps public slugs onto those implementations.

pub mod approach;
pub mod catalog;
pub mod constants;
pub mod domain;
pub mod dunk;
pub mod fatigue;
pub mod hang_time;
pub mod intake;
pub mod power;
pub mod rating;
pub mod reach;
pub mod router;
pub mod service;
pub mod timeline;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::evaluator::EvaluationResult;

pub use approach::{ApproachCalculator, ApproachInput, JumperProfile};
pub use catalog::{Catalog, CatalogEntry, RelatedLink};
pub use domain::{DunkStyle, Experience, Gender, Sport, TrainingGoal};
pub use dunk::{DunkCalculator, DunkInput, DunkReadiness};
pub use fatigue::{FatigueCalculator, FatigueInput, FatigueTier};
pub use hang_time::{HangTimeCalculator, HangTimeInput, HangTimeTier};
pub use intake::{FieldRange, InputError, Validate};
pub use power::{PowerCalculator, PowerInput, PowerTier};
pub use rating::{RatingCalculator, RatingInput, VerticalRating};
pub use reach::{ReachCalculator, ReachInput, ReachTier};
pub use router::calculator_router;
pub use service::CalculatorService;
pub use timeline::{TimelineCalculator, TimelineInput, TimelineTier};

/// Binds an input schema to a pure evaluation.
pub trait Calculator {
    type Input: DeserializeOwned + Validate;
    const KIND: CalculatorKind;

    /// Assumes `input` already passed [`Validate::validate`].
    fn evaluate(input: &Self::Input) -> EvaluationResult;

    /// Deserialize, validate, then evaluate a JSON form payload.
    fn evaluate_json(payload: Value) -> Result<EvaluationResult, CalculatorError> {
        let input: Self::Input = serde_json::from_value(payload)?;
        input.validate()?;
        Ok(Self::evaluate(&input))
    }
}

/// Every calculator published on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    CanIDunk,
    HangTime,
    ApproachVsStanding,
    StandingReach,
    Fatigue,
    VerticalRating,
    TrainingTimeline,
    JumpPower,
}

impl CalculatorKind {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::CanIDunk,
            Self::HangTime,
            Self::ApproachVsStanding,
            Self::StandingReach,
            Self::Fatigue,
            Self::VerticalRating,
            Self::TrainingTimeline,
            Self::JumpPower,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::CanIDunk => "can-i-dunk",
            Self::HangTime => "hang-time",
            Self::ApproachVsStanding => "approach-vs-standing",
            Self::StandingReach => "standing-reach",
            Self::Fatigue => "fatigue",
            Self::VerticalRating => "vertical-rating",
            Self::TrainingTimeline => "training-timeline",
            Self::JumpPower => "jump-power",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::CanIDunk => "Can I Dunk? Calculator",
            Self::HangTime => "Hang Time Calculator",
            Self::ApproachVsStanding => "Approach vs Standing Vertical Calculator",
            Self::StandingReach => "Standing Reach Calculator",
            Self::Fatigue => "Jump Fatigue Calculator",
            Self::VerticalRating => "Vertical Jump Rating",
            Self::TrainingTimeline => "Dunk Training Timeline",
            Self::JumpPower => "Jump Power Calculator",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::CanIDunk => {
                "Compare your reach and vertical with the rim to see how close you are to dunking."
            }
            Self::HangTime => "Convert vertical jump height into time spent in the air.",
            Self::ApproachVsStanding => {
                "Measure how much a running approach adds to your standing vertical."
            }
            Self::StandingReach => {
                "Estimate standing reach from height, gender, and optional arm span."
            }
            Self::Fatigue => "Quantify jump drop-off between rested and fatigued attempts.",
            Self::VerticalRating => "Rate your vertical jump against gender-specific norms.",
            Self::TrainingTimeline => {
                "Estimate the weeks of training needed to reach a target vertical."
            }
            Self::JumpPower => "Estimate peak power and power-to-weight from your vertical jump.",
        }
    }

    /// Cross-links shown alongside a calculator.
    pub const fn related(self) -> &'static [CalculatorKind] {
        match self {
            Self::CanIDunk => &[Self::StandingReach, Self::TrainingTimeline, Self::VerticalRating],
            Self::HangTime => &[Self::VerticalRating, Self::JumpPower],
            Self::ApproachVsStanding => &[Self::CanIDunk, Self::VerticalRating],
            Self::StandingReach => &[Self::CanIDunk, Self::ApproachVsStanding],
            Self::Fatigue => &[Self::TrainingTimeline, Self::VerticalRating],
            Self::VerticalRating => &[Self::HangTime, Self::JumpPower, Self::CanIDunk],
            Self::TrainingTimeline => &[Self::CanIDunk, Self::Fatigue],
            Self::JumpPower => &[Self::VerticalRating, Self::HangTime],
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(slug))
    }

    /// Dispatch a raw JSON payload to the matching calculator.
    pub fn evaluate_json(self, payload: Value) -> Result<EvaluationResult, CalculatorError> {
        match self {
            Self::CanIDunk => DunkCalculator::evaluate_json(payload),
            Self::HangTime => HangTimeCalculator::evaluate_json(payload),
            Self::ApproachVsStanding => ApproachCalculator::evaluate_json(payload),
            Self::StandingReach => ReachCalculator::evaluate_json(payload),
            Self::Fatigue => FatigueCalculator::evaluate_json(payload),
            Self::VerticalRating => RatingCalculator::evaluate_json(payload),
            Self::TrainingTimeline => TimelineCalculator::evaluate_json(payload),
            Self::JumpPower => PowerCalculator::evaluate_json(payload),
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CalculatorKind {
    type Err = CalculatorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_slug(value).ok_or_else(|| CalculatorError::UnknownCalculator(value.to_string()))
    }
}

/// Error raised when a form payload cannot be evaluated.
#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    #[error("unknown calculator '{0}'")]
    UnknownCalculator(String),
    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] InputError),
}
