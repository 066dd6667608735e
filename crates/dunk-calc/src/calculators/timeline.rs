use serde::{Deserialize, Serialize};

use super::constants::weekly_gain_in;
use super::domain::{Experience, TrainingGoal};
use super::intake::{FieldRange, InputError, Validate};
use super::{Calculator, CalculatorKind};
use crate::evaluator::{
    guarded_ratio, tiers, Bands, EvaluationResult, Metric, ThresholdEvaluator, Unit,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineInput {
    pub current_vertical_in: f64,
    pub target_vertical_in: f64,
    pub experience: Experience,
    #[serde(default)]
    pub goal: TrainingGoal,
}

const CURRENT_VERTICAL: FieldRange = FieldRange::new("current_vertical_in", 0.0, 60.0);
const TARGET_VERTICAL: FieldRange = FieldRange::new("target_vertical_in", 0.0, 70.0);

impl Validate for TimelineInput {
    fn validate(&self) -> Result<(), InputError> {
        CURRENT_VERTICAL.check(self.current_vertical_in)?;
        TARGET_VERTICAL.check(self.target_vertical_in)
    }
}

tiers! {
    /// Declared longest program first so rank grows as the goal gets closer.
    pub enum TimelineTier {
        ExtendedProgram => "Extended Program",
        LongTerm => "Long Term",
        MediumTerm => "Medium Term",
        ShortTerm => "Short Term",
        ReadyNow => "Ready Now",
    }
}

pub static TIMELINE_BANDS: Bands<TimelineTier> = Bands::new(
    &[
        (1.0, TimelineTier::ReadyNow),
        (12.0, TimelineTier::ShortTerm),
        (26.0, TimelineTier::MediumTerm),
        (52.0, TimelineTier::LongTerm),
    ],
    TimelineTier::ExtendedProgram,
);

fn vertical_gap(input: &TimelineInput) -> f64 {
    (input.target_vertical_in - input.current_vertical_in).max(0.0)
}

fn weeks_to_goal(input: &TimelineInput) -> f64 {
    guarded_ratio(vertical_gap(input), weekly_gain_in(input.experience))
}

const VERTICAL_GAP: Metric<TimelineInput> =
    Metric::new("vertical_gap", "Inches to gain", Unit::Inches, 1, vertical_gap);

pub const TIMELINE: ThresholdEvaluator<TimelineInput, TimelineTier> = ThresholdEvaluator::new(
    Metric::new(
        "weeks_to_goal",
        "Estimated training time",
        Unit::Weeks,
        1,
        weeks_to_goal,
    ),
    |_| &TIMELINE_BANDS,
    recommendations,
);

fn recommendations(tier: TimelineTier, input: &TimelineInput, weeks: f64) -> Vec<String> {
    let mut lines = Vec::new();
    if weeks > 0.0 {
        lines.push(format!(
            "At about {:.2} inches per week for a {} athlete, plan on roughly {:.0} weeks.",
            weekly_gain_in(input.experience),
            input.experience.label().to_lowercase(),
            weeks.ceil()
        ));
    }

    let advice: &[&str] = match tier {
        TimelineTier::ReadyNow => &[
            "You already jump high enough; spend sessions rehearsing the skill itself.",
            "Hold your current level with one strength and one jump session per week.",
        ],
        TimelineTier::ShortTerm => &[
            "A focused 4-12 week block of strength plus plyometrics should close the gap.",
            "Test every two weeks and adjust volume if progress stalls.",
        ],
        TimelineTier::MediumTerm => &[
            "Plan two training phases: a strength base followed by a power phase.",
            "Keep a training log so small weekly gains stay visible.",
        ],
        TimelineTier::LongTerm => &[
            "Expect most of a year; consistency matters more than any single program.",
            "Consider body composition: losing excess weight raises the vertical too.",
        ],
        TimelineTier::ExtendedProgram => &[
            "The goal is beyond a one-year horizon at typical rates of progress.",
            "Set an intermediate target first and reassess once you reach it.",
        ],
    };
    lines.extend(advice.iter().map(|line| line.to_string()));
    lines.push(goal_tip(input.goal).to_string());
    lines
}

fn goal_tip(goal: TrainingGoal) -> &'static str {
    match goal {
        TrainingGoal::Dunk => {
            "Practice the dunk on a lower rim as you progress so the skill keeps pace with the jump."
        }
        TrainingGoal::VolleyballAttack => {
            "Train the three-step attack approach and block jumps, not just the standing vertical."
        }
        TrainingGoal::GeneralAthleticism => {
            "Mix sprints and change-of-direction work in with jump training for all-round athleticism."
        }
    }
}

/// Weeks of training to reach a target vertical.
pub struct TimelineCalculator;

impl Calculator for TimelineCalculator {
    type Input = TimelineInput;
    const KIND: CalculatorKind = CalculatorKind::TrainingTimeline;

    fn evaluate(input: &TimelineInput) -> EvaluationResult {
        EvaluationResult::new(Self::KIND.slug())
            .with_metric(VERTICAL_GAP.measure(input))
            .with_assessment(TIMELINE.assess(input))
    }
}
