use dunk_calc::calculators::{
    approach, dunk, fatigue, hang_time, power, rating, reach, timeline, ApproachInput,
    Calculator, DunkCalculator, DunkInput, DunkStyle, Experience, FatigueCalculator,
    FatigueInput, Gender, HangTimeCalculator, HangTimeInput, PowerCalculator, PowerInput,
    RatingCalculator, RatingInput, ReachCalculator, ReachInput, Sport, TimelineCalculator,
    TimelineInput, TrainingGoal,
};
use dunk_calc::evaluator::{guarded_percent, guarded_ratio, round_to, Bands, Tier};
use proptest::prelude::*;

fn dunk_style() -> impl Strategy<Value = DunkStyle> {
    prop_oneof![
        Just(DunkStyle::RimTouch),
        Just(DunkStyle::OneHand),
        Just(DunkStyle::TwoHand),
        Just(DunkStyle::Windmill),
    ]
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn experience() -> impl Strategy<Value = Experience> {
    prop_oneof![
        Just(Experience::Beginner),
        Just(Experience::Intermediate),
        Just(Experience::Advanced),
    ]
}

prop_compose! {
    fn dunk_input()(
        standing_reach_in in 48.0f64..=132.0,
        vertical_jump_in in 0.0f64..=60.0,
        style in dunk_style(),
    ) -> DunkInput {
        DunkInput { standing_reach_in, vertical_jump_in, rim_height_in: None, style }
    }
}

/// Every value lands in exactly one band, and the tier is constant across that band.
fn assert_total<T: Tier>(bands: &Bands<T>, value: f64) -> Result<(), TestCaseError> {
    let bounds: Vec<f64> = bands.bounds().collect();
    let lowers: Vec<f64> = std::iter::once(f64::NEG_INFINITY)
        .chain(bounds.iter().copied())
        .collect();
    let uppers: Vec<f64> = bounds
        .iter()
        .copied()
        .chain(std::iter::once(f64::INFINITY))
        .collect();

    let hits: Vec<usize> = (0..bands.band_count())
        .filter(|&index| value >= lowers[index] && value < uppers[index])
        .collect();
    prop_assert_eq!(hits.len(), 1, "value {} matched bands {:?}", value, hits);

    let expected = match hits[0] {
        0 => bands.lowest(),
        index if index == bounds.len() => bands.top(),
        index => bands.classify(lowers[index]),
    };
    prop_assert_eq!(bands.classify(value), expected);
    Ok(())
}

proptest! {
    #[test]
    fn prop_evaluation_is_deterministic(input in dunk_input()) {
        let first = DunkCalculator::evaluate(&input);
        let second = DunkCalculator::evaluate(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_band_tables_are_total(value in -100.0f64..200.0) {
        assert_total(&dunk::READINESS_BANDS, value)?;
        assert_total(&hang_time::HANG_TIME_BANDS, value)?;
        assert_total(&approach::PROFILE_BANDS, value)?;
        assert_total(&reach::REACH_BANDS, value / 50.0)?;
        assert_total(&fatigue::FATIGUE_BANDS, value)?;
        assert_total(&rating::MALE_BANDS, value)?;
        assert_total(&rating::FEMALE_BANDS, value)?;
        assert_total(&timeline::TIMELINE_BANDS, value)?;
        assert_total(&power::POWER_BANDS, value)?;
    }

    #[test]
    fn prop_zero_denominator_yields_zero(numerator in -1.0e6f64..1.0e6) {
        prop_assert_eq!(guarded_ratio(numerator, 0.0), 0.0);
        prop_assert_eq!(guarded_ratio(numerator, -3.0), 0.0);
        prop_assert_eq!(guarded_percent(numerator, 0.0), 0.0);
    }

    #[test]
    fn prop_tier_is_assigned_from_the_unrounded_value(input in dunk_input()) {
        let assessment = dunk::READINESS.assess(&input);
        let raw = dunk::READINESS.compute_metric(&input);

        prop_assert_eq!(assessment.raw, raw);
        prop_assert_eq!(assessment.tier, dunk::READINESS_BANDS.classify(raw));
        prop_assert_eq!(assessment.metric.value, round_to(raw, 1));
    }

    #[test]
    fn prop_higher_vertical_never_lowers_dunk_readiness(
        input in dunk_input(),
        extra in 0.0f64..20.0,
    ) {
        let mut higher = input.clone();
        higher.vertical_jump_in = (input.vertical_jump_in + extra).min(60.0);

        let base = DunkCalculator::evaluate(&input);
        let lifted = DunkCalculator::evaluate(&higher);
        prop_assert!(lifted.tiers[0].rank >= base.tiers[0].rank);
    }

    #[test]
    fn prop_higher_standing_reach_never_lowers_dunk_readiness(
        input in dunk_input(),
        extra in 0.0f64..30.0,
    ) {
        let mut taller = input.clone();
        taller.standing_reach_in = (input.standing_reach_in + extra).min(132.0);

        let base = DunkCalculator::evaluate(&input);
        let lifted = DunkCalculator::evaluate(&taller);
        prop_assert!(lifted.tiers[0].rank >= base.tiers[0].rank);
    }

    #[test]
    fn prop_higher_vertical_never_lowers_hang_time(
        vertical in 0.0f64..=60.0,
        extra in 0.0f64..10.0,
    ) {
        let base = HangTimeCalculator::evaluate(&HangTimeInput { vertical_jump_in: vertical });
        let lifted = HangTimeCalculator::evaluate(&HangTimeInput {
            vertical_jump_in: (vertical + extra).min(60.0),
        });
        prop_assert!(lifted.tiers[0].rank >= base.tiers[0].rank);
        prop_assert!(
            lifted.metric("hang_time_s").map(|m| m.value)
                >= base.metric("hang_time_s").map(|m| m.value)
        );
    }

    #[test]
    fn prop_higher_vertical_never_lowers_rating(
        vertical in 0.0f64..=60.0,
        extra in 0.0f64..10.0,
        gender in gender(),
    ) {
        let base = RatingCalculator::evaluate(&RatingInput { vertical_jump_in: vertical, gender });
        let lifted = RatingCalculator::evaluate(&RatingInput {
            vertical_jump_in: (vertical + extra).min(60.0),
            gender,
        });
        prop_assert!(lifted.tiers[0].rank >= base.tiers[0].rank);
    }

    #[test]
    fn prop_higher_vertical_never_lowers_power_tier(
        vertical in 0.0f64..=60.0,
        extra in 0.0f64..10.0,
        body_weight_lb in 60.0f64..=400.0,
    ) {
        let base = PowerCalculator::evaluate(&PowerInput {
            vertical_jump_in: vertical,
            body_weight_lb,
        });
        let lifted = PowerCalculator::evaluate(&PowerInput {
            vertical_jump_in: (vertical + extra).min(60.0),
            body_weight_lb,
        });
        prop_assert!(lifted.tiers[0].rank >= base.tiers[0].rank);
    }

    #[test]
    fn prop_longer_arm_span_never_lowers_reach(
        height_in in 60.0f64..=84.0,
        span_ratio in 0.85f64..=1.1,
        extra_ratio in 0.0f64..=0.1,
        gender in gender(),
    ) {
        let shorter = ReachInput {
            height_in,
            gender,
            arm_span_in: Some(height_in * span_ratio),
            sport: Sport::General,
        };
        let longer = ReachInput {
            arm_span_in: Some(height_in * (span_ratio + extra_ratio)),
            ..shorter.clone()
        };

        let base = ReachCalculator::evaluate(&shorter);
        let lifted = ReachCalculator::evaluate(&longer);
        prop_assert!(lifted.tiers[0].rank >= base.tiers[0].rank);
    }

    #[test]
    fn prop_fresher_legs_never_raise_fatigue(
        rested in 1.0f64..=60.0,
        fatigued_share in 0.0f64..=1.0,
        recovery in 0.0f64..=0.5,
    ) {
        let tired = FatigueInput {
            rested_jump_in: rested,
            fatigued_jump_in: rested * fatigued_share,
        };
        let fresher = FatigueInput {
            fatigued_jump_in: (rested * (fatigued_share + recovery)).min(60.0),
            ..tired.clone()
        };

        let base = FatigueCalculator::evaluate(&tired);
        let improved = FatigueCalculator::evaluate(&fresher);
        prop_assert!(improved.tiers[0].rank >= base.tiers[0].rank);
    }

    #[test]
    fn prop_higher_current_vertical_never_lengthens_timeline(
        current in 0.0f64..=60.0,
        extra in 0.0f64..10.0,
        target in 0.0f64..=70.0,
        experience in experience(),
    ) {
        let base = TimelineInput {
            current_vertical_in: current,
            target_vertical_in: target,
            experience,
            goal: TrainingGoal::Dunk,
        };
        let closer = TimelineInput {
            current_vertical_in: (current + extra).min(60.0),
            ..base.clone()
        };

        let base = TimelineCalculator::evaluate(&base);
        let closer = TimelineCalculator::evaluate(&closer);
        prop_assert!(closer.tiers[0].rank >= base.tiers[0].rank);
    }

    #[test]
    fn prop_approach_percent_matches_inches(
        standing in 1.0f64..=60.0,
        approach_jump in 0.0f64..=70.0,
    ) {
        let input = ApproachInput { standing_jump_in: standing, approach_jump_in: approach_jump };
        let raw = approach::PROFILE.compute_metric(&input);
        prop_assert!((raw - (approach_jump - standing) / standing * 100.0).abs() < 1e-9);
    }
}

#[test]
fn band_edges_are_exclusive_upper_bounds() {
    let edges: Vec<f64> = power::POWER_BANDS.bounds().collect();
    for pair in edges.windows(2) {
        let below = power::POWER_BANDS.classify(pair[1] - 1e-9);
        let at = power::POWER_BANDS.classify(pair[1]);
        assert_ne!(below, at, "edge {} should open a new band", pair[1]);
        assert_eq!(power::POWER_BANDS.classify(pair[0]), below);
    }
    assert_eq!(
        power::POWER_BANDS.classify(f64::NAN),
        power::POWER_BANDS.lowest()
    );
}
