use super::common::*;
use crate::calculators::{
    Calculator, DunkStyle, InputError, PowerInput, ReachCalculator, Sport, Validate,
};

#[test]
fn arm_span_out_of_proportion_is_rejected() {
    let input = reach(72.0, Some(100.0), Sport::Basketball);

    let error = input.validate().expect_err("arm span far above height");
    assert_eq!(error.field(), "arm_span_in");
    assert!(matches!(error, InputError::Inconsistent { .. }));
}

#[test]
fn arm_span_within_proportion_is_accepted() {
    assert!(reach(72.0, Some(62.0), Sport::General).validate().is_ok());
    assert!(reach(72.0, Some(86.0), Sport::General).validate().is_ok());
}

#[test]
fn out_of_range_vertical_names_the_field() {
    let error = dunk(96.0, 75.0, DunkStyle::OneHand)
        .validate()
        .expect_err("vertical above range");

    assert_eq!(
        error,
        InputError::OutOfRange {
            field: "vertical_jump_in",
            min: 0.0,
            max: 60.0,
            value: 75.0,
        }
    );
    assert_eq!(
        error.to_string(),
        "vertical_jump_in must be between 0 and 60 (found 75)"
    );
}

#[test]
fn non_finite_numbers_are_rejected_before_evaluation() {
    let input = PowerInput {
        vertical_jump_in: f64::INFINITY,
        body_weight_lb: 180.0,
    };

    assert_eq!(
        input.validate(),
        Err(InputError::NotFinite {
            field: "vertical_jump_in"
        })
    );
}

#[test]
fn rim_height_is_checked_only_when_present() {
    let mut input = dunk(96.0, 20.0, DunkStyle::Windmill);
    assert!(input.validate().is_ok());

    input.rim_height_in = Some(20.0);
    assert_eq!(
        input.validate().map_err(|error| error.field()),
        Err("rim_height_in")
    );
}

#[test]
fn json_intake_validates_before_evaluating() {
    let payload = serde_json::json!({
        "height_in": 40.0,
        "gender": "female",
    });

    let error = ReachCalculator::evaluate_json(payload).expect_err("height below range");
    assert!(error.to_string().contains("height_in"));
}
