//! Physical and anthropometric constants shared by the calculators.

use super::domain::{DunkStyle, Experience, Gender, Sport};

/// Regulation rim height (10 ft).
pub const RIM_HEIGHT_IN: f64 = 120.0;

/// Standard gravity, m/s².
pub const GRAVITY_MPS2: f64 = 9.81;

pub const METERS_PER_INCH: f64 = 0.0254;
pub const CENTIMETERS_PER_INCH: f64 = 2.54;
pub const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;

/// Sayers peak-power equation: W = a·jump_cm + b·mass_kg − c.
pub mod sayers {
    pub const JUMP_COEFFICIENT: f64 = 60.7;
    pub const MASS_COEFFICIENT: f64 = 45.3;
    pub const INTERCEPT: f64 = 2055.0;
}

/// Height the hand must clear above the rim for each style.
pub const fn clearance_in(style: DunkStyle) -> f64 {
    match style {
        DunkStyle::RimTouch => 0.0,
        DunkStyle::OneHand => 6.0,
        DunkStyle::TwoHand => 8.0,
        DunkStyle::Windmill => 12.0,
    }
}

/// Typical standing reach as a multiple of height.
pub const fn reach_ratio(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 1.33,
        Gender::Female => 1.32,
    }
}

/// Share of the arm-span excess (as a fraction of height) that shows up in reach.
pub const APE_INDEX_WEIGHT: f64 = 0.5;

pub const fn sport_modifier(sport: Sport) -> f64 {
    match sport {
        Sport::Basketball => 1.0,
        Sport::Volleyball => 1.01,
        Sport::General => 1.0,
    }
}

/// Expected vertical gain per week of structured training, inches.
pub const fn weekly_gain_in(experience: Experience) -> f64 {
    match experience {
        Experience::Beginner => 0.5,
        Experience::Intermediate => 0.3,
        Experience::Advanced => 0.15,
    }
}
