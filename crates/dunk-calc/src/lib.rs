//! Jump-performance calculators built on a single threshold evaluator.
//!
//! Every calculator follows the same shape: typed inputs are validated at intake, one or more
//! closed-form metrics are computed, the headline metric is placed into an ordered tier, and
//! static recommendation text is selected for that tier.

pub mod calculators;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod telemetry;
