//! Generic threshold evaluator shared by every calculator.
//!
//! An evaluation is a pure function of its input: compute a metric, place the unrounded value in
//! a band table, pick the recommendation text for that band, then round for display.

mod bands;
mod metric;
mod tier;

pub use bands::Bands;
pub use metric::{guarded_percent, guarded_ratio, round_to, Metric, MetricResult, Unit};
pub(crate) use tier::tiers;
pub use tier::{Tier, TierAssignment};

use serde::Serialize;
use tracing::debug;

/// One classified metric: formula, band selection, and recommendation lookup.
pub struct ThresholdEvaluator<I: 'static, T: Tier> {
    pub metric: Metric<I>,
    bands: fn(&I) -> &'static Bands<T>,
    recommend: fn(T, &I, f64) -> Vec<String>,
}

impl<I: 'static, T: Tier> ThresholdEvaluator<I, T> {
    /// `bands` may ignore its input (fixed table) or select a table from a secondary field such as
    /// gender. `recommend` receives the tier, the input, and the raw metric for interpolation.
    pub const fn new(
        metric: Metric<I>,
        bands: fn(&I) -> &'static Bands<T>,
        recommend: fn(T, &I, f64) -> Vec<String>,
    ) -> Self {
        Self {
            metric,
            bands,
            recommend,
        }
    }

    pub fn compute_metric(&self, input: &I) -> f64 {
        self.metric.compute(input)
    }

    pub fn bands_for(&self, input: &I) -> &'static Bands<T> {
        (self.bands)(input)
    }

    pub fn classify(&self, input: &I, value: f64) -> T {
        self.bands_for(input).classify(value)
    }

    pub fn select_recommendations(&self, tier: T, input: &I, value: f64) -> Vec<String> {
        (self.recommend)(tier, input, value)
    }

    pub fn assess(&self, input: &I) -> Assessment<T> {
        let raw = self.compute_metric(input);
        let tier = self.classify(input, raw);
        let recommendations = self.select_recommendations(tier, input, raw);

        debug!(
            metric = self.metric.key,
            value = raw,
            tier = tier.label(),
            "metric classified"
        );

        Assessment {
            raw,
            tier,
            metric: self.metric.result(raw),
            recommendations,
        }
    }
}

/// Outcome of a single [`ThresholdEvaluator`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment<T> {
    pub raw: f64,
    pub tier: T,
    pub metric: MetricResult,
    pub recommendations: Vec<String>,
}

/// Aggregate handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub calculator: &'static str,
    pub metrics: Vec<MetricResult>,
    pub tiers: Vec<TierAssignment>,
    pub recommendations: Vec<String>,
}

impl EvaluationResult {
    pub fn new(calculator: &'static str) -> Self {
        Self {
            calculator,
            metrics: Vec::new(),
            tiers: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn with_metric(mut self, metric: MetricResult) -> Self {
        self.metrics.push(metric);
        self
    }

    pub fn with_assessment<T: Tier>(mut self, assessment: Assessment<T>) -> Self {
        let Assessment {
            tier,
            metric,
            recommendations,
            ..
        } = assessment;

        self.tiers.push(TierAssignment::new(metric.key, tier));
        self.metrics.push(metric);
        self.recommendations.extend(recommendations);
        self
    }

    pub fn metric(&self, key: &str) -> Option<&MetricResult> {
        self.metrics.iter().find(|metric| metric.key == key)
    }

    pub fn tier(&self, metric_key: &str) -> Option<&TierAssignment> {
        self.tiers.iter().find(|tier| tier.metric == metric_key)
    }

    /// Tier of the first classified metric.
    pub fn headline_tier(&self) -> Option<&TierAssignment> {
        self.tiers.first()
    }
}
