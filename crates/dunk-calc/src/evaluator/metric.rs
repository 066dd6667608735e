use serde::Serialize;

/// Display unit attached to a computed metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Inches,
    Centimeters,
    Seconds,
    Percent,
    Ratio,
    Weeks,
    Watts,
    WattsPerKilogram,
}

impl Unit {
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Centimeters => "cm",
            Unit::Seconds => "s",
            Unit::Percent => "%",
            Unit::Ratio => "x",
            Unit::Weeks => "weeks",
            Unit::Watts => "W",
            Unit::WattsPerKilogram => "W/kg",
        }
    }
}

/// Named closed-form formula over an input set.
pub struct Metric<I> {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Unit,
    pub precision: u8,
    formula: fn(&I) -> f64,
}

impl<I> Metric<I> {
    /// `precision` is the number of decimals kept for display.
    pub const fn new(
        key: &'static str,
        label: &'static str,
        unit: Unit,
        precision: u8,
        formula: fn(&I) -> f64,
    ) -> Self {
        Self {
            key,
            label,
            unit,
            precision,
            formula,
        }
    }

    /// Raw, unrounded value. Classification always works on this.
    pub fn compute(&self, input: &I) -> f64 {
        (self.formula)(input)
    }

    pub fn result(&self, raw: f64) -> MetricResult {
        MetricResult {
            key: self.key,
            label: self.label,
            unit: self.unit,
            value: round_to(raw, self.precision),
            precision: self.precision,
        }
    }

    pub fn measure(&self, input: &I) -> MetricResult {
        self.result(self.compute(input))
    }
}

/// Display-ready metric value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Unit,
    pub value: f64,
    #[serde(skip)]
    pub precision: u8,
}

impl MetricResult {
    pub fn formatted(&self) -> String {
        let precision = usize::from(self.precision);
        match self.unit {
            Unit::Percent => format!("{:.precision$}%", self.value),
            Unit::Ratio => format!("{:.precision$}x", self.value),
            unit => format!("{:.precision$} {}", self.value, unit.symbol()),
        }
    }
}

/// `numerator / denominator`, or 0 when the denominator is zero, negative, or not finite.
pub fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 && denominator.is_finite() {
        numerator / denominator
    } else {
        0.0
    }
}

/// Percentage of `part` relative to `whole`, guarded like [`guarded_ratio`].
pub fn guarded_percent(part: f64, whole: f64) -> f64 {
    guarded_ratio(part, whole) * 100.0
}

pub fn round_to(value: f64, decimals: u8) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scale = 10f64.powi(i32::from(decimals));
    let rounded = (value * scale).round() / scale;
    // normalise -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_ratio_returns_zero_for_non_positive_denominators() {
        assert_eq!(guarded_ratio(6.0, 0.0), 0.0);
        assert_eq!(guarded_ratio(6.0, -2.0), 0.0);
        assert_eq!(guarded_ratio(6.0, f64::INFINITY), 0.0);
        assert_eq!(guarded_ratio(6.0, 24.0), 0.25);
        assert_eq!(guarded_percent(6.0, 24.0), 25.0);
    }

    #[test]
    fn round_to_uses_requested_precision() {
        assert_eq!(round_to(14.285714, 2), 14.29);
        assert_eq!(round_to(14.285714, 1), 14.3);
        assert_eq!(round_to(0.7049, 2), 0.7);
        assert_eq!(round_to(-0.04, 1), 0.0);
        assert!(round_to(-0.04, 1).is_sign_positive());
        assert_eq!(round_to(f64::NAN, 1), 0.0);
    }

    #[test]
    fn formatted_output_carries_unit() {
        let metric: Metric<f64> = Metric::new("gap", "Gap", Unit::Inches, 1, |value| *value);
        assert_eq!(metric.measure(&6.04).formatted(), "6.0 in");
        let pct: Metric<f64> = Metric::new("pct", "Pct", Unit::Percent, 2, |value| *value);
        assert_eq!(pct.measure(&14.285714).formatted(), "14.29%");
    }
}
