use super::tier::Tier;

/// Ordered threshold table covering the whole real line.
///
/// `edges` holds `(bound, tier)` pairs in ascending bound order. A value selects the tier of the
/// first bound it is strictly below; values at or above the last bound select `top`. A value
/// equal to a bound therefore lands in the band above it.
#[derive(Debug)]
pub struct Bands<T: 'static> {
    edges: &'static [(f64, T)],
    top: T,
}

impl<T: Tier> Bands<T> {
    pub const fn new(edges: &'static [(f64, T)], top: T) -> Self {
        Self { edges, top }
    }

    /// First-match-wins scan from the lowest bound upward.
    ///
    /// NaN never compares below a bound, so it is pinned to the lowest band instead of
    /// silently reaching the top tier.
    pub fn classify(&self, value: f64) -> T {
        if value.is_nan() {
            return self.lowest();
        }

        self.edges
            .iter()
            .find(|(bound, _)| value < *bound)
            .map(|(_, tier)| *tier)
            .unwrap_or(self.top)
    }

    pub fn lowest(&self) -> T {
        self.edges.first().map(|(_, tier)| *tier).unwrap_or(self.top)
    }

    pub fn top(&self) -> T {
        self.top
    }

    pub fn bounds(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.iter().map(|(bound, _)| *bound)
    }

    /// Number of distinct bands, including the open-ended top band.
    pub fn band_count(&self) -> usize {
        self.edges.len() + 1
    }
}
