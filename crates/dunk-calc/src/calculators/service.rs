use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use super::catalog::{Catalog, CatalogEntry};
use super::{CalculatorError, CalculatorKind};
use crate::config::SiteConfig;
use crate::evaluator::EvaluationResult;

/// Service composing the catalog and calculator dispatch behind one handle.
#[derive(Debug, Clone)]
pub struct CalculatorService {
    site: SiteConfig,
    catalog: Catalog,
}

impl CalculatorService {
    pub fn new(site: SiteConfig) -> Self {
        let catalog = Catalog::new(&site);
        Self { site, catalog }
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        self.catalog.entries()
    }

    pub fn entry(&self, slug: &str) -> Result<&CatalogEntry, CalculatorError> {
        let kind: CalculatorKind = slug.parse()?;
        self.catalog
            .entry(kind)
            .ok_or_else(|| CalculatorError::UnknownCalculator(slug.to_string()))
    }

    /// Evaluate a form payload for the calculator published under `slug`.
    pub fn evaluate(
        &self,
        slug: &str,
        payload: Value,
    ) -> Result<EvaluationResult, CalculatorError> {
        let kind: CalculatorKind = slug.parse()?;

        match kind.evaluate_json(payload) {
            Ok(result) => {
                debug!(
                    calculator = kind.slug(),
                    tier = result.headline_tier().map(|tier| tier.tier),
                    "evaluation complete"
                );
                Ok(result)
            }
            Err(err) => {
                warn!(calculator = kind.slug(), error = %err, "evaluation rejected");
                Err(err)
            }
        }
    }

    pub fn processing_delay(&self) -> Duration {
        self.site.processing_delay()
    }
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
