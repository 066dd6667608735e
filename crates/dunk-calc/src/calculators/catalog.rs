use serde::Serialize;

use super::CalculatorKind;
use crate::config::SiteConfig;

/// Public link to another calculator page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedLink {
    pub slug: &'static str,
    pub title: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub canonical_url: String,
    pub related: Vec<RelatedLink>,
}

/// Calculator listing with absolute URLs built from the configured base URL.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(site: &SiteConfig) -> Self {
        let entries = CalculatorKind::ordered()
            .into_iter()
            .map(|kind| CatalogEntry {
                slug: kind.slug(),
                title: kind.title(),
                summary: kind.summary(),
                canonical_url: canonical_url(site, kind),
                related: kind
                    .related()
                    .iter()
                    .map(|related| RelatedLink {
                        slug: related.slug(),
                        title: related.title(),
                        url: canonical_url(site, *related),
                    })
                    .collect(),
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, kind: CalculatorKind) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.slug == kind.slug())
    }
}

pub fn canonical_url(site: &SiteConfig, kind: CalculatorKind) -> String {
    format!("{}/calculators/{}", site.base_url(), kind.slug())
}
