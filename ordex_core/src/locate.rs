//! Fuzzy location of catalog products in order text.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, CatalogEntry};
use crate::normalize::FoldedText;
use crate::scorer::PartialScorer;

/// Slack for floating point noise when comparing a score to the threshold.
const SCORE_EPSILON: f64 = 1e-9;

/// A claimed byte span `[start, end)` of the original text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    /// Catalog position of the matched product.
    pub product: usize,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

impl Occurrence {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

pub struct FuzzyLocator<'a> {
    scorer: &'a dyn PartialScorer,
    threshold: f64,
    repeated_scan: bool,
    max_occurrences: usize,
}

impl<'a> FuzzyLocator<'a> {
    #[must_use]
    pub fn new(scorer: &'a dyn PartialScorer, threshold: f64) -> Self {
        Self {
            scorer,
            threshold,
            repeated_scan: true,
            max_occurrences: 8,
        }
    }

    #[must_use]
    pub const fn with_repeated_scan(mut self, enabled: bool) -> Self {
        self.repeated_scan = enabled;
        self
    }

    #[must_use]
    pub fn with_max_occurrences(mut self, max: usize) -> Self {
        self.max_occurrences = max.max(1);
        self
    }

    /// Every occurrence of one product that clears the threshold.
    ///
    /// With repeated scan enabled each hit is masked in a private copy of the
    /// folded text and the search runs again, so a product written twice
    /// yields two occurrences instead of one strong match.
    #[must_use]
    pub fn locate(&self, entry: &CatalogEntry, text: &FoldedText) -> Vec<Occurrence> {
        let mut working = text.clone();
        let mut found = Vec::new();

        while found.len() < self.max_occurrences {
            let Some(alignment) = self.scorer.best_alignment(&entry.folded, working.chars())
            else {
                break;
            };
            if alignment.score + SCORE_EPSILON < self.threshold {
                break;
            }
            let Some((start, end)) = working.byte_span(alignment.start, alignment.end) else {
                break;
            };
            working.mask(alignment.start, alignment.end);

            debug!(
                product = %entry.name,
                start,
                end,
                score = alignment.score,
                "located occurrence"
            );
            found.push(Occurrence {
                product: entry.position,
                start,
                end,
                score: alignment.score,
            });

            if !self.repeated_scan {
                break;
            }
        }

        found
    }

    /// Locate every catalog product, longest names first.
    ///
    /// The output order only depends on the catalog, even when `parallel`
    /// spreads the work across the rayon pool.
    #[must_use]
    pub fn locate_all(&self, catalog: &Catalog, text: &FoldedText, parallel: bool) -> Vec<Occurrence> {
        let ordered = catalog.by_priority();
        let per_product: Vec<Vec<Occurrence>> = if parallel {
            ordered
                .par_iter()
                .map(|entry| self.locate(entry, text))
                .collect()
        } else {
            ordered.iter().map(|entry| self.locate(entry, text)).collect()
        };
        per_product.into_iter().flatten().collect()
    }
}
