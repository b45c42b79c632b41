//! The extraction pipeline.

use tracing::{debug, warn};

use crate::assign::assign;
use crate::catalog::Catalog;
use crate::config::{EngineConfig, ScorerKind};
use crate::error::{BuildError, ExtractError};
use crate::locate::FuzzyLocator;
use crate::normalize::FoldedText;
use crate::overlap::resolve;
use crate::quantity::QuantityExtractor;
use crate::result::ExtractionResult;
use crate::scorer::{JaroWinklerScorer, LevenshteinScorer, PartialScorer};
use crate::validate::validate;

/// Compiled, immutable extraction engine.
///
/// Holds no per-request state; one instance can serve any number of
/// concurrent callers.
pub struct Engine {
    config: EngineConfig,
    scorer: Box<dyn PartialScorer>,
    quantities: QuantityExtractor,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Build an engine with the scorer named in the configuration.
    ///
    /// # Errors
    /// Returns an error if the unit vocabulary or thresholds are invalid.
    pub fn new(config: EngineConfig) -> Result<Self, BuildError> {
        let scorer: Box<dyn PartialScorer> = match config.scorer {
            ScorerKind::Levenshtein => Box::new(LevenshteinScorer),
            ScorerKind::JaroWinkler => Box::new(JaroWinklerScorer),
        };
        Self::with_scorer(config, scorer)
    }

    /// Build an engine around a caller-provided scorer.
    ///
    /// # Errors
    /// Returns an error if the unit vocabulary or thresholds are invalid.
    pub fn with_scorer(
        config: EngineConfig,
        scorer: Box<dyn PartialScorer>,
    ) -> Result<Self, BuildError> {
        for threshold in [config.threshold.threshold, config.threshold.strict_threshold] {
            if !(0.0..=100.0).contains(&threshold) {
                return Err(BuildError::Threshold(threshold));
            }
        }
        let quantities = QuantityExtractor::new(&config.units)?;
        Ok(Self {
            config,
            scorer,
            quantities,
        })
    }

    /// Engine with default configuration.
    ///
    /// # Errors
    /// Returns an error if the default configuration fails to compile.
    pub fn with_defaults() -> Result<Self, BuildError> {
        Self::new(EngineConfig::default())
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract a product → quantity mapping from `text`.
    ///
    /// # Errors
    /// Returns an error only for malformed input: an empty catalog, empty
    /// text, or unusable product names. Unmatched products, duplicates and
    /// count mismatches come back as a flagged result.
    pub fn extract<S: AsRef<str>>(
        &self,
        products: &[S],
        text: &str,
    ) -> Result<ExtractionResult, ExtractError> {
        let catalog = Catalog::new(products)?;
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyText);
        }

        let folded = FoldedText::new(text);
        let threshold = self.config.threshold.threshold_for(&catalog);
        debug!(
            products = catalog.len(),
            text_len = text.len(),
            threshold,
            "starting extraction"
        );

        let locator = FuzzyLocator::new(self.scorer.as_ref(), threshold)
            .with_repeated_scan(self.config.repeated_scan)
            .with_max_occurrences(self.config.max_occurrences_per_product);
        let candidates = locator.locate_all(&catalog, &folded, self.config.parallel);
        let located = candidates.len();
        let accepted = resolve(&catalog, candidates);

        let tokens = self.quantities.extract(text);
        debug!(
            located,
            accepted = accepted.len(),
            quantities = tokens.len(),
            "matched products and quantities"
        );

        let assignments = assign(&accepted, &tokens);
        let verdict = validate(&catalog, &accepted, tokens.len());
        if let Some(reason) = verdict.reason() {
            warn!(%reason, "extraction flagged for review");
        }

        Ok(ExtractionResult::build(&catalog, &assignments, &verdict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThresholdPolicy;

    #[test]
    fn rejects_out_of_range_threshold() {
        let config = EngineConfig {
            threshold: ThresholdPolicy {
                threshold: 120.0,
                ..ThresholdPolicy::default()
            },
            ..EngineConfig::default()
        };
        assert!(matches!(Engine::new(config), Err(BuildError::Threshold(_))));
    }

    #[test]
    fn rejects_empty_text() {
        let engine = Engine::with_defaults().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            engine.extract(&["iPhone 16"], "   ").err(),
            Some(ExtractError::EmptyText)
        );
    }

    #[test]
    fn custom_scorer_is_used() {
        struct Never;
        impl PartialScorer for Never {
            fn ratio(&self, _pattern: &str, _candidate: &str) -> f64 {
                0.0
            }
        }
        let engine = Engine::with_scorer(EngineConfig::default(), Box::new(Never))
            .unwrap_or_else(|e| panic!("{e}"));
        let result = engine
            .extract(&["iPhone 16"], "iPhone 16 3 units")
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(result.reason(), Some("no products matched in the text"));
    }
}
