use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::quantity::DEFAULT_UNITS;

/// Which partial scorer the locator uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    #[default]
    Levenshtein,
    JaroWinkler,
}

/// How the similarity threshold is chosen for a catalog.
///
/// Catalogs dominated by short names get the strict threshold, since short
/// names are easily found inside longer words ("Pro" inside "Product").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    #[serde(default = "ThresholdPolicy::default_threshold")]
    pub threshold: f64,
    #[serde(default = "ThresholdPolicy::default_strict_threshold")]
    pub strict_threshold: f64,
    #[serde(default = "ThresholdPolicy::default_short_name_max_chars")]
    pub short_name_max_chars: usize,
    #[serde(default = "ThresholdPolicy::default_short_name_ratio")]
    pub short_name_ratio: f64,
    /// Always use `threshold`, ignoring catalog shape.
    #[serde(default)]
    pub fixed: bool,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            strict_threshold: Self::default_strict_threshold(),
            short_name_max_chars: Self::default_short_name_max_chars(),
            short_name_ratio: Self::default_short_name_ratio(),
            fixed: false,
        }
    }
}

impl ThresholdPolicy {
    const fn default_threshold() -> f64 {
        90.0
    }

    const fn default_strict_threshold() -> f64 {
        95.0
    }

    const fn default_short_name_max_chars() -> usize {
        5
    }

    const fn default_short_name_ratio() -> f64 {
        0.5
    }

    /// Threshold to apply for this catalog.
    #[must_use]
    pub fn threshold_for(&self, catalog: &Catalog) -> f64 {
        if self.fixed || catalog.is_empty() {
            return self.threshold;
        }
        let short = catalog
            .entries()
            .iter()
            .filter(|entry| entry.folded.len() <= self.short_name_max_chars)
            .count();
        if short as f64 / catalog.len() as f64 >= self.short_name_ratio {
            self.strict_threshold
        } else {
            self.threshold
        }
    }
}

/// Per-engine configuration. Passed in explicitly; the engine keeps no global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub threshold: ThresholdPolicy,
    /// Mask each found span and search again to discover repeated products.
    #[serde(default = "EngineConfig::default_repeated_scan")]
    pub repeated_scan: bool,
    #[serde(default = "EngineConfig::default_max_occurrences")]
    pub max_occurrences_per_product: usize,
    #[serde(default)]
    pub scorer: ScorerKind,
    #[serde(default = "EngineConfig::default_units")]
    pub units: Vec<String>,
    /// Locate products on the rayon pool.
    #[serde(default = "EngineConfig::default_parallel")]
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: ThresholdPolicy::default(),
            repeated_scan: Self::default_repeated_scan(),
            max_occurrences_per_product: Self::default_max_occurrences(),
            scorer: ScorerKind::default(),
            units: Self::default_units(),
            parallel: Self::default_parallel(),
        }
    }
}

impl EngineConfig {
    const fn default_repeated_scan() -> bool {
        true
    }

    const fn default_max_occurrences() -> usize {
        8
    }

    fn default_units() -> Vec<String> {
        DEFAULT_UNITS.iter().map(ToString::to_string).collect()
    }

    const fn default_parallel() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_catalog_uses_strict_threshold() {
        let policy = ThresholdPolicy::default();
        let short = Catalog::new(&["Pro", "Max", "iPhone 16 Pro"]).unwrap_or_else(|e| panic!("{e}"));
        let long = Catalog::new(&["iPhone 16", "Samsung Galaxy S25"]).unwrap_or_else(|e| panic!("{e}"));
        assert!((policy.threshold_for(&short) - 95.0).abs() < f64::EPSILON);
        assert!((policy.threshold_for(&long) - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fixed_policy_ignores_catalog_shape() {
        let policy = ThresholdPolicy {
            fixed: true,
            ..ThresholdPolicy::default()
        };
        let short = Catalog::new(&["Pro"]).unwrap_or_else(|e| panic!("{e}"));
        assert!((policy.threshold_for(&short) - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"scorer": "jaro_winkler", "threshold": {"threshold": 85}}"#)
                .expect("partial config should deserialize");
        assert_eq!(config.scorer, ScorerKind::JaroWinkler);
        assert!((config.threshold.threshold - 85.0).abs() < f64::EPSILON);
        assert!((config.threshold.strict_threshold - 95.0).abs() < f64::EPSILON);
        assert!(config.repeated_scan);
        assert_eq!(config.units.len(), DEFAULT_UNITS.len());
    }
}
