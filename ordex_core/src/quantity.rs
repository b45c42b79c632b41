//! Quantity token recognition.

use regex::Regex;
use serde::Serialize;

use crate::error::BuildError;

/// Unit vocabulary recognised when none is configured.
pub const DEFAULT_UNITS: &[&str] = &[
    "units", "unit", "pack", "meter", "kilogram", "l", "liter", "g", "m", "kg", "ml",
];

/// A number + unit substring, with its byte span in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityToken {
    pub raw: String,
    pub start: usize,
    pub end: usize,
}

/// Finds `<1..6 digits><optional whitespace><unit>` tokens, case-insensitive
/// and word-bounded on both sides.
#[derive(Debug, Clone)]
pub struct QuantityExtractor {
    pattern: Regex,
}

impl QuantityExtractor {
    /// Compile the grammar for a unit vocabulary.
    ///
    /// # Errors
    /// Returns an error if the vocabulary is empty or contains a blank unit.
    pub fn new<S: AsRef<str>>(units: &[S]) -> Result<Self, BuildError> {
        if units.is_empty() {
            return Err(BuildError::EmptyUnits);
        }

        let mut alternatives = Vec::with_capacity(units.len());
        for unit in units {
            let unit = unit.as_ref().trim();
            if unit.is_empty() || unit.chars().any(char::is_whitespace) {
                return Err(BuildError::InvalidUnit(unit.to_string()));
            }
            alternatives.push(regex::escape(unit));
        }
        // Longest first so "kg" is tried before "g" and "units" before "unit".
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        alternatives.dedup();

        let pattern = Regex::new(&format!(
            r"(?i)\b[0-9]{{1,6}}\s*(?:{})\b",
            alternatives.join("|")
        ))?;
        Ok(Self { pattern })
    }

    /// All quantity tokens in `text`, in order of position.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<QuantityToken> {
        self.pattern
            .find_iter(text)
            .map(|m| QuantityToken {
                raw: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }
}
