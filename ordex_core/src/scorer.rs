//! Partial (substring) similarity scoring.
//!
//! A [`PartialScorer`] answers one question: where in a haystack does a
//! pattern align best, and how well. The locator only depends on this trait,
//! so edit-distance and token-based algorithms are interchangeable.

use crate::normalize::FILLER;

/// Best alignment of a pattern inside a haystack, in folded character offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    pub start: usize,
    pub end: usize,
    /// Similarity in `[0, 100]`.
    pub score: f64,
}

pub trait PartialScorer: Send + Sync {
    /// Whole-string similarity of two strings in `[0, 100]`.
    fn ratio(&self, pattern: &str, candidate: &str) -> f64;

    /// Best-scoring contiguous span of `haystack` for `pattern`.
    ///
    /// The default slides windows of the pattern's length (and one character
    /// shorter or longer) across the haystack and keeps the first best score.
    /// Windows that start or end on a separator or on masked text are skipped.
    fn best_alignment(&self, pattern: &[char], haystack: &[char]) -> Option<Alignment> {
        if pattern.is_empty() || haystack.is_empty() {
            return None;
        }

        let needle: String = pattern.iter().collect();
        let m = pattern.len();

        if haystack.len() <= m {
            let candidate: String = haystack.iter().collect();
            return Some(Alignment {
                start: 0,
                end: haystack.len(),
                score: self.ratio(&needle, &candidate),
            });
        }

        let mut best: Option<Alignment> = None;
        for width in [m, m + 1, m.saturating_sub(1)] {
            if width == 0 || width > haystack.len() {
                continue;
            }
            for start in 0..=haystack.len() - width {
                let window = &haystack[start..start + width];
                if is_boundary_noise(window[0]) || is_boundary_noise(window[width - 1]) {
                    continue;
                }
                let candidate: String = window.iter().collect();
                let score = self.ratio(&needle, &candidate);
                if best.is_none_or(|b| score > b.score) {
                    best = Some(Alignment {
                        start,
                        end: start + width,
                        score,
                    });
                    if score >= 100.0 {
                        return best;
                    }
                }
            }
        }
        best
    }
}

const fn is_boundary_noise(c: char) -> bool {
    c == ' ' || c == FILLER
}

/// Normalized Levenshtein similarity over sliding windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinScorer;

impl PartialScorer for LevenshteinScorer {
    fn ratio(&self, pattern: &str, candidate: &str) -> f64 {
        strsim::normalized_levenshtein(pattern, candidate) * 100.0
    }
}

/// Jaro-Winkler similarity over sliding windows; more lenient towards
/// differences late in the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinklerScorer;

impl PartialScorer for JaroWinklerScorer {
    fn ratio(&self, pattern: &str, candidate: &str) -> f64 {
        strsim::jaro_winkler(pattern, candidate) * 100.0
    }
}
