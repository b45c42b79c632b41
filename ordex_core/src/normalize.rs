//! Comparison-only text folding.
//!
//! The folded form is lowercase and collapses every run of whitespace and
//! punctuation into a single space. It is only ever used for scoring: each
//! folded character remembers the byte range of the original text it came
//! from, so spans found in the folded form are reported against the original.

/// Character written over masked spans.
///
/// Folding maps every control character to a space, so no folded catalog
/// name can contain it.
pub const FILLER: char = '\u{0}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedText {
    chars: Vec<char>,
    /// Byte range in the original text for each folded character.
    origins: Vec<(usize, usize)>,
}

impl FoldedText {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut origins: Vec<(usize, usize)> = Vec::with_capacity(text.len());

        for (start, ch) in text.char_indices() {
            let end = start + ch.len_utf8();
            if ch.is_alphanumeric() {
                for lower in ch.to_lowercase() {
                    chars.push(lower);
                    origins.push((start, end));
                }
            } else if chars.last() == Some(&' ') {
                if let Some(last) = origins.last_mut() {
                    last.1 = end;
                }
            } else {
                chars.push(' ');
                origins.push((start, end));
            }
        }

        Self { chars, origins }
    }

    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Narrow a folded span so it neither starts nor ends on a separator.
    #[must_use]
    pub fn trim_span(&self, mut start: usize, mut end: usize) -> (usize, usize) {
        end = end.min(self.chars.len());
        while start < end && self.chars[start] == ' ' {
            start += 1;
        }
        while end > start && self.chars[end - 1] == ' ' {
            end -= 1;
        }
        (start, end)
    }

    /// Map a folded span `[start, end)` to a byte span of the original text.
    ///
    /// Separators at either edge are dropped first; `None` if nothing is left.
    #[must_use]
    pub fn byte_span(&self, start: usize, end: usize) -> Option<(usize, usize)> {
        let (start, end) = self.trim_span(start, end);
        if start >= end {
            return None;
        }
        Some((self.origins[start].0, self.origins[end - 1].1))
    }

    /// Overwrite `[start, end)` with [`FILLER`] without changing the length.
    pub fn mask(&mut self, start: usize, end: usize) {
        let end = end.min(self.chars.len());
        if start < end {
            self.chars[start..end].fill(FILLER);
        }
    }
}

/// Fold a catalog name for comparison, trimming leading and trailing separators.
#[must_use]
pub fn fold_name(name: &str) -> Vec<char> {
    let folded = FoldedText::new(name);
    let (start, end) = folded.trim_span(0, folded.len());
    folded.chars[start..end].to_vec()
}
