use thiserror::Error;

/// Faults that stop an extraction before a result can be built.
///
/// "Nothing matched", duplicates and count mismatches are not errors; they
/// come back as a flagged [`crate::ExtractionResult`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("product catalog is empty")]
    EmptyCatalog,

    #[error("order text is empty")]
    EmptyText,

    #[error("product at position {position} ({name:?}) has no matchable characters")]
    MalformedProduct { position: usize, name: String },

    #[error("product name {0:?} collides with a reserved result key")]
    ReservedProductName(String),
}

impl ExtractError {
    /// True when the caller simply left out the catalog or the text.
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::EmptyCatalog | Self::EmptyText)
    }
}

/// Errors raised while compiling an engine from its configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("unit vocabulary is empty")]
    EmptyUnits,

    #[error("invalid unit {0:?}")]
    InvalidUnit(String),

    #[error("invalid quantity pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("invalid threshold {0}: expected a value in 0..=100")]
    Threshold(f64),
}
