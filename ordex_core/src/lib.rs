#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss
)]

//! Order extraction engine.
//!
//! Given a catalog of product names and a free-text order, the engine locates
//! fuzzy occurrences of each product, pairs them with the quantity tokens that
//! follow them and flags results that need a human look.

pub mod assign;
pub mod catalog;
pub mod config;
mod engine;
mod error;
pub mod locate;
pub mod normalize;
pub mod overlap;
pub mod quantity;
pub mod result;
pub mod scorer;
pub mod validate;

pub use assign::Assignment;
pub use catalog::{Catalog, CatalogEntry};
pub use config::{EngineConfig, ScorerKind, ThresholdPolicy};
pub use engine::Engine;
pub use error::{BuildError, ExtractError};
pub use locate::{FuzzyLocator, Occurrence};
pub use normalize::FoldedText;
pub use quantity::{DEFAULT_UNITS, QuantityExtractor, QuantityToken};
pub use result::{ExtractionResult, QuantityValue};
pub use scorer::{Alignment, JaroWinklerScorer, LevenshteinScorer, PartialScorer};
pub use validate::Verdict;
