//! Trust decision for an extraction.

use std::fmt;

use crate::catalog::Catalog;
use crate::locate::Occurrence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    NoMatch,
    /// Product names with more than one accepted occurrence, in catalog order.
    Duplicates(Vec<String>),
    Mismatch { products: usize, quantities: usize },
}

impl Verdict {
    /// 0 for a clean extraction, 1 when it needs review.
    #[must_use]
    pub const fn flag(&self) -> u8 {
        match self {
            Self::Clean => 0,
            _ => 1,
        }
    }

    #[must_use]
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Clean => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::NoMatch => write!(f, "no products matched in the text"),
            Self::Duplicates(names) => write!(f, "duplicate found: {}", names.join(", ")),
            Self::Mismatch {
                products,
                quantities,
            } => write!(
                f,
                "mismatch between products ({products}) and quantities ({quantities})"
            ),
        }
    }
}

/// Classify accepted occurrences; the first failing rule wins.
///
/// 1. nothing matched
/// 2. some product matched more than once
/// 3. occurrence count differs from quantity token count
#[must_use]
pub fn validate(catalog: &Catalog, accepted: &[Occurrence], quantity_count: usize) -> Verdict {
    if accepted.is_empty() {
        return Verdict::NoMatch;
    }

    let mut counts = vec![0_usize; catalog.len()];
    for occ in accepted {
        if let Some(count) = counts.get_mut(occ.product) {
            *count += 1;
        }
    }
    let duplicates: Vec<String> = catalog
        .entries()
        .iter()
        .filter(|entry| counts[entry.position] > 1)
        .map(|entry| entry.name.clone())
        .collect();
    if !duplicates.is_empty() {
        return Verdict::Duplicates(duplicates);
    }

    if accepted.len() != quantity_count {
        return Verdict::Mismatch {
            products: accepted.len(),
            quantities: quantity_count,
        };
    }

    Verdict::Clean
}
