//! Final product → quantity mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::assign::Assignment;
use crate::catalog::Catalog;
use crate::validate::Verdict;

pub const UNKNOWN_QUANTITY: &str = "unknown quantity";
pub const NOT_FOUND: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityValue {
    Quantity(String),
    /// Product found, no quantity followed it.
    Unknown,
    /// Product not found in the text.
    NotFound,
}

impl Serialize for QuantityValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Quantity(raw) => serializer.serialize_str(raw),
            Self::Unknown => serializer.serialize_str(UNKNOWN_QUANTITY),
            Self::NotFound => serializer.serialize_i64(NOT_FOUND),
        }
    }
}

/// One entry per catalog product in catalog order, plus the review flag.
///
/// Serializes flat: `{"<product>": value, ..., "flag": 0|1, "reason"?: "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    entries: Vec<(String, QuantityValue)>,
    flag: u8,
    reason: Option<String>,
}

impl ExtractionResult {
    /// Assemble the result; products without an assignment get the not-found sentinel.
    ///
    /// A product matched more than once reports the quantity of its first
    /// occurrence in the text.
    #[must_use]
    pub fn build(catalog: &Catalog, assignments: &[Assignment], verdict: &Verdict) -> Self {
        let mut values = vec![QuantityValue::NotFound; catalog.len()];

        for assignment in assignments {
            let Some(slot) = values.get_mut(assignment.occurrence.product) else {
                continue;
            };
            if *slot != QuantityValue::NotFound {
                continue;
            }
            *slot = assignment
                .quantity
                .as_ref()
                .map_or(QuantityValue::Unknown, |q| QuantityValue::Quantity(q.raw.clone()));
        }

        let entries = catalog
            .entries()
            .iter()
            .zip(values)
            .map(|(entry, value)| (entry.name.clone(), value))
            .collect();

        Self {
            entries,
            flag: verdict.flag(),
            reason: verdict.reason(),
        }
    }

    #[must_use]
    pub fn get(&self, product: &str) -> Option<&QuantityValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == product)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, QuantityValue)] {
        &self.entries
    }

    #[must_use]
    pub const fn flag(&self) -> u8 {
        self.flag
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.flag == 0
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.entries.len() + 1 + usize::from(self.reason.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry("flag", &self.flag)?;
        if let Some(reason) = &self.reason {
            map.serialize_entry("reason", reason)?;
        }
        map.end()
    }
}
