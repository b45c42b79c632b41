//! Pairing of occurrences with quantity tokens.

use crate::locate::Occurrence;
use crate::quantity::QuantityToken;

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub occurrence: Occurrence,
    /// `None` means "unknown quantity".
    pub quantity: Option<QuantityToken>,
}

/// Give each occurrence the nearest unconsumed quantity that follows it.
///
/// Occurrences are visited in text order, so when two products compete for
/// the same token the earlier product wins. A token is eligible only if it
/// starts at or after the occurrence's (exclusive) end.
#[must_use]
pub fn assign(occurrences: &[Occurrence], tokens: &[QuantityToken]) -> Vec<Assignment> {
    let mut ordered: Vec<&Occurrence> = occurrences.iter().collect();
    ordered.sort_by_key(|occ| occ.start);

    let mut consumed = vec![false; tokens.len()];

    ordered
        .into_iter()
        .map(|occ| {
            let chosen = tokens
                .iter()
                .enumerate()
                .filter(|(i, token)| !consumed[*i] && token.start >= occ.end)
                .min_by_key(|(_, token)| token.start - occ.end)
                .map(|(i, _)| i);
            let quantity = chosen.map(|i| {
                consumed[i] = true;
                tokens[i].clone()
            });
            Assignment {
                occurrence: occ.clone(),
                quantity,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(product: usize, start: usize, end: usize) -> Occurrence {
        Occurrence {
            product,
            start,
            end,
            score: 100.0,
        }
    }

    fn token(raw: &str, start: usize) -> QuantityToken {
        QuantityToken {
            raw: raw.to_string(),
            start,
            end: start + raw.len(),
        }
    }

    fn raws(assignments: &[Assignment]) -> Vec<Option<&str>> {
        assignments
            .iter()
            .map(|a| a.quantity.as_ref().map(|q| q.raw.as_str()))
            .collect()
    }

    #[test]
    fn nearest_following_token_wins() {
        let tokens = [token("100 units", 17), token("50 units", 47)];
        let result = assign(&[occ(1, 28, 46), occ(0, 7, 16)], &tokens);
        assert_eq!(result[0].occurrence.product, 0);
        assert_eq!(raws(&result), [Some("100 units"), Some("50 units")]);
    }

    #[test]
    fn preceding_tokens_are_ignored() {
        let tokens = [token("5 kg", 0)];
        let result = assign(&[occ(0, 5, 12)], &tokens);
        assert_eq!(raws(&result), [None]);
    }

    #[test]
    fn earlier_product_claims_shared_token() {
        // "A B 3 units": both products are followed only by the one token.
        let tokens = [token("3 units", 4)];
        let result = assign(&[occ(0, 0, 1), occ(1, 2, 3)], &tokens);
        assert_eq!(raws(&result), [Some("3 units"), None]);
    }

    #[test]
    fn tokens_are_consumed_once() {
        let tokens = [token("1 pack", 10), token("2 pack", 30)];
        let result = assign(&[occ(0, 0, 5), occ(1, 6, 9), occ(2, 20, 25)], &tokens);
        assert_eq!(raws(&result), [Some("1 pack"), Some("2 pack"), None]);
    }
}
