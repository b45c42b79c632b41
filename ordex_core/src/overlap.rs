//! Resolution of colliding occurrences.

use std::cmp::Reverse;

use tracing::debug;

use crate::catalog::Catalog;
use crate::locate::Occurrence;

/// Keep the highest-priority claim on every part of the text.
///
/// Candidates are visited longest product name first, then by catalog
/// position, then by start offset. A candidate fully contained in, or mostly
/// covered by, an accepted occurrence is dropped; a candidate that only
/// grazes one is clipped to the part that is still free. The result is
/// pairwise non-overlapping and sorted by start offset.
#[must_use]
pub fn resolve(catalog: &Catalog, mut candidates: Vec<Occurrence>) -> Vec<Occurrence> {
    candidates.sort_by_key(|occ| {
        let len = catalog.get(occ.product).map_or(0, crate::CatalogEntry::len);
        (Reverse(len), occ.product, occ.start)
    });

    let mut accepted: Vec<Occurrence> = Vec::with_capacity(candidates.len());

    'candidates: for mut candidate in candidates {
        for claim in &accepted {
            let overlap = candidate
                .end
                .min(claim.end)
                .saturating_sub(candidate.start.max(claim.start));
            if overlap == 0 {
                continue;
            }
            let contained = claim.start <= candidate.start && candidate.end <= claim.end;
            if contained || overlap * 2 > candidate.len() {
                debug!(
                    product = candidate.product,
                    start = candidate.start,
                    end = candidate.end,
                    by = claim.product,
                    "dropping overlapped occurrence"
                );
                continue 'candidates;
            }
            if claim.start <= candidate.start {
                candidate.start = claim.end;
            } else {
                candidate.end = claim.start;
            }
        }
        if !candidate.is_empty() {
            accepted.push(candidate);
        }
    }

    accepted.sort_by_key(|occ| occ.start);
    accepted
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

    fn catalog() -> Catalog {
        Catalog::new(&["iPhone 16 Pro", "iPhone 16", "Case"]).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn nested_shorter_name_is_dropped() {
        let kept = resolve(&catalog(), vec![occ(1, 0, 9), occ(0, 0, 13)]);
        assert_eq!(kept, [occ(0, 0, 13)]);
    }

    #[test]
    fn majority_overlap_is_dropped() {
        let kept = resolve(&catalog(), vec![occ(0, 10, 23), occ(1, 7, 16)]);
        assert_eq!(kept, [occ(0, 10, 23)]);
    }

    #[test]
    fn minor_overlap_is_clipped() {
        // "Case" 20..25 grazes the end of "iPhone 16" 12..21 by one byte.
        let kept = resolve(&catalog(), vec![occ(2, 20, 25), occ(1, 12, 21)]);
        assert_eq!(kept, [occ(1, 12, 21), occ(2, 21, 25)]);
    }

    #[test]
    fn disjoint_occurrences_survive_in_text_order() {
        let kept = resolve(&catalog(), vec![occ(1, 30, 39), occ(0, 0, 13), occ(1, 50, 59)]);
        assert_eq!(kept, [occ(0, 0, 13), occ(1, 30, 39), occ(1, 50, 59)]);
    }

    #[test]
    fn accepted_never_overlap() {
        let kept = resolve(
            &catalog(),
            vec![occ(2, 3, 8), occ(1, 0, 9), occ(0, 6, 19), occ(2, 18, 22)],
        );
        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                assert!(a.end <= b.start || b.end <= a.start, "{a:?} overlaps {b:?}");
            }
        }
    }
}
