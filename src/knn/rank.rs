use super::hamming;
use crate::{Instance, Label};

// Which instance wins when two reference instances are equally close to the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    // Keep the instance seen first in reference order
    PreferFirst,
    // Replace the current best with any later instance at the same distance
    PreferLast,
}

// Tie-break used by the single-closest policy.
// The last-scanned instance among those at the minimum distance is chosen, so the
// result depends on reference-set order.
pub const CLOSEST_TIE_BREAK: TieBreak = TieBreak::PreferLast;

// A labeled reference instance paired with its distance to a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub label: Label,
    pub distance: usize,
}

// Single-closest policy: one linear scan tracking the best instance so far.
// Returns None only when the reference set is empty.
pub fn closest<'a>(
    query: &Instance,
    reference: &'a [Instance],
    tie_break: TieBreak,
) -> Option<&'a Instance> {
    let mut best: Option<(&Instance, usize)> = None;
    for instance in reference {
        let distance = hamming(query.values(), instance.values());
        let replace = match best {
            None => true,
            Some((_, best_distance)) => match tie_break {
                TieBreak::PreferFirst => distance < best_distance,
                TieBreak::PreferLast => distance <= best_distance,
            },
        };
        if replace {
            best = Some((instance, distance));
        }
    }
    best.map(|(instance, _)| instance)
}

// Top-k policy: distances to every reference instance, stably sorted ascending,
// truncated to at most k entries. Equal distances keep reference order.
pub fn nearest(query: &Instance, reference: &[Instance], k: usize) -> Vec<Neighbor> {
    let mut neighbors: Vec<Neighbor> = reference
        .iter()
        .map(|instance| Neighbor {
            label: instance.class(),
            distance: hamming(query.values(), instance.values()),
        })
        .collect();
    // sort_by_key is stable
    neighbors.sort_by_key(|neighbor| neighbor.distance);
    neighbors.truncate(k);
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Vec<Instance> {
        vec![
            Instance::new(vec![0, 0], 1, 0),
            Instance::new(vec![1, 1], 2, 1),
            Instance::new(vec![0, 1], 1, 2),
        ]
    }

    fn query(values: Vec<i64>) -> Instance {
        Instance::new(values, 0, 0)
    }

    #[test]
    fn test_closest_unique_minimum() {
        let reference = reference();
        let winner = closest(&query(vec![0, 0]), &reference, CLOSEST_TIE_BREAK).unwrap();
        assert_eq!(winner.index(), 0);
        assert_eq!(winner.class(), 1);
    }

    #[test]
    fn test_closest_prefers_last_on_tie() {
        let reference = vec![
            Instance::new(vec![5, 5], 1, 0),
            Instance::new(vec![0, 0], 2, 1),
            Instance::new(vec![5, 5], 3, 2),
            Instance::new(vec![9, 9], 4, 3),
        ];
        let winner = closest(&query(vec![5, 5]), &reference, CLOSEST_TIE_BREAK).unwrap();
        assert_eq!(winner.index(), 2);
        assert_eq!(winner.class(), 3);

        let winner = closest(&query(vec![5, 5]), &reference, TieBreak::PreferFirst).unwrap();
        assert_eq!(winner.index(), 0);
    }

    #[test]
    fn test_closest_tie_at_nonzero_distance() {
        // Both instances differ in exactly one position
        let reference = vec![
            Instance::new(vec![1, 0], 7, 0),
            Instance::new(vec![0, 1], 8, 1),
        ];
        let winner = closest(&query(vec![0, 0]), &reference, CLOSEST_TIE_BREAK).unwrap();
        assert_eq!(winner.class(), 8);
    }

    #[test]
    fn test_closest_empty_reference() {
        assert!(closest(&query(vec![0]), &[], CLOSEST_TIE_BREAK).is_none());
    }

    #[test]
    fn test_nearest_sorted_prefix() {
        let reference = reference();
        let neighbors = nearest(&query(vec![0, 0]), &reference, 2);
        assert_eq!(
            neighbors,
            vec![
                Neighbor { label: 1, distance: 0 },
                Neighbor { label: 1, distance: 1 },
            ]
        );
    }

    #[test]
    fn test_nearest_is_stable() {
        let reference = vec![
            Instance::new(vec![1], 10, 0),
            Instance::new(vec![2], 20, 1),
            Instance::new(vec![0], 30, 2),
            Instance::new(vec![3], 40, 3),
        ];
        let labels: Vec<_> = nearest(&query(vec![0]), &reference, 4)
            .iter()
            .map(|n| n.label)
            .collect();
        assert_eq!(labels, vec![30, 10, 20, 40]);
    }

    #[test]
    fn test_nearest_k_larger_than_reference() {
        let reference = reference();
        let neighbors = nearest(&query(vec![0, 0]), &reference, 10);
        assert_eq!(neighbors.len(), 3);
        assert_eq!(
            neighbors.iter().map(|n| n.distance).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }
}
