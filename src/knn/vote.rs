use std::collections::BTreeMap;

use crate::Label;

// Majority vote over candidate labels.
// Ties in vote count go to the numerically largest label, so [1, 3, 1, 3] yields 3.
// Returns None when there are no candidates.
pub fn majority(labels: impl IntoIterator<Item = Label>) -> Option<Label> {
    let mut counts: BTreeMap<Label, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    // (count, label) ordering makes the larger label win among equal counts
    counts
        .into_iter()
        .max_by_key(|&(label, count)| (count, label))
        .map(|(label, _)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_majority() {
        assert_eq!(majority([2, 5, 2]), Some(2));
        assert_eq!(majority([4]), Some(4));
    }

    #[test]
    fn test_tie_goes_to_largest_label() {
        assert_eq!(majority([1, 3, 1, 3]), Some(3));
        assert_eq!(majority([3, 1]), Some(3));
        assert_eq!(majority([-2, -7]), Some(-2));
    }

    #[test]
    fn test_count_beats_label_value() {
        assert_eq!(majority([1, 1, 9]), Some(1));
    }

    #[test]
    fn test_empty() {
        assert_eq!(majority(std::iter::empty()), None);
    }
}
