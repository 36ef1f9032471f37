use crate::FeatureValue;

// Counts the positions at which two categorical vectors differ.
// Comparison stops at the end of the shorter vector, extra positions are ignored.
pub fn hamming(a: &[FeatureValue], b: &[FeatureValue]) -> usize {
    a.iter().zip(b.iter()).filter(|(a, b)| a != b).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let v = [4, 0, 2, 2, 9];
        assert_eq!(hamming(&v, &v), 0);
        assert_eq!(hamming(&[], &[]), 0);
    }

    #[test]
    fn test_counts_differences() {
        assert_eq!(hamming(&[0, 0], &[1, 1]), 2);
        assert_eq!(hamming(&[0, 0], &[0, 1]), 1);
        assert_eq!(hamming(&[1, 2, 3, 4], &[1, 5, 3, 6]), 2);
    }

    #[test]
    fn test_symmetry() {
        let a = [1, 2, 3, 4, 5];
        let b = [1, 0, 3, 0, 0];
        assert_eq!(hamming(&a, &b), hamming(&b, &a));
        assert_eq!(hamming(&a, &b), 3);
    }

    #[test]
    fn test_truncates_to_shorter() {
        assert_eq!(hamming(&[1, 2, 3], &[1, 9]), 1);
        assert_eq!(hamming(&[1, 9], &[1, 2, 3]), 1);
        assert_eq!(hamming(&[7, 7, 7], &[]), 0);
    }
}
