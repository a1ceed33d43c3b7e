//! # Similarity Scoring Module
//!
//! Normalized string-distance scoring used for alias/fuzzy ingredient
//! matching and for shopping-list consolidation decisions.
//!
//! Both inputs are run through the name normalizer first, so "Fresh
//! Chopped Onions" and "onion" compare as equals. The score is evaluated
//! in order, short-circuiting on the first match:
//!
//! 1. Exact match after normalization: 1.0
//! 2. One normalized string contains the other: 0.9
//! 3. Levenshtein distance `d`: `max(0, 1 - d / max(len))`
//!
//! The function is symmetric and reflexive, and always lands in [0, 1].

use crate::normalize::normalize;

/// Substring containment score, below exact but above any edit-distance
/// result for dissimilar strings
const CONTAINMENT_SCORE: f64 = 0.9;

/// Score how alike two ingredient names are, in [0, 1].
///
/// # Examples
///
/// ```rust
/// use larder::similarity::similarity;
///
/// assert_eq!(similarity("onions", "Onion"), 1.0);
/// assert_eq!(similarity("green onion", "onion"), 0.9);
/// assert!(similarity("milk", "silk") > 0.7);
/// assert!(similarity("milk", "chicken") < 0.3);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let na = normalize(a);
    let nb = normalize(b);

    if na == nb {
        return 1.0;
    }

    // The containment rule only applies to non-empty strings; the empty
    // string is a substring of everything and must not score 0.9
    if !na.is_empty() && !nb.is_empty() && (na.contains(&nb) || nb.contains(&na)) {
        return CONTAINMENT_SCORE;
    }

    let max_len = na.chars().count().max(nb.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = strsim::levenshtein(&na, &nb) as f64;
    (1.0 - distance / max_len as f64).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_after_normalization() {
        assert_eq!(similarity("onion", "onion"), 1.0);
        assert_eq!(similarity("Onions", "onion"), 1.0);
        assert_eq!(similarity("fresh chopped onions", "onion"), 1.0);
    }

    #[test]
    fn test_containment() {
        assert_eq!(similarity("green onion", "onion"), 0.9);
        assert_eq!(similarity("onion", "red onion"), 0.9);
    }

    #[test]
    fn test_edit_distance_band() {
        let score = similarity("milk", "silk");
        assert!(score > 0.7 && score < 0.8); // one edit over four chars

        let score = similarity("butter", "batter");
        assert!((score - (1.0 - 1.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_dissimilar_strings_score_low() {
        assert!(similarity("milk", "chicken") < 0.3);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("onion", "green onion"),
            ("milk", "silk"),
            ("butter", "chicken thighs"),
            ("", "salt"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "asymmetric for {a}/{b}");
        }
    }

    #[test]
    fn test_reflexivity() {
        for s in ["salt", "Fresh Basil", "", "1% milk"] {
            assert_eq!(similarity(s, s), 1.0);
        }
    }

    #[test]
    fn test_bounds() {
        let pairs = [
            ("a", "completely different thing"),
            ("x", ""),
            ("same", "same"),
        ];
        for (a, b) in pairs {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_empty_does_not_hit_containment() {
        assert!(similarity("", "salt") < 0.9);
        assert_eq!(similarity("", ""), 1.0);
    }
}
