//! # Name Normalization Module
//!
//! This module canonicalizes ingredient names for comparison. Normalized
//! names are the keys used everywhere two ingredients are compared: fuzzy
//! matching, curated dataset lookup, cache keys, and shopping list
//! consolidation.
//!
//! ## Pipeline
//!
//! 1. Lowercase and collapse whitespace
//! 2. Strip qualifier/preparation stop words as whole-word matches
//! 3. Singularize each remaining word with a small heuristic
//!
//! The function is pure and deterministic; identical input always yields
//! identical output. It never fails, and an empty input normalizes to an
//! empty string.

use lazy_static::lazy_static;
use log::trace;
use std::collections::HashSet;

lazy_static! {
    /// Qualifier and preparation words removed from names before comparison.
    /// "fresh basil", "chopped onions" and "organic onion" must all land on
    /// the same key as their plain forms.
    static ref QUALIFIER_STOP_WORDS: HashSet<&'static str> = {
        let words = [
            "fresh", "chopped", "organic", "minced", "diced", "sliced",
            "grated", "shredded", "peeled", "crushed", "melted", "softened",
            "cooked", "raw", "ripe", "large", "medium", "small", "finely",
            "coarsely", "thinly", "roughly", "lightly", "packed", "divided",
            "boneless", "skinless", "seedless", "unsalted", "salted",
            "room-temperature",
        ];
        words.iter().copied().collect()
    };
}

/// Normalize an ingredient name into its canonical comparison form.
///
/// # Examples
///
/// ```rust
/// use larder::normalize::normalize;
///
/// assert_eq!(normalize("Fresh  Chopped Onions"), "onion");
/// assert_eq!(normalize("tomatoes"), "tomato");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return String::new();
    }

    let words: Vec<&str> = lowered.split_whitespace().collect();
    let kept: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| !QUALIFIER_STOP_WORDS.contains(w))
        .collect();

    // A name made entirely of qualifiers ("fresh") must not collapse to an
    // empty key; fall back to the collapsed lowercase form.
    if kept.is_empty() {
        return words.join(" ");
    }

    let normalized = kept
        .into_iter()
        .map(singularize_word)
        .collect::<Vec<_>>()
        .join(" ");

    trace!("normalized '{}' -> '{}'", raw, normalized);
    normalized
}

/// Heuristic singularizer applied per word.
///
/// Rules, in order: `-ies` becomes `y`; `-es` is dropped after a sibilant
/// or `o` (tomatoes, dishes, boxes); a trailing `-s` is dropped unless
/// preceded by another `s` (glass, couscous stay put). Short words are
/// left alone.
fn singularize_word(word: &str) -> String {
    if word.len() <= 3 {
        return word.to_string();
    }

    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }

    const ES_SUFFIXES: [&str; 6] = ["sses", "xes", "zes", "ches", "shes", "oes"];
    if ES_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return word[..word.len() - 2].to_string();
    }

    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_whitespace() {
        assert_eq!(normalize("  Olive   Oil  "), "olive oil");
        assert_eq!(normalize("MILK"), "milk");
    }

    #[test]
    fn test_stop_word_stripping() {
        assert_eq!(normalize("fresh basil"), "basil");
        assert_eq!(normalize("chopped onions"), "onion");
        assert_eq!(normalize("organic minced garlic"), "garlic");
        assert_eq!(normalize("boneless skinless chicken breast"), "chicken breast");
    }

    #[test]
    fn test_singularization() {
        assert_eq!(normalize("onions"), "onion");
        assert_eq!(normalize("tomatoes"), "tomato");
        assert_eq!(normalize("berries"), "berry");
        assert_eq!(normalize("radishes"), "radish");
        assert_eq!(normalize("boxes"), "box");
        // Double-s words keep their ending
        assert_eq!(normalize("swiss cheese"), "swiss cheese");
        assert_eq!(normalize("molasses"), "molass");
    }

    #[test]
    fn test_short_words_untouched() {
        assert_eq!(normalize("gas"), "gas");
        assert_eq!(normalize("peas"), "pea");
    }

    #[test]
    fn test_empty_and_qualifier_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        // All-qualifier input falls back rather than producing an empty key
        assert_eq!(normalize("fresh"), "fresh");
        assert_eq!(normalize("Fresh Chopped"), "fresh chopped");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "Fresh Chopped Onions",
            "tomatoes",
            "organic baby spinach leaves",
            "swiss cheese",
            "fresh",
            "",
            "2% milk",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for '{sample}'");
        }
    }

    #[test]
    fn test_determinism() {
        for _ in 0..3 {
            assert_eq!(normalize("Fresh Chopped Onions"), "onion");
        }
    }
}
