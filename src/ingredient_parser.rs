//! # Ingredient Parser
//!
//! This module decomposes raw recipe ingredient lines into structured
//! data. It handles various formats including fractions, mixed numbers,
//! ranges, units, optionality markers, and preparation text.
//!
//! ## Features
//!
//! - Parse common ingredient formats from recipe text
//! - Handle fractions (1/2, 2 1/4, etc.) and mixed numbers
//! - Recognize ranges (2-3, 1 to 2), averaged to the midpoint
//! - Extract units across the volume/weight/count vocabulary
//! - Detect "(optional)" markers and "optional:" prefixes
//! - Split preparation text on the first comma, or extract known
//!   preparation words from the name
//!
//! Parsing never fails: unparseable input degrades to a best-effort
//! record with the raw line preserved.
//!
//! ## Usage
//!
//! ```rust
//! use larder::ingredient_parser::parse;
//!
//! let line = parse("2 cups chopped onions, optional");
//! assert_eq!(line.name, "onions");
//! assert!(line.is_optional);
//! ```

use log::{debug, trace};
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::ingredient_model::{
    CountUnit, ParsedIngredientLine, UnitTag, VolumeUnit, WeightUnit,
};

/// Regex patterns for parsing different quantity formats
static QUANTITY_PATTERNS: LazyLock<QuantityPatterns> = LazyLock::new(QuantityPatterns::new);

/// Common unit mappings and their variations
static UNIT_MAPPINGS: LazyLock<HashMap<&'static str, UnitTag>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Volume units
    map.insert("tsp", UnitTag::Volume(VolumeUnit::Teaspoon));
    map.insert("teaspoon", UnitTag::Volume(VolumeUnit::Teaspoon));
    map.insert("teaspoons", UnitTag::Volume(VolumeUnit::Teaspoon));
    map.insert("tbsp", UnitTag::Volume(VolumeUnit::Tablespoon));
    map.insert("tablespoon", UnitTag::Volume(VolumeUnit::Tablespoon));
    map.insert("tablespoons", UnitTag::Volume(VolumeUnit::Tablespoon));
    map.insert("cup", UnitTag::Volume(VolumeUnit::Cup));
    map.insert("cups", UnitTag::Volume(VolumeUnit::Cup));
    map.insert("c", UnitTag::Volume(VolumeUnit::Cup));
    map.insert("fl oz", UnitTag::Volume(VolumeUnit::FluidOunce));
    map.insert("fluid ounce", UnitTag::Volume(VolumeUnit::FluidOunce));
    map.insert("fluid ounces", UnitTag::Volume(VolumeUnit::FluidOunce));
    map.insert("pint", UnitTag::Volume(VolumeUnit::Pint));
    map.insert("pints", UnitTag::Volume(VolumeUnit::Pint));
    map.insert("pt", UnitTag::Volume(VolumeUnit::Pint));
    map.insert("quart", UnitTag::Volume(VolumeUnit::Quart));
    map.insert("quarts", UnitTag::Volume(VolumeUnit::Quart));
    map.insert("qt", UnitTag::Volume(VolumeUnit::Quart));
    map.insert("gallon", UnitTag::Volume(VolumeUnit::Gallon));
    map.insert("gallons", UnitTag::Volume(VolumeUnit::Gallon));
    map.insert("gal", UnitTag::Volume(VolumeUnit::Gallon));
    map.insert("ml", UnitTag::Volume(VolumeUnit::Milliliter));
    map.insert("milliliter", UnitTag::Volume(VolumeUnit::Milliliter));
    map.insert("milliliters", UnitTag::Volume(VolumeUnit::Milliliter));
    map.insert("l", UnitTag::Volume(VolumeUnit::Liter));
    map.insert("liter", UnitTag::Volume(VolumeUnit::Liter));
    map.insert("liters", UnitTag::Volume(VolumeUnit::Liter));
    map.insert("litre", UnitTag::Volume(VolumeUnit::Liter));
    map.insert("litres", UnitTag::Volume(VolumeUnit::Liter));

    // Weight units
    map.insert("oz", UnitTag::Weight(WeightUnit::Ounce));
    map.insert("ounce", UnitTag::Weight(WeightUnit::Ounce));
    map.insert("ounces", UnitTag::Weight(WeightUnit::Ounce));
    map.insert("lb", UnitTag::Weight(WeightUnit::Pound));
    map.insert("lbs", UnitTag::Weight(WeightUnit::Pound));
    map.insert("pound", UnitTag::Weight(WeightUnit::Pound));
    map.insert("pounds", UnitTag::Weight(WeightUnit::Pound));
    map.insert("g", UnitTag::Weight(WeightUnit::Gram));
    map.insert("gram", UnitTag::Weight(WeightUnit::Gram));
    map.insert("grams", UnitTag::Weight(WeightUnit::Gram));
    map.insert("kg", UnitTag::Weight(WeightUnit::Kilogram));
    map.insert("kilogram", UnitTag::Weight(WeightUnit::Kilogram));
    map.insert("kilograms", UnitTag::Weight(WeightUnit::Kilogram));

    // Count units
    map.insert("piece", UnitTag::Count(CountUnit::Piece));
    map.insert("pieces", UnitTag::Count(CountUnit::Piece));
    map.insert("clove", UnitTag::Count(CountUnit::Clove));
    map.insert("cloves", UnitTag::Count(CountUnit::Clove));
    map.insert("slice", UnitTag::Count(CountUnit::Slice));
    map.insert("slices", UnitTag::Count(CountUnit::Slice));
    map.insert("stick", UnitTag::Count(CountUnit::Stick));
    map.insert("sticks", UnitTag::Count(CountUnit::Stick));
    map.insert("can", UnitTag::Count(CountUnit::Can));
    map.insert("cans", UnitTag::Count(CountUnit::Can));
    map.insert("package", UnitTag::Count(CountUnit::Package));
    map.insert("packages", UnitTag::Count(CountUnit::Package));
    map.insert("pkg", UnitTag::Count(CountUnit::Package));
    map.insert("bunch", UnitTag::Count(CountUnit::Bunch));
    map.insert("bunches", UnitTag::Count(CountUnit::Bunch));
    map.insert("pinch", UnitTag::Count(CountUnit::Pinch));
    map.insert("pinches", UnitTag::Count(CountUnit::Pinch));
    map.insert("dash", UnitTag::Count(CountUnit::Dash));
    map.insert("dashes", UnitTag::Count(CountUnit::Dash));

    map
});

/// Preparation-method vocabulary scanned out of comma-less names
static PREPARATION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "chopped", "diced", "minced", "sliced", "grated", "shredded",
        "peeled", "crushed", "julienned", "cubed", "halved", "quartered",
        "melted", "softened", "beaten", "whisked", "toasted", "drained",
        "rinsed", "trimmed", "zested", "juiced", "mashed", "pitted",
    ]
    .into_iter()
    .collect()
});

/// Compiled regex patterns for parsing
struct QuantityPatterns {
    /// Matches "(optional)" anywhere in the line
    optional_marker: Regex,
    /// Matches a leading "optional:" prefix
    optional_prefix: Regex,
    /// Matches mixed numbers: "1 1/2", "2 3⁄4"
    mixed_number: Regex,
    /// Matches simple fractions: "1/2", "3⁄4"
    fraction: Regex,
    /// Matches ranges: "3-4", "1 to 2", "2 or 3"
    range: Regex,
    /// Matches integers and decimals: "2", "1.5"
    number: Regex,
}

impl QuantityPatterns {
    fn new() -> Self {
        Self {
            optional_marker: Regex::new(r"(?i)\(\s*optional\s*\)").unwrap(),
            optional_prefix: Regex::new(r"(?i)^optional\s*:\s*").unwrap(),
            mixed_number: Regex::new(r"^(\d+)\s+(\d+)[⁄/](\d+)").unwrap(),
            fraction: Regex::new(r"^(\d+)[⁄/](\d+)").unwrap(),
            range: Regex::new(r"^(\d+(?:\.\d+)?)\s*(?:-|–|—|to\s|or\s)\s*(\d+(?:\.\d+)?)").unwrap(),
            number: Regex::new(r"^(\d+(?:\.\d+)?)").unwrap(),
        }
    }
}

/// Parse a single recipe ingredient line.
///
/// Algorithm, in order: strip optionality markers, match a leading
/// quantity token, match a unit token immediately after it, then split
/// the remainder into name and preparation. Never fails; see
/// [`ParsedIngredientLine::degraded`] for the fallback shape.
pub fn parse(line: &str) -> ParsedIngredientLine {
    let raw = line.to_string();
    let mut rest = line.trim().to_string();

    // 1. Optionality
    let mut is_optional = false;
    if QUANTITY_PATTERNS.optional_marker.is_match(&rest) {
        is_optional = true;
        rest = QUANTITY_PATTERNS
            .optional_marker
            .replace_all(&rest, "")
            .trim()
            .to_string();
    }
    if let Some(m) = QUANTITY_PATTERNS.optional_prefix.find(&rest) {
        is_optional = true;
        rest = rest[m.end()..].trim().to_string();
    }
    // A trailing ", optional" qualifier counts as a marker too
    if let Some(stripped) = strip_trailing_optional(&rest) {
        is_optional = true;
        rest = stripped;
    }

    if rest.is_empty() {
        return ParsedIngredientLine::degraded(&raw, is_optional);
    }

    // 2. Leading quantity
    let (amount, after_qty) = match_quantity(&rest);

    // 3. Unit token, only meaningful after a quantity
    let (unit, after_unit) = if amount.is_some() {
        match match_unit(after_qty) {
            Some((tag, remainder)) => (Some(tag), remainder),
            None => (Some(UnitTag::Count(CountUnit::Whole)), after_qty),
        }
    } else {
        (None, after_qty)
    };

    // 4. Name and preparation
    let remainder = after_unit.trim();
    if remainder.is_empty() {
        debug!("no ingredient name in '{}'", line);
        return ParsedIngredientLine::degraded(&raw, is_optional);
    }

    let (name, preparation) = split_name_and_preparation(remainder);

    trace!("parsed '{}' -> name '{}'", line, name);
    ParsedIngredientLine {
        amount,
        unit,
        name,
        preparation,
        is_optional,
        raw,
    }
}

/// Parse a multi-line block of ingredient text, one record per
/// non-empty line.
pub fn parse_ingredient_lines(text: &str) -> Vec<ParsedIngredientLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse)
        .collect()
}

/// Match a leading quantity token. Returns the parsed amount and the
/// remainder of the line after the token.
fn match_quantity(rest: &str) -> (Option<Decimal>, &str) {
    // Mixed numbers first so "1 1/2" is not read as "1"
    if let Some(caps) = QUANTITY_PATTERNS.mixed_number.captures(rest) {
        let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
        if token_boundary(rest, end) {
            if let (Some(whole), Some(num), Some(den)) = (
                parse_decimal(&caps[1]),
                parse_decimal(&caps[2]),
                parse_decimal(&caps[3]),
            ) {
                if !den.is_zero() {
                    return (Some(whole + num / den), rest[end..].trim_start());
                }
            }
        }
    }

    if let Some(caps) = QUANTITY_PATTERNS.fraction.captures(rest) {
        let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
        if token_boundary(rest, end) {
            if let (Some(num), Some(den)) = (parse_decimal(&caps[1]), parse_decimal(&caps[2])) {
                if !den.is_zero() {
                    return (Some(num / den), rest[end..].trim_start());
                }
            }
        }
    }

    // Ranges before plain numbers so "3-4" is not read as "3"
    if let Some(caps) = QUANTITY_PATTERNS.range.captures(rest) {
        let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
        if token_boundary(rest, end) {
            if let (Some(min), Some(max)) = (parse_decimal(&caps[1]), parse_decimal(&caps[2])) {
                let midpoint = (min + max) / Decimal::TWO;
                return (Some(midpoint), rest[end..].trim_start());
            }
        }
    }

    if let Some(caps) = QUANTITY_PATTERNS.number.captures(rest) {
        let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
        if let Some(value) = parse_decimal(&caps[1]) {
            if token_boundary(rest, end) {
                return (Some(value), rest[end..].trim_start());
            }
            // Attached unit ("500g butter"): accept when the glued word is
            // a known unit token
            let glued: String = rest[end..]
                .chars()
                .take_while(|c| c.is_alphabetic())
                .collect();
            if lookup_unit(&glued).is_some() {
                return (Some(value), rest[end..].trim_start());
            }
        }
    }

    (None, rest)
}

/// A quantity token must end at whitespace or end of line
fn token_boundary(rest: &str, end: usize) -> bool {
    rest[end..].chars().next().map_or(true, char::is_whitespace)
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s).ok()
}

/// Match a unit token at the start of the remainder. Two-word forms
/// ("fl oz") are tried before single words; trailing dots and plural
/// forms fall back to their singular mapping.
fn match_unit(rest: &str) -> Option<(UnitTag, &str)> {
    let mut words = rest.split_whitespace();
    let first = words.next()?;
    let second = words.next();

    if let Some(second) = second {
        let two_word = format!(
            "{} {}",
            clean_unit_token(first),
            clean_unit_token(second)
        );
        if let Some(tag) = lookup_unit(&two_word) {
            let consumed = find_word_end(rest, 2);
            return Some((tag, &rest[consumed..]));
        }
    }

    if let Some(tag) = lookup_unit(&clean_unit_token(first)) {
        let consumed = find_word_end(rest, 1);
        return Some((tag, &rest[consumed..]));
    }

    None
}

fn clean_unit_token(token: &str) -> String {
    token.trim_end_matches('.').to_lowercase()
}

/// Look up a unit token, falling back to a de-pluralized form
fn lookup_unit(token: &str) -> Option<UnitTag> {
    if token.is_empty() {
        return None;
    }
    if let Some(tag) = UNIT_MAPPINGS.get(token) {
        return Some(*tag);
    }
    if token.len() > 1 {
        if let Some(singular) = token.strip_suffix('s') {
            return UNIT_MAPPINGS.get(singular).copied();
        }
    }
    None
}

/// Byte offset just past the Nth whitespace-separated word
fn find_word_end(s: &str, word_count: usize) -> usize {
    let mut seen = 0;
    let mut in_word = false;
    for (i, c) in s.char_indices() {
        if c.is_whitespace() {
            if in_word {
                seen += 1;
                if seen == word_count {
                    return i;
                }
                in_word = false;
            }
        } else {
            in_word = true;
        }
    }
    s.len()
}

/// Split the post-unit remainder into name and preparation. The first
/// comma wins; without one, known preparation words are extracted from
/// the name.
fn split_name_and_preparation(remainder: &str) -> (String, Option<String>) {
    if let Some((name, prep)) = remainder.split_once(',') {
        let name = name.trim().to_string();
        let prep = prep.trim();
        let preparation = if prep.is_empty() {
            None
        } else {
            Some(prep.to_string())
        };
        return (name, preparation);
    }

    let mut name_words = Vec::new();
    let mut prep_words = Vec::new();
    for word in remainder.split_whitespace() {
        if PREPARATION_WORDS.contains(word.to_lowercase().as_str()) {
            prep_words.push(word);
        } else {
            name_words.push(word);
        }
    }

    // A name made entirely of preparation words stays a name
    if name_words.is_empty() {
        return (remainder.trim().to_string(), None);
    }

    let preparation = if prep_words.is_empty() {
        None
    } else {
        Some(prep_words.join(" "))
    };
    (name_words.join(" "), preparation)
}

/// Strip a trailing ", optional" qualifier, returning the rest
fn strip_trailing_optional(rest: &str) -> Option<String> {
    let lowered = rest.to_lowercase();
    let trimmed = lowered.trim_end();
    if let Some(stem_len) = trimmed
        .strip_suffix("optional")
        .and_then(|stem| stem.trim_end().strip_suffix(',').map(str::len))
    {
        return Some(rest[..stem_len].trim_end().to_string());
    }
    None
}
