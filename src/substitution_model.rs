//! # Substitution Data Model
//!
//! This module defines the types behind ingredient substitution: curated
//! entries, ranked candidates, confidence tiers, and the validated
//! dataset that tier-1 resolution queries.
//!
//! ## Core Concepts
//!
//! - **SubstitutionCandidate**: one suggested replacement with a ratio,
//!   a numeric confidence score, and its coarse confidence tier
//! - **SubstitutionEntry**: one curated ingredient with aliases and its
//!   ordered candidate list
//! - **SubstitutionDataset**: the read-only in-memory table, validated
//!   fail-fast at load time
//!
//! Tier banding (High >= 0.8, Medium 0.6-0.79, Low < 0.6) is checked once
//! when the dataset loads, never recomputed on the query path.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::normalize::normalize;
use crate::similarity::similarity;
use crate::ingredient_model::IngredientCategory;
use crate::substitution_data::curated_entries;

/// Score floor for the High confidence tier
pub const HIGH_CONFIDENCE_FLOOR: f64 = 0.8;
/// Score floor for the Medium confidence tier
pub const MEDIUM_CONFIDENCE_FLOOR: f64 = 0.6;

/// Coarse confidence banding over a substitution's numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// The tier a score bands into
    pub fn for_score(score: f64) -> Self {
        if score >= HIGH_CONFIDENCE_FLOOR {
            ConfidenceTier::High
        } else if score >= MEDIUM_CONFIDENCE_FLOOR {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConfidenceTier::Low => "low",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::High => "high",
        }
    }
}

/// How strongly a substitution changes the dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    None,
    Minimal,
    Noticeable,
    Significant,
}

/// One suggested replacement for an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionCandidate {
    /// Name of the replacement ingredient
    pub substitute: String,
    /// Substitution ratio, free-text ("1:1", "3/4 cup per 1 cup butter")
    pub ratio: String,
    /// Numeric confidence in [0, 1]
    pub confidence_score: f64,
    /// Coarse banding of `confidence_score`; consistency is validated at
    /// dataset load
    pub confidence_tier: ConfidenceTier,
    /// Expected flavor change
    pub flavor_impact: ImpactLevel,
    /// Expected texture change
    pub texture_impact: ImpactLevel,
    /// Dishes or techniques the substitute works well in
    pub best_for: BTreeSet<String>,
    /// Dishes or techniques to avoid the substitute in
    pub avoid_for: BTreeSet<String>,
    /// Adjustment the cook should make, if any
    pub cooking_adjustment: Option<String>,
}

impl SubstitutionCandidate {
    /// Create a candidate with the given score and tier. Impact levels
    /// default to `Minimal`; refine with the builder methods.
    pub fn new(substitute: &str, ratio: &str, score: f64, tier: ConfidenceTier) -> Self {
        Self {
            substitute: substitute.to_string(),
            ratio: ratio.to_string(),
            confidence_score: score,
            confidence_tier: tier,
            flavor_impact: ImpactLevel::Minimal,
            texture_impact: ImpactLevel::Minimal,
            best_for: BTreeSet::new(),
            avoid_for: BTreeSet::new(),
            cooking_adjustment: None,
        }
    }

    pub fn flavor(mut self, impact: ImpactLevel) -> Self {
        self.flavor_impact = impact;
        self
    }

    pub fn texture(mut self, impact: ImpactLevel) -> Self {
        self.texture_impact = impact;
        self
    }

    pub fn best_for<const N: usize>(mut self, uses: [&str; N]) -> Self {
        self.best_for = uses.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn avoid_for<const N: usize>(mut self, uses: [&str; N]) -> Self {
        self.avoid_for = uses.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn adjustment(mut self, note: &str) -> Self {
        self.cooking_adjustment = Some(note.to_string());
        self
    }

    /// Whether the stored tier matches the score banding
    pub fn tier_is_consistent(&self) -> bool {
        self.confidence_tier == ConfidenceTier::for_score(self.confidence_score)
    }
}

impl fmt::Display for SubstitutionCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} confidence)",
            self.substitute,
            self.ratio,
            self.confidence_tier.display_name()
        )
    }
}

/// One curated ingredient with its aliases and ranked candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionEntry {
    /// Canonical ingredient name
    pub ingredient: String,
    /// Synonyms that resolve to this entry
    pub aliases: BTreeSet<String>,
    /// Grocery category of the ingredient itself
    pub category: IngredientCategory,
    /// Candidates, ordered descending by confidence score after load
    pub candidates: Vec<SubstitutionCandidate>,
}

impl SubstitutionEntry {
    pub fn new(ingredient: &str, category: IngredientCategory) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            aliases: BTreeSet::new(),
            category,
            candidates: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.insert(alias.to_string());
        self
    }

    pub fn candidate(mut self, candidate: SubstitutionCandidate) -> Self {
        self.candidates.push(candidate);
        self
    }
}

/// Errors raised while loading the curated dataset.
///
/// All of these are authoring defects: they fail process startup rather
/// than surfacing a malformed entry at query time.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// The dataset contains no entries at all
    EmptyDataset,
    /// An entry has no candidates
    EmptyCandidates(String),
    /// A candidate's stored tier disagrees with its score banding
    TierMismatch {
        ingredient: String,
        substitute: String,
        score: f64,
        tier: ConfidenceTier,
    },
    /// Two entries (or an entry and an alias) normalize to the same key
    DuplicateKey(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::EmptyDataset => write!(f, "substitution dataset is empty"),
            DatasetError::EmptyCandidates(ingredient) => {
                write!(f, "entry '{ingredient}' has no candidates")
            }
            DatasetError::TierMismatch {
                ingredient,
                substitute,
                score,
                tier,
            } => write!(
                f,
                "candidate '{substitute}' of '{ingredient}' has score {score} but tier {}",
                tier.display_name()
            ),
            DatasetError::DuplicateKey(key) => {
                write!(f, "duplicate normalized key '{key}'")
            }
        }
    }
}

impl std::error::Error for DatasetError {}

/// The validated, read-only substitution table.
///
/// Loaded once at process start; lookups never mutate it.
#[derive(Debug, Clone)]
pub struct SubstitutionDataset {
    entries: Vec<SubstitutionEntry>,
    /// Normalized name/alias -> entry position
    index: HashMap<String, usize>,
}

impl SubstitutionDataset {
    /// Load the curated dataset, validating every entry. Fail-fast: any
    /// malformed entry is a startup error, not a query-time condition.
    pub fn load() -> Result<Self, DatasetError> {
        Self::from_entries(curated_entries())
    }

    /// Build a dataset from explicit entries (test seams and host-supplied
    /// tables use this path; `load()` is the curated default).
    pub fn from_entries(mut entries: Vec<SubstitutionEntry>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }

        let mut index = HashMap::new();
        for (position, entry) in entries.iter_mut().enumerate() {
            if entry.candidates.is_empty() {
                return Err(DatasetError::EmptyCandidates(entry.ingredient.clone()));
            }
            for candidate in &entry.candidates {
                if !candidate.tier_is_consistent() {
                    return Err(DatasetError::TierMismatch {
                        ingredient: entry.ingredient.clone(),
                        substitute: candidate.substitute.clone(),
                        score: candidate.confidence_score,
                        tier: candidate.confidence_tier,
                    });
                }
            }

            // Rank once at load so the query path never sorts
            entry.candidates.sort_by(|a, b| {
                b.confidence_score
                    .partial_cmp(&a.confidence_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let mut keys: Vec<String> = vec![normalize(&entry.ingredient)];
            keys.extend(entry.aliases.iter().map(|a| normalize(a)));
            for key in keys {
                if index.insert(key.clone(), position).is_some() {
                    return Err(DatasetError::DuplicateKey(key));
                }
            }
        }

        Ok(Self { entries, index })
    }

    /// Exact or alias lookup by normalized key
    pub fn lookup_exact(&self, normalized: &str) -> Option<&SubstitutionEntry> {
        self.index
            .get(normalized)
            .map(|&position| &self.entries[position])
    }

    /// Best fuzzy match across every entry's name and aliases, accepted
    /// at or above `threshold`
    pub fn lookup_fuzzy(&self, normalized: &str, threshold: f64) -> Option<&SubstitutionEntry> {
        let mut best: Option<(f64, usize)> = None;
        for (key, &position) in &self.index {
            let score = similarity(normalized, key);
            if score >= threshold && best.map_or(true, |(s, _)| score > s) {
                best = Some((score, position));
            }
        }
        best.map(|(_, position)| &self.entries[position])
    }

    pub fn entries(&self) -> &[SubstitutionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
