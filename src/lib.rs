//! # Larder
//!
//! Ingredient identity and resolution engine: turns free-text ingredient
//! mentions into canonical, comparable entities, resolves substitute
//! ingredients with graded confidence, and consolidates quantities across
//! units when merging recipes into a shopping list.
//!
//! The crate is a pure computation library. It persists nothing and talks
//! to no network service directly; the only asynchronous boundary is the
//! injected AI-fallback collaborator behind the substitution resolver.
//!
//! ## Components
//!
//! - [`normalize`]: canonical name normalization
//! - [`ingredient_parser`]: free-text line parsing
//! - [`unit_conversion`]: base-unit conversion with cross-family rejection
//! - [`similarity`]: fuzzy name scoring
//! - [`substitution_resolver`]: three-tier substitute resolution
//! - [`consolidation`]: shopping list merging and grouping
//!
//! ## Usage
//!
//! ```rust
//! use larder::consolidation::{consolidate, group_and_sort, items_from_recipes};
//! use larder::engine_config::EngineConfig;
//! use larder::ingredient_model::RecipeId;
//! use larder::ingredient_parser::parse;
//!
//! let recipes = vec![
//!     (RecipeId(1), vec![parse("2 cups chopped onions")]),
//!     (RecipeId(2), vec![parse("1/2 cup onions, diced")]),
//! ];
//! let items = items_from_recipes(&recipes);
//! let list = group_and_sort(consolidate(items, &EngineConfig::default()));
//! assert_eq!(list.len(), 1);
//! ```

pub mod categorize;
pub mod consolidation;
pub mod engine_config;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod normalize;
pub mod resolution_cache;
pub mod similarity;
pub mod substitution_data;
pub mod substitution_model;
pub mod substitution_resolver;
pub mod unit_conversion;

pub use engine_config::EngineConfig;
pub use ingredient_model::{
    IngredientCategory, ParsedIngredientLine, RecipeId, ShoppingListItem, UnitTag,
};
pub use resolution_cache::ResolutionCache;
pub use substitution_model::{SubstitutionCandidate, SubstitutionDataset, SubstitutionEntry};
pub use substitution_resolver::{SubstitutionFallback, SubstitutionResolver};
