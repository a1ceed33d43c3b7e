//! # Ingredient and Shopping List Data Model
//!
//! This module defines the data structures shared across the engine:
//! parsed ingredient lines, measurement units, grocery categories, and
//! shopping list items.
//!
//! ## Core Concepts
//!
//! - **ParsedIngredientLine**: one structured recipe line (amount, unit,
//!   name, preparation, optionality)
//! - **UnitTag**: a closed tagged union over three unit families (volume,
//!   weight, count); conversion is only defined within one family
//! - **IngredientCategory**: grocery aisle buckets with a fixed display
//!   ordering
//! - **ShoppingListItem**: one consolidated line on a shopping list
//!
//! ## Usage
//!
//! ```rust
//! use larder::ingredient_model::{ShoppingListItem, UnitTag, VolumeUnit, RecipeId};
//! use rust_decimal_macros::dec;
//!
//! let item = ShoppingListItem::new("onions", dec!(2), UnitTag::Volume(VolumeUnit::Cup))
//!     .from_recipe(RecipeId(7));
//! assert!(item.unit.is_volume());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::categorize::categorize;

/// One recipe ingredient line decomposed into structured fields.
///
/// Produced by the parser, consumed by the consolidator. Immutable once
/// built; the original line is preserved in `raw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredientLine {
    /// Parsed quantity, if a leading amount token was recognized
    pub amount: Option<Decimal>,
    /// Parsed unit; `None` when the line carried no quantity at all
    pub unit: Option<UnitTag>,
    /// The ingredient name (preparation text removed)
    pub name: String,
    /// Free-text preparation ("chopped", "diced, then rinsed")
    pub preparation: Option<String>,
    /// Whether the line was marked optional
    pub is_optional: bool,
    /// The original input line, untouched
    pub raw: String,
}

impl ParsedIngredientLine {
    /// Best-effort record for input the parser could not decompose.
    /// Parsing never fails; it degrades to this shape instead.
    pub fn degraded(raw: &str, is_optional: bool) -> Self {
        Self {
            amount: None,
            unit: None,
            name: raw.trim().to_string(),
            preparation: None,
            is_optional,
            raw: raw.to_string(),
        }
    }

    /// Check whether the line carries a measurable amount
    pub fn has_amount(&self) -> bool {
        self.amount.is_some()
    }
}

impl fmt::Display for ParsedIngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(amount) = &self.amount {
            write!(f, "{} ", amount)?;
        }
        if let Some(unit) = &self.unit {
            write!(f, "{} ", unit.display_name())?;
        }
        write!(f, "{}", self.name)?;
        if let Some(prep) = &self.preparation {
            write!(f, ", {}", prep)?;
        }
        if self.is_optional {
            write!(f, " (optional)")?;
        }
        Ok(())
    }
}

/// Volume units, all convertible through the tablespoon base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    Teaspoon,
    Tablespoon,
    FluidOunce,
    Cup,
    Pint,
    Quart,
    Gallon,
    Milliliter,
    Liter,
}

/// Weight units, all convertible through the ounce base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    Gram,
    Kilogram,
    Ounce,
    Pound,
}

/// Count units. These do not convert through a shared base; quantities
/// pass through unchanged and only identical labels are summable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountUnit {
    /// Generic whole-item count ("2 eggs", "1 onion")
    Whole,
    Piece,
    Clove,
    Slice,
    Stick,
    Can,
    Package,
    Bunch,
    Pinch,
    Dash,
}

/// Measurement unit tag over the three unit families.
///
/// Invariant: conversion is only defined between two tags of the same
/// family. Cross-family conversion is rejected by the conversion table,
/// never approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitTag {
    Volume(VolumeUnit),
    Weight(WeightUnit),
    Count(CountUnit),
}

impl UnitTag {
    /// Check if this is a volume unit
    pub fn is_volume(&self) -> bool {
        matches!(self, UnitTag::Volume(_))
    }

    /// Check if this is a weight unit
    pub fn is_weight(&self) -> bool {
        matches!(self, UnitTag::Weight(_))
    }

    /// Check if this is a count unit
    pub fn is_count(&self) -> bool {
        matches!(self, UnitTag::Count(_))
    }

    /// Check whether two tags belong to the same unit family
    pub fn same_family(&self, other: &UnitTag) -> bool {
        matches!(
            (self, other),
            (UnitTag::Volume(_), UnitTag::Volume(_))
                | (UnitTag::Weight(_), UnitTag::Weight(_))
                | (UnitTag::Count(_), UnitTag::Count(_))
        )
    }

    /// Get a human-readable string representation of the unit
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitTag::Volume(v) => v.display_name(),
            UnitTag::Weight(w) => w.display_name(),
            UnitTag::Count(c) => c.display_name(),
        }
    }
}

impl VolumeUnit {
    pub fn display_name(&self) -> &'static str {
        match self {
            VolumeUnit::Teaspoon => "tsp",
            VolumeUnit::Tablespoon => "tbsp",
            VolumeUnit::FluidOunce => "fl oz",
            VolumeUnit::Cup => "cups",
            VolumeUnit::Pint => "pints",
            VolumeUnit::Quart => "quarts",
            VolumeUnit::Gallon => "gallons",
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::Liter => "L",
        }
    }
}

impl WeightUnit {
    pub fn display_name(&self) -> &'static str {
        match self {
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Ounce => "oz",
            WeightUnit::Pound => "lbs",
        }
    }
}

impl CountUnit {
    pub fn display_name(&self) -> &'static str {
        match self {
            CountUnit::Whole => "whole",
            CountUnit::Piece => "pieces",
            CountUnit::Clove => "cloves",
            CountUnit::Slice => "slices",
            CountUnit::Stick => "sticks",
            CountUnit::Can => "cans",
            CountUnit::Package => "packages",
            CountUnit::Bunch => "bunches",
            CountUnit::Pinch => "pinches",
            CountUnit::Dash => "dashes",
        }
    }
}

/// Grocery aisle categories for shopping list grouping.
///
/// The variant order is the fixed display order; `Ord` on this enum is
/// what `group_and_sort` buckets by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum IngredientCategory {
    Produce,
    Proteins,
    Dairy,
    Grains,
    Condiments,
    Spices,
    Beverages,
    Other,
}

impl IngredientCategory {
    /// Fixed ordering used when rendering a grouped shopping list
    pub const DISPLAY_ORDER: [IngredientCategory; 8] = [
        IngredientCategory::Produce,
        IngredientCategory::Proteins,
        IngredientCategory::Dairy,
        IngredientCategory::Grains,
        IngredientCategory::Condiments,
        IngredientCategory::Spices,
        IngredientCategory::Beverages,
        IngredientCategory::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            IngredientCategory::Produce => "Produce",
            IngredientCategory::Proteins => "Proteins",
            IngredientCategory::Dairy => "Dairy",
            IngredientCategory::Grains => "Grains",
            IngredientCategory::Condiments => "Condiments",
            IngredientCategory::Spices => "Spices",
            IngredientCategory::Beverages => "Beverages",
            IngredientCategory::Other => "Other",
        }
    }
}

/// Identifier of a recipe in the surrounding system
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RecipeId(pub i64);

/// A monetary amount. Exact decimal, no currency dimension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Money(pub Decimal);

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// One line on a consolidated shopping list.
///
/// Built from one or more parsed ingredient lines that resolve to the same
/// identity. Mutated only by further merges within a single consolidation
/// pass; callers receive the finished list as a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Display name (first-seen parsed name for merged items)
    pub name: String,
    /// Quantity in `unit`
    pub quantity: Decimal,
    /// Display unit
    pub unit: UnitTag,
    /// Grocery aisle bucket
    pub category: IngredientCategory,
    /// Every recipe that contributed to this line
    pub from_recipes: BTreeSet<RecipeId>,
    /// Estimated price across contributing recipes, when known
    pub estimated_price: Option<Money>,
}

impl ShoppingListItem {
    /// Create a new item, inferring the category from the name
    pub fn new(name: &str, quantity: Decimal, unit: UnitTag) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit,
            category: categorize(name),
            from_recipes: BTreeSet::new(),
            estimated_price: None,
        }
    }

    /// Build an item from a parsed recipe line.
    ///
    /// A line without an amount contributes a single generic count
    /// ("salt to taste" becomes 1 whole salt); a line with an amount but
    /// no recognized unit keeps the generic count tag the parser assigned.
    pub fn from_parsed(line: &ParsedIngredientLine, recipe: RecipeId) -> Self {
        let quantity = line.amount.unwrap_or(Decimal::ONE);
        let unit = line.unit.unwrap_or(UnitTag::Count(CountUnit::Whole));
        Self::new(&line.name, quantity, unit).from_recipe(recipe)
    }

    /// Record a contributing recipe
    pub fn from_recipe(mut self, recipe: RecipeId) -> Self {
        self.from_recipes.insert(recipe);
        self
    }

    /// Attach an estimated price
    pub fn with_price(mut self, price: Money) -> Self {
        self.estimated_price = Some(price);
        self
    }

    /// Override the inferred category
    pub fn with_category(mut self, category: IngredientCategory) -> Self {
        self.category = category;
        self
    }
}

impl fmt::Display for ShoppingListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.unit.display_name(), self.name)?;
        if let Some(price) = &self.estimated_price {
            write!(f, " ({})", price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unit_family_predicates() {
        assert!(UnitTag::Volume(VolumeUnit::Cup).is_volume());
        assert!(!UnitTag::Volume(VolumeUnit::Cup).is_weight());
        assert!(UnitTag::Weight(WeightUnit::Pound).is_weight());
        assert!(UnitTag::Count(CountUnit::Clove).is_count());
    }

    #[test]
    fn test_same_family() {
        let cup = UnitTag::Volume(VolumeUnit::Cup);
        let tbsp = UnitTag::Volume(VolumeUnit::Tablespoon);
        let oz = UnitTag::Weight(WeightUnit::Ounce);
        assert!(cup.same_family(&tbsp));
        assert!(!cup.same_family(&oz));
        assert!(!oz.same_family(&UnitTag::Count(CountUnit::Can)));
    }

    #[test]
    fn test_category_display_order_is_enum_order() {
        // `group_and_sort` relies on Ord matching the display ordering
        let mut sorted = IngredientCategory::DISPLAY_ORDER;
        sorted.sort();
        assert_eq!(sorted, IngredientCategory::DISPLAY_ORDER);
    }

    #[test]
    fn test_item_from_parsed_defaults() {
        let line = ParsedIngredientLine::degraded("salt to taste", false);
        let item = ShoppingListItem::from_parsed(&line, RecipeId(1));
        assert_eq!(item.quantity, Decimal::ONE);
        assert_eq!(item.unit, UnitTag::Count(CountUnit::Whole));
        assert!(item.from_recipes.contains(&RecipeId(1)));
    }

    #[test]
    fn test_money_addition() {
        let total = Money(dec!(1.25)) + Money(dec!(2.50));
        assert_eq!(total, Money(dec!(3.75)));
        assert_eq!(format!("{}", total), "$3.75");
    }

    #[test]
    fn test_parsed_line_display() {
        let line = ParsedIngredientLine {
            amount: Some(dec!(2)),
            unit: Some(UnitTag::Volume(VolumeUnit::Cup)),
            name: "onions".to_string(),
            preparation: Some("chopped".to_string()),
            is_optional: true,
            raw: "2 cups chopped onions (optional)".to_string(),
        };
        let display = format!("{}", line);
        assert!(display.contains("2 cups onions"));
        assert!(display.contains("chopped"));
        assert!(display.contains("(optional)"));
    }

    #[test]
    fn test_degraded_line() {
        let line = ParsedIngredientLine::degraded("  something odd  ", false);
        assert_eq!(line.name, "something odd");
        assert!(line.amount.is_none());
        assert!(line.unit.is_none());
        assert!(!line.has_amount());
    }
}
