//! # Shopping List Consolidation Module
//!
//! Merges line items across recipes into one shopping list. Items whose
//! names score at or above the similarity threshold are treated as the
//! same identity; their quantities are summed in the family base unit and
//! re-expressed through the display-scaling rule.
//!
//! Quantity conservation: for any set of items merged into one line, the
//! sum of their base-unit quantities equals the merged line's base-unit
//! quantity, regardless of merge order. Items with matching names but
//! incompatible unit families are deliberately kept as separate lines;
//! summing cups with ounces is meaningless.

use log::{debug, trace};

use crate::engine_config::EngineConfig;
use crate::ingredient_model::{ParsedIngredientLine, RecipeId, ShoppingListItem};
use crate::normalize::normalize;
use crate::similarity::similarity;
use crate::unit_conversion::{from_base, to_base, Conversion};

/// Merge input items by fuzzy identity and compatible units.
///
/// The result preserves first-seen insertion order; use
/// [`group_and_sort`] afterwards for display ordering.
pub fn consolidate(items: Vec<ShoppingListItem>, config: &EngineConfig) -> Vec<ShoppingListItem> {
    let mut entries: Vec<(String, ShoppingListItem)> = Vec::new();

    for item in items {
        let key = normalize(&item.name);

        // Rank existing identities by similarity, best first, and merge
        // into the best one with compatible units
        let mut matches: Vec<(usize, f64)> = entries
            .iter()
            .enumerate()
            .filter_map(|(position, (existing_key, _))| {
                let score = similarity(&key, existing_key);
                (score >= config.similarity_threshold).then_some((position, score))
            })
            .collect();
        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut merged = false;
        for (position, score) in &matches {
            let (_, existing) = &mut entries[*position];
            if try_merge(existing, &item) {
                trace!(
                    "merged '{}' into '{}' (similarity {:.2})",
                    item.name,
                    existing.name,
                    score
                );
                merged = true;
                break;
            }
        }

        if !merged {
            if !matches.is_empty() {
                // Name matched but no unit family did; a separate line is
                // the correct outcome, not a failed merge
                debug!("keeping '{}' separate: incompatible units", item.name);
            }
            entries.push((key, item));
        }
    }

    entries.into_iter().map(|(_, item)| item).collect()
}

/// Sum two items if their units reduce to the same base unit. Returns
/// false (and leaves `existing` untouched) when they do not.
fn try_merge(existing: &mut ShoppingListItem, incoming: &ShoppingListItem) -> bool {
    let (existing_base, existing_unit) = to_base(existing.quantity, existing.unit);
    let (incoming_base, incoming_unit) = to_base(incoming.quantity, incoming.unit);
    if existing_unit != incoming_unit {
        return false;
    }

    let total = existing_base + incoming_base;
    let (quantity, unit) = match from_base(total, existing_unit, None) {
        Conversion::Converted { quantity, unit } => (quantity, unit),
        // Display scaling never crosses families; keep the base form if
        // it ever declines
        Conversion::Incompatible { quantity, unit } => (quantity, unit),
    };

    existing.quantity = quantity;
    existing.unit = unit;
    existing
        .from_recipes
        .extend(incoming.from_recipes.iter().copied());
    existing.estimated_price = match (existing.estimated_price, incoming.estimated_price) {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or_default() + b.unwrap_or_default()),
    };
    true
}

/// Bucket consolidated items by category in the fixed display order and
/// sort alphabetically within each bucket.
pub fn group_and_sort(mut items: Vec<ShoppingListItem>) -> Vec<ShoppingListItem> {
    items.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    items
}

/// Build shopping list items from parsed recipe lines, one item per
/// line, tagged with the contributing recipe.
pub fn items_from_recipes(
    recipes: &[(RecipeId, Vec<ParsedIngredientLine>)],
) -> Vec<ShoppingListItem> {
    recipes
        .iter()
        .flat_map(|(recipe, lines)| {
            lines
                .iter()
                .map(|line| ShoppingListItem::from_parsed(line, *recipe))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient_model::{
        CountUnit, IngredientCategory, Money, UnitTag, VolumeUnit, WeightUnit,
    };
    use rust_decimal_macros::dec;

    fn cup() -> UnitTag {
        UnitTag::Volume(VolumeUnit::Cup)
    }

    fn item(name: &str, quantity: rust_decimal::Decimal, unit: UnitTag) -> ShoppingListItem {
        ShoppingListItem::new(name, quantity, unit)
    }

    #[test]
    fn test_merge_same_unit() {
        let items = vec![
            item("milk", dec!(1), cup()).from_recipe(RecipeId(1)),
            item("milk", dec!(1), cup()).from_recipe(RecipeId(2)),
        ];
        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quantity, dec!(2));
        assert_eq!(result[0].unit, UnitTag::Volume(VolumeUnit::Cup));
        assert_eq!(result[0].from_recipes.len(), 2);
    }

    #[test]
    fn test_merge_across_units_in_family() {
        // 1 cup + 8 tbsp + 1 cup = 40 tbsp = 2.5 cups
        let items = vec![
            item("milk", dec!(1), UnitTag::Volume(VolumeUnit::Cup)),
            item("milk", dec!(8), UnitTag::Volume(VolumeUnit::Tablespoon)),
            item("milk", dec!(1), UnitTag::Volume(VolumeUnit::Cup)),
        ];
        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quantity, dec!(2.5));
        assert_eq!(result[0].unit, UnitTag::Volume(VolumeUnit::Cup));
    }

    #[test]
    fn test_merge_is_order_independent() {
        let mut base_items = vec![
            item("milk", dec!(1), UnitTag::Volume(VolumeUnit::Cup)),
            item("milk", dec!(8), UnitTag::Volume(VolumeUnit::Tablespoon)),
            item("milk", dec!(1), UnitTag::Volume(VolumeUnit::Cup)),
        ];
        let config = EngineConfig::default();

        // Every rotation of the input merges to the same total
        for _ in 0..base_items.len() {
            base_items.rotate_left(1);
            let result = consolidate(base_items.clone(), &config);
            assert_eq!(result.len(), 1);
            assert_eq!(result[0].quantity, dec!(2.5));
            assert_eq!(result[0].unit, UnitTag::Volume(VolumeUnit::Cup));
        }
    }

    #[test]
    fn test_cross_family_never_merges() {
        // 2 cups and 3 oz of the same name stay distinct
        let items = vec![
            item("cream cheese", dec!(2), UnitTag::Volume(VolumeUnit::Cup)),
            item("cream cheese", dec!(3), UnitTag::Weight(WeightUnit::Ounce)),
        ];
        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result.len(), 2);
        let quantities: Vec<_> = result.iter().map(|i| i.quantity).collect();
        assert!(quantities.contains(&dec!(2)));
        assert!(quantities.contains(&dec!(3)));
    }

    #[test]
    fn test_count_labels_never_cross() {
        let items = vec![
            item("tomatoes", dec!(2), UnitTag::Count(CountUnit::Can)),
            item("tomatoes", dec!(3), UnitTag::Count(CountUnit::Whole)),
        ];
        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_fuzzy_identity_match() {
        // Plural and qualified names fold into one line
        let items = vec![
            item("onions", dec!(1), UnitTag::Volume(VolumeUnit::Cup)),
            item("chopped onion", dec!(1), UnitTag::Volume(VolumeUnit::Cup)),
        ];
        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "onions"); // first-seen name wins
        assert_eq!(result[0].quantity, dec!(2));
    }

    #[test]
    fn test_dissimilar_names_stay_separate() {
        let items = vec![
            item("milk", dec!(1), cup()),
            item("chicken stock", dec!(1), cup()),
        ];
        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_quantity_conservation_in_base_units() {
        let items = vec![
            item("flour", dec!(3), UnitTag::Volume(VolumeUnit::Teaspoon)),
            item("flour", dec!(1), UnitTag::Volume(VolumeUnit::Tablespoon)),
            item("flour", dec!(2), UnitTag::Volume(VolumeUnit::Cup)),
        ];
        let expected_base: rust_decimal::Decimal = items
            .iter()
            .map(|i| to_base(i.quantity, i.unit).0)
            .sum();

        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result.len(), 1);
        let (merged_base, _) = to_base(result[0].quantity, result[0].unit);
        assert_eq!(merged_base, expected_base);
    }

    #[test]
    fn test_price_summing_treats_missing_as_zero() {
        let items = vec![
            item("milk", dec!(1), cup()).with_price(Money(dec!(2.50))),
            item("milk", dec!(1), cup()),
            item("milk", dec!(1), cup()).with_price(Money(dec!(1.25))),
        ];
        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].estimated_price, Some(Money(dec!(3.75))));
    }

    #[test]
    fn test_no_price_stays_none() {
        let items = vec![
            item("milk", dec!(1), cup()),
            item("milk", dec!(1), cup()),
        ];
        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result[0].estimated_price, None);
    }

    #[test]
    fn test_group_and_sort_ordering() {
        let items = vec![
            item("salt", dec!(1), UnitTag::Count(CountUnit::Pinch)),
            item("banana", dec!(2), UnitTag::Count(CountUnit::Whole)),
            item("apple", dec!(3), UnitTag::Count(CountUnit::Whole)),
            item("chicken breast", dec!(1), UnitTag::Weight(WeightUnit::Pound)),
            item("xanthan gum", dec!(1), UnitTag::Count(CountUnit::Package)),
        ];
        let sorted = group_and_sort(items);

        let names: Vec<_> = sorted.iter().map(|i| i.name.as_str()).collect();
        // Produce first (alphabetical), then proteins, then spices; the
        // unmatched name lands in the trailing Other bucket
        assert_eq!(
            names,
            vec!["apple", "banana", "chicken breast", "salt", "xanthan gum"]
        );
        assert_eq!(sorted[4].category, IngredientCategory::Other);
    }

    #[test]
    fn test_display_unit_scales_up_on_merge() {
        // 12 oz + 12 oz = 24 oz >= 16 -> 1.5 lbs
        let items = vec![
            item("ground beef", dec!(12), UnitTag::Weight(WeightUnit::Ounce)),
            item("ground beef", dec!(12), UnitTag::Weight(WeightUnit::Ounce)),
        ];
        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quantity, dec!(1.5));
        assert_eq!(result[0].unit, UnitTag::Weight(WeightUnit::Pound));
    }

    #[test]
    fn test_unmerged_item_keeps_original_unit() {
        // A lone item is never re-expressed; 1 tsp stays 1 tsp
        let items = vec![item("salt", dec!(1), UnitTag::Volume(VolumeUnit::Teaspoon))];
        let result = consolidate(items, &EngineConfig::default());
        assert_eq!(result[0].quantity, dec!(1));
        assert_eq!(result[0].unit, UnitTag::Volume(VolumeUnit::Teaspoon));
    }
}
