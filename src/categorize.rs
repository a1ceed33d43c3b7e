//! # Ingredient Categorization Module
//!
//! Maps ingredient names to grocery aisle categories based on keyword
//! matching, for shopping list grouping. Keywords are matched by
//! containment against the normalized name, longest keyword first, so
//! "chicken broth" lands on its broth rule before the generic "chicken"
//! rule can claim it.

use lazy_static::lazy_static;

use crate::ingredient_model::IngredientCategory;
use crate::normalize::normalize;

lazy_static! {
    /// Keyword table sorted by keyword length descending so more specific
    /// matches are tried before general ones. Secondary sort is
    /// alphabetical for deterministic ordering.
    static ref CATEGORY_KEYWORDS: Vec<(&'static str, IngredientCategory)> = {
        use IngredientCategory::*;
        let mut table = vec![
            // Compound names that must outrank their generic stems
            ("chicken broth", Condiments),
            ("chicken stock", Condiments),
            ("beef broth", Condiments),
            ("vegetable broth", Condiments),
            ("coconut milk", Condiments),
            ("almond milk", Dairy),
            ("oat milk", Dairy),
            ("soy sauce", Condiments),
            ("fish sauce", Condiments),
            ("hot sauce", Condiments),
            ("tomato paste", Condiments),
            ("tomato sauce", Condiments),
            ("peanut butter", Condiments),
            ("cream cheese", Dairy),
            ("sour cream", Dairy),
            ("heavy cream", Dairy),
            ("olive oil", Condiments),
            ("sesame oil", Condiments),
            ("coconut oil", Condiments),
            ("vegetable oil", Condiments),
            ("maple syrup", Condiments),
            ("brown sugar", Condiments),
            ("baking powder", Grains),
            ("baking soda", Grains),
            ("red pepper flake", Spices),
            ("black pepper", Spices),
            ("chili powder", Spices),
            ("garlic powder", Spices),
            ("onion powder", Spices),

            // Produce
            ("onion", Produce),
            ("garlic", Produce),
            ("shallot", Produce),
            ("ginger", Produce),
            ("tomato", Produce),
            ("potato", Produce),
            ("carrot", Produce),
            ("celery", Produce),
            ("pepper", Produce),
            ("lettuce", Produce),
            ("spinach", Produce),
            ("kale", Produce),
            ("broccoli", Produce),
            ("cauliflower", Produce),
            ("zucchini", Produce),
            ("mushroom", Produce),
            ("cucumber", Produce),
            ("eggplant", Produce),
            ("avocado", Produce),
            ("lemon", Produce),
            ("lime", Produce),
            ("orange", Produce),
            ("apple", Produce),
            ("banana", Produce),
            ("berry", Produce),
            ("scallion", Produce),
            ("leek", Produce),
            ("cabbage", Produce),
            ("basil", Produce),
            ("parsley", Produce),
            ("cilantro", Produce),
            ("mint", Produce),
            ("rosemary", Produce),
            ("thyme", Produce),
            ("dill", Produce),
            ("chive", Produce),

            // Proteins
            ("steak", Proteins),
            ("chicken", Proteins),
            ("beef", Proteins),
            ("pork", Proteins),
            ("lamb", Proteins),
            ("turkey", Proteins),
            ("bacon", Proteins),
            ("sausage", Proteins),
            ("salmon", Proteins),
            ("shrimp", Proteins),
            ("tuna", Proteins),
            ("fish", Proteins),
            ("tofu", Proteins),
            ("tempeh", Proteins),
            ("lentil", Proteins),
            ("chickpea", Proteins),
            ("bean", Proteins),
            ("egg", Proteins),

            // Dairy
            ("milk", Dairy),
            ("butter", Dairy),
            ("cheese", Dairy),
            ("cream", Dairy),
            ("yogurt", Dairy),
            ("buttermilk", Dairy),
            ("mozzarella", Dairy),
            ("parmesan", Dairy),
            ("cheddar", Dairy),
            ("feta", Dairy),
            ("ricotta", Dairy),

            // Grains
            ("flour", Grains),
            ("rice", Grains),
            ("pasta", Grains),
            ("bread", Grains),
            ("oat", Grains),
            ("quinoa", Grains),
            ("couscous", Grains),
            ("noodle", Grains),
            ("tortilla", Grains),
            ("breadcrumb", Grains),
            ("cornstarch", Grains),
            ("cornmeal", Grains),
            ("barley", Grains),

            // Condiments
            ("vinegar", Condiments),
            ("mustard", Condiments),
            ("ketchup", Condiments),
            ("mayonnaise", Condiments),
            ("honey", Condiments),
            ("sugar", Condiments),
            ("molass", Condiments),
            ("broth", Condiments),
            ("stock", Condiments),
            ("oil", Condiments),
            ("salsa", Condiments),
            ("tahini", Condiments),
            ("miso", Condiments),

            // Spices
            ("salt", Spices),
            ("cumin", Spices),
            ("paprika", Spices),
            ("cinnamon", Spices),
            ("nutmeg", Spices),
            ("oregano", Spices),
            ("turmeric", Spices),
            ("coriander", Spices),
            ("cayenne", Spices),
            ("clove", Spices),
            ("cardamom", Spices),
            ("saffron", Spices),
            ("vanilla", Spices),
            ("bay leaf", Spices),
            ("allspice", Spices),

            // Beverages
            ("wine", Beverages),
            ("beer", Beverages),
            ("juice", Beverages),
            ("coffee", Beverages),
            ("tea", Beverages),
            ("soda water", Beverages),
        ];
        // Longest keyword first; alphabetical within a length for
        // deterministic ordering
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
        table
    };
}

/// Categorize an ingredient by name.
///
/// Matching is containment over the normalized name, so plural and
/// qualified forms ("Fresh Tomatoes") categorize the same as their plain
/// forms. Unmatched names fall back to [`IngredientCategory::Other`].
///
/// # Examples
///
/// ```rust
/// use larder::categorize::categorize;
/// use larder::ingredient_model::IngredientCategory;
///
/// assert_eq!(categorize("Fresh Tomatoes"), IngredientCategory::Produce);
/// assert_eq!(categorize("chicken broth"), IngredientCategory::Condiments);
/// assert_eq!(categorize("mystery paste"), IngredientCategory::Other);
/// ```
pub fn categorize(name: &str) -> IngredientCategory {
    let key = normalize(name);
    for (keyword, category) in CATEGORY_KEYWORDS.iter() {
        if key.contains(keyword) {
            return *category;
        }
    }
    IngredientCategory::Other
}
