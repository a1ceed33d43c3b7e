//! # Curated Substitution Dataset
//!
//! The hand-authored substitution table behind tier-1 resolution. One
//! entry per ingredient, grouped by authoring category (fats, dairy,
//! acids, proteins, aromatics, herbs, spices, sweeteners, baking
//! essentials, thickeners). Ratios and adjustments follow common kitchen
//! practice.
//!
//! Every entry is validated at load by
//! [`SubstitutionDataset::from_entries`](crate::substitution_model::SubstitutionDataset):
//! non-empty candidates, score/tier banding, unique normalized keys.

use crate::ingredient_model::IngredientCategory::{
    self, Condiments, Dairy, Grains, Produce, Proteins, Spices,
};
use crate::substitution_model::{
    ConfidenceTier, ImpactLevel, SubstitutionCandidate, SubstitutionEntry,
};

fn entry(ingredient: &str, category: IngredientCategory) -> SubstitutionEntry {
    SubstitutionEntry::new(ingredient, category)
}

fn high(substitute: &str, ratio: &str, score: f64) -> SubstitutionCandidate {
    SubstitutionCandidate::new(substitute, ratio, score, ConfidenceTier::High)
}

fn medium(substitute: &str, ratio: &str, score: f64) -> SubstitutionCandidate {
    SubstitutionCandidate::new(substitute, ratio, score, ConfidenceTier::Medium)
}

fn low(substitute: &str, ratio: &str, score: f64) -> SubstitutionCandidate {
    SubstitutionCandidate::new(substitute, ratio, score, ConfidenceTier::Low)
}

/// The full curated table. Called once by
/// [`SubstitutionDataset::load`](crate::substitution_model::SubstitutionDataset::load).
pub fn curated_entries() -> Vec<SubstitutionEntry> {
    let mut entries = Vec::new();
    entries.extend(fats());
    entries.extend(dairy());
    entries.extend(acids());
    entries.extend(proteins());
    entries.extend(aromatics());
    entries.extend(herbs());
    entries.extend(spices());
    entries.extend(sweeteners());
    entries.extend(baking_essentials());
    entries.extend(thickeners());
    entries
}

fn fats() -> Vec<SubstitutionEntry> {
    vec![
        entry("butter", Dairy)
            .candidate(
                high("coconut oil", "1:1", 0.92)
                    .flavor(ImpactLevel::Noticeable)
                    .texture(ImpactLevel::Minimal)
                    .best_for(["baking", "sauteing"])
                    .avoid_for(["buttercream frosting"])
                    .adjustment("use refined coconut oil for a neutral flavor"),
            )
            .candidate(
                high("margarine", "1:1", 0.88)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["baking", "spreading"]),
            )
            .candidate(
                high("olive oil", "3/4 cup per 1 cup butter", 0.82)
                    .flavor(ImpactLevel::Noticeable)
                    .texture(ImpactLevel::Noticeable)
                    .best_for(["sauteing", "roasting"])
                    .avoid_for(["pastry", "frosting"]),
            )
            .candidate(
                medium("applesauce", "1/2 cup per 1 cup butter", 0.65)
                    .flavor(ImpactLevel::Noticeable)
                    .texture(ImpactLevel::Significant)
                    .best_for(["quick breads", "muffins"])
                    .avoid_for(["cookies", "laminated dough"])
                    .adjustment("reduce other liquids slightly"),
            ),
        entry("olive oil", Condiments)
            .alias("extra virgin olive oil")
            .alias("evoo")
            .candidate(
                high("vegetable oil", "1:1", 0.9)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["sauteing", "roasting", "dressings"]),
            )
            .candidate(
                high("avocado oil", "1:1", 0.88)
                    .flavor(ImpactLevel::None)
                    .best_for(["high-heat cooking", "dressings"]),
            )
            .candidate(
                medium("melted butter", "1:1", 0.7)
                    .flavor(ImpactLevel::Noticeable)
                    .avoid_for(["vinaigrettes"])
                    .adjustment("watch the lower smoke point"),
            ),
        entry("vegetable oil", Condiments)
            .alias("canola oil")
            .candidate(
                high("olive oil", "1:1", 0.88)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["sauteing", "roasting"]),
            )
            .candidate(
                high("melted coconut oil", "1:1", 0.84)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["baking"]),
            )
            .candidate(
                medium("applesauce", "1/2 cup per 1 cup oil", 0.6)
                    .texture(ImpactLevel::Significant)
                    .best_for(["muffins", "quick breads"])
                    .avoid_for(["frying"]),
            ),
        entry("shortening", Grains)
            .candidate(
                high("butter", "1:1", 0.9)
                    .flavor(ImpactLevel::Minimal)
                    .texture(ImpactLevel::Noticeable)
                    .best_for(["pie crusts", "biscuits"])
                    .adjustment("dough may spread slightly more"),
            )
            .candidate(
                medium("coconut oil", "1:1", 0.75)
                    .best_for(["pie crusts"])
                    .adjustment("chill before cutting into flour"),
            ),
    ]
}

fn dairy() -> Vec<SubstitutionEntry> {
    vec![
        entry("milk", Dairy)
            .alias("whole milk")
            .alias("2% milk")
            .candidate(
                high("oat milk", "1:1", 0.9)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["baking", "batters", "sauces"]),
            )
            .candidate(
                high("almond milk", "1:1", 0.86)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["baking", "smoothies"])
                    .avoid_for(["cream-based sauces"]),
            )
            .candidate(
                high("soy milk", "1:1", 0.85)
                    .best_for(["baking", "custards"]),
            )
            .candidate(
                medium("half and half diluted with water", "1:1 mixed 50/50", 0.75)
                    .texture(ImpactLevel::Minimal),
            ),
        entry("buttermilk", Dairy)
            .candidate(
                high("milk with lemon juice", "1 cup milk + 1 tbsp lemon juice", 0.93)
                    .flavor(ImpactLevel::None)
                    .adjustment("let stand 5 minutes before using"),
            )
            .candidate(
                high("milk with white vinegar", "1 cup milk + 1 tbsp vinegar", 0.92)
                    .adjustment("let stand 5 minutes before using"),
            )
            .candidate(
                high("plain yogurt thinned with milk", "3/4 cup yogurt + 1/4 cup milk", 0.84)
                    .texture(ImpactLevel::Minimal),
            ),
        entry("heavy cream", Dairy)
            .alias("heavy whipping cream")
            .alias("double cream")
            .candidate(
                high("milk with melted butter", "3/4 cup milk + 1/4 cup butter", 0.85)
                    .texture(ImpactLevel::Noticeable)
                    .best_for(["sauces", "soups"])
                    .avoid_for(["whipping"]),
            )
            .candidate(
                high("full-fat coconut milk", "1:1", 0.8)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["curries", "soups", "vegan desserts"]),
            )
            .candidate(
                medium("evaporated milk", "1:1", 0.72)
                    .best_for(["sauces", "baking"])
                    .avoid_for(["whipping"]),
            ),
        entry("sour cream", Dairy)
            .candidate(
                high("plain greek yogurt", "1:1", 0.95)
                    .flavor(ImpactLevel::None)
                    .texture(ImpactLevel::None)
                    .best_for(["dips", "baking", "toppings"]),
            )
            .candidate(
                medium("creme fraiche", "1:1", 0.78)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["sauces", "toppings"]),
            )
            .candidate(
                medium("buttermilk", "3/4 cup per 1 cup", 0.6)
                    .texture(ImpactLevel::Significant)
                    .best_for(["dressings", "marinades"])
                    .avoid_for(["dolloping"]),
            ),
        entry("cream cheese", Dairy)
            .candidate(
                high("mascarpone", "1:1", 0.88)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["frostings", "cheesecakes", "spreads"]),
            )
            .candidate(
                medium("ricotta blended smooth", "1:1", 0.68)
                    .texture(ImpactLevel::Noticeable)
                    .best_for(["fillings", "spreads"])
                    .avoid_for(["cheesecake"]),
            ),
        entry("yogurt", Dairy)
            .alias("plain yogurt")
            .alias("greek yogurt")
            .candidate(
                high("sour cream", "1:1", 0.92)
                    .best_for(["baking", "marinades", "dips"]),
            )
            .candidate(
                medium("buttermilk", "3/4 cup per 1 cup", 0.65)
                    .texture(ImpactLevel::Noticeable)
                    .best_for(["dressings", "batters"]),
            ),
        entry("egg", Proteins)
            .candidate(
                high("flax egg", "1 tbsp ground flax + 3 tbsp water per egg", 0.82)
                    .texture(ImpactLevel::Noticeable)
                    .best_for(["muffins", "pancakes", "cookies"])
                    .avoid_for(["meringues", "souffles"])
                    .adjustment("let the mixture gel for 10 minutes"),
            )
            .candidate(
                medium("mashed banana", "1/4 cup per egg", 0.66)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["quick breads", "pancakes"])
                    .avoid_for(["savory dishes"]),
            )
            .candidate(
                medium("unsweetened applesauce", "1/4 cup per egg", 0.64)
                    .best_for(["muffins", "cakes"])
                    .avoid_for(["meringues"]),
            ),
    ]
}

fn acids() -> Vec<SubstitutionEntry> {
    vec![
        entry("lemon juice", Produce)
            .candidate(
                high("lime juice", "1:1", 0.95)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["dressings", "marinades", "seafood"]),
            )
            .candidate(
                high("white wine vinegar", "1/2 the amount", 0.8)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["dressings", "pan sauces"])
                    .avoid_for(["desserts"]),
            )
            .candidate(
                medium("apple cider vinegar", "1/2 the amount", 0.7)
                    .flavor(ImpactLevel::Noticeable)
                    .avoid_for(["lemon-forward desserts"]),
            ),
        entry("lime juice", Produce)
            .candidate(
                high("lemon juice", "1:1", 0.95)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["dressings", "salsas", "marinades"]),
            )
            .candidate(
                medium("white wine vinegar", "1/2 the amount", 0.68)
                    .avoid_for(["margaritas", "ceviche"]),
            ),
        entry("white vinegar", Condiments)
            .alias("distilled white vinegar")
            .candidate(
                high("apple cider vinegar", "1:1", 0.9)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["pickling", "dressings"]),
            )
            .candidate(
                high("white wine vinegar", "1:1", 0.88)
                    .best_for(["dressings", "sauces"]),
            )
            .candidate(
                medium("lemon juice", "double the amount", 0.72)
                    .flavor(ImpactLevel::Noticeable)
                    .avoid_for(["pickling"]),
            ),
        entry("balsamic vinegar", Condiments)
            .candidate(
                high("red wine vinegar with honey", "1 tbsp vinegar + 1/2 tsp honey", 0.85)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["dressings", "glazes"]),
            )
            .candidate(
                medium("sherry vinegar", "1:1", 0.7)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["dressings"]),
            ),
        entry("white wine", Condiments)
            .alias("dry white wine")
            .candidate(
                high("chicken broth with lemon juice", "1 cup broth + 1 tsp lemon", 0.84)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["pan sauces", "risotto", "braises"]),
            )
            .candidate(
                medium("white wine vinegar diluted", "1/2 vinegar + 1/2 water", 0.62)
                    .flavor(ImpactLevel::Noticeable)
                    .adjustment("add a pinch of sugar to round it out"),
            ),
    ]
}

fn proteins() -> Vec<SubstitutionEntry> {
    vec![
        entry("chicken breast", Proteins)
            .candidate(
                high("chicken thighs", "1:1 by weight", 0.93)
                    .flavor(ImpactLevel::Minimal)
                    .texture(ImpactLevel::Minimal)
                    .best_for(["braises", "grilling", "curries"])
                    .adjustment("cook a few minutes longer"),
            )
            .candidate(
                high("turkey breast", "1:1 by weight", 0.85)
                    .best_for(["cutlets", "stir-fries"]),
            )
            .candidate(
                medium("extra-firm tofu", "1:1 by weight", 0.62)
                    .flavor(ImpactLevel::Significant)
                    .texture(ImpactLevel::Significant)
                    .best_for(["stir-fries", "curries"])
                    .adjustment("press and marinate before cooking"),
            ),
        entry("ground beef", Proteins)
            .candidate(
                high("ground turkey", "1:1", 0.9)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["tacos", "meatballs", "chili"])
                    .adjustment("add a little oil, it is leaner"),
            )
            .candidate(
                high("ground pork", "1:1", 0.84)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["meatballs", "dumplings"]),
            )
            .candidate(
                medium("brown lentils", "1 cup cooked per 1/2 lb", 0.6)
                    .flavor(ImpactLevel::Significant)
                    .texture(ImpactLevel::Significant)
                    .best_for(["chili", "tacos", "bolognese"])
                    .avoid_for(["burgers"]),
            ),
        entry("bacon", Proteins)
            .candidate(
                high("pancetta", "1:1", 0.9)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["pasta", "braises"])
                    .adjustment("no smoke flavor; add smoked paprika if needed"),
            )
            .candidate(
                medium("smoked turkey bacon", "1:1", 0.68)
                    .texture(ImpactLevel::Noticeable)
                    .best_for(["breakfast", "sandwiches"]),
            ),
        entry("anchovy", Proteins)
            .alias("anchovy fillets")
            .candidate(
                high("fish sauce", "1/2 tsp per fillet", 0.86)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["dressings", "pasta sauces", "stews"]),
            )
            .candidate(
                medium("worcestershire sauce", "1/2 tsp per fillet", 0.64)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["stews", "marinades"]),
            ),
    ]
}

fn aromatics() -> Vec<SubstitutionEntry> {
    vec![
        entry("onion", Produce)
            .alias("yellow onion")
            .candidate(
                high("shallots", "2-3 shallots per onion", 0.9)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["pan sauces", "dressings", "sautes"]),
            )
            .candidate(
                high("leeks", "1 cup sliced per onion", 0.82)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["soups", "braises"])
                    .adjustment("rinse well and use white and light green parts"),
            )
            .candidate(
                medium("onion powder", "1 tbsp per onion", 0.6)
                    .texture(ImpactLevel::Significant)
                    .best_for(["rubs", "sauces"])
                    .avoid_for(["dishes needing onion texture"]),
            ),
        entry("garlic", Produce)
            .alias("garlic cloves")
            .candidate(
                high("garlic powder", "1/8 tsp per clove", 0.85)
                    .texture(ImpactLevel::Minimal)
                    .best_for(["rubs", "marinades", "sauces"]),
            )
            .candidate(
                medium("shallots", "1 tbsp minced per clove", 0.65)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["sautes", "dressings"]),
            ),
        entry("shallot", Produce)
            .candidate(
                high("red onion", "1/4 small onion per shallot", 0.88)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["vinaigrettes", "sautes"]),
            )
            .candidate(
                high("yellow onion with garlic", "1/4 onion + 1/4 clove per shallot", 0.8)
                    .best_for(["pan sauces", "braises"]),
            ),
        entry("ginger", Produce)
            .alias("ginger root")
            .candidate(
                high("ground ginger", "1/4 tsp per tbsp fresh", 0.82)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["baking", "spice blends"])
                    .avoid_for(["stir-fries needing fresh bite"]),
            )
            .candidate(
                medium("galangal", "1:1", 0.62)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["thai curries", "soups"]),
            ),
        entry("scallion", Produce)
            .alias("green onion")
            .alias("spring onion")
            .candidate(
                high("chives", "1:1", 0.87)
                    .texture(ImpactLevel::Minimal)
                    .best_for(["garnishes", "salads", "eggs"]),
            )
            .candidate(
                medium("finely sliced leek tops", "1:1", 0.66)
                    .best_for(["cooked dishes"])
                    .avoid_for(["raw garnish"]),
            ),
    ]
}

fn herbs() -> Vec<SubstitutionEntry> {
    vec![
        entry("basil", Produce)
            .candidate(
                high("dried basil", "1 tsp dried per tbsp fresh", 0.84)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["sauces", "soups"])
                    .avoid_for(["caprese", "pesto garnish"]),
            )
            .candidate(
                medium("fresh oregano", "1/2 the amount", 0.62)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["tomato sauces"]),
            ),
        entry("cilantro", Produce)
            .alias("coriander leaves")
            .candidate(
                high("flat-leaf parsley", "1:1", 0.8)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["garnishes", "salsas"])
                    .adjustment("add a squeeze of lime to mimic brightness"),
            )
            .candidate(
                medium("fresh mint with parsley", "50/50 mix, 1:1", 0.6)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["southeast asian dishes"]),
            ),
        entry("parsley", Produce)
            .alias("flat-leaf parsley")
            .alias("italian parsley")
            .candidate(
                high("chervil", "1:1", 0.82)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["garnishes", "herb sauces"]),
            )
            .candidate(
                medium("celery leaves", "1:1", 0.64)
                    .best_for(["soups", "stocks"]),
            ),
        entry("oregano", Spices)
            .alias("dried oregano")
            .candidate(
                high("marjoram", "1:1", 0.88)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["tomato sauces", "greek dishes"]),
            )
            .candidate(
                medium("thyme", "1:1", 0.66)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["roasts", "stews"]),
            ),
        entry("rosemary", Produce)
            .candidate(
                high("thyme", "1:1", 0.8)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["roasted potatoes", "poultry"]),
            )
            .candidate(
                medium("sage", "1/2 the amount", 0.6)
                    .flavor(ImpactLevel::Significant)
                    .best_for(["roasts", "stuffings"]),
            ),
        entry("thyme", Produce)
            .candidate(
                high("oregano", "1:1", 0.82)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["stews", "roasts"]),
            )
            .candidate(
                medium("rosemary finely chopped", "1/2 the amount", 0.64)
                    .flavor(ImpactLevel::Noticeable),
            ),
    ]
}

fn spices() -> Vec<SubstitutionEntry> {
    vec![
        entry("cumin", Spices)
            .alias("ground cumin")
            .candidate(
                high("ground coriander", "1:1", 0.8)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["curries", "chili"])
                    .adjustment("add a pinch of chili powder for warmth"),
            )
            .candidate(
                medium("chili powder", "1/2 the amount", 0.66)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["tex-mex dishes"]),
            )
            .candidate(
                medium("garam masala", "1/2 the amount", 0.62)
                    .best_for(["indian dishes"]),
            ),
        entry("cinnamon", Spices)
            .alias("ground cinnamon")
            .candidate(
                high("allspice", "1/4 tsp per tsp cinnamon", 0.8)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["baking", "spiced drinks"]),
            )
            .candidate(
                high("nutmeg", "1/4 tsp per tsp cinnamon", 0.8)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["baking", "custards"]),
            )
            .candidate(
                medium("pumpkin pie spice", "1:1", 0.75)
                    .best_for(["baking"]),
            ),
        entry("nutmeg", Spices)
            .candidate(
                high("mace", "1:1", 0.9)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["custards", "baking", "bechamel"]),
            )
            .candidate(
                medium("cinnamon", "1:1", 0.62)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["baking"]),
            ),
        entry("paprika", Spices)
            .alias("sweet paprika")
            .candidate(
                high("smoked paprika", "1:1", 0.84)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["rubs", "stews"]),
            )
            .candidate(
                medium("cayenne pepper", "1/4 the amount", 0.6)
                    .flavor(ImpactLevel::Significant)
                    .avoid_for(["dishes for spice-sensitive eaters"]),
            ),
        entry("cayenne pepper", Spices)
            .alias("cayenne")
            .candidate(
                high("red pepper flakes", "1/2 tsp flakes per 1/4 tsp cayenne", 0.86)
                    .texture(ImpactLevel::Minimal)
                    .best_for(["sauces", "marinades"]),
            )
            .candidate(
                high("hot sauce", "1/2 tsp per 1/4 tsp cayenne", 0.8)
                    .adjustment("reduce other liquids slightly"),
            ),
        entry("vanilla extract", Spices)
            .alias("vanilla")
            .candidate(
                high("vanilla bean paste", "1:1", 0.95)
                    .flavor(ImpactLevel::None)
                    .best_for(["baking", "custards", "ice cream"]),
            )
            .candidate(
                medium("maple syrup", "1:1", 0.6)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["pancakes", "oatmeal"])
                    .avoid_for(["delicate custards"]),
            ),
    ]
}

fn sweeteners() -> Vec<SubstitutionEntry> {
    vec![
        entry("sugar", Condiments)
            .alias("granulated sugar")
            .alias("white sugar")
            .candidate(
                high("light brown sugar", "1:1", 0.92)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["baking", "sauces"]),
            )
            .candidate(
                high("honey", "3/4 cup per 1 cup sugar", 0.8)
                    .flavor(ImpactLevel::Noticeable)
                    .best_for(["dressings", "marinades", "tea"])
                    .adjustment("reduce other liquids by 1/4 cup per cup"),
            )
            .candidate(
                medium("maple syrup", "3/4 cup per 1 cup sugar", 0.75)
                    .flavor(ImpactLevel::Noticeable)
                    .adjustment("reduce other liquids by 3 tbsp per cup"),
            ),
        entry("brown sugar", Condiments)
            .alias("light brown sugar")
            .alias("dark brown sugar")
            .candidate(
                high("white sugar with molasses", "1 cup sugar + 1 tbsp molasses", 0.95)
                    .flavor(ImpactLevel::None)
                    .texture(ImpactLevel::None)
                    .best_for(["cookies", "sauces", "rubs"]),
            )
            .candidate(
                high("white sugar", "1:1", 0.8)
                    .flavor(ImpactLevel::Minimal)
                    .texture(ImpactLevel::Minimal)
                    .avoid_for(["chewy cookies"]),
            ),
        entry("honey", Condiments)
            .candidate(
                high("maple syrup", "1:1", 0.9)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["dressings", "glazes", "baking"]),
            )
            .candidate(
                high("agave nectar", "1:1", 0.86)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["drinks", "dressings"]),
            )
            .candidate(
                medium("sugar dissolved in water", "1 1/4 cup sugar + 1/4 cup water", 0.62)
                    .texture(ImpactLevel::Noticeable)
                    .avoid_for(["no-bake treats relying on honey's body"]),
            ),
        entry("maple syrup", Condiments)
            .candidate(
                high("honey", "1:1", 0.9)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["glazes", "baking", "oatmeal"]),
            )
            .candidate(
                medium("brown sugar dissolved in water", "3/4 cup sugar + 1/4 cup water", 0.64)
                    .flavor(ImpactLevel::Noticeable)
                    .avoid_for(["pancake topping"]),
            ),
    ]
}

fn baking_essentials() -> Vec<SubstitutionEntry> {
    vec![
        entry("all-purpose flour", Grains)
            .alias("flour")
            .alias("plain flour")
            .candidate(
                high("bread flour", "1:1", 0.88)
                    .texture(ImpactLevel::Minimal)
                    .best_for(["breads", "pizza dough"])
                    .avoid_for(["tender cakes"]),
            )
            .candidate(
                high("cake flour", "1 cup + 2 tbsp per cup", 0.82)
                    .texture(ImpactLevel::Minimal)
                    .best_for(["cakes", "muffins"]),
            )
            .candidate(
                medium("gluten-free flour blend", "1:1", 0.7)
                    .texture(ImpactLevel::Noticeable)
                    .adjustment("choose a blend with xanthan gum"),
            ),
        entry("baking powder", Grains)
            .candidate(
                high(
                    "baking soda with cream of tartar",
                    "1/4 tsp soda + 1/2 tsp cream of tartar per tsp",
                    0.93,
                )
                .flavor(ImpactLevel::None)
                .best_for(["any leavened baking"]),
            )
            .candidate(
                medium(
                    "baking soda with buttermilk",
                    "1/4 tsp soda + 1/2 cup buttermilk per tsp",
                    0.66,
                )
                .adjustment("reduce other liquids by 1/2 cup"),
            ),
        entry("baking soda", Grains)
            .alias("bicarbonate of soda")
            .candidate(
                high("baking powder", "3x the amount", 0.8)
                    .flavor(ImpactLevel::Minimal)
                    .adjustment("omit other acids in the recipe"),
            ),
        entry("breadcrumbs", Grains)
            .alias("bread crumbs")
            .alias("panko")
            .candidate(
                high("crushed crackers", "1:1", 0.88)
                    .texture(ImpactLevel::Minimal)
                    .best_for(["breading", "meatballs", "toppings"]),
            )
            .candidate(
                high("rolled oats pulsed fine", "1:1", 0.8)
                    .best_for(["meatballs", "meatloaf"]),
            )
            .candidate(
                medium("crushed cornflakes", "1:1", 0.7)
                    .flavor(ImpactLevel::Minimal)
                    .best_for(["crispy coatings"]),
            ),
        entry("chocolate chips", Grains)
            .candidate(
                high("chopped chocolate bar", "1:1", 0.95)
                    .texture(ImpactLevel::Minimal)
                    .best_for(["cookies", "muffins", "melting"]),
            )
            .candidate(
                medium("cacao nibs", "1:1", 0.6)
                    .flavor(ImpactLevel::Significant)
                    .avoid_for(["sweet-forward desserts"]),
            ),
    ]
}

fn thickeners() -> Vec<SubstitutionEntry> {
    vec![
        entry("cornstarch", Grains)
            .alias("corn starch")
            .candidate(
                high("arrowroot powder", "1:1", 0.9)
                    .texture(ImpactLevel::None)
                    .best_for(["glossy sauces", "fruit fillings"])
                    .adjustment("add at the end; it breaks down with long cooking"),
            )
            .candidate(
                high("all-purpose flour", "2 tbsp per 1 tbsp cornstarch", 0.8)
                    .texture(ImpactLevel::Minimal)
                    .best_for(["gravies", "stews"])
                    .adjustment("cook longer to lose the raw flour taste"),
            )
            .candidate(
                medium("potato starch", "1:1", 0.75)
                    .best_for(["sauces", "soups"]),
            ),
        entry("tomato paste", Condiments)
            .candidate(
                high("tomato sauce reduced", "3 tbsp sauce per 1 tbsp paste", 0.84)
                    .adjustment("simmer to reduce before using"),
            )
            .candidate(
                medium("ketchup", "1:1", 0.6)
                    .flavor(ImpactLevel::Noticeable)
                    .avoid_for(["long-simmered sauces"]),
            ),
        entry("gelatin", Grains)
            .candidate(
                high("agar agar", "1:1 powder", 0.82)
                    .texture(ImpactLevel::Noticeable)
                    .best_for(["jellies", "panna cotta"])
                    .adjustment("must be boiled to activate; sets firmer"),
            )
            .candidate(
                low("cornstarch", "2x the amount", 0.5)
                    .texture(ImpactLevel::Significant)
                    .best_for(["puddings"])
                    .avoid_for(["clear jellies"]),
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitution_model::SubstitutionDataset;

    #[test]
    fn test_curated_dataset_loads() {
        // Fail-fast validation over the real table: banding, non-empty
        // candidate lists, unique keys
        let dataset = SubstitutionDataset::load().expect("curated dataset must validate");
        assert!(dataset.len() >= 30);
    }

    #[test]
    fn test_butter_has_high_confidence_coconut_oil() {
        let dataset = SubstitutionDataset::load().unwrap();
        let entry = dataset.lookup_exact("butter").unwrap();
        let top = &entry.candidates[0];
        assert_eq!(top.substitute, "coconut oil");
        assert_eq!(top.confidence_tier, ConfidenceTier::High);
    }

    #[test]
    fn test_every_candidate_is_scored_in_bounds() {
        for entry in curated_entries() {
            for candidate in &entry.candidates {
                assert!(
                    (0.0..=1.0).contains(&candidate.confidence_score),
                    "{} -> {} out of bounds",
                    entry.ingredient,
                    candidate.substitute
                );
            }
        }
    }

    #[test]
    fn test_aliases_resolve() {
        let dataset = SubstitutionDataset::load().unwrap();
        assert!(dataset.lookup_exact("green onion").is_some());
        assert!(dataset.lookup_exact("evoo").is_some());
        assert!(dataset.lookup_exact("bicarbonate of soda").is_some());
    }
}
