/// BMR weight coefficient (kcal per kg).
pub const BMR_WEIGHT_COEF: f64 = 9.99;

/// BMR height coefficient (kcal per cm).
pub const BMR_HEIGHT_COEF: f64 = 6.25;

/// BMR age coefficient (kcal per year).
pub const BMR_AGE_COEF: f64 = 4.92;

/// BMR constant offsets by gender.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Unit conversions
// ─────────────────────────────────────────────────────────────────────────────

pub const UNITS_LB_TO_KG: f64 = 0.453592;
pub const UNITS_IN_TO_CM: f64 = 2.54;

// ─────────────────────────────────────────────────────────────────────────────
// Meal split and goal adjustment
// ─────────────────────────────────────────────────────────────────────────────

/// Share of daily calories per meal.
pub const BREAKFAST_SHARE: f64 = 0.3;
pub const LUNCH_SHARE: f64 = 0.4;
pub const DINNER_SHARE: f64 = 0.3;

/// Allowed daily deficit / surplus range (kcal).
pub const MIN_GOAL_ADJUSTMENT: u32 = 200;
pub const MAX_GOAL_ADJUSTMENT: u32 = 800;
pub const DEFAULT_GOAL_ADJUSTMENT: u32 = 500;

// ─────────────────────────────────────────────────────────────────────────────
// Selector limits
// ─────────────────────────────────────────────────────────────────────────────

/// Upper bound on DP table cells ((items + 1) * (budget + 1)) per selection.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 50_000_000;

/// Catalog cache lifetime in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Entries kept per cache before least-recently-used eviction.
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 256;

/// Dietary preferences offered when prompting.
pub const KNOWN_PREFERENCES: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Pescatarian",
    "Keto",
    "Paleo",
    "Gluten-free",
    "Dairy-free",
    "Low-carb",
    "Mediterranean",
];

/// Allergies offered when prompting.
pub const KNOWN_ALLERGIES: &[&str] = &[
    "Peanuts",
    "Tree nuts",
    "Milk",
    "Eggs",
    "Fish",
    "Shellfish",
    "Wheat",
    "Soy",
    "Sesame",
];
