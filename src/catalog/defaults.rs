use crate::error::Result;
use crate::models::{Catalog, MealType};

type Group = (&'static str, &'static [(&'static str, i64)]);

const BREAKFAST: &[Group] = &[
    (
        "protein",
        &[
            ("eggs", 78),
            ("greek_yogurt", 130),
            ("cottage_cheese", 206),
            ("turkey_slices", 104),
            ("smoked_salmon", 117),
        ],
    ),
    (
        "whole_grains",
        &[
            ("whole_wheat_bread", 79),
            ("oatmeal", 150),
            ("quinoa", 222),
            ("whole_grain_cereal", 120),
            ("granola", 494),
        ],
    ),
    (
        "fruits",
        &[
            ("berries", 50),
            ("bananas", 96),
            ("apples", 52),
            ("oranges", 62),
            ("grapefruit", 52),
            ("melon_slices", 30),
        ],
    ),
    (
        "vegetables",
        &[
            ("spinach", 7),
            ("tomatoes", 18),
            ("avocado", 160),
            ("bell_peppers", 25),
            ("mushrooms", 15),
        ],
    ),
    (
        "healthy_fats",
        &[
            ("nut_butter", 94),
            ("nuts", 163),
            ("chia_seeds", 58),
            ("flaxseeds", 55),
            ("avocado_slices", 50),
        ],
    ),
    (
        "dairy",
        &[
            ("milk", 103),
            ("cheese", 113),
            ("yogurt", 150),
            ("dairy-free_alternatives", 80),
        ],
    ),
    (
        "other",
        &[
            ("honey", 64),
            ("maple_syrup", 52),
            ("coffee", 2),
            ("jam", 49),
            ("peanut_butter", 188),
            ("cocoa_powder", 12),
        ],
    ),
];

const LUNCH: &[Group] = &[
    (
        "protein",
        &[
            ("grilled_chicken_breast", 165),
            ("salmon_fillet", 206),
            ("tofu", 144),
            ("lean_beef", 176),
            ("shrimp", 99),
        ],
    ),
    (
        "whole_grains",
        &[
            ("brown_rice", 216),
            ("quinoa", 222),
            ("whole_wheat_pasta", 180),
            ("barley", 270),
            ("couscous", 176),
        ],
    ),
    (
        "vegetables",
        &[
            ("leafy_greens", 10),
            ("broccoli", 55),
            ("cauliflower", 25),
            ("carrots", 41),
            ("bell_peppers", 31),
            ("cucumbers", 16),
            ("tomatoes", 18),
            ("zucchini", 17),
        ],
    ),
    (
        "legumes",
        &[
            ("chickpeas", 269),
            ("lentils", 230),
            ("black_beans", 227),
            ("kidney_beans", 225),
            ("edamame", 121),
        ],
    ),
    (
        "healthy_fats",
        &[
            ("avocado", 234),
            ("nuts", 160),
            ("seeds", 160),
            ("olive_oil", 119),
            ("coconut_oil", 121),
        ],
    ),
    (
        "dairy_or_dairy_alternatives",
        &[
            ("greek_yogurt", 130),
            ("cottage_cheese", 206),
            ("cheese", 113),
            ("dairy-free_alternatives", 80),
        ],
    ),
    (
        "additional_toppings_condiments",
        &[
            ("sliced_avocado", 50),
            ("hummus", 27),
            ("salsa", 20),
            ("salad_dressings", 73),
            ("herbs_and_spices", 0),
        ],
    ),
];

const DINNER: &[Group] = &[
    (
        "proteins",
        &[
            ("chicken_breast", 165),
            ("salmon", 206),
            ("beef_steak", 250),
            ("tofu", 144),
            ("shrimp", 84),
            ("lentils", 116),
        ],
    ),
    (
        "grains_and_starches",
        &[
            ("brown_rice", 216),
            ("quinoa", 222),
            ("sweet_potatoes", 180),
            ("whole_wheat_pasta", 174),
            ("couscous", 176),
            ("barley", 193),
        ],
    ),
    (
        "vegetables",
        &[
            ("broccoli", 55),
            ("cauliflower", 25),
            ("green_beans", 31),
            ("asparagus", 27),
            ("brussels_sprouts", 38),
            ("carrots", 41),
            ("zucchini", 17),
        ],
    ),
    (
        "legumes",
        &[
            ("black_beans", 227),
            ("chickpeas", 269),
            ("kidney_beans", 333),
            ("lentils", 353),
        ],
    ),
    (
        "healthy_fats",
        &[
            ("avocado", 160),
            ("olive_oil", 119),
            ("nuts", 160),
            ("seeds", 150),
        ],
    ),
    (
        "dairy_or_dairy_alternatives",
        &[("greek_yogurt", 59), ("cheese", 113), ("almond_milk", 40)],
    ),
    (
        "sauces_and_condiments",
        &[
            ("tomato_sauce", 32),
            ("soy_sauce", 8),
            ("balsamic_vinegar", 14),
            ("mustard", 10),
            ("salsa", 15),
            ("guacamole", 50),
            ("hummus", 27),
        ],
    ),
    (
        "herbs_and_spices",
        &[
            ("basil", 22),
            ("oregano", 5),
            ("rosemary", 2),
            ("thyme", 3),
            ("cumin", 22),
            ("paprika", 20),
            ("garlic_powder", 9),
            ("onion_powder", 7),
        ],
    ),
];

/// Built-in catalog used when no other source is available.
pub fn default_catalog(meal: MealType) -> Result<Catalog> {
    let groups = match meal {
        MealType::Breakfast => BREAKFAST,
        MealType::Lunch => LUNCH,
        MealType::Dinner => DINNER,
    };
    Catalog::from_groups(
        groups
            .iter()
            .map(|(category, items)| (*category, items.iter().copied())),
    )
}
