use std::collections::HashSet;

use meal_planner_rs::models::{Catalog, CatalogItem};
use meal_planner_rs::planner::{select, select_items};
use proptest::prelude::*;

fn make_items(calories: &[i64]) -> Vec<CatalogItem> {
    calories
        .iter()
        .enumerate()
        .map(|(i, &cal)| CatalogItem::new("group", format!("item_{}", i), cal))
        .collect()
}

/// Best reachable total by trying every subset.
fn brute_force_best(calories: &[i64], budget: i64) -> i64 {
    let n = calories.len();
    let mut best = 0;
    for mask in 0u32..(1u32 << n) {
        let total: i64 = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| calories[i])
            .sum();
        if total <= budget && total > best {
            best = total;
        }
    }
    best
}

proptest! {
    #[test]
    fn selection_matches_exhaustive_search(
        calories in prop::collection::vec(0i64..80, 0..12),
        budget in 0i64..300,
    ) {
        let items = make_items(&calories);
        let selection = select_items(budget, &items).unwrap();
        prop_assert_eq!(selection.total, brute_force_best(&calories, budget));
    }

    #[test]
    fn selection_is_feasible(
        calories in prop::collection::vec(0i64..120, 0..16),
        budget in 0i64..400,
    ) {
        let items = make_items(&calories);
        let selection = select_items(budget, &items).unwrap();

        let sum: i64 = selection.items.iter().map(|i| i.calories).sum();
        prop_assert_eq!(sum, selection.total);
        prop_assert!(selection.total <= budget);

        let keys: HashSet<(&str, &str)> = selection
            .items
            .iter()
            .map(|i| (i.category.as_str(), i.name.as_str()))
            .collect();
        prop_assert_eq!(keys.len(), selection.items.len());
        prop_assert!(selection.items.iter().all(|i| i.calories > 0));
    }

    #[test]
    fn total_never_decreases_with_budget(
        calories in prop::collection::vec(1i64..60, 1..12),
        budget in 0i64..200,
        extra in 0i64..50,
    ) {
        let items = make_items(&calories);
        let smaller = select_items(budget, &items).unwrap();
        let larger = select_items(budget + extra, &items).unwrap();
        prop_assert!(larger.total >= smaller.total);
    }

    #[test]
    fn exact_fit_is_found(
        calories in prop::collection::vec(1i64..50, 1..10),
    ) {
        let items = make_items(&calories);
        let everything: i64 = calories.iter().sum();
        let selection = select_items(everything, &items).unwrap();
        prop_assert_eq!(selection.total, everything);
    }
}

#[test]
fn zero_budget_selects_nothing() {
    let items = make_items(&[3, 5, 7]);
    let selection = select_items(0, &items).unwrap();
    assert!(selection.is_empty());
    assert_eq!(selection.total, 0);
}

#[test]
fn empty_catalog_selects_nothing() {
    let selection = select(500, &Catalog::new()).unwrap();
    assert!(selection.is_empty());
    assert_eq!(selection.total, 0);
}

#[test]
fn selection_spans_categories() {
    let catalog = Catalog::from_groups(vec![
        ("proteins", vec![("eggs", 70), ("tofu", 94)]),
        ("fruits", vec![("apple", 52), ("banana", 89)]),
    ])
    .unwrap();

    let selection = select(200, &catalog).unwrap();
    assert_eq!(selection.total, 198);

    let categories: HashSet<&str> = selection
        .items
        .iter()
        .map(|i| i.category.as_str())
        .collect();
    assert!(categories.contains("proteins"));
    assert!(categories.contains("fruits"));
}
