use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{PlannerError, Result};

/// A selectable food item, keyed by `(category, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogItem {
    pub category: String,
    pub name: String,
    pub calories: i64,
}

impl CatalogItem {
    pub fn new(category: impl Into<String>, name: impl Into<String>, calories: i64) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            calories,
        }
    }
}

/// Foods available for one meal: category -> item -> calories.
///
/// Both levels keep insertion order, so flattening is deterministic and
/// matches the order the catalog was built or parsed in. The same item name
/// may appear under several categories; each occurrence is a distinct item.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, IndexMap<String, i64>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an item. Negative calorie values are rejected.
    ///
    /// Replacing an existing `(category, item)` keeps its original position.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        item: impl Into<String>,
        calories: i64,
    ) -> Result<()> {
        let category = category.into();
        let item = item.into();
        if calories < 0 {
            return Err(PlannerError::invalid(format!(
                "{}/{} has negative calories ({})",
                category, item, calories
            )));
        }
        self.categories
            .entry(category)
            .or_default()
            .insert(item, calories);
        Ok(())
    }

    /// Build a catalog from `(category, [(item, calories)])` groups.
    pub fn from_groups<C, N, I, G>(groups: G) -> Result<Self>
    where
        C: Into<String>,
        N: Into<String>,
        I: IntoIterator<Item = (N, i64)>,
        G: IntoIterator<Item = (C, I)>,
    {
        let mut catalog = Catalog::new();
        for (category, items) in groups {
            let category: String = category.into();
            for (item, calories) in items {
                catalog.insert(category.clone(), item, calories)?;
            }
        }
        Ok(catalog)
    }

    /// Validate loosely-typed JSON against the catalog shape.
    ///
    /// Integral values are taken as-is, non-negative fractional values are
    /// rounded to the nearest integer. Anything else is rejected.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let Value::Object(groups) = value else {
            return Err(PlannerError::invalid(
                "catalog must be an object of categories",
            ));
        };

        let mut catalog = Catalog::new();
        for (category, items) in groups {
            let Value::Object(items) = items else {
                return Err(PlannerError::invalid(format!(
                    "category '{}' must be an object of items",
                    category
                )));
            };
            for (item, raw) in items {
                let calories = calorie_value(&category, &item, &raw)?;
                catalog.insert(category.as_str(), item, calories)?;
            }
        }
        Ok(catalog)
    }

    /// Category names in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Items of one category, if present.
    pub fn category(&self, name: &str) -> Option<&IndexMap<String, i64>> {
        self.categories.get(name)
    }

    /// Flatten to `(category, item, calories)` triples in insertion order.
    pub fn items(&self) -> Vec<CatalogItem> {
        self.categories
            .iter()
            .flat_map(|(category, items)| {
                items
                    .iter()
                    .map(move |(name, calories)| CatalogItem::new(category, name, *calories))
            })
            .collect()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Number of items across all categories.
    pub fn total_items(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}

/// Equal only when both hold the same items in the same order, since order
/// decides which of several equally good selections is returned.
impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.categories.len() == other.categories.len()
            && self
                .categories
                .iter()
                .zip(&other.categories)
                .all(|((name_a, items_a), (name_b, items_b))| {
                    name_a == name_b && items_a.iter().eq(items_b.iter())
                })
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Catalog::from_json_value(value).map_err(serde::de::Error::custom)
    }
}

fn calorie_value(category: &str, item: &str, raw: &Value) -> Result<i64> {
    let malformed = |why: &str| {
        PlannerError::invalid(format!("{}/{}: {} ({})", category, item, why, raw))
    };

    let Value::Number(number) = raw else {
        return Err(malformed("calories must be a number"));
    };

    if let Some(calories) = number.as_i64() {
        if calories < 0 {
            return Err(malformed("negative calories"));
        }
        return Ok(calories);
    }

    let calories = number
        .as_f64()
        .ok_or_else(|| malformed("calories out of range"))?;
    if !calories.is_finite() || calories < 0.0 {
        return Err(malformed("negative calories"));
    }
    let rounded = calories.round();
    if rounded > i64::MAX as f64 {
        return Err(malformed("calories out of range"));
    }
    Ok(rounded as i64)
}
