use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{Catalog, CatalogItem, Selection};
use crate::planner::constants::DEFAULT_MAX_TABLE_CELLS;

/// Calorie-budgeted item selector (0/1 knapsack with value = weight = calories).
///
/// Finds the subset of catalog items whose calorie sum is the largest value
/// not exceeding the budget. Each `(category, name)` item is used at most once.
///
/// Reconstruction walks the table from the last item back to the first and
/// marks item `i` as taken only when `best[i][j] != best[i-1][j]`. Ties
/// therefore favour skipping the later item, and zero-calorie items are
/// never taken.
#[derive(Debug, Clone, Copy)]
pub struct Selector {
    max_table_cells: usize,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

impl Selector {
    /// Create a selector that refuses tables larger than `max_table_cells`.
    pub fn new(max_table_cells: usize) -> Self {
        Self { max_table_cells }
    }

    /// Select from a catalog, iterating items in catalog insertion order.
    pub fn select(&self, budget: i64, catalog: &Catalog) -> Result<Selection> {
        self.select_items(budget, &catalog.items())
    }

    /// Select from a flat item list.
    pub fn select_items(&self, budget: i64, items: &[CatalogItem]) -> Result<Selection> {
        if budget < 0 {
            return Err(PlannerError::invalid(format!(
                "budget must be non-negative, got {}",
                budget
            )));
        }
        if let Some(bad) = items.iter().find(|i| i.calories < 0) {
            return Err(PlannerError::invalid(format!(
                "{}/{} has negative calories ({})",
                bad.category, bad.name, bad.calories
            )));
        }

        let capacity = usize::try_from(budget)
            .map_err(|_| PlannerError::invalid(format!("budget {} is too large", budget)))?;

        if items.is_empty() || capacity == 0 {
            debug!(budget, items = items.len(), "degenerate selection");
            return Ok(Selection::default());
        }

        let n = items.len();
        let width = capacity
            .checked_add(1)
            .ok_or_else(|| PlannerError::invalid(format!("budget {} is too large", budget)))?;
        let cells = (n + 1)
            .checked_mul(width)
            .filter(|cells| *cells <= self.max_table_cells)
            .ok_or_else(|| {
                PlannerError::invalid(format!(
                    "{} items x budget {} exceeds the selection table limit of {} cells",
                    n, budget, self.max_table_cells
                ))
            })?;

        // Costs that don't fit a usize can never fit the budget either.
        let costs: Vec<usize> = items
            .iter()
            .map(|i| usize::try_from(i.calories).unwrap_or(usize::MAX))
            .collect();

        // Row-major (n + 1) x (capacity + 1); row 0 stays all zeros.
        let mut best = vec![0usize; cells];
        for i in 1..=n {
            let cost = costs[i - 1];
            let (done, rest) = best.split_at_mut(i * width);
            let prev = &done[(i - 1) * width..];
            let row = &mut rest[..width];
            for j in 0..width {
                row[j] = if cost > j {
                    prev[j]
                } else {
                    prev[j].max(prev[j - cost] + cost)
                };
            }
        }

        let mut picked = Vec::new();
        let mut j = capacity;
        for i in (1..=n).rev() {
            if best[i * width + j] != best[(i - 1) * width + j] {
                picked.push(items[i - 1].clone());
                j -= costs[i - 1];
            }
        }

        let total: i64 = picked.iter().map(|i| i.calories).sum();
        debug_assert_eq!(usize::try_from(total).ok(), Some(best[n * width + capacity]));

        debug!(
            budget,
            items = n,
            cells,
            selected = picked.len(),
            total,
            "selection complete"
        );

        Ok(Selection {
            items: picked,
            total,
        })
    }
}

/// Select from a catalog with the default table limit.
pub fn select(budget: i64, catalog: &Catalog) -> Result<Selection> {
    Selector::default().select(budget, catalog)
}

/// Select from a flat item list with the default table limit.
pub fn select_items(budget: i64, items: &[CatalogItem]) -> Result<Selection> {
    Selector::default().select_items(budget, items)
}
