//! Planner configuration loaded from `meal_planner.toml`.
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! The resolved config is passed explicitly to the selector, catalog and
//! recipe providers.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::cache::CacheSettings;
use crate::error::{PlannerError, Result};
use crate::models::MealType;
use crate::planner::constants::{
    BREAKFAST_SHARE, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS, DEFAULT_GOAL_ADJUSTMENT, DEFAULT_MAX_TABLE_CELLS,
    DINNER_SHARE, LUNCH_SHARE, MAX_GOAL_ADJUSTMENT, MIN_GOAL_ADJUSTMENT,
};

/// The config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "meal_planner.toml";

/// Tolerance when checking that meal shares add up to one.
const SHARE_SUM_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Lifetime of cached catalogs and recipes, in seconds.
    pub cache_ttl_secs: u64,

    /// Most entries each cache keeps before evicting the least recently used.
    pub cache_max_entries: usize,

    /// Largest selection table (items x budget) a single meal may build.
    pub max_table_cells: usize,

    /// Default daily deficit / surplus when a goal is given without an amount.
    pub default_adjustment: u32,

    /// Directory holding `<meal>.json` catalogs, tried before the built-ins.
    pub catalog_dir: Option<PathBuf>,

    pub meal_shares: MealShares,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            default_adjustment: DEFAULT_GOAL_ADJUSTMENT,
            catalog_dir: None,
            meal_shares: MealShares::default(),
        }
    }
}

/// Fraction of daily calories assigned to each meal.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MealShares {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
}

impl Default for MealShares {
    fn default() -> Self {
        Self {
            breakfast: BREAKFAST_SHARE,
            lunch: LUNCH_SHARE,
            dinner: DINNER_SHARE,
        }
    }
}

impl MealShares {
    pub fn share(&self, meal: MealType) -> f64 {
        match meal {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
        }
    }
}

impl PlannerConfig {
    pub fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            ttl: Duration::from_secs(self.cache_ttl_secs),
            max_entries: self.cache_max_entries,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for meal in MealType::ALL {
            let share = self.meal_shares.share(meal);
            if !(share > 0.0 && share <= 1.0) {
                return Err(PlannerError::invalid(format!(
                    "{} share must be in (0, 1], got {}",
                    meal, share
                )));
            }
        }
        let sum: f64 = MealType::ALL
            .iter()
            .map(|m| self.meal_shares.share(*m))
            .sum();
        if (sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(PlannerError::invalid(format!(
                "meal shares must add up to 1.0, got {:.3}",
                sum
            )));
        }
        if !(MIN_GOAL_ADJUSTMENT..=MAX_GOAL_ADJUSTMENT).contains(&self.default_adjustment) {
            return Err(PlannerError::invalid(format!(
                "default_adjustment must be between {} and {}",
                MIN_GOAL_ADJUSTMENT, MAX_GOAL_ADJUSTMENT
            )));
        }
        if self.cache_max_entries == 0 {
            return Err(PlannerError::invalid("cache_max_entries must be positive"));
        }
        if self.max_table_cells == 0 {
            return Err(PlannerError::invalid("max_table_cells must be positive"));
        }
        Ok(())
    }
}

/// Parse a config from TOML text.
pub fn parse_config(contents: &str) -> Result<PlannerConfig> {
    let config: PlannerConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a config file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    debug!("loaded config from {}", path.as_ref().display());
    parse_config(&contents)
}

/// Load an explicit config, else `meal_planner.toml` if present, else defaults.
pub fn load_or_default(explicit: Option<&Path>) -> Result<PlannerConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.exists() {
        load_config(default_path)
    } else {
        debug!("no {} found, using defaults", CONFIG_FILE_NAME);
        Ok(PlannerConfig::default())
    }
}
