use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Gender, MealType, Units, WeightGoal};
use crate::planner::calculations::{feet_inches_to_cm, pounds_to_kg};
use crate::planner::constants::{MAX_GOAL_ADJUSTMENT, MIN_GOAL_ADJUSTMENT};

/// Meal planner: fits food catalogs to a calorie budget for each meal.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a meal_planner.toml config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a day plan from a profile.
    Plan(PlanArgs),

    /// Run the selector on a single catalog.
    Select {
        /// Calorie budget for the meal.
        #[arg(long, allow_negative_numbers = true)]
        budget: i64,

        /// Catalog JSON file (defaults to the built-in catalog for --meal).
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "lunch")]
        meal: MealType,
    },

    /// Print a built-in catalog.
    Catalog {
        /// Meal to print (all meals when omitted).
        #[arg(long, value_enum)]
        meal: Option<MealType>,

        /// Also write each catalog to <DIR>/<meal>.json.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GoalKind {
    Maintain,
    Lose,
    Gain,
}

impl GoalKind {
    /// Combine with an optional kcal amount, falling back to `default`.
    pub fn into_goal(self, adjust: Option<u32>, default: u32) -> Result<WeightGoal> {
        let kcal = adjust.unwrap_or(default);
        if self != GoalKind::Maintain && !(MIN_GOAL_ADJUSTMENT..=MAX_GOAL_ADJUSTMENT).contains(&kcal)
        {
            return Err(PlannerError::invalid(format!(
                "--adjust must be between {} and {}, got {}",
                MIN_GOAL_ADJUSTMENT, MAX_GOAL_ADJUSTMENT, kcal
            )));
        }
        Ok(match self {
            GoalKind::Maintain => WeightGoal::Maintain,
            GoalKind::Lose => WeightGoal::Lose(kcal),
            GoalKind::Gain => WeightGoal::Gain(kcal),
        })
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    #[arg(long, value_enum, default_value = "metric")]
    pub units: Units,

    /// Weight in kg (metric) or lb (imperial).
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm (metric) or feet (imperial).
    #[arg(long)]
    pub height: Option<f64>,

    /// Extra inches on top of --height (imperial only).
    #[arg(long, default_value_t = 0.0)]
    pub height_in: f64,

    #[arg(long, value_enum)]
    pub activity: Option<ActivityLevel>,

    #[arg(long, value_enum)]
    pub goal: Option<GoalKind>,

    /// Daily deficit / surplus in kcal for --goal lose|gain.
    #[arg(long)]
    pub adjust: Option<u32>,

    /// Dietary preference (repeatable).
    #[arg(long = "prefer")]
    pub preferences: Vec<String>,

    /// Food allergy (repeatable).
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    /// Directory with <meal>.json catalogs (overrides config).
    #[arg(long)]
    pub catalog_dir: Option<PathBuf>,

    /// Write the plan as markdown to this path.
    #[arg(long)]
    pub markdown: Option<PathBuf>,

    /// Write the selected items as CSV to this path.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the full plan as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Skip recipe outlines.
    #[arg(long)]
    pub no_recipes: bool,

    /// Include the recipe service prompt under each outline.
    #[arg(long, conflicts_with = "no_recipes")]
    pub show_prompt: bool,

    /// Never prompt; unset fields use defaults and --name is required.
    #[arg(long)]
    pub no_input: bool,
}

impl PlanArgs {
    /// Weight in kilograms, converting from pounds if needed.
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.map(|w| match self.units {
            Units::Metric => w,
            Units::Imperial => pounds_to_kg(w),
        })
    }

    /// Height in centimetres, converting from feet + inches if needed.
    ///
    /// `--height-in` only applies to imperial units.
    pub fn height_cm(&self) -> Result<Option<f64>> {
        match self.units {
            Units::Metric if self.height_in != 0.0 => Err(PlannerError::invalid(
                "--height-in requires --units imperial",
            )),
            Units::Metric => Ok(self.height),
            Units::Imperial => Ok(match self.height {
                Some(feet) => Some(feet_inches_to_cm(feet, self.height_in)),
                None if self.height_in > 0.0 => Some(feet_inches_to_cm(0.0, self.height_in)),
                None => None,
            }),
        }
    }
}
