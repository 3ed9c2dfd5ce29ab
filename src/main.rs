use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use meal_planner_rs::catalog::{
    default_catalog, load_catalog, save_catalog, CachedCatalogProvider, CatalogProvider,
    FallbackCatalogProvider, FileCatalogProvider, StaticCatalogProvider,
};
use meal_planner_rs::cli::{Cli, Command, PlanArgs};
use meal_planner_rs::config::{load_or_default, PlannerConfig};
use meal_planner_rs::error::Result;
use meal_planner_rs::interface::{
    complete_profile, display_catalog, display_meal_plan, display_selection, prompt_yes_no,
    write_json, write_markdown, write_selection_csv, ProfileDraft,
};
use meal_planner_rs::models::MealType;
use meal_planner_rs::planner::{
    attach_recipes, generate_meal_plan, Selector, KNOWN_ALLERGIES, KNOWN_PREFERENCES,
};
use meal_planner_rs::recipe::{CachedRecipeProvider, OutlineRecipeProvider};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_or_default(cli.config.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(args, &config),
        Command::Select {
            budget,
            catalog,
            meal,
        } => cmd_select(budget, catalog.as_deref(), meal, &config),
        Command::Catalog { meal, out } => cmd_catalog(meal, out.as_deref()),
    }
}

/// Catalog source: `<dir>/<meal>.json` with built-in fallback, cached.
fn build_catalog_provider(
    catalog_dir: Option<PathBuf>,
    config: &PlannerConfig,
) -> CachedCatalogProvider<Box<dyn CatalogProvider>> {
    let inner: Box<dyn CatalogProvider> = match catalog_dir {
        Some(dir) => {
            debug!("catalog directory: {}", dir.display());
            Box::new(FallbackCatalogProvider::new(
                FileCatalogProvider::new(dir),
                StaticCatalogProvider,
            ))
        }
        None => Box::new(StaticCatalogProvider),
    };
    CachedCatalogProvider::new(inner, config.cache_settings())
}

/// Ask before overwriting an existing export, unless prompts are disabled.
fn may_write(path: &Path, interactive: bool) -> Result<bool> {
    if !interactive || !path.exists() {
        return Ok(true);
    }
    prompt_yes_no(&format!("{} exists. Overwrite?", path.display()), false)
}

/// Build and display a day plan.
fn cmd_plan(args: PlanArgs, config: &PlannerConfig) -> Result<()> {
    let interactive = !args.no_input;

    let goal = args
        .goal
        .map(|kind| kind.into_goal(args.adjust, config.default_adjustment))
        .transpose()?;

    let draft = ProfileDraft {
        name: args.name.clone(),
        age: args.age,
        gender: args.gender,
        units: args.units,
        weight_kg: args.weight_kg(),
        height_cm: args.height_cm()?,
        activity: args.activity,
        goal,
        preferences: args.preferences.clone(),
        allergies: args.allergies.clone(),
    };
    let profile = complete_profile(
        draft,
        interactive,
        config.default_adjustment,
        KNOWN_PREFERENCES,
        KNOWN_ALLERGIES,
    )?;

    let catalog_dir = args.catalog_dir.clone().or_else(|| config.catalog_dir.clone());
    let provider = build_catalog_provider(catalog_dir, config);

    let mut plan = generate_meal_plan(&profile, &provider, config)?;

    if !args.no_recipes {
        let outline = OutlineRecipeProvider::new().with_prompt(args.show_prompt);
        let recipes = CachedRecipeProvider::new(outline, config.cache_settings());
        attach_recipes(&mut plan, &profile, &recipes);
    }

    display_meal_plan(&plan, !args.no_recipes);

    if let Some(path) = &args.markdown {
        if may_write(path, interactive)? {
            write_markdown(&plan, path)?;
            println!("Wrote meal plan to {}", path.display());
        }
    }

    if let Some(path) = &args.csv {
        if may_write(path, interactive)? {
            write_selection_csv(&plan, path)?;
            println!("Wrote selected items to {}", path.display());
        }
    }

    if let Some(path) = &args.json {
        if may_write(path, interactive)? {
            write_json(&plan, path)?;
            println!("Wrote plan JSON to {}", path.display());
        }
    }

    Ok(())
}

/// Run the selector on one catalog.
fn cmd_select(
    budget: i64,
    catalog_path: Option<&Path>,
    meal: MealType,
    config: &PlannerConfig,
) -> Result<()> {
    let catalog = match catalog_path {
        Some(path) => load_catalog(path)?,
        None => default_catalog(meal)?,
    };

    println!(
        "Loaded {} items in {} categories",
        catalog.total_items(),
        catalog.len()
    );

    let selection = Selector::new(config.max_table_cells).select(budget, &catalog)?;
    display_selection(meal.label(), budget, &selection);
    println!();

    Ok(())
}

/// Print built-in catalogs, optionally seeding a catalog directory.
fn cmd_catalog(meal: Option<MealType>, out: Option<&Path>) -> Result<()> {
    let meals: Vec<MealType> = match meal {
        Some(meal) => vec![meal],
        None => MealType::ALL.to_vec(),
    };

    for meal in meals {
        let catalog = default_catalog(meal)?;
        display_catalog(&catalog, meal.label());

        if let Some(dir) = out {
            std::fs::create_dir_all(dir)?;
            let path = FileCatalogProvider::new(dir).path_for(meal);
            save_catalog(&path, &catalog)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
