use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Gender, Units, UserProfile, WeightGoal};
use crate::planner::calculations::{feet_inches_to_cm, pounds_to_kg};
use crate::planner::constants::{MAX_GOAL_ADJUSTMENT, MIN_GOAL_ADJUSTMENT};

/// Minimum Jaro-Winkler similarity for a fuzzy option match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Values used for fields left unset in non-interactive mode.
const DEFAULT_AGE: u32 = 30;
const DEFAULT_WEIGHT_KG: f64 = 70.0;
const DEFAULT_HEIGHT_CM: f64 = 170.0;

/// Imperial prompt defaults, roughly the metric ones.
const DEFAULT_WEIGHT_LB: f64 = 154.0;
const DEFAULT_HEIGHT_FT: f64 = 5.0;
const DEFAULT_HEIGHT_IN: f64 = 7.0;

/// Profile fields gathered from flags; `None` means "ask or default".
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    /// Units used when prompting for weight and height.
    pub units: Units,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity: Option<ActivityLevel>,
    pub goal: Option<WeightGoal>,
    pub preferences: Vec<String>,
    pub allergies: Vec<String>,
}

/// Result of matching free text against a list of known options.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionMatch {
    Exact(String),
    /// Fuzzy candidates, best first.
    Candidates(Vec<String>),
    NoMatch,
}

/// Match user input against known options (case-insensitive, then fuzzy).
pub fn match_option(input: &str, known: &[&str]) -> OptionMatch {
    let input = input.trim().to_lowercase();

    if let Some(exact) = known.iter().find(|k| k.to_lowercase() == input) {
        return OptionMatch::Exact(exact.to_string());
    }

    let mut candidates: Vec<(&str, f64)> = known
        .iter()
        .map(|k| (*k, jaro_winkler(&k.to_lowercase(), &input)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        OptionMatch::NoMatch
    } else {
        OptionMatch::Candidates(candidates.into_iter().map(|(k, _)| k.to_string()).collect())
    }
}

/// Canonicalize flag values: exact matches take the known spelling,
/// anything else is kept as typed. Duplicates are dropped.
pub fn normalize_choices(values: &[String], known: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let chosen = match match_option(value, known) {
            OptionMatch::Exact(k) => k,
            _ => value.to_string(),
        };
        if !out.iter().any(|o| o.eq_ignore_ascii_case(&chosen)) {
            out.push(chosen);
        }
    }
    out
}

fn parse_input<T: std::str::FromStr>(input: &str, what: &str) -> Result<T> {
    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::invalid(format!("Invalid {}: '{}'", what, input.trim())))
}

pub fn prompt_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Enter your name")
        .interact_text()?;
    Ok(input.trim().to_string())
}

pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Enter your age")
        .default(DEFAULT_AGE.to_string())
        .interact_text()?;
    parse_input(&input, "age")
}

pub fn prompt_gender() -> Result<Gender> {
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;
    Ok(if selection == 0 {
        Gender::Male
    } else {
        Gender::Female
    })
}

fn prompt_number(prompt: &str, default: f64, what: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    parse_input(&input, what)
}

/// Prompt for weight in the given units, returning kilograms.
pub fn prompt_weight_kg(units: Units) -> Result<f64> {
    match units {
        Units::Metric => prompt_number("Weight (kg)", DEFAULT_WEIGHT_KG, "weight"),
        Units::Imperial => {
            let pounds = prompt_number("Weight (lb)", DEFAULT_WEIGHT_LB, "weight")?;
            Ok(pounds_to_kg(pounds))
        }
    }
}

/// Prompt for height in the given units, returning centimetres.
pub fn prompt_height_cm(units: Units) -> Result<f64> {
    match units {
        Units::Metric => prompt_number("Height (cm)", DEFAULT_HEIGHT_CM, "height"),
        Units::Imperial => {
            let feet = prompt_number("Height (ft)", DEFAULT_HEIGHT_FT, "height")?;
            let inches = prompt_number("Height (in)", DEFAULT_HEIGHT_IN, "height")?;
            Ok(feet_inches_to_cm(feet, inches))
        }
    }
}

pub fn prompt_activity() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let default_idx = ActivityLevel::ALL
        .iter()
        .position(|a| *a == ActivityLevel::default())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Select your activity level")
        .items(&labels)
        .default(default_idx)
        .interact()?;

    Ok(ActivityLevel::ALL
        .get(selection)
        .copied()
        .unwrap_or_default())
}

/// Prompt for the weight goal and, for lose/gain, the daily amount.
pub fn prompt_goal(default_adjustment: u32) -> Result<WeightGoal> {
    let selection = Select::new()
        .with_prompt("Weight goal")
        .items(&["Maintain", "Lose", "Gain"])
        .default(0)
        .interact()?;

    if selection == 0 {
        return Ok(WeightGoal::Maintain);
    }

    let what = if selection == 1 { "deficit" } else { "surplus" };
    let input: String = Input::new()
        .with_prompt(format!(
            "Calorie {} per day ({}-{})",
            what, MIN_GOAL_ADJUSTMENT, MAX_GOAL_ADJUSTMENT
        ))
        .default(default_adjustment.to_string())
        .interact_text()?;
    let kcal: u32 = parse_input(&input, what)?;
    if !(MIN_GOAL_ADJUSTMENT..=MAX_GOAL_ADJUSTMENT).contains(&kcal) {
        return Err(PlannerError::invalid(format!(
            "{} must be between {} and {}",
            what, MIN_GOAL_ADJUSTMENT, MAX_GOAL_ADJUSTMENT
        )));
    }

    Ok(if selection == 1 {
        WeightGoal::Lose(kcal)
    } else {
        WeightGoal::Gain(kcal)
    })
}

/// Prompt for a list of options with fuzzy matching against `known`.
pub fn prompt_choices(label: &str, known: &[&str]) -> Result<Vec<String>> {
    let mut chosen: Vec<String> = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt(format!("Enter {} (or press Enter to finish)", label))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        match match_option(input, known) {
            OptionMatch::Exact(option) => {
                println!("Added: {}", option);
                chosen.push(option);
            }
            OptionMatch::NoMatch => {
                println!("No matching option found for '{}'", input);
            }
            OptionMatch::Candidates(candidates) if candidates.len() == 1 => {
                let option = &candidates[0];
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", option))
                    .default(true)
                    .interact()?;
                if confirm {
                    println!("Added: {}", option);
                    chosen.push(option.clone());
                }
            }
            OptionMatch::Candidates(candidates) => {
                let options: Vec<String> = candidates.into_iter().take(5).collect();
                let mut selection_options = options.clone();
                selection_options.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&selection_options)
                    .default(0)
                    .interact()?;

                if let Some(option) = options.get(selection) {
                    println!("Added: {}", option);
                    chosen.push(option.clone());
                }
            }
        }
    }

    Ok(chosen)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Fill missing profile fields by prompting, or with defaults when
/// `interactive` is false. A missing name is an error without prompts.
pub fn complete_profile(
    draft: ProfileDraft,
    interactive: bool,
    default_adjustment: u32,
    known_preferences: &[&str],
    known_allergies: &[&str],
) -> Result<UserProfile> {
    let name = match draft.name {
        Some(name) => name,
        None if interactive => prompt_name()?,
        None => return Err(PlannerError::invalid("name is required (use --name)")),
    };

    let age = match draft.age {
        Some(age) => age,
        None if interactive => prompt_age()?,
        None => DEFAULT_AGE,
    };

    let gender = match draft.gender {
        Some(gender) => gender,
        None if interactive => prompt_gender()?,
        None => Gender::Male,
    };

    let weight_kg = match draft.weight_kg {
        Some(weight) => weight,
        None if interactive => prompt_weight_kg(draft.units)?,
        None => DEFAULT_WEIGHT_KG,
    };

    let height_cm = match draft.height_cm {
        Some(height) => height,
        None if interactive => prompt_height_cm(draft.units)?,
        None => DEFAULT_HEIGHT_CM,
    };

    let activity = match draft.activity {
        Some(activity) => activity,
        None if interactive => prompt_activity()?,
        None => ActivityLevel::default(),
    };

    let goal = match draft.goal {
        Some(goal) => goal,
        None if interactive => prompt_goal(default_adjustment)?,
        None => WeightGoal::Maintain,
    };

    let mut preferences = normalize_choices(&draft.preferences, known_preferences);
    let mut allergies = normalize_choices(&draft.allergies, known_allergies);
    if interactive && preferences.is_empty() {
        preferences = prompt_choices("a dietary preference", known_preferences)?;
    }
    if interactive && allergies.is_empty() {
        allergies = prompt_choices("a food allergy", known_allergies)?;
    }

    let profile = UserProfile {
        name,
        age,
        gender,
        weight_kg,
        height_cm,
        activity,
        goal,
        preferences,
        allergies,
    };
    profile.validate()?;
    Ok(profile)
}
