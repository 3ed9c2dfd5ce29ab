pub mod export;
pub mod prompts;
pub mod render;

pub use export::{meal_plan_markdown, write_json, write_markdown, write_selection_csv};
pub use prompts::{
    complete_profile, match_option, normalize_choices, prompt_choices, prompt_yes_no,
    OptionMatch, ProfileDraft,
};
pub use render::{display_catalog, display_meal_plan, display_selection};
