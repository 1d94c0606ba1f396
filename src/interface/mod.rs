pub mod prompts;
pub mod render;

pub use prompts::{prompt_budget, prompt_calorie_limit, prompt_yes_no};
pub use render::{
    display_goals, display_meal_plan, display_profile, display_rewards, display_scan_result,
    display_steps, progress_bar,
};
