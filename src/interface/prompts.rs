use dialoguer::{Confirm, Input};

use crate::error::{HealthError, Result};

/// Prompt for the price budget for the plan.
pub fn prompt_budget() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your budget for the day's meals?")
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| HealthError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for the calorie ceiling for the plan.
pub fn prompt_calorie_limit() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your calorie limit (kcal)?")
        .default("2000".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| HealthError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
