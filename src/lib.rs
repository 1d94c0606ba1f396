pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;
pub mod tracker;

pub use error::{HealthError, Result};
pub use models::{FoodItem, MealPlan, MealSlot};
