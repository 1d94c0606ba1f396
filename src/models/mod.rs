pub mod food;
pub mod goal;
pub mod plan;
pub mod profile;
pub mod reward;
pub mod steps;

pub use food::{FoodItem, MealSlot};
pub use goal::{Goal, GoalCategory};
pub use plan::MealPlan;
pub use profile::{ProfileStats, UserProfile};
pub use reward::{RedeemedReward, Reward};
pub use steps::DailySteps;
