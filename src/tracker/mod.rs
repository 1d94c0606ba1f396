pub mod account;
pub mod goals;
pub mod profile;
pub mod rewards;
pub mod scanner;
pub mod steps;

pub use goals::{GoalBook, GoalDraft};
pub use rewards::{RewardDesk, award_points, current_points, reward_catalog};
pub use scanner::{FoodDetector, RandomDetector, ScanResult, analyze, analyze_fuzzy, scan};
pub use steps::{RandomStepSource, StepSource, StepTracker, TickOutcome};
