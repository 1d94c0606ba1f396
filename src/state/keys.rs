//! Store key names, carried over from the original tracker's key space.

pub const HEALTH_GOALS: &str = "health_goals";
pub const REWARD_POINTS: &str = "reward_points";
pub const REDEEMED_REWARDS: &str = "redeemed_rewards";
pub const CURRENT_STEPS: &str = "current_steps";
pub const STEP_GOAL: &str = "step_goal";
pub const STEP_HISTORY: &str = "step_history";
pub const USER_PROFILE: &str = "user_profile";
pub const USERS: &str = "users";
