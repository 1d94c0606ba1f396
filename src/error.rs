use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Goal not found: {0}")]
    GoalNotFound(u64),

    #[error("Reward not found: {0}")]
    RewardNotFound(String),

    #[error("Reward already redeemed: {0}")]
    AlreadyRedeemed(String),

    #[error("Not enough points: need {needed}, have {have}")]
    InsufficientPoints { needed: u32, have: u32 },

    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    #[error("Food not found: {0}")]
    FoodNotFound(String),
}

pub type Result<T> = std::result::Result<T, HealthError>;
