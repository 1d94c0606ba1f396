use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A redeemable reward from the fixed catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub category: String,
}

impl Reward {
    pub fn new(id: u64, title: &str, description: &str, points: u32, category: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            points,
            category: category.to_string(),
        }
    }
}

/// A redemption record: which reward, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemedReward {
    pub id: u64,
    pub date: DateTime<Utc>,
}
