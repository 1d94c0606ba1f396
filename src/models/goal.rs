use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goal grouping used for display filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Fitness,
    Nutrition,
    Wellness,
    Other,
}

impl GoalCategory {
    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Fitness => "fitness",
            GoalCategory::Nutrition => "nutrition",
            GoalCategory::Wellness => "wellness",
            GoalCategory::Other => "other",
        }
    }
}

/// A tracked health goal with a numeric target and a point value awarded
/// once on completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub target: u32,
    pub current: u32,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
    pub completed: bool,
    pub category: GoalCategory,
    pub points: u32,
}

impl Goal {
    /// Progress toward the target as a percentage, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        ((self.current as f64 / self.target as f64) * 100.0).min(100.0)
    }
}
