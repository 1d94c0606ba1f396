use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of step history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySteps {
    pub date: NaiveDate,
    pub steps: u32,
    pub goal: u32,
}

impl DailySteps {
    pub fn new(date: NaiveDate, steps: u32, goal: u32) -> Self {
        Self { date, steps, goal }
    }

    /// Progress toward the day's goal as a percentage, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        ((self.steps as f64 / self.goal as f64) * 100.0).min(100.0)
    }

    pub fn goal_met(&self) -> bool {
        self.steps >= self.goal
    }
}
