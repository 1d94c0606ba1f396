use chrono::NaiveDate;

use crate::error::{HealthError, Result};
use crate::models::{Goal, GoalCategory};
use crate::state::{StorePort, keys, read_json, write_json};
use crate::tracker::rewards::award_points;

/// Fields for a new goal; id and completion state are assigned on add.
#[derive(Debug, Clone)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub target: u32,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
    pub category: GoalCategory,
    pub points: u32,
}

/// Store-backed goal list with completion point awards.
pub struct GoalBook<'a> {
    store: &'a mut dyn StorePort,
}

impl<'a> GoalBook<'a> {
    pub fn new(store: &'a mut dyn StorePort) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Goal>> {
        Ok(read_json(self.store, keys::HEALTH_GOALS)?.unwrap_or_default())
    }

    fn save(&mut self, goals: &[Goal]) -> Result<()> {
        write_json(self.store, keys::HEALTH_GOALS, &goals)
    }

    /// Seed the starter goals if the store has none yet. Returns the list
    /// either way.
    pub fn ensure_seeded(&mut self) -> Result<Vec<Goal>> {
        let existing: Option<Vec<Goal>> = read_json(self.store, keys::HEALTH_GOALS)?;
        if let Some(goals) = existing {
            return Ok(goals);
        }
        let seeded = example_goals();
        self.save(&seeded)?;
        Ok(seeded)
    }

    /// Add a goal. A target of zero is rejected, matching the add-form
    /// validation upstream of the original tracker.
    pub fn add(&mut self, draft: GoalDraft) -> Result<Goal> {
        if draft.title.is_empty() {
            return Err(HealthError::InvalidInput("goal title is empty".to_string()));
        }
        if draft.target == 0 {
            return Err(HealthError::InvalidInput(
                "goal target must be positive".to_string(),
            ));
        }

        let mut goals = self.list()?;
        let id = goals.iter().map(|g| g.id).max().unwrap_or(0) + 1;

        let goal = Goal {
            id,
            title: draft.title,
            description: draft.description,
            target: draft.target,
            current: 0,
            unit: draft.unit,
            deadline: draft.deadline,
            completed: false,
            category: draft.category,
            points: draft.points,
        };
        goals.push(goal.clone());
        self.save(&goals)?;
        Ok(goal)
    }

    /// Set a goal's current progress. Crossing the target marks it
    /// completed and awards its points to the ledger, once.
    pub fn update_progress(&mut self, id: u64, new_current: u32) -> Result<Goal> {
        let mut goals = self.list()?;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(HealthError::GoalNotFound(id))?;

        let was_completed = goal.completed;
        goal.current = new_current;
        goal.completed = new_current >= goal.target;

        let newly_completed = goal.completed && !was_completed;
        let points = goal.points;
        let updated = goal.clone();

        self.save(&goals)?;
        if newly_completed {
            award_points(self.store, points);
        }
        Ok(updated)
    }

    pub fn delete(&mut self, id: u64) -> Result<()> {
        let mut goals = self.list()?;
        let before = goals.len();
        goals.retain(|g| g.id != id);
        if goals.len() == before {
            return Err(HealthError::GoalNotFound(id));
        }
        self.save(&goals)
    }

    pub fn active_count(&self) -> Result<usize> {
        Ok(self.list()?.iter().filter(|g| !g.completed).count())
    }

    pub fn completed_count(&self) -> Result<usize> {
        Ok(self.list()?.iter().filter(|g| g.completed).count())
    }
}

/// The starter goals shown before the user has created any.
fn example_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: 1,
            title: "Daily Steps".to_string(),
            description: "Walk 10,000 steps every day".to_string(),
            target: 10_000,
            current: 7_500,
            unit: "steps".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31),
            completed: false,
            category: GoalCategory::Fitness,
            points: 100,
        },
        Goal {
            id: 2,
            title: "Drink Water".to_string(),
            description: "Drink 8 glasses of water daily".to_string(),
            target: 8,
            current: 5,
            unit: "glasses".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31),
            completed: false,
            category: GoalCategory::Nutrition,
            points: 50,
        },
        Goal {
            id: 3,
            title: "Meditation".to_string(),
            description: "Meditate for 10 minutes daily".to_string(),
            target: 10,
            current: 10,
            unit: "minutes".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31),
            completed: true,
            category: GoalCategory::Wellness,
            points: 75,
        },
    ]
}
