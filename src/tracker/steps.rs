use std::path::Path;

use chrono::{Duration, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{HealthError, Result};
use crate::models::DailySteps;
use crate::state::{StorePort, keys, read_json, write_json};
use crate::tracker::rewards::award_points;

/// Points awarded when the daily step goal is first reached.
pub const GOAL_POINTS: u32 = 50;

/// Default daily step goal.
pub const DEFAULT_STEP_GOAL: u32 = 10_000;

/// Allowed range for the daily goal.
pub const MIN_STEP_GOAL: u32 = 1_000;
pub const MAX_STEP_GOAL: u32 = 20_000;

/// Days of history generated when none exists yet.
const SEED_HISTORY_DAYS: i64 = 14;

/// Source of simulated step readings. Swapped for a fixed source in tests.
pub trait StepSource {
    /// Steps added by one tracking tick (1..=5 for the random source).
    fn burst(&mut self) -> u32;

    /// A plausible full day of walking, for seeding history.
    fn daily_sample(&mut self) -> u32;
}

/// Random step source, the production default.
pub struct RandomStepSource {
    rng: StdRng,
}

impl RandomStepSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStepSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSource for RandomStepSource {
    fn burst(&mut self) -> u32 {
        self.rng.gen_range(1..=5)
    }

    fn daily_sample(&mut self) -> u32 {
        self.rng.gen_range(5_000..10_000)
    }
}

/// Outcome of one tracking tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub steps: u32,
    pub goal_reached: bool,
    pub points_awarded: u32,
}

/// Store-backed step counter with history and goal tracking.
pub struct StepTracker<'a> {
    store: &'a mut dyn StorePort,
}

impl<'a> StepTracker<'a> {
    pub fn new(store: &'a mut dyn StorePort) -> Self {
        Self { store }
    }

    pub fn current(&self) -> u32 {
        self.store
            .get(keys::CURRENT_STEPS)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    fn set_current(&mut self, steps: u32) {
        self.store.set(keys::CURRENT_STEPS, steps.to_string());
    }

    pub fn goal(&self) -> u32 {
        self.store
            .get(keys::STEP_GOAL)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_STEP_GOAL)
    }

    pub fn set_goal(&mut self, goal: u32) -> Result<()> {
        if !(MIN_STEP_GOAL..=MAX_STEP_GOAL).contains(&goal) {
            return Err(HealthError::InvalidInput(format!(
                "step goal must be between {} and {}",
                MIN_STEP_GOAL, MAX_STEP_GOAL
            )));
        }
        self.store.set(keys::STEP_GOAL, goal.to_string());
        Ok(())
    }

    /// History, newest first. Seeds a mock fortnight on first access.
    pub fn history(&mut self, source: &mut dyn StepSource) -> Result<Vec<DailySteps>> {
        if let Some(history) = read_json::<Vec<DailySteps>>(self.store, keys::STEP_HISTORY)? {
            return Ok(history);
        }

        let today = Local::now().date_naive();
        let mut history = Vec::new();
        for i in 0..SEED_HISTORY_DAYS {
            let date = today - Duration::days(i);
            history.push(DailySteps::new(date, source.daily_sample(), DEFAULT_STEP_GOAL));
        }
        write_json(self.store, keys::STEP_HISTORY, &history)?;
        Ok(history)
    }

    fn save_history(&mut self, history: &[DailySteps]) -> Result<()> {
        write_json(self.store, keys::STEP_HISTORY, &history)
    }

    /// Write the current count into today's history record, inserting one
    /// at the front if today has none yet.
    pub fn record_today(&mut self, source: &mut dyn StepSource) -> Result<()> {
        let today = Local::now().date_naive();
        let current = self.current();
        let goal = self.goal();

        let mut history = self.history(source)?;
        match history.iter_mut().find(|d| d.date == today) {
            Some(day) => day.steps = current,
            None => history.insert(0, DailySteps::new(today, current, goal)),
        }
        self.save_history(&history)
    }

    /// One simulated tracking tick. Crossing the goal awards points, at
    /// most once per day (today's history record gates the award).
    pub fn tick(&mut self, source: &mut dyn StepSource) -> Result<TickOutcome> {
        let goal = self.goal();
        let before = self.current();
        let after = before + source.burst();
        self.set_current(after);

        let mut points_awarded = 0;
        if before < goal && after >= goal {
            let today = Local::now().date_naive();
            let history = self.history(source)?;
            let already_awarded = history
                .iter()
                .find(|d| d.date == today)
                .is_some_and(|d| d.steps >= d.goal);
            if !already_awarded {
                award_points(self.store, GOAL_POINTS);
                points_awarded = GOAL_POINTS;
            }
            self.record_today(source)?;
        }

        Ok(TickOutcome {
            steps: after,
            goal_reached: after >= goal,
            points_awarded,
        })
    }

    /// Record today, then zero the live counter.
    pub fn reset(&mut self, source: &mut dyn StepSource) -> Result<()> {
        self.record_today(source)?;
        self.set_current(0);
        Ok(())
    }

    /// Average of the most recent (up to) seven history days, rounded.
    pub fn weekly_average(&mut self, source: &mut dyn StepSource) -> Result<u32> {
        let history = self.history(source)?;
        let week: Vec<&DailySteps> = history.iter().take(7).collect();
        if week.is_empty() {
            return Ok(0);
        }
        let sum: u64 = week.iter().map(|d| d.steps as u64).sum();
        Ok((sum as f64 / week.len() as f64).round() as u32)
    }

    /// Live progress toward the daily goal, capped at 100 percent.
    pub fn progress_percent(&self) -> f64 {
        let goal = self.goal();
        if goal == 0 {
            return 0.0;
        }
        ((self.current() as f64 / goal as f64) * 100.0).min(100.0)
    }

    /// Sum of all recorded history steps.
    pub fn total_steps(&mut self, source: &mut dyn StepSource) -> Result<u64> {
        Ok(self
            .history(source)?
            .iter()
            .map(|d| d.steps as u64)
            .sum())
    }

    /// Consecutive goal-met days, counted from the most recent record.
    pub fn streak_days(&mut self, source: &mut dyn StepSource) -> Result<usize> {
        Ok(self
            .history(source)?
            .iter()
            .take_while(|d| d.goal_met())
            .count())
    }

    /// Export the full history as CSV: date,steps,goal.
    pub fn export_csv<P: AsRef<Path>>(
        &mut self,
        source: &mut dyn StepSource,
        path: P,
    ) -> Result<usize> {
        let history = self.history(source)?;
        let mut writer = csv::Writer::from_path(path.as_ref())?;
        writer.write_record(["date", "steps", "goal"])?;
        for day in &history {
            writer.write_record([
                day.date.to_string(),
                day.steps.to_string(),
                day.goal.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(history.len())
    }
}
