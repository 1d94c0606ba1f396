use crate::error::Result;
use crate::models::{ProfileStats, UserProfile};
use crate::state::{StorePort, keys, read_json, write_json};
use crate::tracker::goals::GoalBook;
use crate::tracker::rewards::current_points;
use crate::tracker::steps::{StepSource, StepTracker};

/// Load the saved profile, or the default one if none was saved yet.
pub fn load_profile(store: &dyn StorePort) -> Result<UserProfile> {
    Ok(read_json(store, keys::USER_PROFILE)?.unwrap_or_default())
}

pub fn save_profile(store: &mut dyn StorePort, profile: &UserProfile) -> Result<()> {
    write_json(store, keys::USER_PROFILE, profile)
}

/// Summary stats derived from tracked state: the points balance, completed
/// goal count, lifetime history steps, and the current goal-met streak.
pub fn gather_stats(store: &mut dyn StorePort, source: &mut dyn StepSource) -> Result<ProfileStats> {
    let total_points = current_points(store);

    let completed_goals = GoalBook::new(store).completed_count()?;

    let mut tracker = StepTracker::new(store);
    let total_steps = tracker.total_steps(source)?;
    let streak_days = tracker.streak_days(source)?;

    Ok(ProfileStats {
        total_points,
        completed_goals,
        total_steps,
        streak_days,
    })
}
