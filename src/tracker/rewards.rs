use chrono::Utc;
use strsim::jaro_winkler;

use crate::error::{HealthError, Result};
use crate::models::{RedeemedReward, Reward};
use crate::state::{StorePort, keys, read_json, write_json};

/// The fixed reward catalog.
pub fn reward_catalog() -> Vec<Reward> {
    vec![
        Reward::new(
            1,
            "Free Coffee",
            "Redeem for a free coffee at participating cafes",
            100,
            "food",
        ),
        Reward::new(
            2,
            "10% Off Sportswear",
            "Get 10% off your next sportswear purchase",
            200,
            "fitness",
        ),
        Reward::new(3, "Free Gym Pass", "One-day pass to a premium gym", 300, "fitness"),
        Reward::new(
            4,
            "Healthy Meal Delivery",
            "Free delivery on your next healthy meal order",
            150,
            "food",
        ),
        Reward::new(
            5,
            "Meditation App Premium",
            "1-month premium subscription to a meditation app",
            250,
            "wellness",
        ),
        Reward::new(
            6,
            "Water Bottle",
            "Eco-friendly reusable water bottle",
            180,
            "merchandise",
        ),
    ]
}

/// Current reward point balance. Absent or malformed slots read as zero.
pub fn current_points(store: &dyn StorePort) -> u32 {
    store
        .get(keys::REWARD_POINTS)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0)
}

/// Add points to the balance and return the new total.
pub fn award_points(store: &mut dyn StorePort, amount: u32) -> u32 {
    let total = current_points(store) + amount;
    store.set(keys::REWARD_POINTS, total.to_string());
    total
}

/// Redemption workflow over the reward catalog and the points balance.
pub struct RewardDesk<'a> {
    store: &'a mut dyn StorePort,
    catalog: Vec<Reward>,
}

impl<'a> RewardDesk<'a> {
    pub fn new(store: &'a mut dyn StorePort) -> Self {
        Self {
            store,
            catalog: reward_catalog(),
        }
    }

    pub fn catalog(&self) -> &[Reward] {
        &self.catalog
    }

    /// Catalog filtered by category; `None` returns everything.
    pub fn filtered(&self, category: Option<&str>) -> Vec<&Reward> {
        self.catalog
            .iter()
            .filter(|r| category.is_none_or(|c| r.category.eq_ignore_ascii_case(c)))
            .collect()
    }

    pub fn points(&self) -> u32 {
        current_points(self.store)
    }

    pub fn history(&self) -> Result<Vec<RedeemedReward>> {
        Ok(read_json(self.store, keys::REDEEMED_REWARDS)?.unwrap_or_default())
    }

    pub fn is_redeemed(&self, id: u64) -> Result<bool> {
        Ok(self.history()?.iter().any(|r| r.id == id))
    }

    /// Find a reward by fuzzy title match.
    pub fn find_by_title(&self, title: &str) -> Option<&Reward> {
        let wanted = title.to_lowercase();
        self.catalog
            .iter()
            .map(|r| (r, jaro_winkler(&r.title.to_lowercase(), &wanted)))
            .filter(|(_, score)| *score > 0.7)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(r, _)| r)
    }

    /// Redeem a reward: requires enough points and no prior redemption of
    /// the same reward. Deducts points and appends to the history.
    pub fn redeem(&mut self, id: u64) -> Result<RedeemedReward> {
        let reward = self
            .catalog
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| HealthError::RewardNotFound(id.to_string()))?
            .clone();

        if self.is_redeemed(id)? {
            return Err(HealthError::AlreadyRedeemed(reward.title));
        }

        let have = self.points();
        if have < reward.points {
            return Err(HealthError::InsufficientPoints {
                needed: reward.points,
                have,
            });
        }

        self.store
            .set(keys::REWARD_POINTS, (have - reward.points).to_string());

        let record = RedeemedReward {
            id,
            date: Utc::now(),
        };
        let mut history = self.history()?;
        history.push(record.clone());
        write_json(self.store, keys::REDEEMED_REWARDS, &history)?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStore;

    #[test]
    fn test_points_default_zero() {
        let store = MemoryStore::new();
        assert_eq!(current_points(&store), 0);
    }

    #[test]
    fn test_award_accumulates() {
        let mut store = MemoryStore::new();
        assert_eq!(award_points(&mut store, 50), 50);
        assert_eq!(award_points(&mut store, 100), 150);
        assert_eq!(current_points(&store), 150);
    }

    #[test]
    fn test_redeem_deducts_and_records() {
        let mut store = MemoryStore::new();
        award_points(&mut store, 250);

        let mut desk = RewardDesk::new(&mut store);
        let record = desk.redeem(1).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(desk.points(), 150);
        assert!(desk.is_redeemed(1).unwrap());
    }

    #[test]
    fn test_redeem_twice_fails() {
        let mut store = MemoryStore::new();
        award_points(&mut store, 500);

        let mut desk = RewardDesk::new(&mut store);
        desk.redeem(1).unwrap();
        let err = desk.redeem(1).unwrap_err();
        assert!(matches!(err, HealthError::AlreadyRedeemed(_)));
    }

    #[test]
    fn test_redeem_insufficient_points() {
        let mut store = MemoryStore::new();
        award_points(&mut store, 40);

        let mut desk = RewardDesk::new(&mut store);
        let err = desk.redeem(1).unwrap_err();
        assert!(matches!(
            err,
            HealthError::InsufficientPoints {
                needed: 100,
                have: 40
            }
        ));
        // Balance untouched on failure.
        assert_eq!(desk.points(), 40);
    }

    #[test]
    fn test_unknown_reward() {
        let mut store = MemoryStore::new();
        let mut desk = RewardDesk::new(&mut store);
        assert!(matches!(
            desk.redeem(999),
            Err(HealthError::RewardNotFound(_))
        ));
    }

    #[test]
    fn test_category_filter() {
        let mut store = MemoryStore::new();
        let desk = RewardDesk::new(&mut store);

        let fitness = desk.filtered(Some("fitness"));
        assert_eq!(fitness.len(), 2);
        assert!(fitness.iter().all(|r| r.category == "fitness"));

        assert_eq!(desk.filtered(None).len(), 6);
    }

    #[test]
    fn test_find_by_title_fuzzy() {
        let mut store = MemoryStore::new();
        let desk = RewardDesk::new(&mut store);

        let hit = desk.find_by_title("free cofee").unwrap();
        assert_eq!(hit.id, 1);

        assert!(desk.find_by_title("zzzzzz").is_none());
    }
}
