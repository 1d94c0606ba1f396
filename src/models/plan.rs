use std::collections::BTreeMap;

use crate::models::{FoodItem, MealSlot};

/// A generated meal plan: per-slot item buckets plus running totals.
///
/// Produced fresh per planning request; holds no reference back to the
/// catalog or the constraints it was built from.
#[derive(Debug, Clone, Default)]
pub struct MealPlan {
    slots: BTreeMap<MealSlot, Vec<FoodItem>>,
    pub total_calories: u32,
    pub total_price: f64,
    pub total_protein: f64,
}

impl MealPlan {
    /// An empty plan with all four slot buckets present.
    pub fn new() -> Self {
        let mut slots = BTreeMap::new();
        for slot in MealSlot::ALL {
            slots.insert(slot, Vec::new());
        }
        Self {
            slots,
            total_calories: 0,
            total_price: 0.0,
            total_protein: 0.0,
        }
    }

    /// Append an item to its slot bucket and accumulate the totals.
    pub fn admit(&mut self, item: FoodItem) {
        self.total_calories += item.calories;
        self.total_price += item.price;
        self.total_protein += item.protein;
        self.slots.entry(item.slot).or_default().push(item);
    }

    /// Items admitted to a slot, in admission order.
    pub fn items(&self, slot: MealSlot) -> &[FoodItem] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn slot_calories(&self, slot: MealSlot) -> u32 {
        self.items(slot).iter().map(|i| i.calories).sum()
    }

    pub fn slot_price(&self, slot: MealSlot) -> f64 {
        self.items(slot).iter().map(|i| i.price).sum()
    }

    pub fn slot_protein(&self, slot: MealSlot) -> f64 {
        self.items(slot).iter().map(|i| i.protein).sum()
    }

    /// Total number of admitted items across all slots.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plan_has_all_slots_empty() {
        let plan = MealPlan::new();
        for slot in MealSlot::ALL {
            assert!(plan.items(slot).is_empty());
        }
        assert!(plan.is_empty());
        assert_eq!(plan.total_calories, 0);
        assert_eq!(plan.total_price, 0.0);
        assert_eq!(plan.total_protein, 0.0);
    }

    #[test]
    fn test_admit_accumulates_totals() {
        let mut plan = MealPlan::new();
        plan.admit(FoodItem::new("Egg", 78, 25.0, 6.0, MealSlot::Breakfast));
        plan.admit(FoodItem::new("Apple", 95, 60.0, 0.5, MealSlot::Snack));

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.total_calories, 173);
        assert!((plan.total_price - 85.0).abs() < 1e-9);
        assert!((plan.total_protein - 6.5).abs() < 1e-9);
        assert_eq!(plan.items(MealSlot::Breakfast).len(), 1);
        assert_eq!(plan.slot_calories(MealSlot::Snack), 95);
    }
}
