use serde::{Deserialize, Serialize};

/// The meal a food item belongs to.
///
/// Declaration order is the display order for plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    /// All slots in display order.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }
}

/// A catalog food item. Catalog entries are never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    /// kcal contributed if selected.
    pub calories: u32,

    /// Cost in whatever currency unit the caller works in.
    pub price: f64,

    /// Grams of protein contributed.
    pub protein: f64,

    #[serde(rename = "meal")]
    pub slot: MealSlot,
}

impl FoodItem {
    pub fn new(name: &str, calories: u32, price: f64, protein: f64, slot: MealSlot) -> Self {
        Self {
            name: name.to_string(),
            calories,
            price,
            protein,
            slot,
        }
    }

    /// Calories per unit of price, the greedy sort key.
    ///
    /// A zero-priced item gets infinite density so it sorts ahead of
    /// everything else. Explicit guard instead of dividing by zero.
    #[inline]
    pub fn density(&self) -> f64 {
        if self.price == 0.0 {
            f64::INFINITY
        } else {
            self.calories as f64 / self.price
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        FoodItem::new("Oatmeal", 150, 120.0, 5.0, MealSlot::Breakfast)
    }

    #[test]
    fn test_density() {
        let item = sample_item();
        assert!((item.density() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_density_zero_price_is_infinite() {
        let item = FoodItem::new("Water", 0, 0.0, 0.0, MealSlot::Snack);
        assert!(item.density().is_infinite());
        assert!(item.density() > 0.0);
    }

    #[test]
    fn test_slot_serde_lowercase() {
        let json = serde_json::to_string(&MealSlot::Breakfast).unwrap();
        assert_eq!(json, "\"breakfast\"");

        let slot: MealSlot = serde_json::from_str("\"dinner\"").unwrap();
        assert_eq!(slot, MealSlot::Dinner);
    }
}
