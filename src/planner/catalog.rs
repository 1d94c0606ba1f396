use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{FoodItem, MealSlot};

/// The built-in food catalog, priced in rupees.
pub fn default_catalog() -> Vec<FoodItem> {
    use MealSlot::*;

    vec![
        FoodItem::new("Oatmeal", 150, 120.0, 5.0, Breakfast),
        FoodItem::new("Banana", 105, 40.0, 1.3, Breakfast),
        FoodItem::new("Chicken Breast (100g)", 165, 250.0, 31.0, Lunch),
        FoodItem::new("Broccoli (100g)", 55, 80.0, 3.0, Lunch),
        FoodItem::new("Apple", 95, 60.0, 0.5, Snack),
        FoodItem::new("Brown Rice (100g)", 216, 100.0, 5.0, Lunch),
        FoodItem::new("Egg", 78, 25.0, 6.0, Breakfast),
        FoodItem::new("Spinach (100g)", 23, 70.0, 3.0, Dinner),
        FoodItem::new("Almonds (30g)", 164, 180.0, 6.0, Snack),
        FoodItem::new("Yogurt (100g)", 150, 150.0, 9.0, Breakfast),
        FoodItem::new("Lentil Soup (1 cup)", 230, 120.0, 18.0, Dinner),
        FoodItem::new("Salad (mixed)", 100, 150.0, 4.0, Lunch),
        FoodItem::new("Protein Shake", 120, 200.0, 25.0, Snack),
    ]
}

/// Load a catalog from a JSON file (an array of food items).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<FoodItem> = serde_json::from_str(&content)?;
    Ok(items)
}
