use assert_float_eq::assert_f64_near;

use health_track_rs::models::{FoodItem, MealSlot};
use health_track_rs::planner::{default_catalog, select_meal_plan};

fn item(name: &str, calories: u32, price: f64, slot: MealSlot) -> FoodItem {
    FoodItem::new(name, calories, price, 1.0, slot)
}

#[test]
fn test_totals_never_exceed_limits() {
    let catalog = default_catalog();

    // Sweep a grid of constraints; the ceilings must hold everywhere.
    for calorie_limit in [100.0, 350.0, 800.0, 1500.0, 3000.0] {
        for budget in [50.0, 200.0, 600.0, 1200.0, 5000.0] {
            let plan = select_meal_plan(&catalog, calorie_limit, budget).unwrap();
            assert!(
                plan.total_calories as f64 <= calorie_limit,
                "calories {} > limit {}",
                plan.total_calories,
                calorie_limit
            );
            assert!(
                plan.total_price <= budget,
                "price {} > budget {}",
                plan.total_price,
                budget
            );
        }
    }
}

#[test]
fn test_deterministic_output() {
    let catalog = default_catalog();

    let first = select_meal_plan(&catalog, 1800.0, 900.0).unwrap();
    let second = select_meal_plan(&catalog, 1800.0, 900.0).unwrap();

    assert_eq!(first.total_calories, second.total_calories);
    assert_f64_near!(first.total_price, second.total_price);
    assert_f64_near!(first.total_protein, second.total_protein);
    for slot in MealSlot::ALL {
        assert_eq!(first.items(slot), second.items(slot));
    }
}

#[test]
fn test_selection_follows_density_order() {
    // Egg has the highest density in the built-in catalog (78 / 25 = 3.12);
    // under a tight budget it is the first and only admission.
    let catalog = default_catalog();
    let plan = select_meal_plan(&catalog, 2000.0, 30.0).unwrap();

    assert_eq!(plan.len(), 1);
    assert_eq!(plan.items(MealSlot::Breakfast)[0].name, "Egg");
}

#[test]
fn test_tied_densities_preserve_catalog_order() {
    let catalog = vec![
        item("First", 200, 20.0, MealSlot::Breakfast),
        item("Second", 100, 10.0, MealSlot::Breakfast),
        item("Third", 300, 30.0, MealSlot::Dinner),
    ];
    let plan = select_meal_plan(&catalog, 10_000.0, 1_000.0).unwrap();

    let breakfast: Vec<&str> = plan
        .items(MealSlot::Breakfast)
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(breakfast, vec!["First", "Second"]);
    assert_eq!(plan.items(MealSlot::Dinner)[0].name, "Third");
}

#[test]
fn test_empty_catalog_is_not_an_error() {
    let plan = select_meal_plan(&[], 2000.0, 500.0).unwrap();
    assert!(plan.is_empty());
    for slot in MealSlot::ALL {
        assert!(plan.items(slot).is_empty());
    }
    assert_eq!(plan.total_calories, 0);
    assert_f64_near!(plan.total_price, 0.0);
    assert_f64_near!(plan.total_protein, 0.0);
}

#[test]
fn test_exact_calorie_boundary_admitted() {
    let catalog = vec![item("Bar", 100, 10.0, MealSlot::Snack)];
    let plan = select_meal_plan(&catalog, 100.0, 10.0).unwrap();

    assert_eq!(plan.total_calories, 100);
    assert_f64_near!(plan.total_price, 10.0);
}

#[test]
fn test_greedy_is_not_optimal() {
    // The high-density cheap item is taken first; the remaining budget can
    // no longer pay for the big item, leaving calories on the table that a
    // smarter solver could have captured by skipping the first pick.
    let catalog = vec![
        item("Big", 100, 10.0, MealSlot::Lunch),
        item("Cheap", 95, 1.0, MealSlot::Lunch),
    ];
    let plan = select_meal_plan(&catalog, 200.0, 10.0).unwrap();

    assert_eq!(plan.total_calories, 95);
    assert_eq!(plan.items(MealSlot::Lunch)[0].name, "Cheap");
}

#[test]
fn test_invalid_constraints_produce_no_plan() {
    let catalog = default_catalog();

    for (calories, budget) in [
        (0.0, 500.0),
        (-100.0, 500.0),
        (2000.0, 0.0),
        (2000.0, -1.0),
        (f64::NAN, 500.0),
        (2000.0, f64::NAN),
        (f64::INFINITY, 500.0),
    ] {
        assert!(
            select_meal_plan(&catalog, calories, budget).is_err(),
            "expected error for limits ({}, {})",
            calories,
            budget
        );
    }
}

#[test]
fn test_zero_priced_item_admitted_first() {
    let catalog = vec![
        item("Paid", 500, 1.0, MealSlot::Lunch),
        item("Sample", 50, 0.0, MealSlot::Snack),
    ];
    let plan = select_meal_plan(&catalog, 1000.0, 100.0).unwrap();

    // Infinite density wins the sort even against very dense paid items.
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.items(MealSlot::Snack)[0].name, "Sample");
    assert_eq!(plan.total_calories, 550);
}
