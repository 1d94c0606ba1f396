use std::cmp::Ordering;

use crate::error::{HealthError, Result};
use crate::models::{FoodItem, MealPlan};

/// Check that a constraint is a finite, strictly positive number.
fn validate_limit(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HealthError::InvalidConstraint(format!(
            "{} must be a positive number, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Select a subset of the catalog maximizing calorie intake under a calorie
/// ceiling and a price budget, using a single-pass greedy heuristic.
///
/// Items are visited in strictly descending calorie-density order (stable:
/// equal densities keep catalog order) and admitted whenever both running
/// totals stay at or under their limits. Admission never backtracks, so the
/// result is not guaranteed optimal; it is deterministic and always respects
/// both ceilings.
///
/// An empty catalog yields an empty plan with zero totals. The only failure
/// mode is a non-finite or non-positive limit.
pub fn select_meal_plan(
    catalog: &[FoodItem],
    calorie_limit: f64,
    budget_limit: f64,
) -> Result<MealPlan> {
    validate_limit("calorie limit", calorie_limit)?;
    validate_limit("budget", budget_limit)?;

    let mut ranked: Vec<&FoodItem> = catalog.iter().collect();
    // sort_by is stable, so equal densities preserve catalog order.
    // density() never yields NaN (zero price maps to +inf), so the
    // Ordering::Equal fallback is unreachable in practice.
    ranked.sort_by(|a, b| {
        b.density()
            .partial_cmp(&a.density())
            .unwrap_or(Ordering::Equal)
    });

    let mut plan = MealPlan::new();
    for item in ranked {
        let fits_calories = (plan.total_calories + item.calories) as f64 <= calorie_limit;
        let fits_budget = plan.total_price + item.price <= budget_limit;
        if fits_calories && fits_budget {
            plan.admit(item.clone());
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;

    fn item(name: &str, calories: u32, price: f64) -> FoodItem {
        FoodItem::new(name, calories, price, 1.0, MealSlot::Lunch)
    }

    #[test]
    fn test_empty_catalog_yields_empty_plan() {
        let plan = select_meal_plan(&[], 2000.0, 500.0).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.total_calories, 0);
        assert_eq!(plan.total_price, 0.0);
    }

    #[test]
    fn test_exact_boundary_is_admitted() {
        let catalog = vec![item("Bar", 100, 10.0)];
        let plan = select_meal_plan(&catalog, 100.0, 10.0).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.total_calories, 100);
        assert_eq!(plan.total_price, 10.0);
    }

    #[test]
    fn test_rejects_nonpositive_limits() {
        let catalog = vec![item("Bar", 100, 10.0)];
        assert!(select_meal_plan(&catalog, 0.0, 10.0).is_err());
        assert!(select_meal_plan(&catalog, -5.0, 10.0).is_err());
        assert!(select_meal_plan(&catalog, 100.0, 0.0).is_err());
        assert!(select_meal_plan(&catalog, f64::NAN, 10.0).is_err());
        assert!(select_meal_plan(&catalog, 100.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_price_item_sorts_first() {
        let catalog = vec![item("Dense", 900, 1.0), item("Free", 10, 0.0)];
        let plan = select_meal_plan(&catalog, 2000.0, 500.0).unwrap();

        let lunch = plan.items(MealSlot::Lunch);
        assert_eq!(lunch[0].name, "Free");
        assert_eq!(lunch[1].name, "Dense");
    }

    #[test]
    fn test_equal_density_keeps_catalog_order() {
        // All density 10; catalog order must survive the sort.
        let catalog = vec![item("A", 50, 5.0), item("B", 100, 10.0), item("C", 20, 2.0)];
        let plan = select_meal_plan(&catalog, 1000.0, 100.0).unwrap();

        let names: Vec<&str> = plan
            .items(MealSlot::Lunch)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_greedy_leaves_headroom_unused() {
        // All density 10; stable order admits A then B, spending the whole
        // budget of 10 on 100 calories. A smarter pick (A + C, or B + C) does
        // not exist under the budget either, but the point is the greedy pass
        // never reconsiders: C (60 cal for 6) is skipped outright.
        let catalog = vec![item("A", 50, 5.0), item("B", 50, 5.0), item("C", 60, 6.0)];
        let plan = select_meal_plan(&catalog, 200.0, 10.0).unwrap();

        assert_eq!(plan.total_calories, 100);
        assert_eq!(plan.total_price, 10.0);
        let names: Vec<&str> = plan
            .items(MealSlot::Lunch)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
