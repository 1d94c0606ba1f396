use crate::models::{DailySteps, Goal, MealPlan, MealSlot, ProfileStats, Reward, UserProfile};
use crate::tracker::ScanResult;

/// Width of rendered progress bars, in characters.
const BAR_WIDTH: usize = 40;

/// Render a progress bar like `[########----------] 40%`.
pub fn progress_bar(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        clamped
    )
}

/// Display a meal plan as a per-slot table with totals.
pub fn display_meal_plan(plan: &MealPlan, currency: &str) {
    if plan.is_empty() {
        println!("No items fit the given budget and calorie limit.");
        return;
    }

    println!();
    println!("=== Suggested Diet Plan ===");
    println!();
    println!(
        "{:<10} {:<28} {:>10} {:>12} {:>12}",
        "Meal",
        "Items",
        "Calories",
        "Protein (g)",
        format!("Cost ({})", currency)
    );

    for slot in MealSlot::ALL {
        let items = plan.items(slot);
        if items.is_empty() {
            continue;
        }

        for (i, item) in items.iter().enumerate() {
            if i == 0 {
                println!(
                    "{:<10} {:<28} {:>10} {:>12.1} {:>12.2}",
                    slot.label(),
                    item.name,
                    item.calories,
                    item.protein,
                    item.price
                );
            } else {
                println!(
                    "{:<10} {:<28} {:>10} {:>12.1} {:>12.2}",
                    "", item.name, item.calories, item.protein, item.price
                );
            }
        }
        println!(
            "{:<10} {:<28} {:>10} {:>12.1} {:>12.2}",
            "",
            "(subtotal)",
            plan.slot_calories(slot),
            plan.slot_protein(slot),
            plan.slot_price(slot)
        );
    }

    println!();
    println!(
        "{:<10} {:<28} {:>10} {:>12.2} {:>12.2}",
        "Total",
        format!("{} items", plan.len()),
        plan.total_calories,
        plan.total_protein,
        plan.total_price
    );
    println!();
}

/// Display the goal list with progress bars.
pub fn display_goals(goals: &[Goal]) {
    if goals.is_empty() {
        println!("No goals yet. Create your first health goal to get started.");
        return;
    }

    println!();
    for goal in goals {
        let status = if goal.completed { " [completed]" } else { "" };
        println!(
            "{:>3}. {} ({}, {} points){}",
            goal.id,
            goal.title,
            goal.category.label(),
            goal.points,
            status
        );
        if !goal.description.is_empty() {
            println!("     {}", goal.description);
        }
        if let Some(deadline) = goal.deadline {
            println!("     Deadline: {}", deadline);
        }
        println!(
            "     {} {} / {} {}",
            progress_bar(goal.progress_percent()),
            goal.current,
            goal.target,
            goal.unit
        );
    }
    println!();
}

/// Display the live step counter and recent history.
pub fn display_steps(
    current: u32,
    goal: u32,
    percent: f64,
    weekly_average: u32,
    history: &[DailySteps],
) {
    println!();
    println!("Steps today: {} of {}", current, goal);
    println!("{}", progress_bar(percent));
    if percent >= 100.0 {
        println!("Goal reached!");
    }
    println!("Weekly average: {} steps/day", weekly_average);

    println!();
    println!("--- Last 7 days ---");
    for day in history.iter().take(7) {
        let medal = if day.goal_met() { " *" } else { "" };
        println!(
            "{}  {:>6} / {:>6}  {}{}",
            day.date,
            day.steps,
            day.goal,
            progress_bar(day.progress_percent()),
            medal
        );
    }
    println!();
}

/// Display the reward catalog against the current balance.
pub fn display_rewards(rewards: &[&Reward], points: u32, redeemed: &[u64]) {
    println!();
    println!("Your reward points: {}", points);
    println!();

    for reward in rewards {
        let status = if redeemed.contains(&reward.id) {
            "already redeemed".to_string()
        } else if points < reward.points {
            format!("need {} more points", reward.points - points)
        } else {
            "available".to_string()
        };
        println!(
            "{:>3}. {:<24} {:>4} pts  [{}]  ({})",
            reward.id, reward.title, reward.points, reward.category, status
        );
        println!("     {}", reward.description);
    }
    println!();
}

/// Display a scan outcome.
pub fn display_scan_result(result: &ScanResult) {
    println!("Analyzed: {}", result.food);
    println!("Calories: {}", result.facts.calories);
    println!("Protein: {}g", result.facts.protein);
}

/// Display the profile with BMI and derived stats.
pub fn display_profile(profile: &UserProfile, stats: &ProfileStats) {
    println!();
    println!("{} <{}>", profile.name, profile.email);
    println!(
        "{}, {} years, {:.1} kg, {:.0} cm",
        profile.gender, profile.age, profile.weight, profile.height
    );
    println!("BMI: {:.1} ({})", profile.bmi(), profile.bmi_category());
    println!(
        "Goals: {:.1} kg target weight, {} daily steps",
        profile.goal_weight, profile.goal_steps
    );
    println!();
    println!("Total points:    {}", stats.total_points);
    println!("Completed goals: {}", stats.completed_goals);
    println!("Total steps:     {}", stats.total_steps);
    println!("Streak:          {} days", stats.streak_days);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}] 0%", "-".repeat(40)));
        assert_eq!(progress_bar(100.0), format!("[{}] 100%", "#".repeat(40)));
        // Overshoot clamps rather than overflowing the bar.
        assert_eq!(progress_bar(250.0), format!("[{}] 100%", "#".repeat(40)));
    }

    #[test]
    fn test_progress_bar_midpoint() {
        let bar = progress_bar(50.0);
        assert!(bar.starts_with(&format!("[{}{}]", "#".repeat(20), "-".repeat(20))));
        assert!(bar.ends_with("50%"));
    }
}
