use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;

use health_track_rs::cli::{Cli, Command, GoalsAction, ProfileAction, RewardsAction, StepsAction};
use health_track_rs::error::{HealthError, Result};
use health_track_rs::interface::{
    display_goals, display_meal_plan, display_profile, display_rewards, display_scan_result,
    display_steps, progress_bar, prompt_budget, prompt_calorie_limit, prompt_yes_no,
};
use health_track_rs::models::GoalCategory;
use health_track_rs::planner::{default_catalog, load_catalog, select_meal_plan};
use health_track_rs::state::JsonFileStore;
use health_track_rs::tracker::{
    self, GoalBook, GoalDraft, RandomDetector, RandomStepSource, RewardDesk, StepTracker,
    analyze_fuzzy, current_points, scan,
};

/// Estimated kcal burned per step, for the dashboard summary.
const KCAL_PER_STEP: f64 = 0.04;

/// Seconds between simulated tracking ticks.
const TICK_INTERVAL_SECS: u64 = 2;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Dashboard => cmd_dashboard(&cli.file),
        Command::Plan {
            budget,
            calories,
            currency,
            catalog,
        } => cmd_plan(budget, calories, &currency, catalog.as_deref()),
        Command::Goals { action } => cmd_goals(&cli.file, action),
        Command::Steps { action } => cmd_steps(&cli.file, action),
        Command::Rewards { action } => cmd_rewards(&cli.file, action),
        Command::Scan { food, seed } => cmd_scan(food.as_deref(), seed),
        Command::Profile { action } => cmd_profile(&cli.file, action),
        Command::Signup { username, password } => cmd_signup(&cli.file, &username, &password),
    }
}

/// Generate and display a diet plan for the given constraints.
fn cmd_plan(
    budget: Option<f64>,
    calories: Option<f64>,
    currency: &str,
    catalog_path: Option<&str>,
) -> Result<()> {
    let catalog = match catalog_path {
        Some(path) => load_catalog(path)?,
        None => default_catalog(),
    };

    let budget = match budget {
        Some(b) => b,
        None => prompt_budget()?,
    };
    let calories = match calories {
        Some(c) => c,
        None => prompt_calorie_limit()?,
    };

    println!(
        "Planning within {:.2} {} and {:.0} kcal over {} catalog items...",
        budget,
        currency,
        calories,
        catalog.len()
    );

    let plan = select_meal_plan(&catalog, calories, budget)?;
    display_meal_plan(&plan, currency);
    Ok(())
}

fn cmd_goals(file_path: &str, action: GoalsAction) -> Result<()> {
    let mut store = JsonFileStore::open(file_path)?;
    let mut book = GoalBook::new(&mut store);

    match action {
        GoalsAction::List => {
            let goals = book.ensure_seeded()?;
            display_goals(&goals);
        }
        GoalsAction::Add {
            title,
            description,
            target,
            unit,
            deadline,
            category,
            points,
        } => {
            let deadline = deadline.map(|d| parse_date(&d)).transpose()?;
            let goal = book.add(GoalDraft {
                title,
                description,
                target,
                unit,
                deadline,
                category: parse_category(&category)?,
                points,
            })?;
            println!("Added goal {}: {}", goal.id, goal.title);
        }
        GoalsAction::Update { id, current } => {
            let goal = book.update_progress(id, current)?;
            if goal.completed {
                println!(
                    "Goal '{}' completed! Awarded {} points.",
                    goal.title, goal.points
                );
            } else {
                println!(
                    "Goal '{}': {} / {} {}",
                    goal.title, goal.current, goal.target, goal.unit
                );
            }
        }
        GoalsAction::Delete { id } => {
            book.delete(id)?;
            println!("Deleted goal {}.", id);
        }
    }

    store.save()
}

fn cmd_steps(file_path: &str, action: StepsAction) -> Result<()> {
    let mut store = JsonFileStore::open(file_path)?;
    let mut tracker = StepTracker::new(&mut store);
    let mut source = RandomStepSource::new();

    match action {
        StepsAction::Show => {
            let history = tracker.history(&mut source)?;
            let average = tracker.weekly_average(&mut source)?;
            display_steps(
                tracker.current(),
                tracker.goal(),
                tracker.progress_percent(),
                average,
                &history,
            );
        }
        StepsAction::Track { ticks, seed } => {
            let mut source = match seed {
                Some(s) => RandomStepSource::seeded(s),
                None => source,
            };
            println!("Tracking for {} ticks...", ticks);
            for i in 0..ticks {
                let outcome = tracker.tick(&mut source)?;
                println!("tick {:>3}: {} steps", i + 1, outcome.steps);
                if outcome.points_awarded > 0 {
                    println!(
                        "Daily goal reached! Awarded {} points.",
                        outcome.points_awarded
                    );
                }
                if i + 1 < ticks {
                    thread::sleep(Duration::from_secs(TICK_INTERVAL_SECS));
                }
            }
        }
        StepsAction::Reset => {
            tracker.reset(&mut source)?;
            println!("Recorded today's steps and reset the counter.");
        }
        StepsAction::SetGoal { goal } => {
            tracker.set_goal(goal)?;
            println!("Daily step goal set to {}.", goal);
        }
        StepsAction::Export { out } => {
            let rows = tracker.export_csv(&mut source, &out)?;
            println!("Exported {} days of history to {}.", rows, out);
        }
    }

    store.save()
}

fn cmd_rewards(file_path: &str, action: RewardsAction) -> Result<()> {
    let mut store = JsonFileStore::open(file_path)?;
    let mut desk = RewardDesk::new(&mut store);

    match action {
        RewardsAction::List { category } => {
            let rewards = desk.filtered(category.as_deref());
            let points = desk.points();
            let redeemed: Vec<u64> = desk.history()?.iter().map(|r| r.id).collect();
            display_rewards(&rewards, points, &redeemed);
        }
        RewardsAction::Redeem { id, title, yes } => {
            let id = match (id, title) {
                (Some(id), _) => id,
                (None, Some(title)) => desk
                    .find_by_title(&title)
                    .map(|r| r.id)
                    .ok_or(HealthError::RewardNotFound(title))?,
                (None, None) => {
                    return Err(HealthError::InvalidInput(
                        "pass --id or --title to redeem".to_string(),
                    ));
                }
            };

            let reward = desk
                .catalog()
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| HealthError::RewardNotFound(id.to_string()))?
                .clone();

            if !yes {
                let confirmed = prompt_yes_no(
                    &format!("Redeem '{}' for {} points?", reward.title, reward.points),
                    true,
                )?;
                if !confirmed {
                    println!("Redemption cancelled.");
                    return Ok(());
                }
            }

            desk.redeem(id)?;
            println!(
                "Redeemed '{}'. Remaining points: {}",
                reward.title,
                desk.points()
            );
        }
    }

    store.save()
}

fn cmd_scan(food: Option<&str>, seed: Option<u64>) -> Result<()> {
    let result = match food {
        Some(name) => analyze_fuzzy(name)?,
        None => {
            let mut detector = match seed {
                Some(s) => RandomDetector::seeded(s),
                None => RandomDetector::new(),
            };
            println!("Scanning...");
            scan(&mut detector)
        }
    };
    display_scan_result(&result);
    Ok(())
}

fn cmd_profile(file_path: &str, action: ProfileAction) -> Result<()> {
    let mut store = JsonFileStore::open(file_path)?;

    match action {
        ProfileAction::Show => {
            let profile = tracker::profile::load_profile(&store)?;
            let mut source = RandomStepSource::new();
            let stats = tracker::profile::gather_stats(&mut store, &mut source)?;
            display_profile(&profile, &stats);
        }
        ProfileAction::Set {
            name,
            email,
            age,
            weight,
            height,
            gender,
            goal_weight,
            goal_steps,
        } => {
            let mut profile = tracker::profile::load_profile(&store)?;
            if let Some(name) = name {
                profile.name = name;
            }
            if let Some(email) = email {
                profile.email = email;
            }
            if let Some(age) = age {
                profile.age = age;
            }
            if let Some(weight) = weight {
                profile.weight = weight;
            }
            if let Some(height) = height {
                profile.height = height;
            }
            if let Some(gender) = gender {
                profile.gender = gender;
            }
            if let Some(goal_weight) = goal_weight {
                profile.goal_weight = goal_weight;
            }
            if let Some(goal_steps) = goal_steps {
                profile.goal_steps = goal_steps;
            }
            tracker::profile::save_profile(&mut store, &profile)?;
            println!("Profile updated.");
        }
    }

    store.save()
}

fn cmd_signup(file_path: &str, username: &str, password: &str) -> Result<()> {
    let mut store = JsonFileStore::open(file_path)?;
    tracker::account::signup(&mut store, username, password)?;
    store.save()?;
    println!("User created successfully.");
    Ok(())
}

/// Summary of today's tracked state.
fn cmd_dashboard(file_path: &str) -> Result<()> {
    let mut store = JsonFileStore::open(file_path)?;

    let points = current_points(&store);
    let active_goals = GoalBook::new(&mut store).active_count()?;

    let tracker = StepTracker::new(&mut store);
    let steps = tracker.current();
    let goal = tracker.goal();
    let percent = tracker.progress_percent();
    let calories_burned = (steps as f64 * KCAL_PER_STEP).round() as u32;

    println!();
    println!("=== Dashboard ===");
    println!("Steps today:     {}", steps);
    println!("Calories burned: {} kcal", calories_burned);
    println!("Reward points:   {}", points);
    println!("Active goals:    {}", active_goals);
    println!();
    println!("Daily step goal: {} / {}", steps, goal);
    println!("{}", progress_bar(percent));
    if percent >= 100.0 {
        println!("Daily goal completed!");
    }
    println!();

    Ok(())
}

fn parse_category(raw: &str) -> Result<GoalCategory> {
    match raw.to_lowercase().as_str() {
        "fitness" => Ok(GoalCategory::Fitness),
        "nutrition" => Ok(GoalCategory::Nutrition),
        "wellness" => Ok(GoalCategory::Wellness),
        "other" => Ok(GoalCategory::Other),
        _ => Err(HealthError::InvalidInput(format!(
            "unknown category '{}'; expected fitness, nutrition, wellness, or other",
            raw
        ))),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| HealthError::InvalidInput(format!("invalid date '{}'; expected YYYY-MM-DD", raw)))
}
