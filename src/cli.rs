use clap::{Parser, Subcommand};

/// HealthTrack — a personal health tracking CLI: meal planning, goals,
/// steps, and rewards.
#[derive(Parser, Debug)]
#[command(name = "health_track")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the tracker state JSON file.
    #[arg(short, long, default_value = "health_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show today's summary: steps, calories, points, active goals.
    Dashboard,

    /// Generate a diet plan within a budget and a calorie limit.
    Plan {
        /// Price budget; prompted for when omitted.
        #[arg(long)]
        budget: Option<f64>,

        /// Calorie limit in kcal; prompted for when omitted.
        #[arg(long)]
        calories: Option<f64>,

        /// Currency label for the cost column.
        #[arg(long, default_value = "INR")]
        currency: String,

        /// Path to a catalog JSON file; the built-in catalog when omitted.
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Manage health goals.
    Goals {
        #[command(subcommand)]
        action: GoalsAction,
    },

    /// Track and review step counts.
    Steps {
        #[command(subcommand)]
        action: StepsAction,
    },

    /// Browse and redeem rewards.
    Rewards {
        #[command(subcommand)]
        action: RewardsAction,
    },

    /// Scan a food item for a nutrition estimate.
    Scan {
        /// Look up a named food instead of simulating a camera scan.
        #[arg(long)]
        food: Option<String>,

        /// Seed for the mock detector, for reproducible scans.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// View or edit the user profile.
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Create a local account.
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard
    }
}

#[derive(Subcommand, Debug)]
pub enum GoalsAction {
    /// List all goals.
    List,

    /// Add a new goal.
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        target: u32,

        #[arg(long, default_value = "")]
        unit: String,

        /// Deadline as YYYY-MM-DD.
        #[arg(long)]
        deadline: Option<String>,

        /// One of: fitness, nutrition, wellness, other.
        #[arg(long, default_value = "fitness")]
        category: String,

        /// Points awarded on completion.
        #[arg(long, default_value_t = 50)]
        points: u32,
    },

    /// Update a goal's progress.
    Update {
        #[arg(long)]
        id: u64,

        #[arg(long)]
        current: u32,
    },

    /// Delete a goal.
    Delete {
        #[arg(long)]
        id: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum StepsAction {
    /// Show today's count, progress, and recent history.
    Show,

    /// Simulate tracking for a number of ticks.
    Track {
        #[arg(long, default_value_t = 10)]
        ticks: u32,

        /// Seed for the step source, for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Record today's count into history and start a new day at zero.
    Reset,

    /// Set the daily step goal (1000 to 20000).
    SetGoal {
        #[arg(long)]
        goal: u32,
    },

    /// Export the step history as CSV.
    Export {
        #[arg(long, default_value = "step_history.csv")]
        out: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RewardsAction {
    /// List rewards, optionally filtered by category.
    List {
        /// One of: food, fitness, wellness, merchandise.
        #[arg(long)]
        category: Option<String>,
    },

    /// Redeem a reward by id or by (fuzzy) title.
    Redeem {
        #[arg(long)]
        id: Option<u64>,

        #[arg(long)]
        title: Option<String>,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Show the profile, BMI, and derived stats.
    Show,

    /// Set one or more profile fields.
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        /// Weight in kilograms.
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimeters.
        #[arg(long)]
        height: Option<f64>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        goal_weight: Option<f64>,

        #[arg(long)]
        goal_steps: Option<u32>,
    },
}
