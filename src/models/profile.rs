use serde::{Deserialize, Serialize};

/// The user's editable profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: u32,

    /// Weight in kilograms.
    pub weight: f64,

    /// Height in centimeters.
    pub height: f64,

    pub gender: String,
    pub goal_weight: f64,
    pub goal_steps: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            age: 32,
            weight: 75.0,
            height: 175.0,
            gender: "Male".to_string(),
            goal_weight: 70.0,
            goal_steps: 10_000,
        }
    }
}

impl UserProfile {
    /// Body mass index from weight (kg) and height (cm).
    pub fn bmi(&self) -> f64 {
        let height_m = self.height / 100.0;
        self.weight / (height_m * height_m)
    }

    /// Standard BMI bands: underweight < 18.5 <= normal < 25 <= overweight < 30 <= obese.
    pub fn bmi_category(&self) -> &'static str {
        let bmi = self.bmi();
        if bmi < 18.5 {
            "Underweight"
        } else if bmi < 25.0 {
            "Normal weight"
        } else if bmi < 30.0 {
            "Overweight"
        } else {
            "Obese"
        }
    }
}

/// Summary statistics derived from tracked state.
#[derive(Debug, Clone, Default)]
pub struct ProfileStats {
    pub total_points: u32,
    pub completed_goals: usize,
    pub total_steps: u64,
    pub streak_days: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let profile = UserProfile::default();
        // 75 / 1.75^2 = 24.49
        assert!((profile.bmi() - 24.489).abs() < 0.01);
        assert_eq!(profile.bmi_category(), "Normal weight");
    }

    #[test]
    fn test_bmi_bands() {
        let mut profile = UserProfile::default();

        profile.weight = 50.0;
        assert_eq!(profile.bmi_category(), "Underweight");

        profile.weight = 80.0;
        assert_eq!(profile.bmi_category(), "Overweight");

        profile.weight = 95.0;
        assert_eq!(profile.bmi_category(), "Obese");
    }
}
