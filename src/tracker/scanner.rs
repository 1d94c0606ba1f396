use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strsim::jaro_winkler;

use crate::error::{HealthError, Result};

/// Nutrition estimate for a recognized food.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionFacts {
    pub calories: u32,
    pub protein: f64,
}

/// Outcome of one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub food: String,
    pub facts: NutritionFacts,
}

/// The mock recognition table. A real nutrition database or image model is
/// out of scope; the contract is the lookup, not the recognition.
const KNOWN_FOODS: [(&str, NutritionFacts); 5] = [
    (
        "Apple",
        NutritionFacts {
            calories: 95,
            protein: 0.5,
        },
    ),
    (
        "Banana",
        NutritionFacts {
            calories: 105,
            protein: 1.3,
        },
    ),
    (
        "Chicken Breast",
        NutritionFacts {
            calories: 165,
            protein: 31.0,
        },
    ),
    (
        "Salad",
        NutritionFacts {
            calories: 150,
            protein: 10.0,
        },
    ),
    (
        "Pizza",
        NutritionFacts {
            calories: 300,
            protein: 15.0,
        },
    ),
];

/// Detector abstraction so tests can scan deterministically.
pub trait FoodDetector {
    /// Name of the detected food, from the known-food table.
    fn detect(&mut self) -> &'static str;
}

/// Random detector, the production default.
pub struct RandomDetector {
    rng: StdRng,
}

impl RandomDetector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodDetector for RandomDetector {
    fn detect(&mut self) -> &'static str {
        let idx = self.rng.gen_range(0..KNOWN_FOODS.len());
        KNOWN_FOODS[idx].0
    }
}

/// Look up nutrition facts for an exactly-named food.
pub fn analyze(food: &str) -> Option<NutritionFacts> {
    KNOWN_FOODS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(food))
        .map(|(_, facts)| *facts)
}

/// Look up a food by fuzzy name match, for hand-typed input.
pub fn analyze_fuzzy(food: &str) -> Result<ScanResult> {
    let wanted = food.to_lowercase();
    let best = KNOWN_FOODS
        .iter()
        .map(|(name, facts)| (name, facts, jaro_winkler(&name.to_lowercase(), &wanted)))
        .filter(|(_, _, score)| *score > 0.7)
        .max_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

    match best {
        Some((name, facts, _)) => Ok(ScanResult {
            food: name.to_string(),
            facts: *facts,
        }),
        None => Err(HealthError::FoodNotFound(food.to_string())),
    }
}

/// Run one scan with the given detector.
pub fn scan(detector: &mut dyn FoodDetector) -> ScanResult {
    let food = detector.detect();
    // Detected names come from the table, so the lookup always hits.
    let facts = analyze(food).unwrap_or(NutritionFacts {
        calories: 0,
        protein: 0.0,
    });
    ScanResult {
        food: food.to_string(),
        facts,
    }
}
