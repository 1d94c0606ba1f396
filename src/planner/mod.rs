pub mod catalog;
pub mod selector;

pub use catalog::{default_catalog, load_catalog};
pub use selector::select_meal_plan;
