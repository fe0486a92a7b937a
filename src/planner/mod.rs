mod saved;
mod services;
mod types;

pub use saved::SavedMeals;
pub use services::MealPlanGenerator;
pub use types::MealPlan;
