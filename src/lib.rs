//! NutriAI nutrition & profile state engine.
//!
//! The engine keeps a session's user profile (with derived completeness),
//! resolves text or image food queries against a food catalog while
//! recording analysis history, and synthesizes daily meal plans with
//! aggregate nutrition totals. Presentation layers consume these components
//! through [`Engine`] and render whatever they return; no transport or UI
//! concerns live here.
//!
//! ```no_run
//! # async fn run() -> nutriai::Result<()> {
//! use nutriai::Engine;
//!
//! let engine = Engine::init().await;
//! let food = engine.analyzer.analyze("chicken breast").await?;
//! println!("{}: {} kcal", food.name, food.calories);
//!
//! let plan = engine.planner.generate().await;
//! println!("today: {} meals, {} kcal", plan.meals.len(), plan.total_calories);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod planner;
pub mod profile;
pub mod state;

pub use analysis::{
    AnalysisHistory, AnalyzedFood, FoodAnalyzer, FoodQuery, ImagePayload, Recognizer,
    UniformRecognizer, RECENT_CAP,
};
pub use catalog::{Catalog, FoodItem, Meal, MealTemplate, MealType};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use planner::{MealPlan, MealPlanGenerator, SavedMeals};
pub use profile::{
    ActivityLevel, Gender, MealPreferences, MealSize, Preferences, PreferencesPatch,
    ProfileUpdate, ProfileStore, UserProfile,
};
pub use state::Engine;
