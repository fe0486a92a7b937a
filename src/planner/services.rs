use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::info;

use crate::catalog::{Catalog, MealTemplate, MealType};
use crate::profile::{Preferences, ProfileStore};

use super::types::MealPlan;

/// Assembles a day's plan from catalog templates, simulating a
/// latency-bound remote call.
///
/// Reads the profile for personalization but never writes it. Holds at most
/// one current plan; each `generate` replaces the previous one atomically.
pub struct MealPlanGenerator {
    catalog: Arc<Catalog>,
    profile: Arc<ProfileStore>,
    current: Mutex<Option<MealPlan>>,
    delay: Duration,
}

impl MealPlanGenerator {
    pub fn new(catalog: Arc<Catalog>, profile: Arc<ProfileStore>, delay: Duration) -> Self {
        Self {
            catalog,
            profile,
            current: Mutex::new(None),
            delay,
        }
    }

    fn guard(&self) -> MutexGuard<'_, Option<MealPlan>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Generate a fresh plan: one template per slot in breakfast, lunch,
    /// dinner, snack order. Templates carrying an allergen from the profile
    /// are excluded; templates matching a favored cuisine are preferred;
    /// ties fall back to declaration order. With no profile loaded the
    /// selection degrades to plain declaration order.
    pub async fn generate(&self) -> MealPlan {
        tokio::time::sleep(self.delay).await;

        let preferences = self.profile.profile().map(|p| p.preferences);
        let meals = MealType::ALL
            .iter()
            .filter_map(|meal_type| {
                self.select_template(*meal_type, preferences.as_ref())
                    .map(MealTemplate::instantiate)
            })
            .collect();

        let plan = MealPlan::assemble(meals);
        info!(
            plan = %plan.id,
            meals = plan.meals.len(),
            calories = plan.total_calories,
            personalized = preferences.is_some(),
            "meal plan generated"
        );
        *self.guard() = Some(plan.clone());
        plan
    }

    /// The active plan, superseded by each `generate` call.
    pub fn current_plan(&self) -> Option<MealPlan> {
        self.guard().clone()
    }

    fn select_template(
        &self,
        meal_type: MealType,
        preferences: Option<&Preferences>,
    ) -> Option<&MealTemplate> {
        let candidates: Vec<&MealTemplate> = self
            .catalog
            .templates_of(meal_type)
            .filter(|t| {
                preferences.map_or(true, |p| !t.contains_any_allergen(&p.allergies))
            })
            .collect();

        if let Some(prefs) = preferences {
            let favored = &prefs.meal_preferences.cuisines;
            let preferred = candidates.iter().find(|t| t.matches_cuisine(favored)).copied();
            if preferred.is_some() {
                return preferred;
            }
        }
        candidates.first().copied()
    }
}
