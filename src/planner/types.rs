use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::catalog::Meal;

/// A day's plan: at most one meal per slot, plus aggregate totals.
///
/// Totals are fixed when the plan is assembled and must equal the sums over
/// `meals`; a mismatch is a construction-site bug, not a runtime condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: Uuid,
    pub date: OffsetDateTime,
    pub meals: Vec<Meal>,
    pub total_calories: f64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fat_g: f64,
}

impl MealPlan {
    /// Build a plan for today from `meals`, summing each aggregate exactly
    /// once.
    pub fn assemble(meals: Vec<Meal>) -> Self {
        let plan = Self {
            id: Uuid::new_v4(),
            date: OffsetDateTime::now_utc(),
            total_calories: meals.iter().map(|m| m.calories).sum(),
            total_protein_g: meals.iter().map(|m| m.protein_g).sum(),
            total_carbs_g: meals.iter().map(|m| m.carbs_g).sum(),
            total_fat_g: meals.iter().map(|m| m.fat_g).sum(),
            meals,
        };
        debug_assert!(plan.totals_consistent());
        plan
    }

    /// Invariant check: each total equals the sum of its field over the
    /// plan's meals, exactly.
    pub fn totals_consistent(&self) -> bool {
        self.total_calories == self.meals.iter().map(|m| m.calories).sum::<f64>()
            && self.total_protein_g == self.meals.iter().map(|m| m.protein_g).sum::<f64>()
            && self.total_carbs_g == self.meals.iter().map(|m| m.carbs_g).sum::<f64>()
            && self.total_fat_g == self.meals.iter().map(|m| m.fat_g).sum::<f64>()
    }
}
