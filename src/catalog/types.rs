use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single food entry with per-serving nutrition values.
///
/// Immutable once loaded from the catalog; consumers receive clones and
/// never write back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub sugar_g: f64,
    /// Human-readable serving description, e.g. "1 medium (182g)".
    pub serving_size: String,
    pub category: String,
    pub image_url: Option<String>,
}

impl FoodItem {
    /// Boundary check for externally loaded catalog data.
    pub fn validate(&self) -> anyhow::Result<()> {
        let nutrients = [
            self.calories,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.fiber_g,
            self.sugar_g,
        ];
        anyhow::ensure!(
            nutrients.iter().all(|v| *v >= 0.0),
            "negative nutrient value on food item {:?}",
            self.name
        );
        anyhow::ensure!(!self.name.trim().is_empty(), "food item with empty name");
        Ok(())
    }
}

/// Slot a meal occupies in a day's plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Plan slot order: breakfast, lunch, dinner, snack.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
}

/// A prepared meal: macro fields are authored alongside the recipe for
/// display, not derived from the ingredient list at read time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub meal_type: MealType,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub ingredients: Vec<String>,
    pub image_url: String,
    pub preparation: String,
}

/// A hand-authored meal plus the cuisine tags used for personalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealTemplate {
    pub meal: Meal,
    pub cuisines: Vec<String>,
}

impl MealTemplate {
    /// True if any ingredient name equals one of the allergy tags
    /// (case-insensitive set intersection).
    pub fn contains_any_allergen(&self, allergies: &[String]) -> bool {
        self.meal.ingredients.iter().any(|ingredient| {
            allergies
                .iter()
                .any(|allergen| ingredient.eq_ignore_ascii_case(allergen))
        })
    }

    /// True if any cuisine tag matches one of the favored cuisines.
    pub fn matches_cuisine(&self, favored: &[String]) -> bool {
        self.cuisines
            .iter()
            .any(|c| favored.iter().any(|f| c.eq_ignore_ascii_case(f)))
    }

    /// Clone the template meal under a fresh identity for use in a plan.
    pub fn instantiate(&self) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            ..self.meal.clone()
        }
    }
}
