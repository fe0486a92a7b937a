mod data;
mod types;

pub use types::{FoodItem, Meal, MealTemplate, MealType};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Immutable reference data: food items plus hand-authored meal templates.
///
/// Loaded once at engine construction and only ever read afterwards; the
/// analyzer and planner hold shared references and never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    foods: Vec<FoodItem>,
    templates: Vec<MealTemplate>,
}

impl Catalog {
    pub fn new(foods: Vec<FoodItem>, templates: Vec<MealTemplate>) -> Self {
        Self { foods, templates }
    }

    /// The built-in data set shipped with the engine.
    pub fn builtin() -> Self {
        Self::new(data::builtin_foods(), data::builtin_templates())
    }

    /// Load externally supplied reference data (JSON), rejecting rows that
    /// fail the boundary checks.
    pub fn from_json_slice(bytes: &[u8]) -> anyhow::Result<Self> {
        let catalog: Catalog =
            serde_json::from_slice(bytes).context("parse catalog json")?;
        for food in &catalog.foods {
            food.validate()?;
        }
        anyhow::ensure!(!catalog.foods.is_empty(), "catalog has no food items");
        Ok(catalog)
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn templates(&self) -> &[MealTemplate] {
        &self.templates
    }

    /// Case-insensitive substring lookup over food names. First match in
    /// catalog order wins, so results are deterministic.
    pub fn find_food(&self, query: &str) -> Option<&FoodItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.foods
            .iter()
            .find(|f| f.name.to_lowercase().contains(&needle))
    }

    /// Templates for one plan slot, in declaration order.
    pub fn templates_of(&self, meal_type: MealType) -> impl Iterator<Item = &MealTemplate> {
        self.templates
            .iter()
            .filter(move |t| t.meal.meal_type == meal_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_food_matches_substring_case_insensitively() {
        let catalog = Catalog::builtin();
        let item = catalog.find_food("chicken").expect("chicken matches");
        assert_eq!(item.name, "Chicken Breast");
        assert_eq!(item.calories, 165.0);
    }

    #[test]
    fn find_food_trims_and_ignores_case() {
        let catalog = Catalog::builtin();
        let item = catalog.find_food("  SALMON  ").expect("salmon matches");
        assert_eq!(item.name, "Salmon Fillet");
    }

    #[test]
    fn find_food_returns_first_match_in_catalog_order() {
        let catalog = Catalog::builtin();
        // "a" is a substring of several names; Apple is declared first.
        let item = catalog.find_food("a").expect("something matches");
        assert_eq!(item.name, "Apple");
    }

    #[test]
    fn find_food_misses_unknown_and_empty_queries() {
        let catalog = Catalog::builtin();
        assert!(catalog.find_food("nonexistent-zzz").is_none());
        assert!(catalog.find_food("   ").is_none());
    }

    #[test]
    fn builtin_templates_cover_every_meal_type() {
        let catalog = Catalog::builtin();
        for meal_type in MealType::ALL {
            assert!(
                catalog.templates_of(meal_type).next().is_some(),
                "no template for {meal_type:?}"
            );
        }
    }

    #[test]
    fn json_round_trip_preserves_the_catalog() {
        let catalog = Catalog::builtin();
        let bytes = serde_json::to_vec(&catalog).expect("serialize");
        let loaded = Catalog::from_json_slice(&bytes).expect("load");
        assert_eq!(loaded.foods().len(), catalog.foods().len());
        assert_eq!(loaded.templates().len(), catalog.templates().len());
    }

    #[test]
    fn loading_rejects_negative_nutrients() {
        let mut catalog = Catalog::builtin();
        catalog.foods[0].calories = -10.0;
        let bytes = serde_json::to_vec(&catalog).expect("serialize");
        assert!(Catalog::from_json_slice(&bytes).is_err());
    }
}
