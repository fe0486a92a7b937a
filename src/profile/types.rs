use std::num::NonZeroU8;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Self-reported activity level, "very-active" on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealSize {
    Small,
    Medium,
    Large,
}

const DEFAULT_MEAL_FREQUENCY: NonZeroU8 = match NonZeroU8::new(3) {
    Some(n) => n,
    None => panic!("default meal frequency is non-zero"),
};

/// Meal-shape preferences nested under [`Preferences`].
///
/// `meal_frequency` is a `NonZeroU8` so the ">= 1 meal per day" rule is
/// enforced at the deserialization boundary rather than re-checked by
/// every consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPreferences {
    pub cuisines: Vec<String>,
    pub meal_size: MealSize,
    pub meal_frequency: NonZeroU8,
}

impl Default for MealPreferences {
    fn default() -> Self {
        Self {
            cuisines: Vec::new(),
            meal_size: MealSize::Medium,
            meal_frequency: DEFAULT_MEAL_FREQUENCY,
        }
    }
}

/// Dietary preference state, owned by and nested inside [`UserProfile`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<String>,
    pub fitness_goals: Vec<String>,
    pub meal_preferences: MealPreferences,
}

/// The single live user profile for a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<u8>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub avatar_url: Option<String>,
    pub preferences: Preferences,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            age: None,
            weight_kg: None,
            height_cm: None,
            gender: None,
            activity_level: None,
            avatar_url: None,
            preferences: Preferences::default(),
        }
    }

    /// Derived completeness predicate: every required scalar present and
    /// both dietary restrictions and fitness goals non-empty. Pure over the
    /// current field values; recomputed on every read, never cached.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && self.age.is_some()
            && self.weight_kg.is_some()
            && self.height_cm.is_some()
            && self.gender.is_some()
            && self.activity_level.is_some()
            && !self.preferences.dietary_restrictions.is_empty()
            && !self.preferences.fitness_goals.is_empty()
    }
}

/// Top-level profile update: only the provided fields change, and the
/// nested preferences record is replaced only when explicitly included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u8>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub avatar_url: Option<String>,
    pub preferences: Option<Preferences>,
}

/// Shallow preference patch: each provided key replaces its counterpart
/// wholesale (arrays are not unioned); absent keys are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesPatch {
    pub dietary_restrictions: Option<Vec<String>>,
    pub allergies: Option<Vec<String>>,
    pub fitness_goals: Option<Vec<String>>,
    pub meal_preferences: Option<MealPreferences>,
}
