mod store;
mod types;

pub use store::ProfileStore;
pub use types::{
    ActivityLevel, Gender, MealPreferences, MealSize, Preferences, PreferencesPatch,
    ProfileUpdate, UserProfile,
};
