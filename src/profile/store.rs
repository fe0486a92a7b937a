use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{Error, Result};

use super::types::{
    ActivityLevel, Gender, Preferences, PreferencesPatch, ProfileUpdate, UserProfile,
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Owns the session's single live profile.
///
/// Mutations are synchronous and atomic with respect to observers; the lock
/// is never held across an await point. Completeness is derived on read.
#[derive(Debug, Default)]
pub struct ProfileStore {
    inner: Mutex<Option<UserProfile>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Option<UserProfile>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current profile, if one is loaded.
    pub fn profile(&self) -> Option<UserProfile> {
        self.guard().clone()
    }

    pub fn is_complete(&self) -> bool {
        self.guard().as_ref().is_some_and(UserProfile::is_complete)
    }

    /// Merge the provided top-level fields into the live profile. The
    /// nested preferences record is replaced only when the update carries
    /// one. With no profile loaded the update becomes the initial profile
    /// and must include name and email.
    pub fn set_profile(&self, update: ProfileUpdate) -> Result<()> {
        if let Some(email) = update.email.as_deref() {
            if !is_valid_email(email) {
                return Err(Error::InvalidEmail {
                    email: email.to_string(),
                });
            }
        }

        let mut guard = self.guard();
        match guard.as_mut() {
            Some(profile) => apply_update(profile, update),
            None => *guard = Some(initial_profile(update)?),
        }
        let complete = guard.as_ref().is_some_and(UserProfile::is_complete);
        debug!(complete, "profile updated");
        Ok(())
    }

    /// Shallow-merge the provided preference keys into the live profile's
    /// preferences; arrays replace wholesale per key. Silent no-op when no
    /// profile is loaded, so callers never have to null-check first.
    pub fn update_preferences(&self, patch: PreferencesPatch) {
        let mut guard = self.guard();
        let Some(profile) = guard.as_mut() else {
            debug!("no profile loaded; preference update ignored");
            return;
        };
        let prefs = &mut profile.preferences;
        if let Some(restrictions) = patch.dietary_restrictions {
            prefs.dietary_restrictions = restrictions;
        }
        if let Some(allergies) = patch.allergies {
            prefs.allergies = allergies;
        }
        if let Some(goals) = patch.fitness_goals {
            prefs.fitness_goals = goals;
        }
        if let Some(meal_preferences) = patch.meal_preferences {
            prefs.meal_preferences = meal_preferences;
        }
        debug!(complete = profile.is_complete(), "preferences updated");
    }

    /// One-shot bootstrap standing in for the remote profile fetch: waits
    /// out the simulated latency, then installs the default profile unless
    /// a profile was set in the meantime. Single transition, no retry.
    pub async fn bootstrap(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
        let mut guard = self.guard();
        if guard.is_none() {
            *guard = Some(default_profile());
            info!("default profile loaded");
        } else {
            debug!("profile already present; bootstrap skipped");
        }
    }
}

fn apply_update(profile: &mut UserProfile, update: ProfileUpdate) {
    let ProfileUpdate {
        name,
        email,
        age,
        weight_kg,
        height_cm,
        gender,
        activity_level,
        avatar_url,
        preferences,
    } = update;
    if let Some(name) = name {
        profile.name = name;
    }
    if let Some(email) = email {
        profile.email = email;
    }
    if let Some(age) = age {
        profile.age = Some(age);
    }
    if let Some(weight_kg) = weight_kg {
        profile.weight_kg = Some(weight_kg);
    }
    if let Some(height_cm) = height_cm {
        profile.height_cm = Some(height_cm);
    }
    if let Some(gender) = gender {
        profile.gender = Some(gender);
    }
    if let Some(activity_level) = activity_level {
        profile.activity_level = Some(activity_level);
    }
    if let Some(avatar_url) = avatar_url {
        profile.avatar_url = Some(avatar_url);
    }
    if let Some(preferences) = preferences {
        profile.preferences = preferences;
    }
}

fn initial_profile(update: ProfileUpdate) -> Result<UserProfile> {
    let (Some(name), Some(email)) = (update.name.clone(), update.email.clone()) else {
        return Err(Error::InvalidInput(
            "initial profile requires name and email".into(),
        ));
    };
    let mut profile = UserProfile::new(name, email);
    apply_update(&mut profile, update);
    Ok(profile)
}

fn default_profile() -> UserProfile {
    let mut profile = UserProfile::new("Alex Johnson", "alex@example.com");
    profile.age = Some(32);
    profile.weight_kg = Some(70.0);
    profile.height_cm = Some(175.0);
    profile.gender = Some(Gender::Male);
    profile.activity_level = Some(ActivityLevel::Moderate);
    profile.avatar_url = Some(
        "https://images.pexels.com/photos/1681010/pexels-photo-1681010.jpeg?auto=compress&cs=tinysrgb&w=150"
            .into(),
    );
    profile.preferences = Preferences {
        dietary_restrictions: vec!["vegetarian".into()],
        allergies: vec!["peanuts".into()],
        fitness_goals: vec!["weight loss".into(), "muscle gain".into()],
        meal_preferences: super::types::MealPreferences {
            cuisines: vec!["mediterranean".into(), "asian".into(), "mexican".into()],
            ..Default::default()
        },
    };
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_store() -> ProfileStore {
        let store = ProfileStore::new();
        store
            .set_profile(ProfileUpdate {
                name: Some("Alex Johnson".into()),
                email: Some("alex@example.com".into()),
                ..Default::default()
            })
            .expect("initial profile");
        store
    }

    #[test]
    fn starts_without_a_profile() {
        let store = ProfileStore::new();
        assert!(store.profile().is_none());
        assert!(!store.is_complete());
    }

    #[test]
    fn initial_set_requires_name_and_email() {
        let store = ProfileStore::new();
        let err = store
            .set_profile(ProfileUpdate {
                age: Some(30),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(store.profile().is_none());
    }

    #[test]
    fn rejects_malformed_email() {
        let store = loaded_store();
        let err = store
            .set_profile(ProfileUpdate {
                email: Some("not-an-email".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidEmail { .. }));
        let profile = store.profile().expect("profile still loaded");
        assert_eq!(profile.email, "alex@example.com");
    }

    #[test]
    fn merge_preserves_preferences_unless_included() {
        let store = loaded_store();
        store.update_preferences(PreferencesPatch {
            dietary_restrictions: Some(vec!["vegetarian".into()]),
            ..Default::default()
        });

        store
            .set_profile(ProfileUpdate {
                age: Some(32),
                weight_kg: Some(70.0),
                ..Default::default()
            })
            .expect("merge update");

        let profile = store.profile().expect("profile");
        assert_eq!(profile.age, Some(32));
        assert_eq!(
            profile.preferences.dietary_restrictions,
            vec!["vegetarian".to_string()]
        );

        store
            .set_profile(ProfileUpdate {
                preferences: Some(Preferences::default()),
                ..Default::default()
            })
            .expect("replace preferences");
        let profile = store.profile().expect("profile");
        assert!(profile.preferences.dietary_restrictions.is_empty());
    }

    #[test]
    fn completeness_flips_with_required_fields() {
        let store = loaded_store();
        assert!(!store.is_complete());

        store
            .set_profile(ProfileUpdate {
                age: Some(32),
                weight_kg: Some(70.0),
                height_cm: Some(175.0),
                gender: Some(Gender::Male),
                activity_level: Some(ActivityLevel::Moderate),
                ..Default::default()
            })
            .expect("biometrics");
        assert!(!store.is_complete(), "preference sets still empty");

        store.update_preferences(PreferencesPatch {
            dietary_restrictions: Some(vec!["vegetarian".into()]),
            fitness_goals: Some(vec!["weight loss".into()]),
            ..Default::default()
        });
        assert!(store.is_complete());

        store.update_preferences(PreferencesPatch {
            fitness_goals: Some(Vec::new()),
            ..Default::default()
        });
        assert!(!store.is_complete());
    }

    #[test]
    fn preference_patch_touches_only_provided_keys() {
        let store = loaded_store();
        store.update_preferences(PreferencesPatch {
            dietary_restrictions: Some(vec!["vegan".into()]),
            fitness_goals: Some(vec!["endurance".into()]),
            ..Default::default()
        });
        let before = store.profile().expect("profile").preferences;

        store.update_preferences(PreferencesPatch {
            allergies: Some(vec!["peanuts".into(), "shellfish".into()]),
            ..Default::default()
        });

        let after = store.profile().expect("profile").preferences;
        assert_eq!(
            after.allergies,
            vec!["peanuts".to_string(), "shellfish".to_string()]
        );
        assert_eq!(after.dietary_restrictions, before.dietary_restrictions);
        assert_eq!(after.fitness_goals, before.fitness_goals);
        assert_eq!(after.meal_preferences, before.meal_preferences);
    }

    #[test]
    fn preference_update_without_profile_is_a_silent_noop() {
        let store = ProfileStore::new();
        store.update_preferences(PreferencesPatch {
            allergies: Some(vec!["peanuts".into()]),
            ..Default::default()
        });
        assert!(store.profile().is_none());
    }

    #[tokio::test]
    async fn bootstrap_installs_the_default_profile() {
        let store = ProfileStore::new();
        store.bootstrap(Duration::from_millis(1)).await;
        let profile = store.profile().expect("bootstrapped profile");
        assert_eq!(profile.name, "Alex Johnson");
        assert_eq!(profile.preferences.allergies, vec!["peanuts".to_string()]);
        assert!(store.is_complete());
    }

    #[tokio::test]
    async fn bootstrap_does_not_clobber_an_existing_profile() {
        let store = loaded_store();
        store
            .set_profile(ProfileUpdate {
                name: Some("Sam Rivera".into()),
                ..Default::default()
            })
            .expect("rename");
        store.bootstrap(Duration::from_millis(1)).await;
        assert_eq!(store.profile().expect("profile").name, "Sam Rivera");
    }
}
