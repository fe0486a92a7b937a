use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::catalog::Meal;

/// Caller-visible collection of meals kept beyond their plan's lifetime.
#[derive(Debug, Default)]
pub struct SavedMeals {
    inner: Mutex<VecDeque<Meal>>,
}

impl SavedMeals {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, VecDeque<Meal>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Prepend `meal`; the list is newest first.
    pub fn save(&self, meal: Meal) {
        debug!(meal = %meal.name, "meal saved");
        self.guard().push_front(meal);
    }

    pub fn list(&self) -> Vec<Meal> {
        self.guard().iter().cloned().collect()
    }
}
