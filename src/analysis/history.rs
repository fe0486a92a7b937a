use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use time::OffsetDateTime;
use tracing::debug;

use crate::catalog::FoodItem;

/// Retention of the bounded recent-foods view.
pub const RECENT_CAP: usize = 5;

/// One analysis result with the moment it resolved.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedFood {
    pub item: FoodItem,
    pub analyzed_at: OffsetDateTime,
}

#[derive(Debug, Default)]
struct HistoryState {
    all: VecDeque<AnalyzedFood>,
    recent: VecDeque<FoodItem>,
}

/// Analysis audit log plus the capped recent-foods projection.
///
/// `all` grows without bound, newest first; `recent` keeps at most
/// [`RECENT_CAP`] entries. Both views are updated by a single `record`
/// call, so every successful analysis is observable through both.
#[derive(Debug, Default)]
pub struct AnalysisHistory {
    inner: Mutex<HistoryState>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, HistoryState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Front-append `item` to both views, truncating the recent one.
    pub fn record(&self, item: FoodItem) {
        let mut state = self.guard();
        state.recent.push_front(item.clone());
        state.recent.truncate(RECENT_CAP);
        debug!(food = %item.name, total = state.all.len() + 1, "analysis recorded");
        state.all.push_front(AnalyzedFood {
            item,
            analyzed_at: OffsetDateTime::now_utc(),
        });
    }

    /// Full log, most recently completed first.
    pub fn all(&self) -> Vec<AnalyzedFood> {
        self.guard().all.iter().cloned().collect()
    }

    /// Capped recent view, most recently completed first. `limit` can only
    /// narrow the view further; retention stays at [`RECENT_CAP`].
    pub fn recent(&self, limit: usize) -> Vec<FoodItem> {
        self.guard().recent.iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn items(n: usize) -> Vec<FoodItem> {
        let catalog = Catalog::builtin();
        (0..n)
            .map(|i| catalog.foods()[i % catalog.foods().len()].clone())
            .collect()
    }

    #[test]
    fn starts_empty() {
        let history = AnalysisHistory::new();
        assert!(history.all().is_empty());
        assert!(history.recent(RECENT_CAP).is_empty());
    }

    #[test]
    fn recent_is_capped_while_the_log_is_not() {
        let history = AnalysisHistory::new();
        for item in items(8) {
            history.record(item);
        }
        assert_eq!(history.all().len(), 8);
        assert_eq!(history.recent(RECENT_CAP).len(), RECENT_CAP);
    }

    #[test]
    fn both_views_are_newest_first() {
        let history = AnalysisHistory::new();
        let recorded = items(3);
        for item in &recorded {
            history.record(item.clone());
        }
        let all = history.all();
        assert_eq!(all[0].item.name, recorded[2].name);
        assert_eq!(all[2].item.name, recorded[0].name);

        let recent = history.recent(RECENT_CAP);
        assert_eq!(recent[0].name, recorded[2].name);
    }

    #[test]
    fn recent_limit_narrows_the_view() {
        let history = AnalysisHistory::new();
        for item in items(4) {
            history.record(item);
        }
        assert_eq!(history.recent(2).len(), 2);
        assert_eq!(history.recent(10).len(), 4);
    }
}
