use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::catalog::{Catalog, FoodItem};
use crate::error::{Error, Result};

use super::history::AnalysisHistory;
use super::recognizer::{ImagePayload, Recognizer};

/// A food query as delivered by the presentation layer.
#[derive(Debug, Clone)]
pub enum FoodQuery {
    Text(String),
    Image(ImagePayload),
}

impl From<&str> for FoodQuery {
    fn from(q: &str) -> Self {
        FoodQuery::Text(q.to_string())
    }
}

impl From<String> for FoodQuery {
    fn from(q: String) -> Self {
        FoodQuery::Text(q)
    }
}

impl From<ImagePayload> for FoodQuery {
    fn from(payload: ImagePayload) -> Self {
        FoodQuery::Image(payload)
    }
}

/// Resolves food queries against the catalog, simulating a latency-bound
/// remote inference call.
///
/// Calls never resolve synchronously and are not deduplicated: concurrent
/// analyses run side by side and each records its own result, in completion
/// order.
pub struct FoodAnalyzer {
    catalog: Arc<Catalog>,
    history: Arc<AnalysisHistory>,
    recognizer: Arc<dyn Recognizer>,
    delay: Duration,
}

impl FoodAnalyzer {
    pub fn new(
        catalog: Arc<Catalog>,
        history: Arc<AnalysisHistory>,
        recognizer: Arc<dyn Recognizer>,
        delay: Duration,
    ) -> Self {
        Self {
            catalog,
            history,
            recognizer,
            delay,
        }
    }

    /// Resolve `query` to a catalog item. Text queries match by
    /// case-insensitive substring, first catalog entry wins; image queries
    /// go through the injected recognizer. Every success is recorded in
    /// the history log and the recent view.
    pub async fn analyze(&self, query: impl Into<FoodQuery>) -> Result<FoodItem> {
        let query = query.into();
        tokio::time::sleep(self.delay).await;

        let item = match query {
            FoodQuery::Text(raw) => {
                debug!(query = %raw, "text analysis");
                match self.catalog.find_food(&raw) {
                    Some(found) => found.clone(),
                    None => return Err(Error::FoodNotFound { query: raw }),
                }
            }
            FoodQuery::Image(payload) => {
                debug!(
                    content_type = %payload.content_type,
                    bytes = payload.body.len(),
                    "image analysis"
                );
                self.recognizer
                    .recognize(&payload, &self.catalog)
                    .await
                    .ok_or_else(|| Error::InvalidInput("food catalog is empty".into()))?
            }
        };

        self.history.record(item.clone());
        debug!(food = %item.name, "analysis resolved");
        Ok(item)
    }
}
