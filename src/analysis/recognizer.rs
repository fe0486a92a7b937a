use async_trait::async_trait;
use bytes::Bytes;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, FoodItem};

/// Opaque image blob handed to the analyzer by a presentation collaborator.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub content_type: String,
    pub body: Bytes,
}

impl ImagePayload {
    pub fn new(content_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            body: body.into(),
        }
    }
}

/// Image-to-catalog resolution seam.
///
/// The engine ships no real vision model; implementations stand in for one
/// and always resolve to some catalog entry (`None` only when the catalog
/// itself is empty). A real inference backend slots in here without
/// touching the analyzer contract, and tests inject deterministic stubs.
#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn recognize(&self, payload: &ImagePayload, catalog: &Catalog) -> Option<FoodItem>;
}

/// Placeholder recognition policy: uniform-random over the full catalog.
#[derive(Debug, Clone, Default)]
pub struct UniformRecognizer;

#[async_trait]
impl Recognizer for UniformRecognizer {
    async fn recognize(&self, _payload: &ImagePayload, catalog: &Catalog) -> Option<FoodItem> {
        catalog.foods().choose(&mut rand::thread_rng()).cloned()
    }
}
