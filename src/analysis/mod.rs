mod history;
mod recognizer;
mod services;

pub use history::{AnalysisHistory, AnalyzedFood, RECENT_CAP};
pub use recognizer::{ImagePayload, Recognizer, UniformRecognizer};
pub use services::{FoodAnalyzer, FoodQuery};
