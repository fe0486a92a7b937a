use std::sync::Arc;

use crate::analysis::{AnalysisHistory, FoodAnalyzer, Recognizer, UniformRecognizer};
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::planner::{MealPlanGenerator, SavedMeals};
use crate::profile::ProfileStore;

/// Construction-time wiring for the whole engine.
///
/// Every store is an explicit handle passed into the components that need
/// it; there is no ambient global state. Cloning the engine clones handles,
/// not state.
#[derive(Clone)]
pub struct Engine {
    pub config: Arc<EngineConfig>,
    pub catalog: Arc<Catalog>,
    pub profile: Arc<ProfileStore>,
    pub history: Arc<AnalysisHistory>,
    pub saved_meals: Arc<SavedMeals>,
    pub analyzer: Arc<FoodAnalyzer>,
    pub planner: Arc<MealPlanGenerator>,
}

impl Engine {
    /// Production wiring: env-backed config, built-in catalog, uniform
    /// recognizer, and the one-shot profile bootstrap running in the
    /// background.
    pub async fn init() -> Self {
        dotenvy::dotenv().ok();
        let config = Arc::new(EngineConfig::from_env());
        let engine = Self::from_parts(
            config,
            Arc::new(Catalog::builtin()),
            Arc::new(UniformRecognizer),
        );
        engine.spawn_bootstrap();
        engine
    }

    /// Assemble an engine from explicit parts. Does not start the profile
    /// bootstrap; call [`Engine::spawn_bootstrap`] when wanted.
    pub fn from_parts(
        config: Arc<EngineConfig>,
        catalog: Arc<Catalog>,
        recognizer: Arc<dyn Recognizer>,
    ) -> Self {
        let profile = Arc::new(ProfileStore::new());
        let history = Arc::new(AnalysisHistory::new());
        let saved_meals = Arc::new(SavedMeals::new());
        let analyzer = Arc::new(FoodAnalyzer::new(
            Arc::clone(&catalog),
            Arc::clone(&history),
            recognizer,
            config.analysis_delay,
        ));
        let planner = Arc::new(MealPlanGenerator::new(
            Arc::clone(&catalog),
            Arc::clone(&profile),
            config.plan_delay,
        ));
        Self {
            config,
            catalog,
            profile,
            history,
            saved_meals,
            analyzer,
            planner,
        }
    }

    /// Zero-latency engine over the built-in catalog, for tests.
    pub fn fake() -> Self {
        Self::from_parts(
            Arc::new(EngineConfig::fake()),
            Arc::new(Catalog::builtin()),
            Arc::new(UniformRecognizer),
        )
    }

    /// Kick off the one-shot profile bootstrap in the background.
    pub fn spawn_bootstrap(&self) {
        let profile = Arc::clone(&self.profile);
        let delay = self.config.bootstrap_delay;
        tokio::spawn(async move {
            profile.bootstrap(delay).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RECENT_CAP;

    #[tokio::test]
    async fn fake_engine_analyzes_end_to_end() {
        let engine = Engine::fake();
        let item = engine.analyzer.analyze("biryani").await.expect("match");
        assert_eq!(item.name, "Biryani");
        assert_eq!(engine.history.recent(RECENT_CAP).len(), 1);
        assert_eq!(engine.history.all().len(), 1);
    }

    #[tokio::test]
    async fn fake_engine_generates_a_consistent_plan() {
        let engine = Engine::fake();
        let plan = engine.planner.generate().await;
        assert!(plan.totals_consistent());
        assert_eq!(
            engine.planner.current_plan().expect("current plan").id,
            plan.id
        );
    }

    #[tokio::test]
    async fn bootstrap_populates_the_profile_in_the_background() {
        let engine = Engine::fake();
        assert!(engine.profile.profile().is_none());
        engine.spawn_bootstrap();
        // Zero-delay bootstrap still needs its task to run.
        tokio::task::yield_now().await;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(engine.profile.profile().is_some());
        assert!(engine.profile.is_complete());
    }
}
