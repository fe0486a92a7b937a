use std::time::Duration;

const DEFAULT_ANALYSIS_DELAY_MS: u64 = 1500;
const DEFAULT_PLAN_DELAY_MS: u64 = 1500;
const DEFAULT_BOOTSTRAP_DELAY_MS: u64 = 500;

/// Engine tuning, read from the environment with sensible defaults.
///
/// The delays model the latency of the remote services the engine will
/// eventually call; collaborators are expected to treat `analyze` and
/// `generate` as noticeably slow.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub analysis_delay: Duration,
    pub plan_delay: Duration,
    pub bootstrap_delay: Duration,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            analysis_delay: env_ms("NUTRIAI_ANALYSIS_DELAY_MS", DEFAULT_ANALYSIS_DELAY_MS),
            plan_delay: env_ms("NUTRIAI_PLAN_DELAY_MS", DEFAULT_PLAN_DELAY_MS),
            bootstrap_delay: env_ms("NUTRIAI_BOOTSTRAP_DELAY_MS", DEFAULT_BOOTSTRAP_DELAY_MS),
        }
    }

    /// Zero-latency configuration for tests.
    pub fn fake() -> Self {
        Self {
            analysis_delay: Duration::ZERO,
            plan_delay: Duration::ZERO,
            bootstrap_delay: Duration::ZERO,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
            plan_delay: Duration::from_millis(DEFAULT_PLAN_DELAY_MS),
            bootstrap_delay: Duration::from_millis(DEFAULT_BOOTSTRAP_DELAY_MS),
        }
    }
}

fn env_ms(var: &str, default_ms: u64) -> Duration {
    let ms = std::env::var(var)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default_ms);
    Duration::from_millis(ms)
}
