use crate::config::Config;
use crate::skills::SkillRegistry;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state, injected into handlers via axum's `State`
/// extractor. The registry handle is the only mutable piece.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    pub skills: SkillRegistry,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            config,
            start_time: Instant::now(),
            skills: SkillRegistry::new(),
        })
    }

    pub fn uptime_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}
