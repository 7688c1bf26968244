use matching_engine::{Instrumented, MatchingEngine, SolverMetrics};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Instrumented engine; the metrics sink behind it is shared by every
    /// in-flight request
    pub solver: Instrumented,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            solver: Instrumented::new(MatchingEngine::new(), Arc::new(SolverMetrics::new())),
        }
    }
}
