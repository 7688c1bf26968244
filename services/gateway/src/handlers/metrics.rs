use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use std::collections::BTreeMap;

/// Export solver metrics as a flat JSON object of named counters
pub async fn export(State(state): State<AppState>) -> Json<BTreeMap<String, u64>> {
    Json(state.solver.metrics().export())
}
