use crate::error::AppError;
use crate::models::{SolveParams, SolveRequest, SolveResponse, Strategy};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};

pub async fn solve(
    State(state): State<AppState>,
    Query(params): Query<SolveParams>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Result<Json<SolveResponse>, AppError> {
    // Malformed payloads are the only request-level failure
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let strategy = Strategy::from_param(params.strategy.as_deref());

    tracing::info!(
        applicants = request.applicants.len(),
        slots = request.slots.len(),
        strategy = strategy.as_str(),
        "processing solve request"
    );

    let outcome = match strategy {
        Strategy::Stable => state.solver.solve_stable(&request.applicants, &request.slots),
        Strategy::Greedy => state.solver.solve_greedy(&request.applicants, &request.slots),
    };

    Ok(Json(SolveResponse {
        assignments: outcome.assignments,
        stable: outcome.stable,
    }))
}
