use serde::{Deserialize, Serialize};
use types::applicant::Applicant;
use types::assignment::Assignment;
use types::slot::Slot;

#[derive(Debug, Clone, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub applicants: Vec<Applicant>,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveResponse {
    pub assignments: Vec<Assignment>,
    pub stable: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolveParams {
    pub strategy: Option<String>,
}

/// Solver selection for a request
///
/// Anything other than `stable` falls back to the greedy baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Greedy,
    Stable,
}

impl Strategy {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(p) if p.eq_ignore_ascii_case("stable") => Strategy::Stable,
            _ => Strategy::Greedy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Stable => "stable",
        }
    }
}
