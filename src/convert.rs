use crate::domain::document::ModelDocument;
use crate::domain::problem::{Problem, SolveState};
use crate::models::{SolveRequest, SolveResponse, Status};

impl From<&SolveState> for Status {
    fn from(state: &SolveState) -> Self {
        match state {
            SolveState::Pending => Status::Pending,
            SolveState::NoSolution => Status::NoSolution,
            SolveState::Solved(_) => Status::Solved,
            SolveState::Failed(_) => Status::Failed,
        }
    }
}

impl From<&SolveRequest> for ModelDocument {
    fn from(req: &SolveRequest) -> Self {
        ModelDocument::new(req.problem.clone(), req.variables.clone())
    }
}

/// Snapshot a problem's outcome into the API response, draining its diagnostics
pub fn to_response(problem: &mut Problem) -> SolveResponse {
    let diagnostics = problem.take_diagnostics();
    let state = problem.state();
    let failure = match state {
        SolveState::Failed(reason) => Some(reason.to_string()),
        _ => None,
    };

    SolveResponse {
        name: problem.name().to_string(),
        status: state.into(),
        solved: state.is_solved(),
        solution: state.solution().cloned().unwrap_or_default(),
        failure,
        diagnostics,
    }
}
