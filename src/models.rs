use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::diagnostics::Diagnostic;

// ---------- API (wire) types: owned & serde-friendly ----------

/// Body of `POST /solve`. Also the cache key for solve results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SolveRequest {
    /// Used for artifact file names
    pub name: String,
    /// LP model text using human-readable variable names
    pub problem: String,
    pub variables: Vec<String>,
    /// Contents of a SYMPHONY parameters file, overriding `SYMPHONY_PARAMETERS`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    NoSolution,
    Solved,
    Failed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SolveResponse {
    pub name: String,
    pub status: Status,
    pub solved: bool,
    pub solution: HashMap<String, f64>,
    pub failure: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}
