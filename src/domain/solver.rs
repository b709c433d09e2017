use std::path::Path;

use crate::error::Result;

/// Files handed to one solver run
#[derive(Debug, Clone, Copy)]
pub struct SolverInvocation<'a> {
    /// Converted model, the solver only ever sees tokens
    pub converted: &'a Path,
    /// Optional solver parameters file
    pub parameters: Option<&'a Path>,
    /// Where the solver's combined output must end up
    pub solution: &'a Path,
}

/// How a solver run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverRun {
    /// `None` when the process was terminated by a signal or killed
    pub exit_code: Option<i32>,
    pub timed_out: bool,
}

impl SolverRun {
    pub fn exited(exit_code: Option<i32>) -> Self {
        SolverRun {
            exit_code,
            timed_out: false,
        }
    }

    pub fn timed_out() -> Self {
        SolverRun {
            exit_code: None,
            timed_out: true,
        }
    }

    pub fn success() -> Self {
        Self::exited(Some(0))
    }
}

/// Effect boundary around the external solver process
pub trait SolverProcess {
    /// Run the solver to completion. The solver output must be written to
    /// `invocation.solution` before this returns.
    ///
    /// Returns `Err` only when the process could not be run at all; exit codes
    /// and timeouts are reported through `SolverRun`.
    fn run(&self, invocation: &SolverInvocation) -> Result<SolverRun>;

    /// Solver name for logging
    fn name(&self) -> &str;
}
