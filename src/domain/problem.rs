use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::domain::document::{ModelBuilder, ModelDocument};
use crate::domain::registry::VariableRegistry;
use crate::domain::solution::{parse_solution, Solution};
use crate::domain::solver::{SolverInvocation, SolverProcess, SolverRun};
use crate::domain::solvers::SymphonyCommand;
use crate::domain::translate::to_solver_form;
use crate::domain::validate::validate_problem_name;
use crate::error::{ProblemError, Result};

/// Artifact files written by one solve, all inside the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub human: PathBuf,
    pub converted: PathBuf,
    pub solution: PathBuf,
}

impl ArtifactPaths {
    pub fn new(output_dir: &Path, problem_name: &str) -> Self {
        ArtifactPaths {
            human: output_dir.join(format!("human_{}.lp", problem_name)),
            converted: output_dir.join(format!("converted_{}.lp", problem_name)),
            solution: output_dir.join(format!("solution_{}.txt", problem_name)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    Timeout,
    ExitCode(i32),
    /// Killed by a signal
    Terminated,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Timeout => write!(f, "solver timed out"),
            FailureReason::ExitCode(code) => write!(f, "solver exited with status {}", code),
            FailureReason::Terminated => write!(f, "solver was terminated by a signal"),
        }
    }
}

impl SolverRun {
    fn failure(&self) -> Option<FailureReason> {
        if self.timed_out {
            return Some(FailureReason::Timeout);
        }
        match self.exit_code {
            Some(0) => None,
            Some(code) => Some(FailureReason::ExitCode(code)),
            None => Some(FailureReason::Terminated),
        }
    }
}

/// Outcome of the most recent solve
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SolveState {
    /// Never solved
    #[default]
    Pending,
    /// Solver ran but reported no solution, e.g. an infeasible model
    NoSolution,
    Solved(Solution),
    Failed(FailureReason),
}

impl SolveState {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveState::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveState::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRunState {
    pub created: bool,
    pub solved: bool,
}

/// One optimization problem: its model document, variable registry and the
/// state of its last solve.
///
/// ```no_run
/// use std::path::Path;
/// use rust_symphony::domain::document::LpModelBuilder;
/// use rust_symphony::domain::problem::Problem;
///
/// let model = LpModelBuilder::new()
///     .maximize("totalProtein")
///     .subject_to("22 millet + 5 oats + -totalProtein = 0")
///     .subject_to("5 millet + 2 oats <= 20")
///     .variables(["millet", "oats", "totalProtein"]);
///
/// let mut problem = Problem::new("porridge");
/// problem.create(&model)?;
/// problem.solve(Path::new("out"), Path::new("symphony"), None)?;
/// if let Some(solution) = problem.solution() {
///     println!("{:?}", solution);
/// }
/// # Ok::<(), rust_symphony::ProblemError>(())
/// ```
#[derive(Debug, Default)]
pub struct Problem {
    name: String,
    registry: VariableRegistry,
    document: Option<ModelDocument>,
    converted: Option<String>,
    state: SolveState,
    diagnostics: Diagnostics,
}

impl Problem {
    pub fn new(name: impl Into<String>) -> Self {
        Problem {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register additional variable names
    pub fn register<I>(&mut self, names: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.registry.register(names, &mut self.diagnostics)
    }

    /// Build the model document and register the variables it declares
    pub fn create<B: ModelBuilder + ?Sized>(&mut self, builder: &B) -> Result<()> {
        let document = builder.create()?;
        self.registry
            .register(&document.variables, &mut self.diagnostics)?;
        self.document = Some(document);
        self.converted = None;
        Ok(())
    }

    /// Check the preconditions of a solve without touching the filesystem
    pub fn ensure_solvable(&self) -> Result<()> {
        if self.document.is_none() {
            return Err(ProblemError::EmptyProblem);
        }
        if self.registry.is_empty() {
            return Err(ProblemError::EmptyVariableMap);
        }
        validate_problem_name(&self.name)
    }

    /// Solve with the SYMPHONY binary at `solver_path`
    pub fn solve(
        &mut self,
        output_dir: &Path,
        solver_path: &Path,
        parameters_path: Option<&Path>,
    ) -> Result<&SolveState> {
        let solver = SymphonyCommand::new(solver_path);
        self.solve_with(output_dir, parameters_path, &solver)
    }

    /// Write the artifacts, run `solver` and parse its output.
    ///
    /// # Errors
    ///
    /// `EmptyProblem` and `EmptyVariableMap` are checked before any file is
    /// written. Infeasible models, solver failures and timeouts are not errors;
    /// they show up in `state()` and `diagnostics()`.
    pub fn solve_with(
        &mut self,
        output_dir: &Path,
        parameters_path: Option<&Path>,
        solver: &dyn SolverProcess,
    ) -> Result<&SolveState> {
        self.ensure_solvable()?;
        let document = self.document.as_ref().ok_or(ProblemError::EmptyProblem)?;

        self.state = SolveState::Pending;
        self.converted = None;
        let artifacts = ArtifactPaths::new(output_dir, &self.name);

        fs::write(&artifacts.human, &document.text)?;
        let converted = to_solver_form(&document.text, &self.registry.translation_order())?;
        fs::write(&artifacts.converted, &converted)?;
        self.converted = Some(converted);

        log::info!("solving problem {} with {}", self.name, solver.name());
        let invocation = SolverInvocation {
            converted: &artifacts.converted,
            parameters: parameters_path,
            solution: &artifacts.solution,
        };
        let run = solver.run(&invocation)?;

        if let Some(reason) = run.failure() {
            let kind = match reason {
                FailureReason::Timeout => DiagnosticKind::SolverTimeout,
                _ => DiagnosticKind::SolverExit,
            };
            self.diagnostics.push(
                kind,
                format!(
                    "{} for problem {}, see details in {}",
                    reason,
                    self.name,
                    artifacts.solution.display()
                ),
            );
            self.state = SolveState::Failed(reason);
            return Ok(&self.state);
        }

        let raw = fs::read(&artifacts.solution)?;
        let output = String::from_utf8_lossy(&raw);
        self.state = match parse_solution(&output, &self.registry, &mut self.diagnostics) {
            Some(solution) => {
                log::info!(
                    "problem {} solved, {} nonzero values",
                    self.name,
                    solution.len()
                );
                SolveState::Solved(solution)
            }
            None => {
                self.diagnostics.push(
                    DiagnosticKind::NoSolution,
                    format!(
                        "no solution found for problem {}, see details in {}",
                        self.name,
                        artifacts.solution.display()
                    ),
                );
                SolveState::NoSolution
            }
        };

        Ok(&self.state)
    }

    pub fn state(&self) -> &SolveState {
        &self.state
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.state.solution()
    }

    pub fn run_state(&self) -> ProblemRunState {
        ProblemRunState {
            created: self.document.is_some() && !self.registry.is_empty(),
            solved: self.state.is_solved(),
        }
    }

    pub fn document(&self) -> Option<&ModelDocument> {
        self.document.as_ref()
    }

    /// Converted text from the last solve
    pub fn converted(&self) -> Option<&str> {
        self.converted.as_deref()
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_paths() {
        let paths = ArtifactPaths::new(Path::new("out"), "noFunds");
        assert_eq!(paths.human, Path::new("out/human_noFunds.lp"));
        assert_eq!(paths.converted, Path::new("out/converted_noFunds.lp"));
        assert_eq!(paths.solution, Path::new("out/solution_noFunds.txt"));
    }

    #[test]
    fn test_run_failure_classification() {
        assert_eq!(SolverRun::success().failure(), None);
        assert_eq!(SolverRun::timed_out().failure(), Some(FailureReason::Timeout));
        assert_eq!(
            SolverRun::exited(Some(2)).failure(),
            Some(FailureReason::ExitCode(2))
        );
        assert_eq!(SolverRun::exited(None).failure(), Some(FailureReason::Terminated));
    }

    #[test]
    fn test_run_state_tracks_creation() {
        let mut problem = Problem::new("p");
        assert_eq!(
            problem.run_state(),
            ProblemRunState {
                created: false,
                solved: false
            }
        );

        let document = ModelDocument::new("Maximize\noats\nEnd", vec!["oats".to_string()]);
        problem.create(&document).unwrap();
        assert!(problem.run_state().created);
        assert!(!problem.run_state().solved);
        assert_eq!(problem.state(), &SolveState::Pending);
    }

    #[test]
    fn test_create_twice_warns_about_known_variables() {
        let mut problem = Problem::new("p");
        let document = ModelDocument::new("Maximize\noats\nEnd", vec!["oats".to_string()]);
        problem.create(&document).unwrap();
        problem.create(&document).unwrap();
        assert_eq!(problem.registry().len(), 1);
        assert_eq!(
            problem
                .diagnostics()
                .of_kind(DiagnosticKind::DuplicateVariable)
                .count(),
            1
        );
    }
}
