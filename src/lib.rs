//! # rust-symphony
//!
//! Solve LP models written with human-readable variable names using the
//! SYMPHONY solver. SYMPHONY truncates long column names, so every name is
//! swapped for a short generated token before the model is written, and the
//! tokens in the solver output are mapped back afterwards.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use rust_symphony::{LpModelBuilder, Problem};
//!
//! let model = LpModelBuilder::new()
//!     .maximize("totalProtein")
//!     .subject_to("4 wildRice + 3 wildRice2 + -totalProtein = 0")
//!     .subject_to("5 wildRice + 4 wildRice2 <= 20")
//!     .variables(["wildRice", "wildRice2", "totalProtein"]);
//!
//! let mut problem = Problem::new("highProtein");
//! problem.create(&model)?;
//! problem.solve(Path::new("."), Path::new("symphony"), None)?;
//!
//! match problem.solution() {
//!     Some(solution) => println!("{:?}", solution),
//!     None => println!("no solution: {:?}", problem.state()),
//! }
//! # Ok::<(), rust_symphony::ProblemError>(())
//! ```

pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod models;
pub mod solve;

pub use domain::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use domain::document::{LpModelBuilder, ModelBuilder, ModelDocument, SolverDirection};
pub use domain::problem::{FailureReason, Problem, ProblemRunState, SolveState};
pub use domain::registry::{Variable, VariableRegistry};
pub use domain::solution::Solution;
pub use domain::solver::{SolverInvocation, SolverProcess, SolverRun};
pub use domain::solvers::SymphonyCommand;
pub use error::{ProblemError, Result};
