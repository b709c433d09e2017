pub mod diagnostics;
pub mod document;
pub mod problem;
pub mod registry;
pub mod solution;
pub mod solver;
pub mod solvers;
pub mod translate;
pub mod validate;
