use thiserror::Error;

/// Result type for problem translation and solving
pub type Result<T> = std::result::Result<T, ProblemError>;

/// Errors that abort a registry, translation or solve operation
#[derive(Error, Debug)]
pub enum ProblemError {
    /// Solve attempted before a model document was created
    #[error("problem is empty")]
    EmptyProblem,

    /// Solve attempted with no registered variables
    #[error("variable map is empty")]
    EmptyVariableMap,

    /// A name or token that the registry does not know
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),

    /// A human-readable name that cannot be safely substituted
    #[error("invalid variable name {name:?}: {reason}")]
    InvalidVariableName { name: String, reason: &'static str },

    /// A problem name that cannot be used for artifact file names
    #[error("invalid problem name {name:?}: {reason}")]
    InvalidProblemName { name: String, reason: &'static str },

    /// Model text contains an identifier equal to a generated token
    #[error("identifier {0} in model text collides with a generated solver token")]
    TokenCollision(String),

    /// Model builder could not produce a document
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// The solver binary could not be started
    #[error("failed to launch solver {program}: {source}")]
    SolverLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing an artifact failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProblemError {
    /// Whether the error was caused by the caller's input rather than the environment
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ProblemError::Io(_) | ProblemError::SolverLaunch { .. })
    }
}
