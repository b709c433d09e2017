use serde::{Deserialize, Serialize};

use crate::error::{ProblemError, Result};

/// Model text in CPLEX LP format plus the human-readable variables it uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDocument {
    pub text: String,
    pub variables: Vec<String>,
}

impl ModelDocument {
    pub fn new(text: impl Into<String>, variables: Vec<String>) -> Self {
        Self {
            text: text.into(),
            variables,
        }
    }
}

/// Anything that can produce a model document for a problem
pub trait ModelBuilder {
    fn create(&self) -> Result<ModelDocument>;
}

impl ModelBuilder for ModelDocument {
    fn create(&self) -> Result<ModelDocument> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverDirection {
    Maximize,
    Minimize,
}

impl SolverDirection {
    fn keyword(self) -> &'static str {
        match self {
            SolverDirection::Maximize => "Maximize",
            SolverDirection::Minimize => "Minimize",
        }
    }
}

/// Fluent builder for LP documents
///
/// # Example
///
/// ```
/// use rust_symphony::domain::document::LpModelBuilder;
///
/// let document = LpModelBuilder::new()
///     .maximize("totalProtein")
///     .subject_to("4 oats + 22 millet + -totalProtein = 0")
///     .subject_to("2 oats + 5 millet <= 20")
///     .variables(["oats", "millet", "totalProtein"])
///     .build()
///     .unwrap();
///
/// assert!(document.text.starts_with("Maximize\ntotalProtein\nSubject To\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LpModelBuilder {
    direction: Option<SolverDirection>,
    objective: Option<String>,
    constraints: Vec<String>,
    bounds: Vec<String>,
    generals: Vec<String>,
    variables: Vec<String>,
}

impl LpModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn maximize(self, objective: impl Into<String>) -> Self {
        self.objective(SolverDirection::Maximize, objective)
    }

    pub fn minimize(self, objective: impl Into<String>) -> Self {
        self.objective(SolverDirection::Minimize, objective)
    }

    /// Set the objective, replacing any previous one
    pub fn objective(mut self, direction: SolverDirection, objective: impl Into<String>) -> Self {
        self.direction = Some(direction);
        self.objective = Some(objective.into());
        self
    }

    pub fn subject_to(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    pub fn add_constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.extend(constraints.into_iter().map(Into::into));
        self
    }

    /// Add a line to the `Bounds` section, e.g. `0 <= oats <= 4`
    pub fn bound(mut self, bound: impl Into<String>) -> Self {
        self.bounds.push(bound.into());
        self
    }

    /// Declare a variable as integer (`General` section)
    pub fn general(mut self, name: impl Into<String>) -> Self {
        self.generals.push(name.into());
        self
    }

    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.variables.push(name.into());
        self
    }

    pub fn variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables.extend(names.into_iter().map(Into::into));
        self
    }

    /// Assemble the LP text
    ///
    /// # Errors
    ///
    /// Returns `InvalidModel` if no objective was set or no variable declared.
    pub fn build(self) -> Result<ModelDocument> {
        let (direction, objective) = match (self.direction, self.objective) {
            (Some(direction), Some(objective)) => (direction, objective),
            _ => {
                return Err(ProblemError::InvalidModel(
                    "an objective must be set".to_string(),
                ))
            }
        };
        if self.variables.is_empty() {
            return Err(ProblemError::InvalidModel(
                "at least one variable is required".to_string(),
            ));
        }

        let mut text = String::new();
        text.push_str(direction.keyword());
        text.push('\n');
        text.push_str(&objective);
        text.push_str("\nSubject To\n");
        for constraint in &self.constraints {
            text.push_str(constraint);
            text.push('\n');
        }
        if !self.bounds.is_empty() {
            text.push_str("Bounds\n");
            for bound in &self.bounds {
                text.push_str(bound);
                text.push('\n');
            }
        }
        if !self.generals.is_empty() {
            text.push_str("General\n");
            text.push_str(&self.generals.join(" "));
            text.push('\n');
        }
        text.push_str("End");

        Ok(ModelDocument {
            text,
            variables: self.variables,
        })
    }
}

impl ModelBuilder for LpModelBuilder {
    fn create(&self) -> Result<ModelDocument> {
        self.clone().build()
    }
}
