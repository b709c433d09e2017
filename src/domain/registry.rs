use std::collections::HashMap;

use crate::domain::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::validate::validate_variable_name;
use crate::error::{ProblemError, Result};

const TOKEN_PREFIX: &str = "x";

/// A human-readable variable and the solver token standing in for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub token: String,
    /// Character length of `name`
    pub length: usize,
}

/// Bidirectional map between human-readable names and short solver tokens.
///
/// SYMPHONY truncates long column names, so every name is replaced by
/// `x1`, `x2`, ... before the model is handed to the solver. Tokens come from
/// a per-registry counter and are never reused.
#[derive(Debug, Default, Clone)]
pub struct VariableRegistry {
    human_to_token: HashMap<String, String>,
    token_to_human: HashMap<String, String>,
    variables: Vec<Variable>,
    counter: usize,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every name that is not yet known and return how many were added.
    ///
    /// Known names are skipped with a `DuplicateVariable` diagnostic. The whole
    /// batch is validated first, so an invalid name leaves the registry untouched.
    pub fn register<I>(&mut self, names: I, diagnostics: &mut Diagnostics) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let names: Vec<I::Item> = names.into_iter().collect();
        for name in &names {
            validate_variable_name(name.as_ref())?;
        }

        let mut added = 0;
        for name in &names {
            let name = name.as_ref();
            if self.human_to_token.contains_key(name) {
                diagnostics.push(
                    DiagnosticKind::DuplicateVariable,
                    format!("{} is already in problem variable set, ignoring", name),
                );
                continue;
            }

            self.counter += 1;
            let token = format!("{}{}", TOKEN_PREFIX, self.counter);
            self.human_to_token.insert(name.to_string(), token.clone());
            self.token_to_human.insert(token.clone(), name.to_string());
            self.variables.push(Variable {
                name: name.to_string(),
                token,
                length: name.chars().count(),
            });
            added += 1;
        }

        Ok(added)
    }

    /// Variables ordered longest name first; ties keep registration order
    pub fn translation_order(&self) -> Vec<&Variable> {
        let mut order: Vec<&Variable> = self.variables.iter().collect();
        order.sort_by(|a, b| b.length.cmp(&a.length));
        order
    }

    pub fn human_to_token(&self, name: &str) -> Result<&str> {
        self.human_to_token
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ProblemError::UnknownIdentifier(name.to_string()))
    }

    pub fn token_to_human(&self, token: &str) -> Result<&str> {
        self.token_to_human
            .get(token)
            .map(String::as_str)
            .ok_or_else(|| ProblemError::UnknownIdentifier(token.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.human_to_token.contains_key(name)
    }

    /// Variables in registration order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
