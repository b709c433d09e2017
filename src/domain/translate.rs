use std::collections::{HashMap, HashSet};

use crate::domain::registry::{Variable, VariableRegistry};
use crate::domain::validate::is_identifier_char;
use crate::error::{ProblemError, Result};

/// Replace every human-readable name in `text` with its solver token.
///
/// The text is scanned once, span by span. An identifier span is replaced only
/// when it equals a registered name exactly, so a name that is a prefix or
/// substring of another name (`wildRice` / `wildRice2`) never corrupts it, and
/// inserted tokens are never scanned again. Spans starting with a digit or a
/// period are numeric literals and are copied verbatim.
///
/// A span equal to a generated token that is not itself a registered name
/// fails with `TokenCollision`: the solver output could not be mapped back.
pub fn to_solver_form(text: &str, order: &[&Variable]) -> Result<String> {
    let names: HashMap<&str, &str> = order
        .iter()
        .map(|v| (v.name.as_str(), v.token.as_str()))
        .collect();
    let tokens: HashSet<&str> = order.iter().map(|v| v.token.as_str()).collect();

    let mut converted = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(is_identifier_char) {
        converted.push_str(&rest[..start]);
        let span = &rest[start..];
        let end = span
            .find(|c: char| !is_identifier_char(c))
            .unwrap_or(span.len());
        let word = &span[..end];

        if starts_numeric(word) {
            converted.push_str(word);
        } else if let Some(token) = names.get(word) {
            converted.push_str(token);
        } else if tokens.contains(word) {
            return Err(ProblemError::TokenCollision(word.to_string()));
        } else {
            converted.push_str(word);
        }

        rest = &span[end..];
    }
    converted.push_str(rest);

    Ok(converted)
}

/// Resolve one `(token, value)` pair reported by the solver to its human name
pub fn to_human_form(token: &str, value: f64, registry: &VariableRegistry) -> Result<(String, f64)> {
    let name = registry.token_to_human(token)?;
    Ok((name.to_string(), value))
}

fn starts_numeric(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}
