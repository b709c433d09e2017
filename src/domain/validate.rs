use crate::error::{ProblemError, Result};

/// Section keywords of the LP file format. A variable with one of these names
/// would be read by the solver as a section header.
const RESERVED_WORDS: &[&str] = &[
    "max", "maximize", "maximise", "maximum", "min", "minimize", "minimise", "minimum",
    "subject", "such", "that", "to", "st", "s.t.", "bound", "bounds", "gen", "general",
    "generals", "bin", "binary", "binaries", "int", "integer", "integers", "free", "inf",
    "infinity", "end",
];

const IDENTIFIER_SYMBOLS: &str = "_.!\"#$%&()/,;?@`'{}|~[]";

/// Characters that may appear inside an identifier span of an LP document.
/// Everything else separates spans.
pub fn is_identifier_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || IDENTIFIER_SYMBOLS.contains(c)
    } else {
        c.is_alphanumeric()
    }
}

/// Check that a human-readable name is a single identifier span
pub fn validate_variable_name(name: &str) -> Result<()> {
    let invalid = |reason| ProblemError::InvalidVariableName {
        name: name.to_string(),
        reason,
    };

    let first = name.chars().next().ok_or_else(|| invalid("name is empty"))?;
    if first.is_ascii_digit() || first == '.' {
        return Err(invalid("name starts with a digit or period"));
    }
    if !name.chars().all(is_identifier_char) {
        return Err(invalid("name contains whitespace or an operator character"));
    }
    if RESERVED_WORDS.contains(&name.to_ascii_lowercase().as_str()) {
        return Err(invalid("name is an LP section keyword"));
    }

    Ok(())
}

/// Check that a problem name can be embedded in artifact file names
pub fn validate_problem_name(name: &str) -> Result<()> {
    let invalid = |reason| ProblemError::InvalidProblemName {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.contains(&['/', '\\'][..]) || name.chars().any(char::is_control) {
        return Err(invalid("name contains a path separator or control character"));
    }

    Ok(())
}
