use std::collections::HashMap;

use crate::domain::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::registry::VariableRegistry;
use crate::domain::translate::to_human_form;

/// Line printed by SYMPHONY right before the block of nonzero column values
pub const SOLUTION_MARKER: &str = "Column names and values of nonzeros in the solution";

/// Data lines start two lines below the marker; the line in between is a rule.
const MARKER_OFFSET: usize = 2;

/// Reported variable values keyed by human-readable name. Variables the solver
/// did not report are absent (usually zero).
pub type Solution = HashMap<String, f64>;

/// Parse raw solver output into a solution keyed by human-readable names.
///
/// Returns `None` when the output has no solution marker. Lines in the value
/// block that are not `<token> ... <value>` or name an unknown token are skipped
/// with a `SkippedSolutionLine` diagnostic.
pub fn parse_solution(
    output: &str,
    registry: &VariableRegistry,
    diagnostics: &mut Diagnostics,
) -> Option<Solution> {
    let lines: Vec<&str> = output.lines().collect();
    let marker = lines.iter().position(|line| line.trim_end() == SOLUTION_MARKER)?;

    let mut solution = Solution::new();
    for line in lines.iter().skip(marker + MARKER_OFFSET) {
        if line.trim().is_empty() {
            continue;
        }

        let parsed = parse_value_line(line)
            .and_then(|(token, value)| to_human_form(token, value, registry).ok());
        match parsed {
            Some((name, value)) => {
                solution.insert(name, value);
            }
            None => diagnostics.push(
                DiagnosticKind::SkippedSolutionLine,
                format!("skipping line {:?} in solution block", line),
            ),
        }
    }

    Some(solution)
}

/// First whitespace-separated field is the token, last one the value
fn parse_value_line(line: &str) -> Option<(&str, f64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 {
        return None;
    }
    let value = fields[fields.len() - 1].parse::<f64>().ok()?;
    Some((fields[0], value))
}
