use super::messages::generate_error_message;
use crate::language::LoadingError;
use crate::parsing::SyntaxViolation;
use crate::rendering::{Render, Syntax};

/// Format a syntax violation with full details, showing the line that was
/// checked and pointing at the offending symbol.
pub fn full_violation(violation: &SyntaxViolation, line: &str, renderer: &dyn Render) -> String {
    let (problem, details) = generate_error_message(violation, renderer);
    let j = calculate_column_number(line, violation.offset());

    format!(
        r#"
{}: {} (column {})

{} {}
{} {}{}

{}
        "#,
        renderer.style(Syntax::Error, "error"),
        renderer.style(Syntax::Problem, &problem),
        j + 1,
        renderer.style(Syntax::Gutter, "|"),
        line,
        renderer.style(Syntax::Gutter, "|"),
        " ".repeat(j),
        renderer.style(Syntax::Caret, "^"),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a syntax violation as a single line.
pub fn concise_violation(violation: &SyntaxViolation) -> String {
    format!("Error: {}", violation)
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError<'_>, renderer: &dyn Render) -> String {
    format!(
        "{}: {}: {}",
        renderer.style(Syntax::Error, "error"),
        error
            .filename()
            .display(),
        renderer.style(Syntax::Problem, &error.to_string())
    )
}

// This returns a zero-origin result; for display to humans you'll have to
// add 1. The end marker sits just past the last character.
fn calculate_column_number(line: &str, offset: usize) -> usize {
    offset.min(
        line.chars()
            .count(),
    )
}
