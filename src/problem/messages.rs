use crate::language::*;
use crate::parsing::SyntaxViolation;
use crate::rendering::{Render, Syntax};

/// Style a single symbol according to the character class it belongs to.
pub fn highlight(symbol: Symbol, renderer: &dyn Render) -> String {
    let content = symbol.to_string();
    let syntax = match symbol {
        Symbol::End => Syntax::Marker,
        _ if symbol.is_digit() => Syntax::Numeric,
        _ if symbol.is_operator() => Syntax::Operator,
        Symbol::Char('(' | ')' | '.' | ';') => Syntax::Structure,
        Symbol::Char(_) => Syntax::Neutral,
    };
    renderer.style(syntax, &content)
}

/// Generate problem and detail messages describing a syntax violation.
pub fn generate_error_message(
    violation: &SyntaxViolation,
    renderer: &dyn Render,
) -> (String, String) {
    let found = highlight(violation.found, renderer);

    let problem = match violation.found {
        Symbol::End => "Unexpected end of input".to_string(),
        Symbol::Char(_) => format!("Unexpected '{}'", found),
    };

    let expected = violation
        .expected
        .iter()
        .map(|c| highlight(Symbol::Char(*c), renderer))
        .collect::<Vec<_>>()
        .join(", ");

    let details = if violation.expected == SEMICOLON {
        format!(
            "Every statement must be terminated by '{}'.",
            highlight(Symbol::Char(';'), renderer)
        )
    } else if violation.expected == STATEMENT_START {
        format!(
            r#"
A statement begins with a digit, an opening parenthesis, or one of the
operators. Expected one of [{}].
            "#,
            expected
        )
        .trim_ascii()
        .to_string()
    } else {
        format!("Expected one of [{}].", expected)
    };

    (problem, details)
}
