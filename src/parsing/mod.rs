//! checker for semicolon-terminated statements

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{Analysis, LoadingError, Verdict};

mod cursor;
pub mod parser;

pub use cursor::Cursor;
pub use parser::{Parser, Progress, SyntaxViolation};

/// Read a file and return an owned String. A filename of "-" reads standard
/// input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError::StandardInput(error.kind()))
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError::NotFound(filename)),
                kind => Err(LoadingError::Unreadable(filename, kind)),
            }
        }
    }
}

/// Check a single line, returning the verdict along with every symbol that
/// was read in reaching it.
pub fn validate(line: &str) -> Analysis {
    let mut parser = Parser::new(line);

    let verdict = match parser.parse_from_start() {
        Ok(()) => Verdict::Valid,
        Err(violation) => Verdict::Invalid(violation),
    };

    let consumed = parser.into_consumed();
    debug!(
        "{} after reading {} symbol{}",
        if verdict.is_valid() { "valid" } else { "invalid" },
        consumed.len(),
        if consumed.len() == 1 { "" } else { "s" }
    );

    Analysis { consumed, verdict }
}

/// Check each line of the given text independently.
pub fn validate_lines(content: &str) -> Vec<Analysis> {
    content
        .lines()
        .map(validate)
        .collect()
}
