//! Renderers for colourizing checker output

mod terminal;

pub use terminal::Terminal;

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Syntax {
    Neutral, // default
    Error,
    Problem,
    Gutter,
    Caret,
    Numeric,
    Operator,
    Structure,
    Marker,
    Valid,
    Invalid,
}

/// Trait for different rendering backends (the no-op no-markup one, and
/// ANSI escapes for terminal colouring)
pub trait Render {
    /// Render content with the specified type/style
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}
