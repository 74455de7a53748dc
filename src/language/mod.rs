// Types representing the statement language and the results of checking it

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
