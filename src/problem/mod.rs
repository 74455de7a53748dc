// Reporting verdicts and syntax violations to humans

mod format;
mod messages;
mod report;

// Re-export all public symbols
pub use format::*;
pub use messages::*;
pub use report::*;
