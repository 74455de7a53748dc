pub mod language;
pub mod parsing;
pub mod problem;
pub mod rendering;
