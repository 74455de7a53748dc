use std::io::ErrorKind;
use std::{fmt, path::Path};

/// Why the lines to be checked could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingError<'i> {
    NotFound(&'i Path),
    Unreadable(&'i Path, ErrorKind),
    StandardInput(ErrorKind),
}

impl<'i> LoadingError<'i> {
    /// The file being read; standard input is shown as "-".
    pub fn filename(&self) -> &'i Path {
        match self {
            LoadingError::NotFound(filename) => filename,
            LoadingError::Unreadable(filename, _) => filename,
            LoadingError::StandardInput(_) => Path::new("-"),
        }
    }

    pub fn problem(&self) -> &'static str {
        match self {
            LoadingError::NotFound(_) => "File not found",
            LoadingError::Unreadable(_, _) => "Failed reading",
            LoadingError::StandardInput(_) => "Failed reading standard input",
        }
    }
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadingError::NotFound(_) => write!(f, "{}", self.problem()),
            LoadingError::Unreadable(_, kind) | LoadingError::StandardInput(kind) => {
                write!(f, "{}: {}", self.problem(), kind)
            }
        }
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}
