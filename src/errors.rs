use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum FileOperation {
    #[error("reading")]
    Read,
    #[error("writing")]
    Write,
    #[error("creating directory")]
    Mkdir,
}

/// A failed filesystem call, tagged with what was attempted and where.
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error while {operation} '{}'", .path.display())]
#[diagnostic(
    code(hajime::io),
    help("Check file permissions, free disk space, and that the parent directory is writable.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn read(path: &Path, error: std::io::Error) -> Self {
        Self::new(FileOperation::Read, path, error)
    }

    pub fn write(path: &Path, error: std::io::Error) -> Self {
        Self::new(FileOperation::Write, path, error)
    }

    pub fn mkdir(path: &Path, error: std::io::Error) -> Self {
        Self::new(FileOperation::Mkdir, path, error)
    }

    fn new(operation: FileOperation, path: &Path, error: std::io::Error) -> Self {
        Self {
            operation,
            path: path.to_path_buf(),
            source: error,
        }
    }
}
