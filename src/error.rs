//! Fatal, run-level failures.
//!
//! File-level findings are never errors here; they are collected as
//! `Diagnostic`s. Anything in this enum aborts the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    /// A file or directory could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal hit an unreadable entry
    #[error("failed to walk {}: {}", .0.path().display(), .0.error())]
    Walk(#[from] glob::GlobError),

    /// The walker pattern built from the root could not be compiled
    #[error("invalid walk pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The config file exists but cannot be used
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, LintError>;
