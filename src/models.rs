//! Shared data models for lint results and printers.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a file-level diagnostic. Only `Error` affects the exit status.
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single finding attached to a visited rule file.
pub struct Diagnostic {
    pub file: PathBuf,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts for one run. Built from diagnostics, never set by hand.
pub struct Summary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Lint results container: the accumulator threaded through a run.
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
    files: usize,
}

impl LintResult {
    /// Record one visited file together with whatever it produced.
    pub fn record(&mut self, diagnostics: Vec<Diagnostic>) {
        self.files += 1;
        self.diagnostics.extend(diagnostics);
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            files: self.files,
            ..Summary::default()
        };
        for d in &self.diagnostics {
            match d.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
        }
        summary
    }
}
