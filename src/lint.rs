//! Lint runner: one sequential pass over the configuration tree.
//!
//! Every discovered file is read and validated; file-level findings are
//! collected into a `LintResult`. Only I/O failures abort the run.

use crate::error::{LintError, Result};
use crate::models::LintResult;
use crate::validate::{validate, Exemptions};
use crate::walk::walk;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Run lint across every `.<extension>` file under `root`.
///
/// A missing root is not an error: the run simply checks zero files.
pub fn run_lint(root: &Path, extension: &str, exempt: &Exemptions) -> Result<LintResult> {
    let mut result = LintResult::default();
    for entry in walk(root, extension)? {
        let path = entry?;
        let content = fs::read_to_string(&path).map_err(|source| LintError::Io {
            path: path.clone(),
            source,
        })?;
        let found = validate(&path, root, &content, exempt);
        debug!(file = %path.display(), diagnostics = found.len(), "checked");
        result.record(found);
    }
    let summary = result.summary();
    info!(
        files = summary.files,
        errors = summary.errors,
        warnings = summary.warnings,
        "lint finished"
    );
    Ok(result)
}
