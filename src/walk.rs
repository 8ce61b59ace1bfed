//! Candidate file discovery under the configuration root.
//!
//! Traversal is delegated to `glob` with a recursive `**/*.<ext>` pattern.
//! Order is whatever the walker yields; callers use it for display only.

use crate::error::Result;
use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Lazily yield every file under `root` whose name ends in `.<extension>`.
///
/// A missing root yields nothing. Unreadable directories surface as
/// `LintError::Walk` items so the caller can abort the run.
pub fn walk(root: &Path, extension: &str) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    let base = Pattern::escape(&root.to_string_lossy());
    let ext = Pattern::escape(extension.trim_start_matches('.'));
    let pattern = format!("{}/**/*.{}", base.trim_end_matches('/'), ext);
    let opts = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let paths = glob_with(&pattern, opts)?;
    Ok(paths.filter_map(|entry| match entry {
        Ok(path) if path.is_file() => Some(Ok(path)),
        Ok(_) => None,
        Err(e) => Some(Err(e.into())),
    }))
}
