//! Rule-file classification and structural checks.
//!
//! Classification order:
//! 1. Always-exempt file names and anything under a skills directory are
//!    skipped outright.
//! 2. A file without frontmatter gets a warning, unless it lives in the
//!    shared rules area, which is applied globally and needs none.
//! 3. Frontmatter is parsed; `paths` must be a list of string patterns.
//!
//! Other keys are opaque. Content is passed in; nothing here touches disk.

use crate::frontmatter;
use crate::metadata::{self, MetaValue};
use crate::models::Diagnostic;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub const MSG_NO_FRONTMATTER: &str = "no frontmatter found";
pub const MSG_PATHS_NOT_ARRAY: &str = "'paths' must be an array";
pub const MSG_INVALID_PATTERN: &str = "invalid path pattern";

/// Key whose value must be a list of glob-like patterns.
pub const PATHS_KEY: &str = "paths";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Files and areas that are exempt from some or all checks.
pub struct Exemptions {
    /// Exact final path segments that are never checked.
    pub files: Vec<String>,
    /// Any path component equal to this marks a skill file.
    pub skills_dir: String,
    /// Component sequence of the shared, globally applied rules area.
    pub shared_rules: PathBuf,
}

impl Default for Exemptions {
    fn default() -> Self {
        Self {
            files: vec!["CLAUDE.md".to_string()],
            skills_dir: "skills".to_string(),
            shared_rules: PathBuf::from("shared/rules"),
        }
    }
}

impl Exemptions {
    fn is_skipped(&self, path: &Path) -> bool {
        let exempt_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.files.iter().any(|f| f == n));
        exempt_name || has_component(path, &self.skills_dir)
    }

    fn is_shared(&self, path: &Path) -> bool {
        contains_sequence(path, &self.shared_rules)
    }
}

fn normal_components(path: &Path) -> Vec<&std::ffi::OsStr> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s),
            _ => None,
        })
        .collect()
}

fn has_component(path: &Path, name: &str) -> bool {
    !name.is_empty() && normal_components(path).iter().any(|c| *c == name)
}

/// True when the components of `needle` appear contiguously in `path`'s
/// directory part.
fn contains_sequence(path: &Path, needle: &Path) -> bool {
    let needle = normal_components(needle);
    let dir = path.parent().map(normal_components).unwrap_or_default();
    !needle.is_empty()
        && dir.len() >= needle.len()
        && dir.windows(needle.len()).any(|w| w == needle.as_slice())
}

/// Validate one rule file, returning its diagnostics in discovery order.
///
/// Exemptions are matched on the part of `path` below `root`; folders above
/// the configuration root never exempt a file. Diagnostics carry `path`.
pub fn validate(path: &Path, root: &Path, content: &str, exempt: &Exemptions) -> Vec<Diagnostic> {
    let rel = path.strip_prefix(root).unwrap_or(path);
    if exempt.is_skipped(rel) {
        debug!(file = %path.display(), "skipped (exempt)");
        return Vec::new();
    }
    let Some(block) = frontmatter::extract(content) else {
        if exempt.is_shared(rel) {
            debug!(file = %path.display(), "no frontmatter in shared rules area");
            return Vec::new();
        }
        return vec![Diagnostic::warning(path, MSG_NO_FRONTMATTER)];
    };
    let meta = metadata::parse(block);
    let mut out = Vec::new();
    match meta.get(PATHS_KEY) {
        None => {}
        Some(MetaValue::Scalar(_)) => out.push(Diagnostic::error(path, MSG_PATHS_NOT_ARRAY)),
        Some(MetaValue::List(items)) => {
            for item in items {
                if !is_path_pattern(item) {
                    out.push(Diagnostic::error(path, MSG_INVALID_PATTERN));
                }
            }
        }
    }
    out
}

/// Patterns are only checked for shape: each one must be a plain string.
fn is_path_pattern(item: &MetaValue) -> bool {
    matches!(item, MetaValue::Scalar(_))
}
