//! Small shared helpers: stderr prefixes and path display.

use owo_colors::OwoColorize;
use std::path::Path;

/// Whether colored output is allowed (`NO_COLOR` unset).
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Render `path` relative to `base` when possible, using `/` separators.
pub fn display_path(path: &Path, base: &Path) -> String {
    let rel = pathdiff::diff_paths(path, base)
        .filter(|p| !p.starts_with(".."))
        .unwrap_or_else(|| path.to_path_buf());
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_relative_to_base() {
        assert_eq!(
            display_path(
                Path::new("/repo/configs/x/rules/core.md"),
                Path::new("/repo")
            ),
            "configs/x/rules/core.md"
        );
    }

    #[test]
    fn test_display_path_outside_base_stays_as_is() {
        assert_eq!(
            display_path(Path::new("/elsewhere/a.md"), Path::new("/repo")),
            "/elsewhere/a.md"
        );
    }
}
