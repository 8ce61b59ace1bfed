//! Frontmatter extraction.
//!
//! A frontmatter block exists only when the very first line of a file is the
//! delimiter. The block is everything between that line and the next line
//! consisting solely of the delimiter. Nothing after the closing delimiter is
//! inspected.

/// Delimiter line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// Return the text strictly between the opening and closing delimiter lines,
/// or `None` when the file does not start with a complete block.
///
/// Trailing whitespace (including `\r`) on delimiter lines is ignored. The
/// returned slice has no trailing newline before the closing delimiter.
pub fn extract(content: &str) -> Option<&str> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER || !first.ends_with('\n') {
        return None;
    }
    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let body = &content[start..offset];
            let body = body.strip_suffix('\n').unwrap_or(body);
            return Some(body.strip_suffix('\r').unwrap_or(body));
        }
        offset += line.len();
    }
    None
}
