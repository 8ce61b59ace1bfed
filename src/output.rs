//! Report rendering and pass/fail decision.
//!
//! Human output goes through a `Sink` that receives tone-tagged lines, so
//! the layout logic is independent of terminal styling. JSON output is a
//! single document with the diagnostics and the summary.

use crate::config::OutputMode;
use crate::models::{LintResult, Severity};
use crate::utils::display_path;
use owo_colors::OwoColorize;
use serde_json::{json, Value as JsonVal};
use std::path::Path;

pub const SUCCESS_MESSAGE: &str = "All rule files are valid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual tone of an emitted line.
pub enum Tone {
    Plain,
    Success,
    Warning,
    Error,
}

impl From<Severity> for Tone {
    fn from(s: Severity) -> Self {
        match s {
            Severity::Warning => Tone::Warning,
            Severity::Error => Tone::Error,
        }
    }
}

/// Destination for report lines.
pub trait Sink {
    fn emit(&mut self, tone: Tone, text: &str);
}

/// Writes lines to stdout, prefixing toned lines with a glyph.
pub struct TerminalSink {
    color: bool,
}

impl TerminalSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

fn glyph(tone: Tone) -> Option<&'static str> {
    match tone {
        Tone::Plain => None,
        Tone::Success => Some("✓"),
        Tone::Warning => Some("⚠"),
        Tone::Error => Some("✗"),
    }
}

impl Sink for TerminalSink {
    fn emit(&mut self, tone: Tone, text: &str) {
        let Some(g) = glyph(tone) else {
            println!("{}", text);
            return;
        };
        if !self.color {
            println!("{} {}", g, text);
            return;
        }
        let g = match tone {
            Tone::Success => g.green().to_string(),
            Tone::Warning => g.yellow().to_string(),
            Tone::Error => g.red().to_string(),
            Tone::Plain => g.to_string(),
        };
        println!("{} {}", g, text);
    }
}

impl Sink for Vec<(Tone, String)> {
    fn emit(&mut self, tone: Tone, text: &str) {
        self.push((tone, text.to_string()));
    }
}

/// Render the human report: one line per diagnostic, then the summary.
pub fn render_human(res: &LintResult, base: &Path, sink: &mut dyn Sink) {
    for d in &res.diagnostics {
        let line = format!("{}: {}", display_path(&d.file, base), d.message);
        sink.emit(d.severity.into(), &line);
    }
    let summary = res.summary();
    sink.emit(Tone::Plain, "");
    sink.emit(Tone::Plain, &format!("Files checked: {}", summary.files));
    if summary.errors > 0 {
        sink.emit(Tone::Plain, &format!("Errors: {}", summary.errors));
    }
    if summary.warnings > 0 {
        sink.emit(Tone::Plain, &format!("Warnings: {}", summary.warnings));
    }
    if summary.errors == 0 && summary.warnings == 0 {
        sink.emit(Tone::Success, SUCCESS_MESSAGE);
    }
}

/// Compose the JSON report (pure) for printing and tests.
pub fn compose_lint_json(res: &LintResult, base: &Path) -> JsonVal {
    let items: Vec<_> = res
        .diagnostics
        .iter()
        .map(|d| {
            json!({
                "file": display_path(&d.file, base),
                "severity": d.severity,
                "message": d.message,
            })
        })
        .collect();
    json!({ "diagnostics": items, "summary": res.summary() })
}

/// Print lint results in the requested mode.
pub fn print_lint(res: &LintResult, base: &Path, output: OutputMode, color: bool) {
    match output {
        OutputMode::Json => match serde_json::to_string_pretty(&compose_lint_json(res, base)) {
            Ok(s) => println!("{}", s),
            Err(e) => tracing::error!("failed to serialize report: {e}"),
        },
        OutputMode::Human => render_human(res, base, &mut TerminalSink::new(color)),
    }
}

/// Process exit status: 1 when any error was recorded, otherwise 0.
pub fn exit_code(res: &LintResult) -> i32 {
    if res.summary().errors > 0 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Diagnostic;

    fn result(diags: Vec<Diagnostic>, files: usize) -> LintResult {
        let mut res = LintResult::default();
        res.record(diags);
        for _ in 1..files {
            res.record(Vec::new());
        }
        res
    }

    fn lines(res: &LintResult) -> Vec<(Tone, String)> {
        let mut out: Vec<(Tone, String)> = Vec::new();
        render_human(res, Path::new("/repo"), &mut out);
        out
    }

    #[test]
    fn test_empty_run_prints_success() {
        let out = lines(&LintResult::default());
        assert_eq!(
            out,
            vec![
                (Tone::Plain, String::new()),
                (Tone::Plain, "Files checked: 0".to_string()),
                (Tone::Success, SUCCESS_MESSAGE.to_string()),
            ]
        );
        assert_eq!(exit_code(&LintResult::default()), 0);
    }

    #[test]
    fn test_diagnostics_then_summary() {
        let res = result(
            vec![
                Diagnostic::error("/repo/configs/x/rules/core.md", "'paths' must be an array"),
                Diagnostic::warning("/repo/configs/x/rules/misc.md", "no frontmatter found"),
            ],
            3,
        );
        let out = lines(&res);
        assert_eq!(
            out,
            vec![
                (
                    Tone::Error,
                    "configs/x/rules/core.md: 'paths' must be an array".to_string()
                ),
                (
                    Tone::Warning,
                    "configs/x/rules/misc.md: no frontmatter found".to_string()
                ),
                (Tone::Plain, String::new()),
                (Tone::Plain, "Files checked: 3".to_string()),
                (Tone::Plain, "Errors: 1".to_string()),
                (Tone::Plain, "Warnings: 1".to_string()),
            ]
        );
    }

    #[test]
    fn test_warnings_only_has_no_success_line_and_exits_zero() {
        let res = result(vec![Diagnostic::warning("/repo/a.md", "no frontmatter found")], 1);
        let out = lines(&res);
        assert!(!out.iter().any(|(t, _)| *t == Tone::Success));
        assert!(!out.iter().any(|(_, s)| s.starts_with("Errors:")));
        assert_eq!(exit_code(&res), 0);
    }

    #[test]
    fn test_exit_code_tracks_errors_only() {
        for errors in 0..3 {
            for warnings in 0..3 {
                let mut diags = Vec::new();
                for _ in 0..errors {
                    diags.push(Diagnostic::error("/repo/e.md", "e"));
                }
                for _ in 0..warnings {
                    diags.push(Diagnostic::warning("/repo/w.md", "w"));
                }
                let res = result(diags, 1);
                assert_eq!(exit_code(&res), i32::from(errors > 0));
            }
        }
    }

    #[test]
    fn test_compose_lint_json_shape() {
        let res = result(
            vec![Diagnostic::warning("/repo/configs/a.md", "no frontmatter found")],
            2,
        );
        let out = compose_lint_json(&res, Path::new("/repo"));
        assert_eq!(out["summary"]["files"], 2);
        assert_eq!(out["summary"]["warnings"], 1);
        assert_eq!(out["summary"]["errors"], 0);
        assert_eq!(out["diagnostics"][0]["file"], "configs/a.md");
        assert_eq!(out["diagnostics"][0]["severity"], "warning");
    }
}
