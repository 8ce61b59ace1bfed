//! CLI argument parsing via `clap`.

use crate::config::OutputMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rulelint",
    version,
    about = "Lint frontmatter of assistant rule files",
    long_about = "Rulelint walks the configuration tree, reads the frontmatter of every rule file and checks its structure.\n\nWarnings never fail the run; any error exits with status 1.\n\nConfiguration precedence: CLI > rulelint.toml > defaults.",
    after_help = "Examples:\n  rulelint\n  rulelint --root configs --output json\n  RUST_LOG=debug rulelint"
)]
/// Top-level CLI options. None are required.
pub struct Cli {
    #[arg(long, help = "Repository root (default: detected from current dir)")]
    pub repo_root: Option<PathBuf>,
    #[arg(long, help = "Configuration root, relative to the repository root (default: configs)")]
    pub root: Option<PathBuf>,
    #[arg(long, value_parser = clap::value_parser!(OutputMode), help = "Output mode: human|json (default: human)")]
    pub output: Option<OutputMode>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Log each visited file to stderr")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_required() {
        let cli = Cli::try_parse_from(["rulelint"]).unwrap();
        assert!(cli.repo_root.is_none());
        assert!(cli.root.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_flags() {
        let cli =
            Cli::try_parse_from(["rulelint", "--root", "cfg", "--output", "json", "-v"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("cfg")));
        assert_eq!(cli.output, Some(OutputMode::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_output() {
        assert!(Cli::try_parse_from(["rulelint", "--output", "xml"]).is_err());
    }
}
