//! Rulelint CLI binary entry point.
//! Resolves configuration, runs the lint, prints results, sets the exit code.

use clap::Parser;
use rulelint::cli::Cli;
use rulelint::config::{self, OutputMode};
use rulelint::{lint, logging, output, utils};

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = logging::init_logging(level) {
        eprintln!("{} failed to initialize logging: {}", utils::note_prefix(), e);
    }

    let eff = match config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.root.as_deref(),
        cli.output,
    ) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };
    if let Some(path) = eff.config_file.as_ref() {
        tracing::debug!(config = %path.display(), "loaded config");
    }
    if !eff.root.is_dir() && eff.output == OutputMode::Human {
        eprintln!(
            "{} Configuration root not found: {}",
            utils::note_prefix(),
            utils::display_path(&eff.root, &eff.repo_root)
        );
    }

    let result = match lint::run_lint(&eff.root, &eff.extension, &eff.exempt) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };
    let color = eff.output == OutputMode::Human && utils::colors_enabled();
    output::print_lint(&result, &eff.repo_root, eff.output, color);
    std::process::exit(output::exit_code(&result));
}
