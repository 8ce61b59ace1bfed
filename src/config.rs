//! Configuration discovery and effective settings resolution.
//!
//! Rulelint reads `rulelint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `root`: `configs` (relative to the repository root)
//! - `extension`: `md`
//! - `output`: `human`
//! - `exempt.files`: `["CLAUDE.md"]`
//! - `exempt.skills_dir`: `skills`
//! - `exempt.shared_rules`: `shared/rules`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{LintError, Result};
use crate::validate::Exemptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILES: [&str; 3] = ["rulelint.toml", "rulelint.yaml", "rulelint.yml"];
pub const DEFAULT_ROOT: &str = "configs";
pub const DEFAULT_EXTENSION: &str = "md";

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Exemption overrides under `[exempt]`.
pub struct ExemptCfg {
    pub files: Option<Vec<String>>,
    pub skills_dir: Option<String>,
    pub shared_rules: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `rulelint.toml|yaml`.
pub struct RulelintConfig {
    pub root: Option<String>,
    pub extension: Option<String>,
    pub output: Option<OutputMode>,
    #[serde(default)]
    pub exempt: Option<ExemptCfg>,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Report rendering mode.
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            other => Err(format!("unknown output mode '{other}' (expected human|json)")),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Absolute or repo-relative configuration root joined onto `repo_root`.
    pub root: PathBuf,
    pub extension: String,
    pub output: OutputMode,
    pub exempt: Exemptions,
    /// Config file that contributed settings, if any.
    pub config_file: Option<PathBuf>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `rulelint.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `RulelintConfig` from the first config file present under `root`.
///
/// Returns `Ok(None)` when there is no config file. A file that exists but
/// cannot be read or parsed is a fatal error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, RulelintConfig)>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| LintError::Io {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<RulelintConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<RulelintConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Ok(Some((path, cfg))),
            Err(message) => Err(LintError::Config { path, message }),
        };
    }
    Ok(None)
}

/// Anchor `start` at the current directory so the upward search can leave it.
fn absolute_start(start: &Path) -> Result<PathBuf> {
    let joined = if start.is_absolute() {
        start.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|source| LintError::Io {
            path: start.to_path_buf(),
            source,
        })?;
        cwd.join(start)
    };
    Ok(joined.components().collect())
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&Path>,
    cli_root: Option<&Path>,
    cli_output: Option<OutputMode>,
) -> Result<Effective> {
    let start = absolute_start(cli_repo_root.unwrap_or_else(|| Path::new(".")))?;
    let repo_root = detect_repo_root(&start);
    let (config_file, cfg) = match load_config(&repo_root)? {
        Some((path, cfg)) => (Some(path), cfg),
        None => (None, RulelintConfig::default()),
    };

    let root = cli_root
        .map(Path::to_path_buf)
        .or_else(|| cfg.root.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    let root = repo_root.join(root);

    let extension = cfg
        .extension
        .map(|e| e.trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let output = cli_output.or(cfg.output).unwrap_or_default();

    let defaults = Exemptions::default();
    let ex = cfg.exempt.unwrap_or_default();
    let exempt = Exemptions {
        files: ex.files.unwrap_or(defaults.files),
        skills_dir: ex.skills_dir.unwrap_or(defaults.skills_dir),
        shared_rules: ex
            .shared_rules
            .map(PathBuf::from)
            .unwrap_or(defaults.shared_rules),
    };

    Ok(Effective {
        repo_root,
        root,
        extension,
        output,
        exempt,
        config_file,
    })
}
