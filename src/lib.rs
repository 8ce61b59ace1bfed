//! Rulelint core library.
//!
//! Lints the frontmatter of markdown rule files in an assistant
//! configuration tree. A run walks the tree, extracts each file's leading
//! `---` block, parses it with a deliberately small grammar, and checks that
//! `paths` is a list of patterns.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Fatal, run-level errors.
//! - `walk`: Candidate file discovery.
//! - `frontmatter`: Leading block extraction.
//! - `metadata`: Restricted key/value/list parser.
//! - `validate`: Per-file classification and structural checks.
//! - `lint`: The sequential run that collects diagnostics.
//! - `models`: Diagnostics and summaries.
//! - `output`: Human/JSON reporting and exit status.
//! - `logging`: Tracing subscriber setup.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod lint;
pub mod logging;
pub mod metadata;
pub mod models;
pub mod output;
pub mod utils;
pub mod validate;
pub mod walk;
