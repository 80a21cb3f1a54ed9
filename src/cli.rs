/// CLI argument definitions for the `cpitd` command.
///
/// Defines the argument surface using the `clap` derive macros. There is a
/// single command — paths to scan, plus overrides for everything a
/// `[tool.cpitd]` config section can also set.
use std::path::PathBuf;

use clap::Parser;

/// Detect duplicate and near-duplicate code across a set of source files.
#[derive(Parser)]
#[command(name = "cpitd", version, about = "Clone and duplicate code detection")]
pub struct Cli {
    /// Files or directories to scan (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Path to a TOML config file with a [tool.cpitd] section (default: ./pyproject.toml)
    #[arg(long, default_value = "pyproject.toml")]
    pub config: PathBuf,

    /// Minimum token count for a clone group to be reported
    #[arg(long)]
    pub min_tokens: Option<usize>,

    /// Normalization level: 0 (exact), 1 (identifiers), or 2 (literals)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub normalize: Option<u8>,

    /// Output format: human or json
    #[arg(long, value_parser = ["human", "json"])]
    pub format: Option<String>,

    /// Glob pattern excluding matching files from the scan (repeatable)
    #[arg(long = "ignore")]
    pub ignore_patterns: Vec<String>,

    /// Restrict the scan to these language names, case-insensitive (repeatable)
    #[arg(long = "language")]
    pub languages: Vec<String>,

    /// Glob pattern suppressing clone groups whose source lines match it (repeatable)
    #[arg(long = "suppress")]
    pub suppress_patterns: Vec<String>,
}
