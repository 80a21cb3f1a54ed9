//! `cpitd` — lexical clone and duplicate code detection.
//!
//! Tokenizes source files, hashes lines into a level-wise hash-tree, finds
//! cross-file hash collisions, and coalesces them into clone groups. Config
//! comes from a `[tool.cpitd]` TOML section merged with CLI overrides; CLI
//! wins except for list-valued fields, which concatenate.

/// CLI argument definitions using `clap` derive macros.
mod cli;
/// Config-file and CLI-override merging.
mod config;
/// Detection engine: hashing, hash-tree, collision index, aggregation,
/// suppression, and report formatting.
mod engine;
/// Lexical analysis: language detection and tokenization.
mod lexer;
/// Filesystem discovery with .gitignore support and language filtering.
mod walk;

use clap::Parser;

use cli::Cli;
use config::{CliOverrides, OutputFormat, build_config};
use lexer::NormalizationLevel;

fn main() {
    let cli = Cli::parse();

    let normalize = match cli.normalize {
        Some(n) => match NormalizationLevel::from_u8(n) {
            Some(level) => Some(level),
            None => unreachable!("clap's range validator already rejected values outside 0..=2"),
        },
        None => None,
    };
    let output_format = match cli.format.as_deref().map(str::parse) {
        Some(Ok(format)) => Some(format),
        Some(Err(err)) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
        None => None,
    };

    let overrides = CliOverrides {
        min_tokens: cli.min_tokens,
        normalize,
        output_format,
        ignore_patterns: cli.ignore_patterns,
        languages: cli.languages,
        suppress_patterns: cli.suppress_patterns,
    };

    let config = match build_config(&cli.config, overrides) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let paths = if cli.paths.is_empty() { vec![std::path::PathBuf::from(".")] } else { cli.paths };
    let reports = engine::scan(&config, &paths);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match config.output_format {
        OutputFormat::Human => engine::report::print_human(&reports, &mut out),
        OutputFormat::Json => engine::report::print_json(&reports, &mut out),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    std::process::exit(if reports.is_empty() { 0 } else { 1 });
}
