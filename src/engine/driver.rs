/// Pipeline wiring: discover files, tokenize and hash each one, build the
/// collision index across the whole set, aggregate and (optionally)
/// suppress, and hand back the final reports. A per-file read or tokenize
/// failure is reported to stderr and that file is skipped; it never aborts
/// the run.
use std::path::PathBuf;

use crate::config::Config;
use crate::engine::aggregator::aggregate;
use crate::engine::hash_tree::build_tree;
use crate::engine::index::{CollisionIndex, DEFAULT_MIN_TOKEN_COUNT};
use crate::engine::line_hash::hash_lines;
use crate::engine::model::{CloneReport, NodeLocation};
use crate::engine::suppress::{compile_patterns, filter_reports};
use crate::lexer::tokenize;
use crate::walk::{DiscoveryFilter, discover_files};

/// Minimum token count for a clone *group* to survive aggregation. Distinct
/// from `config.min_tokens` (the per-file floor before indexing) and from
/// `DEFAULT_MIN_TOKEN_COUNT` (the per-node floor at match time).
const DEFAULT_MIN_GROUP_TOKENS: usize = 10;

/// Run a full scan: discovery through suppression, returning the final
/// clone reports. Callers choose how to render them.
pub fn scan(config: &Config, paths: &[PathBuf]) -> Vec<CloneReport> {
    let filter = DiscoveryFilter::new(&config.ignore_patterns, &config.languages);
    let files = discover_files(paths, &filter);

    let mut index = CollisionIndex::new();
    for (path, spec) in &files {
        let source = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(err) => {
                eprintln!("warning: skipping {}: {err}", path.display());
                continue;
            }
        };
        let tokens = tokenize(&source, spec);
        if tokens.len() < config.min_tokens {
            continue;
        }
        let line_hashes = hash_lines(&tokens, config.normalize);
        let tree = build_tree(&line_hashes);
        index.extend(tree.into_iter().map(|node| NodeLocation { file: path.clone(), node }));
    }

    let matches = index.find_matches(DEFAULT_MIN_TOKEN_COUNT);
    let reports = aggregate(matches, DEFAULT_MIN_GROUP_TOKENS);

    if config.suppress_patterns.is_empty() {
        return reports;
    }
    match compile_patterns(&config.suppress_patterns) {
        Some(patterns) => filter_reports(reports, &patterns),
        None => reports,
    }
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
