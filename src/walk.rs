/// Filesystem discovery: walk the given paths, skip `.gitignore`d and
/// `.git` content, and filter by ignore-glob and language-name filters.
/// Uses the `ignore` crate for `.gitignore`-aware traversal, the same way
/// directory walking is done elsewhere in this codebase.
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::lexer::{LanguageSpec, detect, detect_by_shebang, matches_language};

/// Compiled ignore-glob patterns plus the language-name allowlist, built
/// once from config/CLI values and passed through discovery.
#[derive(Debug, Default)]
pub struct DiscoveryFilter {
    globs: Option<GlobSet>,
    languages: Vec<String>,
}

impl DiscoveryFilter {
    pub fn new(ignore_patterns: &[String], languages: &[String]) -> Self {
        Self {
            globs: build_glob_set(ignore_patterns),
            languages: languages.to_vec(),
        }
    }

    /// Returns `true` if a file should be skipped: it matches an ignore
    /// glob (against either the full path or the bare filename) or its
    /// detected language isn't in the allowlist.
    fn excludes(&self, path: &Path, spec: &LanguageSpec) -> bool {
        if let Some(globs) = &self.globs {
            let file_name = path.file_name().map(Path::new);
            if globs.is_match(path) || file_name.is_some_and(|n| globs.is_match(n)) {
                return true;
            }
        }
        !matches_language(spec, &self.languages)
    }
}

fn build_glob_set(patterns: &[String]) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(g) => {
                builder.add(g);
            }
            Err(e) => eprintln!("warning: invalid ignore pattern '{pattern}': {e}"),
        }
    }
    match builder.build() {
        Ok(set) => Some(set),
        Err(e) => {
            eprintln!("warning: failed to compile ignore pattern set: {e}");
            None
        }
    }
}

/// Walk every given root (file or directory), returning every recognized
/// source file with its detected language, deduplicated and sorted.
pub fn discover_files(paths: &[PathBuf], filter: &DiscoveryFilter) -> Vec<(PathBuf, &'static LanguageSpec)> {
    let mut result = Vec::new();
    for root in paths {
        if root.is_file() {
            if let Some(spec) = detect_language(root)
                && !filter.excludes(root, spec)
            {
                result.push((root.clone(), spec));
            }
            continue;
        }

        for entry in WalkBuilder::new(root).hidden(false).follow_links(false).build() {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    eprintln!("warning: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            let Some(spec) = detect_language(path) else {
                continue;
            };
            if filter.excludes(path, spec) {
                continue;
            }
            result.push((path.to_path_buf(), spec));
        }
    }

    result.sort_by(|a, b| a.0.cmp(&b.0));
    result.dedup_by(|a, b| a.0 == b.0);
    result
}

fn detect_language(path: &Path) -> Option<&'static LanguageSpec> {
    detect(path).or_else(|| try_detect_shebang(path))
}

fn try_detect_shebang(path: &Path) -> Option<&'static LanguageSpec> {
    let content = std::fs::read_to_string(path).ok()?;
    let first_line = content.lines().next()?;
    detect_by_shebang(first_line)
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
