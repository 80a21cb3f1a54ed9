/// Two-pass suppression filter: drop clone groups whose source lines match
/// caller-supplied glob patterns, then drop any sibling groups that only
/// survived because their own lines happened not to match directly.
use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::engine::model::{CloneGroup, CloneReport};

/// Extra lines of context to include above a group's range when matching
/// suppression patterns, so a line like `@abstractmethod` or
/// `#[async_trait]` immediately preceding a block is caught. Fixed, not
/// configurable.
const CONTEXT_ABOVE: usize = 1;

type LocationKey = (PathBuf, (usize, usize));

/// Compile suppression glob patterns into a matchable set. Invalid
/// patterns are reported to stderr and skipped, matching how other glob
/// filters in this codebase degrade.
pub fn compile_patterns(patterns: &[String]) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(g) => {
                builder.add(g);
            }
            Err(e) => eprintln!("warning: invalid suppress pattern '{pattern}': {e}"),
        }
    }
    match builder.build() {
        Ok(set) => Some(set),
        Err(e) => {
            eprintln!("warning: failed to compile suppress pattern set: {e}");
            None
        }
    }
}

fn extract_lines(source: &str, range: (usize, usize)) -> Vec<&str> {
    let lines: Vec<&str> = source.lines().collect();
    let (start, end) = range;
    let start = start.saturating_sub(CONTEXT_ABOVE).max(1);
    if start > lines.len() {
        return Vec::new();
    }
    let end = end.min(lines.len());
    lines[start - 1..end].to_vec()
}

fn line_matches(line: &str, patterns: &GlobSet) -> bool {
    patterns.is_match(Path::new(line))
}

fn group_matches(
    report: &CloneReport,
    group: &CloneGroup,
    patterns: &GlobSet,
    cache: &mut HashMap<PathBuf, Option<String>>,
) -> bool {
    for (file, range) in [(&report.file_a, group.lines_a), (&report.file_b, group.lines_b)] {
        let source = cache
            .entry(file.clone())
            .or_insert_with(|| fs::read_to_string(file).ok());
        let Some(source) = source else { continue };
        if extract_lines(source, range).iter().any(|line| line_matches(line, patterns)) {
            return true;
        }
    }
    false
}

fn overlaps(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

fn location_overlaps(loc: &LocationKey, suppressed: &HashSet<LocationKey>) -> bool {
    suppressed.iter().any(|(file, range)| *file == loc.0 && overlaps(*range, loc.1))
}

/// Remove clone groups whose source lines match any suppression pattern,
/// directly or via sibling overlap. Reports left with no surviving groups
/// are dropped entirely.
pub fn filter_reports(reports: Vec<CloneReport>, patterns: &GlobSet) -> Vec<CloneReport> {
    let mut cache: HashMap<PathBuf, Option<String>> = HashMap::new();
    let mut suppressed_locations: HashSet<LocationKey> = HashSet::new();
    let mut after_direct: Vec<(CloneReport, Vec<CloneGroup>)> = Vec::new();

    for report in reports {
        let mut kept = Vec::new();
        for group in &report.groups {
            if group_matches(&report, group, patterns, &mut cache) {
                suppressed_locations.insert((report.file_a.clone(), group.lines_a));
                suppressed_locations.insert((report.file_b.clone(), group.lines_b));
            } else {
                kept.push(*group);
            }
        }
        after_direct.push((report, kept));
    }

    let mut filtered = Vec::new();
    for (mut report, kept_groups) in after_direct {
        let surviving: Vec<CloneGroup> = kept_groups
            .into_iter()
            .filter(|g| {
                let a = (report.file_a.clone(), g.lines_a);
                let b = (report.file_b.clone(), g.lines_b);
                !(location_overlaps(&a, &suppressed_locations) && location_overlaps(&b, &suppressed_locations))
            })
            .collect();
        if surviving.is_empty() {
            continue;
        }
        report.groups = surviving;
        report.recompute_total();
        filtered.push(report);
    }

    filtered
}

#[cfg(test)]
#[path = "suppress_test.rs"]
mod tests;
