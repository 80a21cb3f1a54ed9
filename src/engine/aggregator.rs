/// Aggregation: canonicalize raw matches, coalesce level-0 matches into
/// contiguous groups, filter by minimum token count, drop subsumed groups,
/// and bucket the survivors into per-file-pair reports.
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::engine::model::{CloneGroup, CloneMatch, CloneReport};

/// Run the full aggregation pipeline over every raw match from the
/// collision index, producing one report per file pair with at least one
/// surviving group.
pub fn aggregate(matches: Vec<CloneMatch>, min_group_tokens: usize) -> Vec<CloneReport> {
    let mut by_pair: HashMap<(PathBuf, PathBuf), Vec<CloneMatch>> = HashMap::new();
    for m in matches {
        let m = canonicalize(m);
        let key = (m.location_a.file.clone(), m.location_b.file.clone());
        by_pair.entry(key).or_default().push(m);
    }

    let mut reports: Vec<CloneReport> = Vec::new();
    for ((file_a, file_b), pair_matches) in by_pair {
        let mut groups = build_groups(&pair_matches);
        groups.retain(|g| g.token_count >= min_group_tokens);
        groups = dedup_subsumed(groups);
        if groups.is_empty() {
            continue;
        }
        groups.sort_by_key(|g| (g.lines_a.0, g.lines_b.0));
        let total_cloned_lines = groups.iter().map(|g| g.line_count).sum();
        reports.push(CloneReport {
            file_a,
            file_b,
            groups,
            total_cloned_lines,
        });
    }

    reports.sort_by(|a, b| (&a.file_a, &a.file_b).cmp(&(&b.file_a, &b.file_b)));
    reports
}

/// Order a match so `location_a`'s file never sorts after `location_b`'s
/// (and, within the same file, `location_a` starts no later), collapsing
/// `(A, B)` and `(B, A)` pairings of the same match into one direction.
fn canonicalize(m: CloneMatch) -> CloneMatch {
    let swap = match m.location_a.file.cmp(&m.location_b.file) {
        Ordering::Greater => true,
        Ordering::Equal => m.location_a.node.start_line > m.location_b.node.start_line,
        Ordering::Less => false,
    };
    if swap {
        CloneMatch {
            location_a: m.location_b,
            location_b: m.location_a,
        }
    } else {
        m
    }
}

/// Build groups for one file pair: level-0 matches are sorted and merged
/// when both sides advance by exactly one line from the previous match;
/// matches at level >= 1 are already contiguous spans and pass through
/// whole.
fn build_groups(matches: &[CloneMatch]) -> Vec<CloneGroup> {
    let mut groups = Vec::new();

    let mut level0: Vec<&CloneMatch> = matches.iter().filter(|m| m.location_a.node.level == 0).collect();
    level0.sort_by_key(|m| (m.location_a.node.start_line, m.location_b.node.start_line));

    for m in level0 {
        let a = &m.location_a.node;
        let b = &m.location_b.node;
        if let Some(last) = groups.last_mut() {
            let last: &mut CloneGroup = last;
            if last.lines_a.1 + 1 == a.start_line && last.lines_b.1 + 1 == b.start_line {
                last.lines_a.1 = a.end_line;
                last.lines_b.1 = b.end_line;
                last.line_count += 1;
                last.token_count += a.token_count.min(b.token_count);
                continue;
            }
        }
        groups.push(CloneGroup {
            lines_a: (a.start_line, a.end_line),
            lines_b: (b.start_line, b.end_line),
            line_count: 1,
            token_count: a.token_count.min(b.token_count),
        });
    }

    for m in matches.iter().filter(|m| m.location_a.node.level >= 1) {
        let a = &m.location_a.node;
        let b = &m.location_b.node;
        groups.push(CloneGroup {
            lines_a: (a.start_line, a.end_line),
            lines_b: (b.start_line, b.end_line),
            line_count: a.line_count(),
            token_count: a.token_count.min(b.token_count),
        });
    }

    groups
}

/// Drop any group whose ranges on both sides are fully contained within
/// another surviving group's ranges (closed intervals). Larger groups are
/// considered first so that a tree-level match subsumes the level-0
/// matches inside its span.
fn dedup_subsumed(mut groups: Vec<CloneGroup>) -> Vec<CloneGroup> {
    groups.sort_by_key(|g| std::cmp::Reverse(g.line_count));
    let mut kept: Vec<CloneGroup> = Vec::new();
    'outer: for g in groups.drain(..) {
        for k in &kept {
            if contains(k, &g) {
                continue 'outer;
            }
        }
        kept.push(g);
    }
    kept
}

fn contains(outer: &CloneGroup, inner: &CloneGroup) -> bool {
    outer.lines_a.0 <= inner.lines_a.0
        && inner.lines_a.1 <= outer.lines_a.1
        && outer.lines_b.0 <= inner.lines_b.0
        && inner.lines_b.1 <= outer.lines_b.1
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
