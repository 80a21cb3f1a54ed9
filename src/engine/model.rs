/// Value types shared across the detection pipeline. All of these are
/// immutable once built — no interior mutability, plain data.
use std::path::PathBuf;

/// A single source line's hash, and how many tokens contributed to it.
/// Lines with zero tokens after normalization (blank, or comment-only)
/// never get an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHash {
    pub line: usize,
    pub hash: u64,
    pub token_count: usize,
}

/// One node of the level-wise hash-tree. A level-0 node is a single line;
/// a level-`k` node spans up to `2^k` lines, built from two level-`(k-1)`
/// children at fixed (non-sliding) alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashTreeNode {
    pub level: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub hash: u64,
    pub token_count: usize,
}

impl HashTreeNode {
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// A tree node anchored to the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLocation {
    pub file: PathBuf,
    pub node: HashTreeNode,
}

/// One raw pairing of two colliding locations, before aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneMatch {
    pub location_a: NodeLocation,
    pub location_b: NodeLocation,
}

/// One contiguous (or coalesced) clone span pair, after aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneGroup {
    pub lines_a: (usize, usize),
    pub lines_b: (usize, usize),
    pub line_count: usize,
    pub token_count: usize,
}

/// All surviving clone groups for one file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneReport {
    pub file_a: PathBuf,
    pub file_b: PathBuf,
    pub groups: Vec<CloneGroup>,
    pub total_cloned_lines: usize,
}

impl CloneReport {
    pub fn recompute_total(&mut self) {
        self.total_cloned_lines = self.groups.iter().map(|g| g.line_count).sum();
    }
}
