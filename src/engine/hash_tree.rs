/// Level-wise binary hash-tree over a file's line hashes.
///
/// Level 0 nodes are the line hashes themselves (in array order, not raw
/// line number — blank/comment-only lines simply aren't leaves). Level-`k`
/// node `i` combines level-`(k-1)` nodes `2i` and `2i+1` at fixed
/// alignment (never sliding), so a level-`k` node spans up to `2^k`
/// leaves. Building stops at level 8 or once fewer than two nodes of the
/// previous level remain, whichever comes first.
use crate::engine::fnv::combine;
use crate::engine::model::{HashTreeNode, LineHash};

pub const MAX_LEVEL: usize = 8;

/// Build every level of the hash-tree for one file's line hashes,
/// flattened into a single vector (level 0 first, then 1, 2, ...).
pub fn build_tree(line_hashes: &[LineHash]) -> Vec<HashTreeNode> {
    let mut all = Vec::new();
    let mut level: Vec<HashTreeNode> = line_hashes
        .iter()
        .map(|lh| HashTreeNode {
            level: 0,
            start_line: lh.line,
            end_line: lh.line,
            hash: lh.hash,
            token_count: lh.token_count,
        })
        .collect();
    all.extend(level.iter().copied());

    let mut k = 1;
    while k <= MAX_LEVEL && level.len() >= 2 {
        let mut next = Vec::with_capacity(level.len() / 2);
        let mut i = 0;
        while i + 1 < level.len() {
            let left = level[i];
            let right = level[i + 1];
            next.push(HashTreeNode {
                level: k,
                start_line: left.start_line,
                end_line: right.end_line,
                hash: combine(left.hash, right.hash),
                token_count: left.token_count + right.token_count,
            });
            i += 2;
        }
        all.extend(next.iter().copied());
        level = next;
        k += 1;
    }

    all
}

#[cfg(test)]
#[path = "hash_tree_test.rs"]
mod tests;
