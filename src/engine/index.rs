/// Hash-collision index: a multimap from tree-node hash to the locations
/// that produced it, with bucket-size filtering and same-file overlap
/// exclusion when generating matches.
use std::collections::HashMap;

use crate::engine::model::{CloneMatch, NodeLocation};

/// Buckets smaller than this can't produce a match at all.
const MIN_BUCKET_SIZE: usize = 2;
/// Buckets larger than this are discarded as noise (boilerplate spans like
/// a lone `}` hashing identically across the whole tree).
const MAX_BUCKET_SIZE: usize = 100;
/// Default floor on a node's own token count before it can take part in a
/// match, applied per side independently of the bucket-size cap.
pub const DEFAULT_MIN_TOKEN_COUNT: usize = 10;

/// Multimap from hash value to every location that produced it.
#[derive(Debug, Default)]
pub struct CollisionIndex {
    buckets: HashMap<u64, Vec<NodeLocation>>,
}

impl CollisionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, location: NodeLocation) {
        self.buckets.entry(location.node.hash).or_default().push(location);
    }

    pub fn extend(&mut self, locations: impl IntoIterator<Item = NodeLocation>) {
        for location in locations {
            self.insert(location);
        }
    }

    /// Generate every clone match implied by the index: every pair of
    /// locations sharing a hash in a bucket of size `[2, 100]`, where both
    /// sides meet `min_token_count`, excluding same-file pairs whose line
    /// ranges overlap.
    pub fn find_matches(&self, min_token_count: usize) -> Vec<CloneMatch> {
        let mut matches = Vec::new();
        for locations in self.buckets.values() {
            if locations.len() < MIN_BUCKET_SIZE || locations.len() > MAX_BUCKET_SIZE {
                continue;
            }
            for i in 0..locations.len() {
                let a = &locations[i];
                if a.node.token_count < min_token_count {
                    continue;
                }
                for b in &locations[i + 1..] {
                    if b.node.token_count < min_token_count {
                        continue;
                    }
                    if a.file == b.file && ranges_overlap(a.node.start_line, a.node.end_line, b.node.start_line, b.node.end_line) {
                        continue;
                    }
                    matches.push(CloneMatch {
                        location_a: a.clone(),
                        location_b: b.clone(),
                    });
                }
            }
        }
        matches
    }
}

fn ranges_overlap(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> bool {
    a_start <= b_end && b_start <= a_end
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
