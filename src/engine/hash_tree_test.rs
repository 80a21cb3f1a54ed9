use super::*;

fn lh(line: usize, hash: u64) -> LineHash {
    LineHash { line, hash, token_count: 1 }
}

#[test]
fn level_zero_mirrors_line_hashes() {
    let lines = vec![lh(1, 10), lh(2, 20), lh(3, 30)];
    let tree = build_tree(&lines);
    let level0: Vec<_> = tree.iter().filter(|n| n.level == 0).collect();
    assert_eq!(level0.len(), 3);
    assert_eq!(level0[0].hash, 10);
}

#[test]
fn level_one_combines_adjacent_pairs() {
    let lines = vec![lh(1, 10), lh(2, 20), lh(3, 30), lh(4, 40)];
    let tree = build_tree(&lines);
    let level1: Vec<_> = tree.iter().filter(|n| n.level == 1).collect();
    assert_eq!(level1.len(), 2);
    assert_eq!(level1[0].start_line, 1);
    assert_eq!(level1[0].end_line, 2);
    assert_eq!(level1[1].start_line, 3);
    assert_eq!(level1[1].end_line, 4);
}

#[test]
fn odd_leftover_node_is_not_padded() {
    let lines = vec![lh(1, 10), lh(2, 20), lh(3, 30)];
    let tree = build_tree(&lines);
    let level1: Vec<_> = tree.iter().filter(|n| n.level == 1).collect();
    assert_eq!(level1.len(), 1); // line 3 has no sibling, dropped at this level
    assert_eq!(level1[0].end_line, 2);
}

#[test]
fn span_never_exceeds_two_to_the_level() {
    let lines: Vec<LineHash> = (1..=256).map(|i| lh(i, i as u64)).collect();
    let tree = build_tree(&lines);
    for node in &tree {
        assert!(node.line_count() <= 1 << node.level);
    }
}

#[test]
fn tree_capped_at_level_eight() {
    let lines: Vec<LineHash> = (1..=1000).map(|i| lh(i, i as u64)).collect();
    let tree = build_tree(&lines);
    assert!(tree.iter().all(|n| n.level <= MAX_LEVEL));
    assert!(tree.iter().any(|n| n.level == MAX_LEVEL));
}

#[test]
fn identical_line_sequences_produce_identical_tree_hashes() {
    let a = vec![lh(1, 1), lh(2, 2), lh(3, 3), lh(4, 4)];
    let b = vec![lh(10, 1), lh(11, 2), lh(12, 3), lh(13, 4)];
    let tree_a = build_tree(&a);
    let tree_b = build_tree(&b);
    let top_a = tree_a.iter().max_by_key(|n| n.level).unwrap();
    let top_b = tree_b.iter().max_by_key(|n| n.level).unwrap();
    assert_eq!(top_a.hash, top_b.hash);
}
