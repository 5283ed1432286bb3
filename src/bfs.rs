use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::graph::LinkGraph;

/// Vertices within `bound` hops of any seed, seeds included.
///
/// Each seed runs its own traversal with private visited state, all of them
/// accumulating into one deduplicated output set. `bound == 0` returns
/// exactly the seeds; the bound is unsigned, so there is no negative case.
pub fn bfs_trim(graph: &LinkGraph, seeds: &[i64], bound: u32) -> AHashSet<i64> {
    let mut trimmed = AHashSet::new();
    for &seed in seeds {
        bounded_visit(graph, seed, bound, &mut trimmed);
    }
    trimmed
}

fn bounded_visit(graph: &LinkGraph, start: i64, bound: u32, out: &mut AHashSet<i64>) {
    let mut seen = AHashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back((start, 0_u32));
    while let Some((node, depth)) = queue.pop_front() {
        out.insert(node);
        if depth >= bound {
            continue;
        }
        for &next in graph.neighbors(node) {
            if seen.insert(next) {
                queue.push_back((next, depth + 1));
            }
        }
    }
}

/// Single-predecessor BFS tree rooted at `start`.
///
/// When several same-distance edges reach a vertex, the first-dequeued
/// discoverer wins and the rest are dropped; [`crate::algo::brandes_predecessors`]
/// is the variant that keeps all of them. The start vertex and anything
/// unreachable from it have no entry.
pub fn bfs_predecessors(graph: &LinkGraph, start: i64) -> AHashMap<i64, i64> {
    let mut seen = AHashSet::new();
    let mut predecessor = AHashMap::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        for &next in graph.neighbors(node) {
            if seen.insert(next) {
                predecessor.insert(next, node);
                queue.push_back(next);
            }
        }
    }
    predecessor
}
