use std::collections::VecDeque;

use ahash::AHashMap;

use crate::graph::LinkGraph;

struct ShortestPathDag {
    order: Vec<i64>,
    sigma: AHashMap<i64, f64>,
    predecessors: AHashMap<i64, Vec<i64>>,
}

/// Brandes betweenness centrality over every vertex in the index set.
///
/// For each source: a forward BFS counts shortest paths (`sigma`) and records
/// every same-level predecessor, then vertices are processed in reverse
/// discovery order accumulating dependencies
/// (`delta[v] += sigma[v] / sigma[w] * (1 + delta[w])`). A vertex's own
/// source pass contributes nothing to its score. Vertices never reached from
/// any source have no entry. O(V·E) with no sampling or cutoff, so cost
/// scales with the full vertex index set.
pub fn brandes_centrality(graph: &LinkGraph) -> AHashMap<i64, f64> {
    let mut centrality: AHashMap<i64, f64> = AHashMap::new();
    for &source in graph.vertex_ids() {
        let dag = forward_phase(graph, source);
        let mut delta: AHashMap<i64, f64> = AHashMap::new();
        for &w in dag.order.iter().rev() {
            let delta_w = delta.get(&w).copied().unwrap_or(0.0);
            // sigma[w] >= 1 for anything in the discovery order.
            let share = (1.0 + delta_w) / dag.sigma[&w];
            if let Some(preds) = dag.predecessors.get(&w) {
                for &v in preds {
                    *delta.entry(v).or_insert(0.0) += dag.sigma[&v] * share;
                }
            }
            if w != source {
                *centrality.entry(w).or_insert(0.0) += delta_w;
            }
        }
    }
    centrality
}

/// The Brandes forward phase on its own: for every vertex reachable from
/// `target`, the complete list of immediate predecessors lying on some
/// shortest path, in discovery order. Useful for reconstructing all shortest
/// paths without paying for full centrality.
pub fn brandes_predecessors(graph: &LinkGraph, target: i64) -> AHashMap<i64, Vec<i64>> {
    forward_phase(graph, target).predecessors
}

fn forward_phase(graph: &LinkGraph, source: i64) -> ShortestPathDag {
    let mut sigma = AHashMap::new();
    let mut distance: AHashMap<i64, u32> = AHashMap::new();
    let mut predecessors: AHashMap<i64, Vec<i64>> = AHashMap::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();
    sigma.insert(source, 1.0_f64);
    distance.insert(source, 0);
    queue.push_back(source);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        let next_depth = distance[&v] + 1;
        let sigma_v = sigma[&v];
        for &w in graph.neighbors(v) {
            if !distance.contains_key(&w) {
                distance.insert(w, next_depth);
                queue.push_back(w);
            }
            if distance[&w] == next_depth {
                *sigma.entry(w).or_insert(0.0) += sigma_v;
                predecessors.entry(w).or_default().push(v);
            }
        }
    }
    ShortestPathDag {
        order,
        sigma,
        predecessors,
    }
}
