//! Synthetic adjacency-list datasets for benches, rendered in the engine's
//! own `id,neighbor,...` line format.

use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Clone, Debug)]
pub struct GraphDataset {
    pub adjacency: Vec<(i64, Vec<i64>)>,
}

impl GraphDataset {
    pub fn nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edges(&self) -> usize {
        self.adjacency.iter().map(|(_, out)| out.len()).sum()
    }

    /// The vertex with the largest out-degree (ties broken by lowest ID).
    pub fn hub_id(&self) -> i64 {
        let mut best = (0_usize, 0_i64);
        for (id, out) in &self.adjacency {
            if out.len() > best.0 {
                best = (out.len(), *id);
            }
        }
        best.1
    }

    /// One `id,neighbor,...` line per vertex, in ID order.
    pub fn to_adjacency_text(&self) -> String {
        let mut out = String::new();
        for (id, neighbors) in &self.adjacency {
            out.push_str(&id.to_string());
            for neighbor in neighbors {
                out.push(',');
                out.push_str(&neighbor.to_string());
            }
            out.push('\n');
        }
        out
    }
}

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    RandomErdosRenyi { edges: usize },
    ScaleFree { m: usize },
}

pub fn generate_graph(shape: GraphShape, node_count: usize, seed: u64) -> GraphDataset {
    assert!(node_count > 1, "node_count must exceed 1");
    let neighbors = match shape {
        GraphShape::Line => generate_line(node_count),
        GraphShape::Star => generate_star(node_count),
        GraphShape::RandomErdosRenyi { edges } => generate_random(node_count, edges, seed),
        GraphShape::ScaleFree { m } => generate_scale_free(node_count, m, seed),
    };
    GraphDataset {
        adjacency: neighbors
            .into_iter()
            .enumerate()
            .map(|(idx, out)| (idx as i64, out))
            .collect(),
    }
}

fn generate_line(count: usize) -> Vec<Vec<i64>> {
    let mut neighbors = vec![Vec::new(); count];
    for idx in 0..count - 1 {
        neighbors[idx].push((idx + 1) as i64);
    }
    neighbors
}

fn generate_star(count: usize) -> Vec<Vec<i64>> {
    let mut neighbors = vec![Vec::new(); count];
    for leaf in 1..count {
        neighbors[0].push(leaf as i64);
        neighbors[leaf].push(0);
    }
    neighbors
}

fn generate_random(count: usize, edge_count: usize, seed: u64) -> Vec<Vec<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut neighbors = vec![Vec::new(); count];
    let mut placed = 0;
    while placed < edge_count {
        let from = rng.gen_range(0..count);
        let to = rng.gen_range(0..count);
        if from == to {
            continue;
        }
        neighbors[from].push(to as i64);
        placed += 1;
    }
    neighbors
}

fn generate_scale_free(count: usize, m: usize, seed: u64) -> Vec<Vec<i64>> {
    assert!(m > 0, "m must be positive");
    assert!(count > m + 1, "node_count must exceed m + 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut neighbors = vec![Vec::new(); count];
    let mut degrees = vec![0_usize; count];
    let seed_nodes = m + 1;
    for u in 0..seed_nodes {
        for v in (u + 1)..seed_nodes {
            neighbors[u].push(v as i64);
            degrees[u] += 1;
            degrees[v] += 1;
        }
    }
    let mut total_degree: usize = degrees.iter().sum();
    for new_node in seed_nodes..count {
        let mut targets = Vec::new();
        while targets.len() < m {
            let pick = rng.gen_range(0..total_degree);
            let mut cumulative = 0_usize;
            for candidate in 0..new_node {
                cumulative += degrees[candidate];
                if pick < cumulative {
                    if !targets.contains(&candidate) {
                        targets.push(candidate);
                    }
                    break;
                }
            }
        }
        for target in targets {
            neighbors[target].push(new_node as i64);
            degrees[target] += 1;
            degrees[new_node] += 1;
            total_degree += 2;
        }
    }
    neighbors
}
