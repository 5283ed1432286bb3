use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use ahash::{AHashMap, AHashSet};

use crate::errors::{LinkGraphError, LoadReport};

/// Directed adjacency-list graph keyed by externally assigned vertex IDs.
///
/// IDs need not be contiguous, and edges may point at vertices that never had
/// an adjacency line of their own; such vertices simply have no out-edges.
/// The graph is immutable once constructed.
#[derive(Debug)]
pub struct LinkGraph {
    adjacency: AHashMap<i64, Vec<i64>>,
    vertex_ids: Vec<i64>,
}

impl LinkGraph {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        num_vertices: usize,
    ) -> Result<(Self, LoadReport), LinkGraphError> {
        let file = File::open(path).map_err(|e| LinkGraphError::io(e.to_string()))?;
        Self::from_reader(BufReader::new(file), num_vertices)
    }

    /// Builds the graph from at most `num_vertices` lines of
    /// `id,neighbor1,neighbor2,...` text (bare `id` is legal).
    ///
    /// Blank lines are skipped but still consume line budget. A line whose
    /// leading field is not an integer is recorded in the report and skipped;
    /// a bad neighbor field is recorded too, keeping the neighbors parsed
    /// before it. Only an I/O failure is fatal.
    pub fn from_reader<R: BufRead>(
        reader: R,
        num_vertices: usize,
    ) -> Result<(Self, LoadReport), LinkGraphError> {
        let mut adjacency: AHashMap<i64, Vec<i64>> = AHashMap::new();
        let mut ids = AHashSet::new();
        let mut report = LoadReport::default();
        for (idx, line) in reader.lines().take(num_vertices).enumerate() {
            let line = line.map_err(|e| LinkGraphError::io(e.to_string()))?;
            report.lines_read += 1;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split(',');
            let head = fields.next().unwrap_or_default();
            let id = match head.trim().parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    report.record(idx + 1, line);
                    continue;
                }
            };
            ids.insert(id);
            let mut neighbors = Vec::new();
            for field in fields {
                match field.trim().parse::<i64>() {
                    Ok(neighbor) => neighbors.push(neighbor),
                    Err(_) => {
                        report.record(idx + 1, line);
                        break;
                    }
                }
            }
            adjacency.insert(id, neighbors);
        }
        let mut vertex_ids: Vec<i64> = ids.into_iter().collect();
        vertex_ids.sort_unstable();
        Ok((
            Self {
                adjacency,
                vertex_ids,
            },
            report,
        ))
    }

    /// Out-neighbors in input order; empty for IDs without an adjacency line.
    pub fn neighbors(&self, id: i64) -> &[i64] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every ID that appeared as a line's leading field, ascending.
    pub fn vertex_ids(&self) -> &[i64] {
        &self.vertex_ids
    }

    pub fn contains(&self, id: i64) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
