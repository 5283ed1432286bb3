//! In-memory directed graph engine for hyperlink-scale adjacency lists.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod algo;
pub mod bench_utils;
pub mod bfs;
pub mod client;
pub mod errors;
pub mod graph;
pub mod lookup;

pub use crate::algo::{brandes_centrality, brandes_predecessors};
pub use crate::bfs::{bfs_predecessors, bfs_trim};
pub use crate::errors::{LineError, LinkGraphError, LoadReport};
pub use crate::graph::LinkGraph;
pub use crate::lookup::{load_betweenness, load_titles, load_titles_reverse};
