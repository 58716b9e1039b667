//! # grid_route
//!
//! Shortest paths on small directed, weighted graphs whose nodes sit on the squares of a
//! 10x10 grid. Runs [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! and [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) through one shared
//! best-first search so that their costs and expansion counts can be compared directly.
//! The A* heuristic is the Euclidean distance between squares, counting only the squares
//! strictly between the two.
pub mod config;
pub mod errors;
pub mod graph;
pub mod heuristic;
pub mod loader;
pub mod report;
pub mod search;
pub mod solver;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

pub use crate::graph::Graph;
pub use crate::heuristic::{calculate_heuristic, Square};
pub use crate::loader::{load_graph, parse_graph};
pub use crate::search::{reconstruct_path, search, Route, SearchMode, SearchResult};

/// Identifier of a graph vertex.
pub type NodeId = u32;
/// Edge weights, path distances and priorities.
pub type Cost = f64;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Distance units spanned by one square.
pub const SQUARE_SIZE: i32 = 10;
/// Cost of covering one distance unit, matching the scale of edge weights.
pub const COST_PER_UNIT: Cost = 100.0;
/// Width of the grid used when encoding squares as `row * GRID_WIDTH + col`.
pub const GRID_WIDTH: u32 = 10;
