use core::fmt;
use itertools::Itertools;
use num_traits::Zero;

use crate::heuristic::Square;
use crate::{Cost, FxIndexMap, NodeId};

/// [Graph] maps every declared node to the [Square] it occupies and keeps, per node, the
/// ordered list of outgoing `(neighbor, weight)` edges. Insertion order is preserved so that
/// iteration (and therefore search) is deterministic.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: FxIndexMap<NodeId, Square>,
    edges: FxIndexMap<NodeId, Vec<(NodeId, Cost)>>,
    /// Start node declared by the graph description, if any.
    pub start_node: Option<NodeId>,
    /// End node declared by the graph description, if any.
    pub end_node: Option<NodeId>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Registers `id` on `square`. Declaring a node twice moves it to the new square but keeps
    /// the edges already added from it.
    pub fn add_node(&mut self, id: NodeId, square: Square) {
        self.nodes.insert(id, square);
        self.edges.entry(id).or_default();
    }

    /// Appends a directed edge. Neither endpoint has to be declared; parallel edges are kept.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Cost) {
        self.edges.entry(from).or_default().push((to, weight));
    }

    pub fn get_square(&self, id: NodeId) -> Option<Square> {
        self.nodes.get(&id).copied()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Outgoing edges of `id` in insertion order; empty for unknown nodes.
    pub fn neighbors(&self, id: NodeId) -> &[(NodeId, Cost)] {
        self.edges.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Declared nodes with their squares, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Square)> + '_ {
        self.nodes.iter().map(|(&id, &square)| (id, square))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Total weight of following `path`, taking the cheapest parallel edge for every hop.
    /// Returns [None] if a hop has no edge.
    pub fn path_cost(&self, path: &[NodeId]) -> Option<Cost> {
        path.iter().tuple_windows().try_fold(Cost::zero(), |total, (&from, &to)| {
            self.neighbors(from)
                .iter()
                .filter(|(neighbor, _)| *neighbor == to)
                .map(|&(_, weight)| weight)
                .min_by(|a, b| a.total_cmp(b))
                .map(|weight| total + weight)
        })
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Graph: {} nodes, {} edges",
            self.node_count(),
            self.edge_count()
        )?;
        for (id, edges) in &self.edges {
            let square = match self.get_square(*id) {
                Some(square) => square.to_string(),
                None => "?".to_owned(),
            };
            let targets = edges
                .iter()
                .map(|(to, weight)| format!("{to} ({weight})"))
                .join(", ");
            writeln!(f, "{id} [sq {square}] -> {targets}")?;
        }
        Ok(())
    }
}
