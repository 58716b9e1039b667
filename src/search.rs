//! Best-first search shared by Dijkstra and A*. Both run the exact same loop; only the
//! priority given to a relaxed neighbor differs, which is supplied as a heuristic callback
//! (zero for Dijkstra).
use fxhash::{FxHashMap, FxHashSet};
use log::{info, warn};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GraphSolver};
use crate::{Cost, NodeId};

/// Which priority the open set is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Cost so far (Dijkstra).
    UniformCost,
    /// Cost so far plus the grid heuristic (A*).
    HeuristicGuided,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::UniformCost, SearchMode::HeuristicGuided];

    pub fn name(self) -> &'static str {
        match self {
            SearchMode::UniformCost => DijkstraSolver.name(),
            SearchMode::HeuristicGuided => AstarSolver::new().name(),
        }
    }
}

/// Optimal route to the goal.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub distance: Cost,
    /// Nodes from start to goal, both included.
    pub path: Vec<NodeId>,
}

/// Outcome of one search. An unreachable goal is a normal result with `route == None`.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub route: Option<Route>,
    /// Nodes finalized before the goal was reached (or before the open set ran dry).
    pub nodes_expanded: usize,
    /// Set when the caller stopped the search before it finished.
    pub cancelled: bool,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.route.is_some()
    }
    pub fn distance(&self) -> Option<Cost> {
        self.route.as_ref().map(|route| route.distance)
    }
    pub fn path(&self) -> Option<&[NodeId]> {
        self.route.as_ref().map(|route| route.path.as_slice())
    }
}

/// Open set entry. Ordered so that [BinaryHeap] pops the smallest estimated cost first and,
/// among equal estimates, the smallest node id.
struct SmallestCostHolder {
    estimated_cost: Cost,
    node: NodeId,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Walks the predecessor chain back from `terminal` and returns it in start-to-terminal
/// order. A node without a predecessor is the start, so an empty map yields `[terminal]`.
/// The map must be acyclic.
pub fn reconstruct_path(came_from: &FxHashMap<NodeId, NodeId>, terminal: NodeId) -> Vec<NodeId> {
    let mut path: Vec<NodeId> =
        std::iter::successors(Some(terminal), |node| came_from.get(node).copied()).collect();
    path.reverse();
    path
}

/// Runs Dijkstra or A* from `start` to `goal`.
pub fn search(graph: &Graph, start: NodeId, goal: NodeId, mode: SearchMode) -> SearchResult {
    match mode {
        SearchMode::UniformCost => DijkstraSolver.search(graph, start, goal),
        SearchMode::HeuristicGuided => AstarSolver::new().search(graph, start, goal),
    }
}

/// Generalized best-first search.
///
/// The priority of a neighbor reached at cost `g` is `g + heuristic(neighbor)`. Improved
/// costs are pushed again instead of decreasing a key in place; stale entries are skipped on
/// pop because their node is already finalized. `keep_going` is consulted once before every
/// pop of a non-empty open set and stops the search when it returns `false`.
pub fn best_first_search<FH, FC>(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    mut heuristic: FH,
    mut keep_going: FC,
) -> SearchResult
where
    FH: FnMut(NodeId) -> Cost,
    FC: FnMut() -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        node: start,
    });
    let mut best_cost: FxHashMap<NodeId, Cost> = FxHashMap::default();
    best_cost.insert(start, Zero::zero());
    let mut came_from: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut finalized: FxHashSet<NodeId> = FxHashSet::default();
    let mut nodes_expanded = 0;
    info!("Searching from {start} to {goal}");

    while !to_see.is_empty() {
        if !keep_going() {
            info!("Search from {start} to {goal} cancelled after {nodes_expanded} expansions");
            return SearchResult {
                route: None,
                nodes_expanded,
                cancelled: true,
            };
        }
        let Some(SmallestCostHolder { node, .. }) = to_see.pop() else {
            break;
        };
        if !finalized.insert(node) {
            continue;
        }
        let cost = best_cost[&node];
        if node == goal {
            info!("Reached {goal} at cost {cost} after {nodes_expanded} expansions");
            return SearchResult {
                route: Some(Route {
                    distance: cost,
                    path: reconstruct_path(&came_from, node),
                }),
                nodes_expanded,
                cancelled: false,
            };
        }
        nodes_expanded += 1;
        for &(neighbor, weight) in graph.neighbors(node) {
            let new_cost = cost + weight;
            let improved = best_cost
                .get(&neighbor)
                .map_or(true, |&known| new_cost < known);
            if improved {
                best_cost.insert(neighbor, new_cost);
                came_from.insert(neighbor, node);
                to_see.push(SmallestCostHolder {
                    estimated_cost: new_cost + heuristic(neighbor),
                    node: neighbor,
                });
            }
        }
    }
    warn!("{goal} is not reachable from {start} ({nodes_expanded} nodes expanded)");
    SearchResult {
        route: None,
        nodes_expanded,
        cancelled: false,
    }
}
