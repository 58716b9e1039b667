use log::{debug, warn};

use crate::heuristic::{calculate_heuristic, Square};
use crate::search::{best_first_search, SearchResult};
use crate::{graph::Graph, solver::GraphSolver, Cost, NodeId};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// Heuristic towards an already resolved goal square. A node without a square gets 0,
    /// which keeps the estimate admissible.
    fn heuristic_to(&self, graph: &Graph, node: NodeId, target: Square) -> Cost {
        match graph.get_square(node) {
            Some(current) => calculate_heuristic(current, target) * self.heuristic_factor,
            None => {
                debug!("Node {node} has no square, using a heuristic of 0");
                0.0
            }
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GraphSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A* (Star)"
    }

    /// Grid heuristic between the squares of `node` and `goal` times the heuristic factor.
    fn heuristic(&self, graph: &Graph, node: NodeId, goal: NodeId) -> Cost {
        match graph.get_square(goal) {
            Some(target) => self.heuristic_to(graph, node, target),
            None => 0.0,
        }
    }

    /// Resolves the goal square once; without one every estimate is 0 and the search
    /// degrades to Dijkstra.
    fn search_until<FC>(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        keep_going: FC,
    ) -> SearchResult
    where
        FC: FnMut() -> bool,
    {
        match graph.get_square(goal) {
            Some(target) => best_first_search(
                graph,
                start,
                goal,
                |node| self.heuristic_to(graph, node, target),
                keep_going,
            ),
            None => {
                warn!("Goal {goal} has no square, using a heuristic of 0");
                best_first_search(graph, start, goal, |_| 0.0, keep_going)
            }
        }
    }
}
