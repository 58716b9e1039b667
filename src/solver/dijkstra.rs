use crate::{graph::Graph, solver::GraphSolver, Cost, NodeId};

#[derive(Clone, Debug)]
pub struct DijkstraSolver;

impl GraphSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn heuristic(&self, _: &Graph, _: NodeId, _: NodeId) -> Cost {
        0.0
    }
}
