use crate::graph::Graph;
use crate::search::{best_first_search, SearchResult};
use crate::{Cost, NodeId};

pub mod astar;
pub mod dijkstra;

/// A search strategy. Solvers only differ in the heuristic that is added to the cost of a
/// relaxed neighbor; the search loop itself is shared.
pub trait GraphSolver {
    /// Label used in reports.
    fn name(&self) -> &'static str;

    /// Estimated remaining cost from `node` to `goal`. Must not overestimate for the
    /// result to be optimal.
    fn heuristic(&self, graph: &Graph, node: NodeId, goal: NodeId) -> Cost;

    fn search(&self, graph: &Graph, start: NodeId, goal: NodeId) -> SearchResult {
        self.search_until(graph, start, goal, || true)
    }

    /// Like [search](Self::search), but stops as soon as `keep_going` returns `false`.
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
        best_first_search(
            graph,
            start,
            goal,
            |node| self.heuristic(graph, node, goal),
            keep_going,
        )
    }
}
