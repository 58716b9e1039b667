use core::fmt;
use itertools::Itertools;
use std::time::{Duration, Instant};

use crate::graph::Graph;
use crate::search::{search, SearchMode, SearchResult};
use crate::NodeId;

/// One algorithm's line in the comparison table.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub algorithm: &'static str,
    pub result: SearchResult,
    pub elapsed: Duration,
}

/// Side-by-side results of running every [SearchMode] on the same query.
#[derive(Clone, Debug)]
pub struct ComparisonReport {
    pub rows: Vec<ReportRow>,
}

impl ComparisonReport {
    /// Searches from `start` to `goal` once per mode, timing each run.
    pub fn run(graph: &Graph, start: NodeId, goal: NodeId) -> ComparisonReport {
        let rows = SearchMode::ALL
            .into_iter()
            .map(|mode| {
                let before = Instant::now();
                let result = search(graph, start, goal, mode);
                ReportRow {
                    algorithm: mode.name(),
                    result,
                    elapsed: before.elapsed(),
                }
            })
            .collect();
        ComparisonReport { rows }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<15} | {:<10} | {:<15} | {:<10} | Time",
            "Algorithm", "Cost", "Nodes Expanded", "Path Found"
        )?;
        for row in &self.rows {
            let cost = match row.result.distance() {
                Some(distance) => format!("{distance:.2}"),
                None => "N/A".to_owned(),
            };
            let found = if row.result.found() { "Yes" } else { "No" };
            writeln!(
                f,
                "{:<15} | {:<10} | {:<15} | {:<10} | {:.2?}",
                row.algorithm, cost, row.result.nodes_expanded, found, row.elapsed
            )?;
        }
        for row in &self.rows {
            if let Some(path) = row.result.path() {
                writeln!(f, "Path ({}): {}", row.algorithm, path.iter().join(" -> "))?;
            }
        }
        Ok(())
    }
}
