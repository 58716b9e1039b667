use clap::Parser;
use std::path::PathBuf;

use crate::errors::ConfigError;
use crate::graph::Graph;
use crate::NodeId;

pub const DEFAULT_GRAPH_FILE: &str = "p1_graph.txt";
pub const DEFAULT_START: NodeId = 0;
pub const DEFAULT_END: NodeId = 50;

/// Compare Dijkstra and A* shortest paths on a grid graph
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(name = "grid_route")]
#[command(version)]
pub struct RunConfig {
    /// Graph description file
    #[arg(default_value = DEFAULT_GRAPH_FILE)]
    pub graph_file: PathBuf,

    /// Start node, overrides the file's S line
    #[arg(requires = "end")]
    pub start: Option<NodeId>,

    /// End node, overrides the file's D line
    #[arg(requires = "start")]
    pub end: Option<NodeId>,
}

impl Default for RunConfig {
    fn default() -> RunConfig {
        RunConfig {
            graph_file: PathBuf::from(DEFAULT_GRAPH_FILE),
            start: None,
            end: None,
        }
    }
}

impl RunConfig {
    /// Picks the start and end node: command line first, then the graph file's `S`/`D`
    /// lines, then the defaults. Both must be declared nodes of `graph`.
    pub fn resolve_endpoints(&self, graph: &Graph) -> Result<(NodeId, NodeId), ConfigError> {
        let start = self.start.or(graph.start_node).unwrap_or(DEFAULT_START);
        let end = self.end.or(graph.end_node).unwrap_or(DEFAULT_END);
        for node in [start, end] {
            if !graph.contains_node(node) {
                return Err(ConfigError::UnknownNode { node });
            }
        }
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Square;
    use clap::error::ErrorKind;

    fn graph_with_nodes(ids: &[NodeId]) -> Graph {
        let mut graph = Graph::new();
        for &id in ids {
            graph.add_node(id, Square(id));
        }
        graph
    }

    fn parse(args: &[&str]) -> Result<RunConfig, clap::Error> {
        RunConfig::try_parse_from(args.iter().copied())
    }

    #[test]
    fn defaults() {
        let config = parse(&["grid_route"]).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.graph_file, PathBuf::from("p1_graph.txt"));
    }

    #[test]
    fn file_and_endpoints() {
        let config = parse(&["grid_route", "g.txt", "3", "7"]).unwrap();
        assert_eq!(config.graph_file, PathBuf::from("g.txt"));
        assert_eq!((config.start, config.end), (Some(3), Some(7)));
    }

    #[test]
    fn lone_start_is_rejected() {
        let err = parse(&["grid_route", "g.txt", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn non_integer_endpoint() {
        let err = parse(&["grid_route", "g.txt", "a", "7"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_ne!(err.exit_code(), 0);
        assert!(parse(&["grid_route", "g.txt", "3", "-1"]).is_err());
    }

    #[test]
    fn endpoint_precedence() {
        let mut graph = graph_with_nodes(&[0, 1, 2, 3, 50]);
        let config = RunConfig::default();
        assert_eq!(config.resolve_endpoints(&graph), Ok((0, 50)));

        graph.start_node = Some(1);
        graph.end_node = Some(2);
        assert_eq!(config.resolve_endpoints(&graph), Ok((1, 2)));

        let config = RunConfig {
            start: Some(3),
            end: Some(0),
            ..RunConfig::default()
        };
        assert_eq!(config.resolve_endpoints(&graph), Ok((3, 0)));
    }

    #[test]
    fn unknown_endpoint() {
        let graph = graph_with_nodes(&[0, 1]);
        assert_eq!(
            RunConfig::default().resolve_endpoints(&graph),
            Err(ConfigError::UnknownNode { node: 50 })
        );
    }
}
