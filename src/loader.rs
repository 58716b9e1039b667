//! Reader for the line-oriented graph description format:
//!
//! ```text
//! // comment
//! S,0          # default start node
//! D,99         # default end node
//! 0,0          # node 0 on square 0
//! 0,1,1000.0   # edge 0 -> 1 with weight 1000
//! ```
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::errors::LoadError;
use crate::graph::Graph;
use crate::heuristic::Square;

const COMMENT_MARKERS: [&str; 2] = ["//", "#"];

/// Reads and parses the graph description at `path`.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let graph = parse_graph(&text)?;
    info!(
        "Loaded {} nodes and {} edges from {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

/// Parses a graph description. Lines with an unexpected number of fields are skipped.
pub fn parse_graph(text: &str) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();
    for (ix, raw) in text.lines().enumerate() {
        let line_number = ix + 1;
        let line = strip_comments(raw);
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let parse_error = |reason: String| LoadError::Parse {
            line_number,
            line: raw.to_owned(),
            reason,
        };
        let marker = fields[0].to_ascii_uppercase();
        if fields.len() >= 2 && (marker == "S" || marker == "D") {
            let node = parse_field(fields[1]).map_err(parse_error)?;
            if marker == "S" {
                graph.start_node = Some(node);
            } else {
                graph.end_node = Some(node);
            }
            continue;
        }
        match fields[..] {
            [node, square] => {
                let node = parse_field(node).map_err(parse_error)?;
                let square = parse_field(square).map_err(parse_error)?;
                graph.add_node(node, Square(square));
            }
            [from, to, weight] => {
                let from = parse_field(from).map_err(parse_error)?;
                let to = parse_field(to).map_err(parse_error)?;
                let weight: f64 = parse_field(weight).map_err(parse_error)?;
                graph.add_edge(from, to, weight);
            }
            _ => debug!("Skipping line {line_number} with {} fields", fields.len()),
        }
    }
    Ok(graph)
}

/// Drops everything from the first comment marker on, one marker after the other.
fn strip_comments(line: &str) -> &str {
    COMMENT_MARKERS
        .iter()
        .fold(line.trim(), |line, marker| match line.find(marker) {
            Some(at) => line[..at].trim(),
            None => line,
        })
}

fn parse_field<T>(field: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    field
        .parse()
        .map_err(|e| format!("invalid field {field:?} ({e})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_graph() {
        let graph = parse_graph("0,10\n1,20\n0,1,500\nS,0\nD,1\n").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.get_square(0), Some(Square(10)));
        assert_eq!(graph.get_square(1), Some(Square(20)));
        assert_eq!(graph.neighbors(0), &[(1, 500.0)]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.start_node, Some(0));
        assert_eq!(graph.end_node, Some(1));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let graph = parse_graph("# This is a comment\n\n   // Another comment\n0,55\n").unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.get_square(0), Some(Square(55)));
    }

    #[test]
    fn inline_comments_stripped() {
        let graph = parse_graph("0,10 // node zero\n1,20 # node one\n0, 1, 2.5 # edge // edge\n")
            .unwrap();
        assert_eq!(graph.get_square(0), Some(Square(10)));
        assert_eq!(graph.get_square(1), Some(Square(20)));
        assert_eq!(graph.neighbors(0), &[(1, 2.5)]);
    }

    #[test]
    fn markers_are_case_insensitive() {
        let graph = parse_graph("s, 3\nd,4,ignored\n").unwrap();
        assert_eq!(graph.start_node, Some(3));
        assert_eq!(graph.end_node, Some(4));
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn other_field_counts_are_ignored() {
        let graph = parse_graph("7\n1,2,3,4\nS\n").unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.start_node, None);
    }

    #[test]
    fn bad_number_is_reported() {
        let err = parse_graph("0,10\n0,x\n").unwrap_err();
        match err {
            LoadError::Parse { line_number, .. } => assert_eq!(line_number, 2),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(parse_graph("0,1,heavy\n").is_err());
        assert!(parse_graph("S,start\n").is_err());
    }

    /// Ids are unsigned, so a negative node or square aborts the load.
    #[test]
    fn negative_ids_are_rejected() {
        let err = parse_graph("0,10\n3,-5\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line_number: 2, .. }));
        assert!(parse_graph("-1,10\n").is_err());
        assert!(parse_graph("0,-1,5.0\n").is_err());
    }

    #[test]
    fn missing_file() {
        let err = load_graph("this_file_does_not_exist.txt").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.to_string(), "this_file_does_not_exist.txt not found");
    }
}
