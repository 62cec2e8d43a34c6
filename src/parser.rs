//! JSON graph loading with eager validation.
//!
//! Input shape:
//!
//! ```json
//! { "nodes": [1, 2, "hub"], "edges": [[1, 2], [2, "hub"]] }
//! ```
//!
//! Node labels may be integers or strings. Every edge endpoint must be
//! declared in `nodes`; an undeclared endpoint is rejected here, at load
//! time, so malformed input can never surface mid-classification.

use crate::graph::{Label, LabeledGraph};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// What can go wrong while loading a graph file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("edge [{u}, {v}] references undeclared node '{node}'")]
    UndeclaredNode { u: Label, v: Label, node: Label },
}

#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    nodes: Vec<Label>,
    #[serde(default)]
    edges: Vec<(Label, Label)>,
}

/// Loads and validates a graph description from a JSON file.
pub fn load_graph(path: &Path) -> Result<LabeledGraph, ParseError> {
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file: GraphFile = serde_json::from_str(&text).map_err(|source| ParseError::Json {
        path: path.display().to_string(),
        source,
    })?;
    build_graph(file)
}

fn build_graph(file: GraphFile) -> Result<LabeledGraph, ParseError> {
    let mut graph = LabeledGraph::new();
    for label in file.nodes {
        graph.add_node(label);
    }
    for (u, v) in file.edges {
        // Reject edges that mention labels absent from the node list
        // instead of silently materializing them.
        if graph.id_of(&u).is_none() {
            return Err(ParseError::UndeclaredNode {
                node: u.clone(),
                u,
                v,
            });
        }
        if graph.id_of(&v).is_none() {
            return Err(ParseError::UndeclaredNode {
                node: v.clone(),
                u,
                v,
            });
        }
        graph.add_edge(&u, &v);
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<LabeledGraph, ParseError> {
        let file: GraphFile = serde_json::from_str(text).expect("test fixture is valid JSON");
        build_graph(file)
    }

    #[test]
    fn test_load_integer_labels() {
        let g = parse(r#"{"nodes": [1, 2, 3], "edges": [[1, 2], [2, 3]]}"#).unwrap();
        assert_eq!(g.graph().node_count(), 3);
        assert_eq!(g.graph().edge_count(), 2);
    }

    #[test]
    fn test_load_mixed_labels() {
        let g = parse(r#"{"nodes": ["a", 1], "edges": [["a", 1]]}"#).unwrap();
        assert_eq!(g.graph().edge_count(), 1);
        assert_eq!(g.id_of(&Label::Text("a".into())), Some(0));
        assert_eq!(g.id_of(&Label::Int(1)), Some(1));
    }

    #[test]
    fn test_isolated_nodes_survive_loading() {
        let g = parse(r#"{"nodes": [1, 2, 3], "edges": [[1, 2]]}"#).unwrap();
        assert_eq!(g.graph().node_count(), 3);
        assert_eq!(g.graph().edge_count(), 1);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let g = parse(r#"{}"#).unwrap();
        assert_eq!(g.graph().node_count(), 0);
    }

    #[test]
    fn test_undeclared_endpoint_rejected() {
        let err = parse(r#"{"nodes": [1], "edges": [[1, 2]]}"#).unwrap_err();
        match err {
            ParseError::UndeclaredNode { node, .. } => assert_eq!(node, Label::Int(2)),
            other => panic!("expected UndeclaredNode, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_graph(Path::new("/nonexistent/graph.json")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, "not json").unwrap();
        let err = load_graph(&path).unwrap_err();
        assert!(matches!(err, ParseError::Json { .. }));
    }
}
