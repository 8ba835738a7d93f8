//! Graph descriptions loaded from JSON.
//!
//! ```json
//! {
//!   "vertices": ["A", {"id": "B", "label": "Bee"}],
//!   "edges": [{"tail": "A", "head": "B", "attrs": {"weight": "3"}}],
//!   "attrs": {"rankdir": "TB"},
//!   "directed": false
//! }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::Path;

use graphwork_dot::GraphKind;
use graphwork_error::{Error, Result};
use serde::Deserialize;

use crate::attrs::Attrs;
use crate::descriptor::{Edge, Vertex};
use crate::graph::{Graph, build};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphDocument {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub attrs: Attrs,
    pub directed: bool,
}

impl GraphDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| {
            Error::deserialization_failed(format!("invalid graph description: {err}"))
                .with_operation("document::from_json")
                .set_source(err)
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("document::load")
                .with_context("path", path.display().to_string())
        })?;
        Self::from_json(&text).map_err(|err| err.with_context("path", path.display().to_string()))
    }

    /// Build the graph, merging `attrs` over the process defaults.
    pub fn build(&self) -> Graph {
        let mut graph = build(
            self.edges.iter().cloned(),
            self.vertices.iter().cloned(),
            Some(&self.attrs),
        );
        if self.directed {
            graph.set_kind(GraphKind::Directed);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::attrs;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_document() {
        let doc = GraphDocument::from_json(
            r#"{
                "vertices": ["Q", {"id": "A", "label": "Alpha"}],
                "edges": [{"tail": "A", "head": "B", "attrs": {"weight": "3"}}],
                "attrs": {"rankdir": "TB"},
                "directed": true
            }"#,
        )
        .unwrap();

        assert_eq!(doc.vertices.len(), 2);
        assert_eq!(doc.edges[0].weight(), Some("3"));
        assert_eq!(doc.attrs, attrs([("rankdir", "TB")]));

        let graph = doc.build();
        assert_eq!(graph.kind(), GraphKind::Directed);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.attrs()["rankdir"], "TB");
    }

    #[test]
    fn empty_object_is_empty_graph() {
        let doc = GraphDocument::from_json("{}").unwrap();
        assert_eq!(doc, GraphDocument::default());
        assert_eq!(doc.build().node_count(), 0);
    }

    #[test]
    fn malformed_edge_is_rejected() {
        let err = GraphDocument::from_json(r#"{"edges": [{"tail": "A"}]}"#).unwrap_err();
        assert_eq!(err.kind(), graphwork_error::ErrorKind::DeserializationFailed);
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = GraphDocument::load(&path).unwrap_err();
        assert_eq!(err.kind(), graphwork_error::ErrorKind::FileNotFound);
        assert_eq!(err.context_value("path"), Some(path.display().to_string().as_str()));
    }
}
