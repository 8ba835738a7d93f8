//! The graph handle and the functions that fill it.

use std::collections::HashMap;

use graphwork_dot::{DotBuilder, GraphKind};
use tracing::debug;

use crate::attrs::{Attrs, merged_graph_attrs};
use crate::descriptor::{Edge, Vertex};

/// A node as registered on a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub label: Option<String>,
    pub attrs: Attrs,
    /// False when the node only exists because an edge mentions it.
    pub explicit: bool,
}

/// In-memory graph description, filled by side effect and then rendered.
///
/// Every id is a node exactly once. Registering a known id again merges the
/// new label and attributes into the existing node, as Graphviz does.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    kind: GraphKind,
    attrs: Attrs,
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Empty graph with exactly these attributes (no defaults merged).
    pub fn new(kind: GraphKind, attrs: Attrs) -> Self {
        Self {
            kind,
            attrs,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: GraphKind) {
        self.kind = kind;
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Nodes in first-registration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn entry(&mut self, id: &str) -> &mut Node {
        let next = self.nodes.len();
        let slot = *self.index.entry(id.to_string()).or_insert(next);
        if slot == next {
            self.nodes.push(Node {
                id: id.to_string(),
                label: None,
                attrs: Attrs::new(),
                explicit: false,
            });
        }
        &mut self.nodes[slot]
    }

    /// DOT source for this graph.
    pub fn to_dot(&self) -> String {
        let mut builder = DotBuilder::new(self.kind);
        for (key, value) in &self.attrs {
            builder.attr(key, value);
        }

        for node in self.nodes.iter().filter(|n| n.explicit) {
            let mut attrs: Vec<(&str, &str)> = Vec::with_capacity(node.attrs.len() + 1);
            if let Some(label) = node.label.as_deref() {
                attrs.push(("label", label));
            }
            attrs.extend(node.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            builder.node(&node.id, &attrs);
        }

        for edge in &self.edges {
            let attrs: Vec<(&str, &str)> = edge
                .attrs
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            builder.edge(&edge.tail, &edge.head, &attrs);
        }

        builder.build()
    }
}

/// Create an undirected graph carrying the process defaults with `attrs`
/// laid on top.
pub fn mkgraph(attrs: Option<&Attrs>) -> Graph {
    Graph::new(GraphKind::Undirected, merged_graph_attrs(attrs))
}

/// Register a node on `graph`.
pub fn mknode(graph: &mut Graph, id: &str, label: Option<&str>, attrs: Option<&Attrs>) {
    let node = graph.entry(id);
    node.explicit = true;
    if let Some(label) = label {
        node.label = Some(label.to_string());
    }
    if let Some(attrs) = attrs {
        node.attrs
            .extend(attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

/// Register an edge on `graph`; unknown endpoints become nodes.
pub fn mkedge(graph: &mut Graph, tail: &str, head: &str, attrs: Option<&Attrs>) {
    graph.entry(tail);
    graph.entry(head);
    graph.edges.push(Edge {
        tail: tail.to_string(),
        head: head.to_string(),
        attrs: attrs.cloned().unwrap_or_default(),
    });
}

/// Build a graph from edges and vertices.
///
/// Vertices are registered first, then edges, both in input order. Vertices
/// only need listing when they are disconnected or need a label or
/// attributes; edge endpoints are added automatically.
pub fn build<E, V>(
    edges: impl IntoIterator<Item = E>,
    vertices: impl IntoIterator<Item = V>,
    attrs: Option<&Attrs>,
) -> Graph
where
    E: Into<Edge>,
    V: Into<Vertex>,
{
    let mut graph = mkgraph(attrs);

    for vertex in vertices {
        let vertex = vertex.into();
        mknode(
            &mut graph,
            &vertex.id,
            vertex.label.as_deref(),
            Some(&vertex.attrs),
        );
    }

    for edge in edges {
        let edge = edge.into();
        mkedge(&mut graph, &edge.tail, &edge.head, Some(&edge.attrs));
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );
    graph
}

/// [`build`] without explicit vertices.
pub fn from_edges<E: Into<Edge>>(edges: impl IntoIterator<Item = E>) -> Graph {
    build(edges, Vec::<Vertex>::new(), None)
}
