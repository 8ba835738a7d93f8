//! Vertex and edge descriptors.
//!
//! A vertex may be given as a bare identifier or with a label and/or
//! attributes. The `From` impls below cover each shape, so callers can pass
//! `"A"`, `'A'`, `("A", "Alpha")`, `("A", attrs)` or `("A", "Alpha", attrs)`
//! wherever an `impl Into<Vertex>` is expected.

use serde::Deserialize;

use crate::attrs::Attrs;

/// One node to register, optionally labelled and styled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "VertexRepr")]
pub struct Vertex {
    pub id: String,
    pub label: Option<String>,
    pub attrs: Attrs,
}

impl Vertex {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            attrs: Attrs::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// JSON accepts either `"A"` or `{ "id": "A", "label": ..., "attrs": {...} }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum VertexRepr {
    Bare(String),
    Full {
        id: String,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        attrs: Attrs,
    },
}

impl From<VertexRepr> for Vertex {
    fn from(repr: VertexRepr) -> Self {
        match repr {
            VertexRepr::Bare(id) => Vertex::new(id),
            VertexRepr::Full { id, label, attrs } => Vertex { id, label, attrs },
        }
    }
}

impl From<&str> for Vertex {
    fn from(id: &str) -> Self {
        Vertex::new(id)
    }
}

impl From<String> for Vertex {
    fn from(id: String) -> Self {
        Vertex::new(id)
    }
}

impl From<char> for Vertex {
    fn from(id: char) -> Self {
        Vertex::new(id.to_string())
    }
}

impl From<(&str, &str)> for Vertex {
    fn from((id, label): (&str, &str)) -> Self {
        Vertex::new(id).with_label(label)
    }
}

impl From<(String, String)> for Vertex {
    fn from((id, label): (String, String)) -> Self {
        Vertex::new(id).with_label(label)
    }
}

impl From<(&str, Attrs)> for Vertex {
    fn from((id, attrs): (&str, Attrs)) -> Self {
        Vertex {
            id: id.to_string(),
            label: None,
            attrs,
        }
    }
}

impl From<(String, Attrs)> for Vertex {
    fn from((id, attrs): (String, Attrs)) -> Self {
        Vertex {
            id,
            label: None,
            attrs,
        }
    }
}

impl From<(&str, &str, Attrs)> for Vertex {
    fn from((id, label, attrs): (&str, &str, Attrs)) -> Self {
        Vertex {
            id: id.to_string(),
            label: Some(label.to_string()),
            attrs,
        }
    }
}

/// One connection between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Edge {
    pub tail: String,
    pub head: String,
    #[serde(default)]
    pub attrs: Attrs,
}

impl Edge {
    pub fn new(tail: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            tail: tail.into(),
            head: head.into(),
            attrs: Attrs::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// The `weight` attribute, if any.
    pub fn weight(&self) -> Option<&str> {
        self.attrs.get("weight").map(String::as_str)
    }
}

impl From<(&str, &str)> for Edge {
    fn from((tail, head): (&str, &str)) -> Self {
        Edge::new(tail, head)
    }
}

impl From<(String, String)> for Edge {
    fn from((tail, head): (String, String)) -> Self {
        Edge::new(tail, head)
    }
}

impl From<(&str, &str, Attrs)> for Edge {
    fn from((tail, head, attrs): (&str, &str, Attrs)) -> Self {
        Edge {
            tail: tail.to_string(),
            head: head.to_string(),
            attrs,
        }
    }
}

impl From<(String, String, Attrs)> for Edge {
    fn from((tail, head, attrs): (String, String, Attrs)) -> Self {
        Edge { tail, head, attrs }
    }
}
