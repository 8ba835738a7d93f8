//! Helpers for drawing graphs with Graphviz.
//!
//! Describe a graph as edges (and optionally vertices), get a handle back,
//! render it to `render.png`, and optionally open it in the image viewer.
//!
//! ```no_run
//! use graphwork::{G, attrs, sample};
//!
//! let edges = sample::example_small_fixed();
//!
//! // Left to right by default.
//! G(edges.clone(), Vec::<graphwork::Vertex>::new(), None, true)?;
//!
//! // Top to bottom for this call only.
//! G(edges, Vec::<graphwork::Vertex>::new(), Some(&attrs([("rankdir", "TB")])), true)?;
//! # Ok::<(), graphwork::Error>(())
//! ```
//!
//! # Module Structure
//!
//! - [`attrs`]: attribute maps and the process-wide graph defaults
//! - [`descriptor`]: vertex and edge descriptors
//! - [`graph`]: the graph handle, `mkgraph` / `mknode` / `mkedge` / `build`
//! - [`render`]: `render`, `show`, `G` and the [`Renderer`] seam
//! - [`document`]: JSON graph descriptions
//! - [`sample`]: example inputs
//! - [`viewer`]: launching the OS image viewer

pub mod attrs;
pub mod descriptor;
pub mod document;
pub mod graph;
pub mod render;
pub mod sample;
pub mod viewer;

pub use attrs::{
    Attrs, attrs, default_graph_attrs, remove_default_graph_attr, reset_default_graph_attrs,
    set_default_graph_attr,
};
pub use descriptor::{Edge, Vertex};
pub use document::GraphDocument;
pub use graph::{Graph, Node, build, from_edges, mkedge, mkgraph, mknode};
pub use graphwork_dot::GraphKind;
pub use graphwork_error::{Error, ErrorKind, Result};
pub use render::{
    Format, G, Graphviz, RenderOptions, Renderer, render, render_using, render_with, show,
};
