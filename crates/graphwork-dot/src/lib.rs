//! DOT source generation.
//!
//! graphwork never lays graphs out itself. It writes DOT text with
//! [`DotBuilder`] and hands it to Graphviz.
//!
//! # Module Structure
//!
//! - [`dot`]: the builder, escaping helpers and [`GraphKind`]

pub mod dot;

pub use dot::{DotBuilder, GraphKind, escape_label, is_plain_id, quote_id, quote_key};
