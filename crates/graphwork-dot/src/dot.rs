//! DOT format utilities for graph rendering.

use std::fmt::Write;

use strum_macros::{Display, EnumString};

/// Whether edges have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum GraphKind {
    /// `graph { a -- b }`
    #[default]
    Undirected,
    /// `digraph { a -> b }`
    Directed,
}

impl GraphKind {
    /// Keyword opening the graph statement.
    pub fn keyword(&self) -> &'static str {
        match self {
            GraphKind::Undirected => "graph",
            GraphKind::Directed => "digraph",
        }
    }

    /// Edge operator between two node ids.
    pub fn edge_op(&self) -> &'static str {
        match self {
            GraphKind::Undirected => "--",
            GraphKind::Directed => "->",
        }
    }
}

/// Escape a string for use between double quotes.
///
/// Only bare `"` is escaped. Backslashes pass through so Graphviz escapes
/// such as `\l`, `\r` and `\N` keep working in labels. A trailing lone
/// backslash is doubled so it cannot swallow the closing quote.
pub fn escape_label(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    let mut backslashes = 0usize;
    for c in input.chars() {
        if c == '"' && backslashes % 2 == 0 {
            out.push('\\');
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        out.push(c);
    }
    if backslashes % 2 == 1 {
        out.push('\\');
    }
    out
}

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// True when `input` can appear unquoted: `[A-Za-z_][A-Za-z0-9_]*`, not a keyword.
pub fn is_plain_id(input: &str) -> bool {
    let mut chars = input.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(input))
}

/// Attribute key, quoted unless it is a plain identifier.
pub fn quote_key(input: &str) -> String {
    if is_plain_id(input) {
        input.to_string()
    } else {
        quote_id(input)
    }
}

/// Quote an identifier so any string is a valid DOT node id.
pub fn quote_id(input: &str) -> String {
    format!("\"{}\"", escape_label(input))
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push('\t');
    }
}

fn write_attr_list(output: &mut String, attrs: &[(&str, &str)]) {
    if attrs.is_empty() {
        return;
    }
    output.push_str(" [");
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{}={}", quote_key(key), quote_id(value));
    }
    output.push(']');
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
    kind: GraphKind,
}

impl DotBuilder {
    /// Start an anonymous graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        let mut output = String::with_capacity(1024);
        let _ = writeln!(output, "{} {{", kind.keyword());
        Self {
            output,
            indent: 1,
            kind,
        }
    }

    /// Start a named graph of the given kind.
    pub fn named(kind: GraphKind, name: &str) -> Self {
        let mut output = String::with_capacity(1024);
        let _ = writeln!(output, "{} {} {{", kind.keyword(), quote_id(name));
        Self {
            output,
            indent: 1,
            kind,
        }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}={}", quote_key(key), quote_id(value));
        self
    }

    /// Add a node statement, with an attribute list when `attrs` is non-empty.
    pub fn node(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(&quote_id(id));
        write_attr_list(&mut self.output, attrs);
        self.output.push('\n');
        self
    }

    /// Add an edge statement using the kind's edge operator.
    pub fn edge(&mut self, tail: &str, head: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(
            self.output,
            "{} {} {}",
            quote_id(tail),
            self.kind.edge_op(),
            quote_id(head)
        );
        write_attr_list(&mut self.output, attrs);
        self.output.push('\n');
        self
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}
