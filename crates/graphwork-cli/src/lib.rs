//! graphwork command-line interface.
pub mod options;

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use graphwork::sample::{self, SMALL_FIXED_VERTICES};
use graphwork::{Graph, GraphDocument, GraphKind, Result, attrs, build, render_with};

pub use options::{GraphArgs, OutputArgs};

/// Where the graph comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// The twelve weighted edges over `S..Z`.
    SmallExample,
    /// 100 random edges over 100 random vertices.
    LargeExample { seed: Option<u64> },
    /// A JSON graph description.
    File(PathBuf),
}

/// Options for running graphwork.
#[derive(Debug, Clone)]
pub struct GraphworkOptions {
    pub source: GraphSource,
    pub graph: GraphArgs,
    pub output: OutputArgs,
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutput {
    Dot(String),
    Image(PathBuf),
}

/// Build the graph described by `opts`.
pub fn build_graph(opts: &GraphworkOptions) -> Result<Graph> {
    let overrides = attrs(opts.graph.attrs.iter().cloned());

    let mut graph = match &opts.source {
        GraphSource::SmallExample => build(
            sample::example_small_fixed(),
            SMALL_FIXED_VERTICES.chars(),
            Some(&overrides),
        ),
        GraphSource::LargeExample { seed } => {
            let (edges, vertices) = match seed {
                Some(seed) => sample::example_large_random_with(&mut StdRng::seed_from_u64(*seed)),
                None => sample::example_large_random(),
            };
            build(edges, vertices, Some(&overrides))
        }
        GraphSource::File(path) => {
            let doc = GraphDocument::load(path)?;
            let mut graph = doc.build();
            for (key, value) in &overrides {
                graph.set_attr(key, value);
            }
            graph
        }
    };

    if opts.graph.directed {
        graph.set_kind(GraphKind::Directed);
    }
    Ok(graph)
}

/// Main entry point
pub fn run_main(opts: &GraphworkOptions) -> Result<RunOutput> {
    let graph = build_graph(opts)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        kind = %graph.kind(),
        "graph ready"
    );

    if opts.graph.print_dot {
        return Ok(RunOutput::Dot(graph.to_dot()));
    }

    let image = render_with(&graph, &opts.output.to_render_options())?;
    Ok(RunOutput::Image(image))
}

