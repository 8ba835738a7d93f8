use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use graphwork_cli::{GraphArgs, GraphSource, GraphworkOptions, OutputArgs, RunOutput, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "graphwork",
    about = "graphwork: draw a graph with Graphviz in one line",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    graph: GraphArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one of the built-in example graphs
    Example {
        #[arg(value_enum, default_value_t = ExampleKind::Small)]
        which: ExampleKind,

        /// Seed for the large random example
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render a graph described in a JSON file
    Render {
        /// JSON file with `vertices`, `edges`, `attrs` and `directed`
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ExampleKind {
    Small,
    Large,
}

impl Cli {
    fn into_options(self) -> GraphworkOptions {
        let source = match self.command {
            Command::Example {
                which: ExampleKind::Small,
                ..
            } => GraphSource::SmallExample,
            Command::Example {
                which: ExampleKind::Large,
                seed,
            } => GraphSource::LargeExample { seed },
            Command::Render { file } => GraphSource::File(file),
        };
        GraphworkOptions {
            source,
            graph: self.graph,
            output: self.output,
        }
    }
}

pub fn run(args: Cli) -> anyhow::Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = args.into_options();

    match run_main(&opts) {
        Ok(RunOutput::Dot(dot)) => print!("{dot}"),
        Ok(RunOutput::Image(path)) => println!("{}", path.display()),
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            return Err(e.into());
        }
    }

    tracing::info!(total_secs = total_start.elapsed().as_secs_f64(), "complete");
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    run(args)
}
