//! Shared CLI options for graphwork subcommands.

use std::path::PathBuf;

use clap::Args;

use graphwork::render::{DEFAULT_STEM, Format, RenderOptions};

/// Options that shape the graph itself.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Graph attribute overriding the defaults, e.g. `-a rankdir=TB` (repeatable)
    #[arg(
        short = 'a',
        long = "attr",
        value_name = "KEY=VALUE",
        value_parser = parse_attr_arg,
        action = clap::ArgAction::Append,
        global = true
    )]
    pub attrs: Vec<(String, String)>,

    /// Draw a directed graph (`->`) instead of an undirected one
    #[arg(long, global = true)]
    pub directed: bool,

    /// Print the DOT source instead of rendering
    #[arg(long = "dot", global = true)]
    pub print_dot: bool,
}

/// Options that control where and how the image is written.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory to write the image into
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// File stem of the image (the extension comes from --format)
    #[arg(long = "name", value_name = "STEM", default_value = DEFAULT_STEM, global = true)]
    pub name: String,

    /// Image format: png, svg or pdf
    #[arg(long, value_name = "FORMAT", default_value = "png", global = true)]
    pub format: Format,

    /// Layout program (defaults to $GRAPHWORK_DOT, then `dot`)
    #[arg(long, value_name = "PROGRAM", global = true)]
    pub program: Option<PathBuf>,

    /// Keep the intermediate DOT source next to the image
    #[arg(long = "keep-source", global = true)]
    pub keep_source: bool,

    /// Open the image in the OS viewer after rendering
    #[arg(long, global = true)]
    pub open: bool,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            name: DEFAULT_STEM.to_string(),
            format: Format::default(),
            program: None,
            keep_source: false,
            open: false,
        }
    }
}

impl OutputArgs {
    pub fn to_render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::new()
            .with_directory(&self.output_dir)
            .with_stem(&self.name)
            .with_format(self.format)
            .with_cleanup(!self.keep_source)
            .with_open(self.open);
        if let Some(program) = &self.program {
            options = options.with_program(program);
        }
        options
    }
}

fn parse_attr_arg(input: &str) -> Result<(String, String), String> {
    graphwork::attrs::parse_attr(input).map_err(|err| err.message().to_string())
}
