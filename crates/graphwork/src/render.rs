//! Rendering graphs to image files through Graphviz.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use graphwork_error::{Error, Result};
use strum_macros::{Display, EnumString};
use tracing::{debug, info};

use crate::attrs::Attrs;
use crate::descriptor::{Edge, Vertex};
use crate::graph::{Graph, build};
use crate::viewer;

/// File stem used by [`render`] and [`G`].
pub const DEFAULT_STEM: &str = "render";

/// Alternate stem for throwaway renders.
pub const QUICK_RENDER_STEM: &str = "quick_render";

/// Layout program used when nothing else is configured.
pub const DEFAULT_PROGRAM: &str = "dot";

/// Overrides [`DEFAULT_PROGRAM`] when no program is set in [`RenderOptions`].
pub const PROGRAM_ENV: &str = "GRAPHWORK_DOT";

/// Image format passed to the layout program as `-T<format>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    #[default]
    Png,
    Svg,
    Pdf,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Svg => "svg",
            Format::Pdf => "pdf",
        }
    }
}

/// Where and how to render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub directory: PathBuf,
    pub stem: String,
    pub format: Format,
    /// Layout program; falls back to `$GRAPHWORK_DOT`, then `dot`.
    pub program: Option<PathBuf>,
    /// Delete the intermediate DOT source after a successful render.
    pub cleanup: bool,
    /// Open the image in the OS viewer afterwards.
    pub open: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            stem: DEFAULT_STEM.to_string(),
            format: Format::default(),
            program: None,
            cleanup: true,
            open: false,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = stem.into();
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_cleanup(mut self, cleanup: bool) -> Self {
        self.cleanup = cleanup;
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Path the DOT source is written to.
    pub fn source_path(&self) -> PathBuf {
        self.directory.join(&self.stem)
    }

    /// Path the image ends up at.
    pub fn output_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.stem, self.format.extension()))
    }

    /// The layout program these options resolve to.
    pub fn resolve_program(&self) -> PathBuf {
        if let Some(program) = &self.program {
            return program.clone();
        }
        match std::env::var_os(PROGRAM_ENV) {
            Some(program) if !program.is_empty() => PathBuf::from(program),
            _ => PathBuf::from(DEFAULT_PROGRAM),
        }
    }
}

/// Turns a DOT source file into an image file.
pub trait Renderer {
    fn render(&self, source: &Path, output: &Path, format: Format) -> Result<()>;
}

/// Runs a Graphviz layout program as a child process.
#[derive(Debug, Clone)]
pub struct Graphviz {
    program: PathBuf,
}

impl Graphviz {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn for_options(options: &RenderOptions) -> Self {
        Self::new(options.resolve_program())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Renderer for Graphviz {
    fn render(&self, source: &Path, output: &Path, format: Format) -> Result<()> {
        let program = self.program.display().to_string();
        debug!(%program, source = %source.display(), "running layout program");

        let result = Command::new(&self.program)
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(output)
            .arg(source)
            .output();

        let out = match result {
            Ok(out) => out,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::renderer_not_found(program)
                    .with_operation("render::graphviz")
                    .set_source(err));
            }
            Err(err) => {
                return Err(Error::from(err)
                    .with_operation("render::graphviz")
                    .with_context("program", program));
            }
        };

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(Error::render_failed(format!(
                "{} exited with {}: {}",
                program,
                out.status,
                stderr.trim()
            ))
            .with_operation("render::graphviz")
            .with_context("program", program)
            .with_context("output", output.display().to_string()));
        }

        Ok(())
    }
}

/// Render `graph` with `options` through `renderer`, returning the image path.
pub fn render_using(
    graph: &Graph,
    options: &RenderOptions,
    renderer: &dyn Renderer,
) -> Result<PathBuf> {
    if options.stem.is_empty() {
        return Err(Error::config_invalid("output file stem must not be empty")
            .with_operation("render"));
    }

    fs::create_dir_all(&options.directory).map_err(|err| {
        Error::from(err)
            .with_operation("render::create_dir")
            .with_context("path", options.directory.display().to_string())
    })?;

    let source = options.source_path();
    let output = options.output_path();

    fs::write(&source, graph.to_dot()).map_err(|err| {
        Error::from(err)
            .with_operation("render::write_source")
            .with_context("path", source.display().to_string())
    })?;

    renderer.render(&source, &output, options.format)?;

    if options.cleanup {
        fs::remove_file(&source).map_err(|err| {
            Error::from(err)
                .with_operation("render::cleanup")
                .with_context("path", source.display().to_string())
        })?;
    }

    info!(
        path = %output.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph rendered"
    );

    if options.open {
        viewer::open(&output)?;
    }

    Ok(output)
}

/// Render `graph` with `options` through Graphviz.
pub fn render_with(graph: &Graph, options: &RenderOptions) -> Result<PathBuf> {
    render_using(graph, options, &Graphviz::for_options(options))
}

/// Render `graph` to `render.png` in the current directory, optionally
/// opening it.
///
/// The file is overwritten on every call. Keeping a viewer that reloads on
/// change open means `open` only needs to be passed once.
pub fn render(graph: &Graph, open: bool) -> Result<PathBuf> {
    render_with(graph, &RenderOptions::default().with_open(open))
}

/// Render `graph` and open it in the OS viewer.
pub fn show(graph: &Graph) -> Result<PathBuf> {
    render(graph, true)
}

/// Build a graph and render it in one go.
///
/// Short-hand for `render(&build(edges, vertices, attrs), open)`.
#[allow(non_snake_case)]
pub fn G<E, V>(
    edges: impl IntoIterator<Item = E>,
    vertices: impl IntoIterator<Item = V>,
    attrs: Option<&Attrs>,
    open: bool,
) -> Result<PathBuf>
where
    E: Into<Edge>,
    V: Into<Vertex>,
{
    render(&build(edges, vertices, attrs), open)
}
