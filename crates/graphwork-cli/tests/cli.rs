use std::fs;
use std::path::PathBuf;

use graphwork::{ErrorKind, reset_default_graph_attrs};
use graphwork_cli::{GraphArgs, GraphSource, GraphworkOptions, OutputArgs, RunOutput, run_main};
use pretty_assertions::assert_eq;
use serial_test::serial;
use tempfile::tempdir;

fn dot_options(source: GraphSource) -> GraphworkOptions {
    GraphworkOptions {
        source,
        graph: GraphArgs {
            print_dot: true,
            ..GraphArgs::default()
        },
        output: OutputArgs::default(),
    }
}

fn expect_dot(opts: &GraphworkOptions) -> String {
    match run_main(opts).expect("run") {
        RunOutput::Dot(dot) => dot,
        other => panic!("expected DOT output, got {other:?}"),
    }
}

#[test]
#[serial]
fn small_example_prints_undirected_dot() {
    reset_default_graph_attrs();
    let dot = expect_dot(&dot_options(GraphSource::SmallExample));

    assert!(dot.starts_with("graph {\n"), "{dot}");
    assert!(dot.contains("rankdir=\"LR\""));
    assert_eq!(dot.matches(" -- ").count(), 12);
    assert!(dot.contains("\"Z\" -- \"Y\" [weight=\"15\"]"));
}

#[test]
#[serial]
fn attr_overrides_and_directed_flag_apply() {
    reset_default_graph_attrs();
    let mut opts = dot_options(GraphSource::SmallExample);
    opts.graph.attrs = vec![("rankdir".to_string(), "TB".to_string())];
    opts.graph.directed = true;

    let dot = expect_dot(&opts);

    assert!(dot.starts_with("digraph {\n"));
    assert!(dot.contains("rankdir=\"TB\""));
    assert!(!dot.contains("rankdir=\"LR\""));
    assert_eq!(dot.matches(" -> ").count(), 12);
}

#[test]
fn seeded_large_example_is_reproducible() {
    let opts = dot_options(GraphSource::LargeExample { seed: Some(11) });
    assert_eq!(expect_dot(&opts), expect_dot(&opts));
}

#[test]
#[serial]
fn json_file_source_is_rendered_to_dot() {
    reset_default_graph_attrs();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("graph.json");
    fs::write(
        &path,
        r#"{
            "vertices": ["solo", {"id": "a", "label": "Start"}],
            "edges": [{"tail": "a", "head": "b", "attrs": {"weight": "4"}}],
            "attrs": {"rankdir": "BT"}
        }"#,
    )
    .expect("write graph");

    let mut opts = dot_options(GraphSource::File(path));
    opts.graph.attrs = vec![("bgcolor".to_string(), "white".to_string())];
    let dot = expect_dot(&opts);

    assert_eq!(
        dot,
        "graph {\n\tbgcolor=\"white\"\n\trankdir=\"BT\"\n\t\"solo\"\n\t\"a\" [label=\"Start\"]\n\t\"a\" -- \"b\" [weight=\"4\"]\n}\n"
    );
}

#[test]
fn missing_json_file_is_file_not_found() {
    let dir = tempdir().expect("tempdir");
    let opts = dot_options(GraphSource::File(dir.path().join("nope.json")));

    let err = run_main(&opts).expect_err("missing file");
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
}

#[test]
#[serial]
fn missing_renderer_surfaces_to_caller() {
    let dir = tempdir().expect("tempdir");
    let opts = GraphworkOptions {
        source: GraphSource::SmallExample,
        graph: GraphArgs::default(),
        output: OutputArgs {
            output_dir: dir.path().to_path_buf(),
            program: Some(PathBuf::from("/nonexistent/graphviz/dot")),
            ..OutputArgs::default()
        },
    };

    let err = run_main(&opts).expect_err("no renderer");
    assert_eq!(err.kind(), ErrorKind::RendererNotFound);
}

#[cfg(unix)]
#[test]
#[serial]
fn renders_image_with_configured_program() {
    use std::os::unix::fs::PermissionsExt;

    let tools = tempdir().expect("tempdir");
    let out = tempdir().expect("tempdir");
    let script = tools.path().join("fake-dot");
    fs::write(&script, "#!/bin/sh\ncp \"$4\" \"$3\"\n").expect("write script");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod");

    let opts = GraphworkOptions {
        source: GraphSource::SmallExample,
        graph: GraphArgs::default(),
        output: OutputArgs {
            output_dir: out.path().to_path_buf(),
            name: "quick_render".to_string(),
            program: Some(script),
            ..OutputArgs::default()
        },
    };

    let output = run_main(&opts).expect("render");
    assert_eq!(output, RunOutput::Image(out.path().join("quick_render.png")));
    assert!(out.path().join("quick_render.png").exists());
    assert!(!out.path().join("quick_render").exists());
}
