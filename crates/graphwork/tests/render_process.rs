//! Exercises the child-process path with a shell script standing in for `dot`.
//!
//! Everything here is serial: spawning a script while another thread still
//! holds it open for writing fails with ETXTBSY.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use graphwork::render::PROGRAM_ENV;
use graphwork::sample::{SMALL_FIXED_VERTICES, example_small_fixed};
use graphwork::{ErrorKind, G, RenderOptions, build, from_edges, render_with};
use serial_test::serial;
use tempfile::TempDir;

/// Invoked as `<script> -T<fmt> -o <output> <source>`.
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    let mut perms = fs::metadata(&path).expect("script metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod script");
    path
}

fn fake_dot(dir: &Path) -> PathBuf {
    write_script(dir, "fake-dot", r#"cp "$4" "$3""#)
}

#[test]
#[serial]
fn renders_through_external_program() {
    let tools = TempDir::new().expect("tempdir");
    let out = TempDir::new().expect("tempdir");
    let options = RenderOptions::new()
        .with_directory(out.path())
        .with_program(fake_dot(tools.path()));

    let graph = build(example_small_fixed(), SMALL_FIXED_VERTICES.chars(), None);
    let image = render_with(&graph, &options).expect("render");

    assert_eq!(image, out.path().join("render.png"));
    assert_eq!(fs::read_to_string(&image).expect("read image"), graph.to_dot());
    assert!(!out.path().join("render").exists(), "source should be cleaned up");
}

#[test]
#[serial]
fn nonzero_exit_is_render_failed_with_stderr() {
    let tools = TempDir::new().expect("tempdir");
    let out = TempDir::new().expect("tempdir");
    let script = write_script(tools.path(), "bad-dot", "echo 'syntax error near line 2' >&2\nexit 3");
    let options = RenderOptions::new()
        .with_directory(out.path())
        .with_program(script);

    let err = render_with(&from_edges([("A", "B")]), &options).expect_err("should fail");

    assert_eq!(err.kind(), ErrorKind::RenderFailed);
    assert!(err.message().contains("syntax error near line 2"), "{err}");
    assert!(out.path().join("render").exists());
}

#[test]
#[serial]
fn one_shot_entry_point_writes_render_png() {
    let tools = TempDir::new().expect("tempdir");
    let work = TempDir::new().expect("tempdir");
    let script = fake_dot(tools.path());
    let previous_dir = std::env::current_dir().expect("cwd");

    std::env::set_current_dir(work.path()).expect("chdir");
    // SAFETY: serialized with every other test that touches the environment.
    unsafe { std::env::set_var(PROGRAM_ENV, &script) };

    let result = G(example_small_fixed(), SMALL_FIXED_VERTICES.chars(), None, false);

    unsafe { std::env::remove_var(PROGRAM_ENV) };
    std::env::set_current_dir(previous_dir).expect("restore cwd");

    let image = result.expect("G should render");
    assert!(work.path().join("render.png").exists(), "missing {}", image.display());
}

#[test]
#[serial]
fn env_program_is_used_when_none_configured() {
    unsafe { std::env::set_var(PROGRAM_ENV, "/usr/local/bin/dot-nightly") };
    let resolved = RenderOptions::new().resolve_program();
    unsafe { std::env::remove_var(PROGRAM_ENV) };

    assert_eq!(resolved, PathBuf::from("/usr/local/bin/dot-nightly"));
    assert_eq!(RenderOptions::new().resolve_program(), PathBuf::from("dot"));
}
