//! Hand a rendered file to the OS default viewer.

use std::path::Path;
use std::process::Command;

use graphwork_error::{Error, Result};
use tracing::debug;

#[cfg(target_os = "macos")]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// Launch the viewer for `path` without waiting for it to exit.
pub fn open(path: &Path) -> Result<()> {
    let mut cmd = opener(path);
    debug!(program = ?cmd.get_program(), path = %path.display(), "opening viewer");
    cmd.spawn().map(drop).map_err(|err| {
        Error::viewer_failed(format!("could not open '{}'", path.display()))
            .with_operation("viewer::open")
            .with_context("program", cmd.get_program().to_string_lossy().into_owned())
            .set_source(err)
    })
}
