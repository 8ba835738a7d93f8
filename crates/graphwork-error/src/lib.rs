//! # graphwork-error
//!
//! Unified error handling for graphwork.
//!
//! - **ErrorKind**: what went wrong (e.g. `RendererNotFound`, `RenderFailed`)
//! - **Context**: the operation and key/value pairs that locate the failure
//! - **Source**: the underlying error, kept instead of leaked
//!
//! ```rust
//! use graphwork_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::RenderFailed, "dot exited with status 1")
//!         .with_operation("render::graphviz")
//!         .with_context("program", "dot")
//!         .with_context("output", "render.png"))
//! }
//! ```
//!
//! External errors are wrapped with `set_source(err)`; callers further up
//! the stack only append context. Nothing is retried: every error goes
//! straight back to the caller.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the graphwork Error
pub type Result<T> = std::result::Result<T, Error>;
