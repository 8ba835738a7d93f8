//! Error kinds for graphwork operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Match on this to decide how to react, e.g. print an install hint on
/// `RendererNotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid argument passed to function
    InvalidArgument,

    /// Invalid configuration or parameters
    ConfigInvalid,

    // =========================================================================
    // Rendering errors
    // =========================================================================
    /// The layout program (usually `dot`) could not be started
    RendererNotFound,

    /// The layout program ran but did not produce an image
    RenderFailed,

    /// The OS image viewer could not be launched
    ViewerFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Input errors
    // =========================================================================
    /// A graph description could not be decoded
    DeserializationFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::RenderFailed.to_string(), "RenderFailed");
        assert_eq!(ErrorKind::RendererNotFound.as_str(), "RendererNotFound");
    }
}
