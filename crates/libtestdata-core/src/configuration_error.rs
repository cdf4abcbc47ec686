use std::path::PathBuf;
use thiserror::Error;

/// Errors that mean a fixture suite is set up incorrectly.
///
/// These are never retried: every variant is a deterministic function of the
/// suite definition and the state of the filesystem.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Fixture root `{}` does not exist", root.display())]
    RootNotFound {
        root: PathBuf,
    },

    #[error("Fixture root `{}` is not a directory", root.display())]
    RootNotADirectory {
        root: PathBuf,
    },

    #[error("Invalid fixture pattern `{pattern}`: {err}")]
    InvalidPattern {
        pattern: String,
        err: regex::Error,
    },

    #[error("Failure while walking fixture root `{}`: {err}", root.display())]
    WalkError {
        root: PathBuf,
        err: walkdir::Error,
    },

    #[error("Fixture path `{}` is not valid UTF-8", path.display())]
    NonUtf8Path {
        path: PathBuf,
    },

    #[error("Failure while reading directives from `{}`: {err}", path.display())]
    DirectiveReadError {
        path: PathBuf,
        err: std::io::Error,
    },
}
