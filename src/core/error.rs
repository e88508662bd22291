//! Error types for loading, rendering and click resolution

use thiserror::Error;

/// The dataset could not be fetched
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to reach {uri}: {reason}")]
    Connection { uri: String, reason: String },

    #[error("{uri} answered with status {status}")]
    Status { uri: String, status: u16 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported source uri: {0}")]
    UnsupportedScheme(String),
}

/// The fetched document does not match `[{x, y, z, name}, ...]`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedDataError {
    #[error("invalid JSON: {0}")]
    Syntax(String),

    #[error("expected a top-level array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("element {index} is not an object (found {found})")]
    NotAnObject { index: usize, found: &'static str },

    #[error("element {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("element {index} field `{field}` must be {expected}, found {found}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("element {index} has an empty name")]
    EmptyLabel { index: usize },
}

/// Anything that can go wrong in `PointCloudLoader::load`
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Malformed(#[from] MalformedDataError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("surface `{0}` already holds a plot")]
    AlreadyRendered(String),

    #[error("surface `{surface}` has no plot {plot}")]
    UnknownPlot { surface: String, plot: u64 },
}

/// A click referenced a point that does not exist
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClickError {
    #[error("clicked index {0} is negative")]
    NegativeIndex(isize),

    #[error("clicked index {index} is out of range for {len} points")]
    OutOfRange { index: usize, len: usize },
}
