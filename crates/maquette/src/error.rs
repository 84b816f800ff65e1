use std::result::Result as StdResult;

use thiserror::Error;

/// Result type for maquette operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
///
/// A malformed spec node is not represented here: it is recovered locally
/// during parsing (the subtree is dropped and reported to the import log)
/// and never aborts an import.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// The input document is not parseable at all.
    #[error("parse: {0}")]
    Parse(String),

    /// The text measurer could not compute a content height. Fatal for the
    /// import; no partial tree is returned.
    #[error("measure: {0}")]
    Measure(String),

    /// The requested style name does not resolve to a theme table.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Completion text contained no usable markup payload.
    #[error("extract: {0}")]
    Extract(String),

    /// Geometry failure.
    #[error("geometry: {0}")]
    Geometry(String),
}

impl From<geom::Error> for Error {
    fn from(e: geom::Error) -> Self {
        Self::Geometry(e.to_string())
    }
}
