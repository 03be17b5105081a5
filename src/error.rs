//! Error types for loading and dumping XML files.

use thiserror::Error;

/// Result alias used across the crate.
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// Errors surfaced by the load and dump operations.
///
/// Underlying diagnostics (I/O and parser messages) are preserved in the
/// variant payloads; nothing is recovered or retried internally.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The path given to the loader does not resolve to an existing regular file.
    #[error("XML file does not exist: {path}")]
    InputMissing { path: String },

    /// The input could not be read or was not well-formed XML.
    #[error("error reading XML: {message}")]
    ParseFailed { message: String },

    /// A record has no accessor for a requested property name.
    #[error("record \"{record}\" has no accessor for property \"{property}\"")]
    AccessorMissing { record: String, property: String },

    /// Building or writing the output document failed.
    #[error("error writing XML: {message}")]
    DumpFailed { message: String },
}

impl XmlError {
    pub(crate) fn parse_failed(err: impl std::fmt::Display) -> Self {
        Self::ParseFailed {
            message: err.to_string(),
        }
    }

    pub(crate) fn dump_failed(err: impl std::fmt::Display) -> Self {
        Self::DumpFailed {
            message: err.to_string(),
        }
    }
}
