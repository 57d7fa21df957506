//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! missing fields during import from plain-mapping data and I/O or JSON
//! failures while reading and writing distribution files.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A required key was absent, or not of a usable type, in a plain-mapping import.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// Reading or writing a distribution file failed.
    #[error("distribution file error for '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A distribution file held malformed JSON.
    #[error("malformed distribution file '{path}'")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
