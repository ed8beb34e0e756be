//! Error types for loading configuration and writing census logs.
//!
//! The simulation core itself is infallible; everything that can fail lives
//! at the edges (files, command-line values).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PpsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("species entry {entry}: cannot parse {field} from {token:?}")]
    InvalidSpeciesField {
        entry: usize,
        field: &'static str,
        token: String,
    },
    #[error("species table is empty")]
    NoSpecies,
    #[error("invalid {what}: {value} (must be at least 1)")]
    InvalidDimension { what: &'static str, value: u32 },
    #[error("invalid particle density {0} (must be a finite, non-negative number)")]
    InvalidDensity(f32),
    #[error("failed to write census log {path}: {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PpsError>;
