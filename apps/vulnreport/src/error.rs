//! Error type shared by parsing and configuration.
//!
//! Emitting messages never fails; only the edges that turn user input into
//! levels, format variants, or an effective configuration return these.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving reporter settings.
#[derive(Debug, Error)]
pub enum Error {
    /// A verbosity name that is not one of the known levels
    #[error("invalid verbosity level {given:?} (expected one of: {expected})")]
    InvalidLevel { given: String, expected: String },

    /// A report format name that is not a supported CycloneDX version
    #[error("invalid report format {given:?} (expected one of: {expected})")]
    InvalidFormat { given: String, expected: String },

    /// Config file exists but could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file was read but is not valid TOML/YAML for the schema
    #[error("invalid config {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
