//! Error types for the pinbatch library.
//!
//! Every fallible operation returns [`Error`]. Configuration and auth errors
//! are always fatal to a run; the remaining kinds are scoped to a single item
//! in batch mode and fatal in single-pin mode. That scoping decision lives in
//! the orchestrator and the binaries, not here.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is absent.
    #[error("missing required environment variable {0}")]
    MissingConfig(&'static str),

    /// The token exchange request never produced a response.
    #[error("token exchange request failed: {0}")]
    AuthTransport(#[source] reqwest::Error),

    /// The token endpoint answered with a non-200 status.
    #[error("token exchange rejected (status {status}): {body}")]
    AuthRejected { status: u16, body: String },

    /// The token endpoint returned 200 but the body was not the expected JSON.
    #[error("token response could not be parsed: {0}")]
    AuthResponse(#[source] reqwest::Error),

    /// The manifest file could not be opened or read.
    #[error("failed to read manifest {path}: {source}")]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The manifest parsed but yielded nothing usable.
    #[error("manifest {path} contains no usable rows")]
    ManifestEmpty { path: PathBuf },

    /// An image file could not be read from disk.
    #[error("failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file's content is not one of the accepted image formats.
    #[error("unsupported content type {detected} for {path}: only image/jpeg and image/png are accepted")]
    Validation { path: PathBuf, detected: String },

    /// The pin-creation request never produced a response.
    #[error("pin creation request failed: {0}")]
    PinTransport(#[source] reqwest::Error),

    /// The pins endpoint answered with a status other than 201.
    #[error("pin creation rejected (status {status}): {body}")]
    PinApi { status: u16, body: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
