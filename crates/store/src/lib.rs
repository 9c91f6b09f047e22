//! JSON-file-backed product storage.
//!
//! [`ProductRepo`] owns the in-memory [`Store`] and mirrors it to a
//! [`ProductFile`] after every mutation.

pub mod file;
pub mod repo;
pub mod store;

use std::path::PathBuf;

use catalog_core::error::CoreError;

pub use file::ProductFile;
pub use repo::ProductRepo;
pub use store::Store;

/// Errors raised by the storage layer.
///
/// Domain failures (missing product, empty catalog) pass through as
/// [`CoreError`]; everything else is a problem with the backing file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read product file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write product file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed product file {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode products: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
