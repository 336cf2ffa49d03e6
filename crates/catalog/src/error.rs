//! Error types for the catalog crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while ingesting a catalog file.
///
/// Deliberately small: per-line and per-field problems are not errors.
/// A structurally wrong line is dropped, and an unparseable numeric token
/// downgrades the field to missing and goes through the diagnostics side
/// channel (see [`crate::diagnostics`]). Only a source that cannot be opened
/// or read at all surfaces here, and it is fatal to the load, not to the
/// process — the caller decides whether to carry on with an empty catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The source file could not be opened or read.
    #[error("failed to read catalog source {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
