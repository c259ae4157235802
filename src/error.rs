//! Error types shared by the vaktija core and its data-source collaborators.

use thiserror::Error;

/// Everything that can go wrong between fetching a vaktija document and
/// answering a query against it.
///
/// The core time/query functions only ever produce `InvalidTimeFormat`;
/// the document decoder produces `MalformedDocument`; network and cache
/// I/O produce `SourceUnavailable`. None of these are recoverable — a
/// failed run surfaces the error to the caller and stops.
#[derive(Debug, Error)]
pub enum VaktijaError {
    /// A time string was not of the `H:MM`/`HH:MM` shape.
    #[error("invalid time string {0:?} (expected H:MM or HH:MM)")]
    InvalidTimeFormat(String),

    /// The JSON document did not match the fixed api.vaktija.ba shape.
    #[error("malformed vaktija document: {0}")]
    MalformedDocument(String),

    /// The network or the cache file could not produce a document.
    #[error("vaktija data source unavailable: {0}")]
    SourceUnavailable(String),
}
