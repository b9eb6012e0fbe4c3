use thiserror::Error;

/// Errors surfaced by vectorizer fitting and index construction/queries.
///
/// Everything here is local and deterministic — nothing is transient and
/// nothing warrants a retry. Out-of-bounds document ids are programmer
/// errors and panic instead.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Label count does not match the number of corpus documents.
    #[error("label/document count mismatch: {labels} labels for {documents} documents")]
    Shape { labels: usize, documents: usize },

    /// Queried label is not present in the label map.
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Zero documents were provided to `fit` or `build`.
    #[error("corpus is empty")]
    EmptyCorpus,
}
