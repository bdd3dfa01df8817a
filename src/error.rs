use thiserror::Error;

/// Failure raised while rendering a definition to document text.
///
/// Building definitions never fails; all fallibility sits at the dump
/// boundary, where a stored value that is not representable as JSON must
/// surface rather than be dropped or coerced.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DumpError>;
