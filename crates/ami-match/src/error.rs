use thiserror::Error;

/// Failure of a single candidate-source lookup. The aggregator absorbs
/// these at the lookup boundary; they never surface from a match run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("candidate fetch failed: {0}")]
    Fetch(String),

    #[error("candidate decode failed: {0}")]
    Decode(String),
}
