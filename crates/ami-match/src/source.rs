use std::future::Future;
use std::pin::Pin;

use ami_core::models::clinic::Clinic;

use crate::error::SourceError;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A remote source of supplementary clinic candidates.
///
/// The aggregator consults a source only when the local directory comes
/// up short. Each lookup is an independent network-bound operation with
/// no cancellation semantics — once issued it runs to completion.
///
/// Methods return boxed futures for dyn compatibility.
pub trait CandidateSource: Send + Sync {
    /// Fetch candidate clinics for one specialty. The optional location
    /// hint biases address text when the source fabricates entries.
    fn fetch_candidates(
        &self,
        specialty: &str,
        location: Option<&str>,
    ) -> BoxFuture<'_, Result<Vec<Clinic>, SourceError>>;
}
