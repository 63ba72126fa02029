//! Candidate sources — where the roster comes from.
//!
//! `MockCandidateSource` serves the embedded fixture; `HttpCandidateSource`
//! talks to the people backend and falls back to the fixture when it fails.
//! `AppState` holds an `Arc<dyn CandidateSource>`, chosen at startup via
//! `USE_MOCK_DATA`.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::candidate::Candidate;

pub mod http;
pub mod mock;

pub use http::HttpCandidateSource;
pub use mock::MockCandidateSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// The full roster, with detailed records wherever they could be loaded.
    async fn list_candidates(&self) -> Result<Vec<Candidate>, SourceError>;

    /// A single detailed record, or `None` if the id is unknown.
    async fn candidate_details(&self, id: &str) -> Result<Option<Candidate>, SourceError>;

    /// Short label for logs and health output.
    fn backend(&self) -> &'static str;
}
