#![allow(dead_code)]

use async_trait::async_trait;
use tracing::debug;

use crate::models::candidate::Candidate;
use crate::source::{CandidateSource, SourceError};

const FIXTURE: &str = include_str!("fixtures/people.json");

/// In-memory roster. Also the fallback for `HttpCandidateSource`.
#[derive(Debug, Clone)]
pub struct MockCandidateSource {
    candidates: Vec<Candidate>,
}

impl MockCandidateSource {
    /// Loads the embedded three-candidate fixture.
    pub fn from_fixture() -> Result<Self, SourceError> {
        let candidates: Vec<Candidate> = serde_json::from_str(FIXTURE)?;
        Ok(Self { candidates })
    }

    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn roster(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn find(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }
}

#[async_trait]
impl CandidateSource for MockCandidateSource {
    async fn list_candidates(&self) -> Result<Vec<Candidate>, SourceError> {
        debug!("Serving {} candidates from mock roster", self.candidates.len());
        Ok(self.candidates.clone())
    }

    async fn candidate_details(&self, id: &str) -> Result<Option<Candidate>, SourceError> {
        Ok(self.find(id).cloned())
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::resolver::resolve_level;

    #[test]
    fn test_fixture_parses() {
        let source = MockCandidateSource::from_fixture().unwrap();
        let names: Vec<_> = source.roster().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith", "Alex Johnson"]);
        assert!(source.roster().iter().all(|c| c.skill_count() == 5));
    }

    #[test]
    fn test_fixture_scores_above_range_clamp() {
        let source = MockCandidateSource::from_fixture().unwrap();
        let john = source.find("mock1").unwrap();
        assert_eq!(resolve_level(john, "JavaScript").value(), 4);
        // React is recorded as 5 upstream
        assert_eq!(resolve_level(john, "React").value(), 4);
        assert_eq!(resolve_level(john, "TypeScript").value(), 3);
    }

    #[tokio::test]
    async fn test_details_unknown_id() {
        let source = MockCandidateSource::from_fixture().unwrap();
        assert!(source.candidate_details("nope").await.unwrap().is_none());
        let jane = source.candidate_details("mock2").await.unwrap().unwrap();
        assert_eq!(jane.name, "Jane Smith");
    }
}
