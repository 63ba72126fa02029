use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use url::Url;

use crate::models::candidate::Candidate;
use crate::source::mock::MockCandidateSource;
use crate::source::{CandidateSource, SourceError};

/// Client for the people backend (`GET /people`, `GET /people/:id`).
///
/// The roster endpoint returns basic records only, so every listed person is
/// re-fetched in detail concurrently. Failures never surface to callers:
/// the roster falls back to the mock fixture, a detail lookup falls back to
/// the fixture record with the same id.
#[derive(Clone)]
pub struct HttpCandidateSource {
    client: Client,
    base_url: Url,
    fallback: MockCandidateSource,
}

impl HttpCandidateSource {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        fallback: MockCandidateSource,
    ) -> Result<Self, SourceError> {
        let invalid = |reason: String| SourceError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("cannot be used as a base URL".to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: parsed,
            fallback,
        })
    }

    /// Base URL with `segments` appended, each percent-encoded as a single
    /// path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `None` for `.` and `..`, which cannot be addressed as a path segment.
    fn person_url(&self, id: &str) -> Option<Url> {
        if matches!(id, "." | "..") {
            return None;
        }
        Some(self.endpoint(&["people", id]))
    }

    /// Replaces basic roster records with detailed ones wherever the detail
    /// fetch succeeds. Order of the roster is preserved.
    async fn load_details(&self, mut roster: Vec<Candidate>) -> Vec<Candidate> {
        let mut tasks = JoinSet::new();
        for (index, person) in roster.iter().enumerate() {
            let Some(url) = self.person_url(&person.id) else {
                warn!("Cannot address person {:?}; keeping basic record", person.id);
                continue;
            };
            let client = self.client.clone();
            tasks.spawn(async move { (index, fetch_json::<Candidate>(&client, url.as_str()).await) });
        }

        while let Some(joined) = tasks.join_next().await {
            let (index, result) = match joined {
                Ok(pair) => pair,
                Err(e) => {
                    warn!("Detail fetch task failed: {e}");
                    continue;
                }
            };
            let id = roster[index].id.clone();
            match result {
                Ok(detailed) => {
                    debug!("Loaded detailed data for {}", detailed.name);
                    roster[index] = detailed;
                }
                Err(e) => match self.fallback.find(&id) {
                    Some(mock) => {
                        warn!("Detail fetch for {id} failed ({e}); using mock record");
                        roster[index] = mock.clone();
                    }
                    None => warn!("Detail fetch for {id} failed ({e}); keeping basic record"),
                },
            }
        }

        roster
    }
}

#[async_trait]
impl CandidateSource for HttpCandidateSource {
    async fn list_candidates(&self) -> Result<Vec<Candidate>, SourceError> {
        let url = self.endpoint(&["people"]);
        let roster = match fetch_json::<Vec<Candidate>>(&self.client, url.as_str()).await {
            Ok(roster) => roster,
            Err(e) => {
                warn!("Roster fetch from {url} failed ({e}); falling back to mock roster");
                return Ok(self.fallback.roster().to_vec());
            }
        };
        info!("Fetched {} people from {url}", roster.len());

        Ok(self.load_details(roster).await)
    }

    async fn candidate_details(&self, id: &str) -> Result<Option<Candidate>, SourceError> {
        let Some(url) = self.person_url(id) else {
            return Ok(self.fallback.find(id).cloned());
        };
        match fetch_json::<Candidate>(&self.client, url.as_str()).await {
            Ok(candidate) => Ok(Some(candidate)),
            Err(e) => {
                let fallback = self.fallback.find(id).cloned();
                warn!(
                    "Detail fetch for {id} failed ({e}); mock fallback {}",
                    if fallback.is_some() { "found" } else { "missing" }
                );
                Ok(fallback)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}

async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, SourceError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
