//! Blocking client for the aggregation API's submission-search resource.

use serde_json::Value;
use thiserror::Error;

/// Failure modes for one search request.
///
/// Transport and status failures are per-window noise the collector is
/// allowed to skip; a body failure means the endpoint itself is misbehaving
/// and the run should stop.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Body(String),
}

impl FetchError {
    /// True for failures the collector tolerates by skipping the window.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Status(_))
    }
}

/// Seam between the collector and the network. Implemented by
/// [`SubmissionClient`] for real runs and by scripted stubs in the tests.
pub trait Fetch {
    /// Retrieve up to `size` submissions posted before `days_before` days ago.
    fn fetch(&self, subreddit: &str, days_before: u32, size: u32) -> Result<Vec<Value>, FetchError>;
}

/// HTTP client bound to one API root.
pub struct SubmissionClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl SubmissionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl Fetch for SubmissionClient {
    fn fetch(&self, subreddit: &str, days_before: u32, size: u32) -> Result<Vec<Value>, FetchError> {
        let url = format!("{}/search/submission/", self.base_url.trim_end_matches('/'));
        let before = format!("{}d", days_before);
        let size = size.to_string();
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("subreddit", subreddit),
                ("before", before.as_str()),
                ("size", size.as_str()),
            ])
            .send()?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body: Value = resp
            .json()
            .map_err(|e| FetchError::Body(e.to_string()))?;
        match body.get("data").and_then(Value::as_array) {
            Some(posts) => Ok(posts.clone()),
            None => Err(FetchError::Body("no `data` array in response".to_string())),
        }
    }
}
