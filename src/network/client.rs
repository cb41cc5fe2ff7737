//! HTTP client for the poll service

use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{NewPoll, Poll, PollList, VoteRequest};

/// Thin wrapper around a shared reqwest client and the service base URL
#[derive(Clone, Debug)]
pub struct PollClient {
    http: reqwest::Client,
    base_url: String,
}

impl PollClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        PollClient {
            http: create_client(timeout),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}` → `{ polls: [...] }`
    pub async fn fetch_polls(&self) -> Result<Vec<Poll>, ApiError> {
        let resp = self.http.get(&self.base_url).send().await?;
        let list: PollList = decode(resp).await?;
        Ok(list.polls)
    }

    /// `POST {base}/new`
    pub async fn create_poll(&self, poll: &NewPoll) -> Result<Poll, ApiError> {
        let url = format!("{}/new", self.base_url);
        let resp = self.http.post(&url).json(poll).send().await?;
        decode(resp).await
    }

    /// `PUT {base}/{poll_id}`
    pub async fn cast_vote(&self, vote: &VoteRequest) -> Result<Poll, ApiError> {
        let url = self.poll_url(&vote.poll_id)?;
        let resp = self.http.put(url).json(vote).send().await?;
        decode(resp).await
    }

    /// `{base}/{poll_id}` with the id percent-encoded as a single segment
    fn poll_url(&self, poll_id: &str) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ApiError::Url(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(format!("{} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .push(poll_id);
        Ok(url)
    }

    /// Run one command and turn the outcome into a response message.
    ///
    /// Returns None for commands that don't talk to the server.
    pub async fn execute(&self, command: NetworkCommand) -> Option<NetworkResponse> {
        let kind = command.failure_kind()?;
        let result = match command {
            NetworkCommand::FetchPolls { id } => self
                .fetch_polls()
                .await
                .map(|polls| NetworkResponse::PollsFetched { id, polls })
                .map_err(|e| (id, e)),
            NetworkCommand::CreatePoll { id, poll } => self
                .create_poll(&poll)
                .await
                .map(|poll| NetworkResponse::PollCreated { id, poll })
                .map_err(|e| (id, e)),
            NetworkCommand::CastVote { id, vote } => self
                .cast_vote(&vote)
                .await
                .map(|poll| NetworkResponse::VoteRecorded { id, poll })
                .map_err(|e| (id, e)),
            NetworkCommand::Shutdown => return None,
        };

        Some(result.unwrap_or_else(|(id, e)| NetworkResponse::Failed {
            id,
            kind,
            message: describe(&e),
        }))
    }
}

/// Non-success statuses are errors; success bodies must decode
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let body = resp.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn describe(error: &ApiError) -> String {
    match error {
        ApiError::Transport(e) if e.is_timeout() => String::from("Request timed out"),
        ApiError::Transport(e) if e.is_connect() => format!("Connection failed: {}", e),
        other => other.to_string(),
    }
}

/// Create an HTTP client with default configuration
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "HTTP client builder failed, using defaults without timeout");
            reqwest::Client::new()
        })
}
