//! HTTP client for posting form values
//!
//! Sends the form as a JSON body and expects a JSON reply carrying a
//! `message` string.

use super::traits::SubmitClientTrait;
use crate::state::FormValues;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Body returned by the backend on success
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
}

/// Reasons a submission can fail
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for submitting forms over HTTP
pub struct HttpSubmitClient {
    http: Client,
}

impl HttpSubmitClient {
    /// Create a new client with a per-request timeout
    pub fn new(timeout: Duration) -> Result<Self, SubmitError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl SubmitClientTrait for HttpSubmitClient {
    async fn submit(
        &self,
        endpoint: &str,
        values: &FormValues,
    ) -> Result<SubmitResponse, SubmitError> {
        let response = self.http.post(endpoint).json(values).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::warn!("Could not read {status} response body from {endpoint}: {err}");
                    String::new()
                }
            };
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
