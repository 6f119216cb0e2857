//! Trait abstraction for the submission client to enable mocking in tests

use super::client::{SubmitError, SubmitResponse};
use crate::state::FormValues;
use async_trait::async_trait;

/// Sends form values to a backend endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitClientTrait: Send + Sync {
    /// POST `values` as JSON to `endpoint` and decode the reply
    async fn submit(
        &self,
        endpoint: &str,
        values: &FormValues,
    ) -> Result<SubmitResponse, SubmitError>;
}
