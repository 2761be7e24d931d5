//! Outward submission of a parsed dataset.
//!
//! The gateway sends the dataset to whatever stands in for a backend and
//! resolves with the dataset that becomes the committed state. It performs
//! no retry and sets no timeout; callers submit one dataset at a time.

use async_trait::async_trait;
use htd_core::Dataset;
use thiserror::Error;

#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use reqwest::Client;

/// Default path of the echo endpoint.
pub const TEMPERATURES_ENDPOINT: &str = "/temperatures";

/// A rejected submission. The message is shown to the user as-is.
#[derive(Debug, Error, PartialEq, Clone)]
#[error("{message}")]
pub struct SubmissionError {
    message: String,
}

impl SubmissionError {
    /// Wrap a failure message; an empty message becomes `"Error"`.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Error".to_string()
        } else {
            message
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Sends a dataset outward and resolves with the dataset to commit.
#[async_trait(?Send)]
pub trait SubmissionGateway {
    async fn submit(&self, dataset: Dataset) -> Result<Dataset, SubmissionError>;
}

/// In-process gateway that hands the dataset straight back.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoGateway;

#[async_trait(?Send)]
impl SubmissionGateway for EchoGateway {
    async fn submit(&self, dataset: Dataset) -> Result<Dataset, SubmissionError> {
        log::debug!("[HTD] gateway: echoing {} records", dataset.len());
        Ok(dataset)
    }
}

/// Where the HTTP gateway posts to.
#[cfg(feature = "api")]
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub endpoint: String,
}

#[cfg(feature = "api")]
impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: TEMPERATURES_ENDPOINT.to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

/// Posts the dataset as a JSON array and decodes the echoed array.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

#[cfg(feature = "api")]
impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[cfg(feature = "api")]
#[async_trait(?Send)]
impl SubmissionGateway for HttpGateway {
    async fn submit(&self, dataset: Dataset) -> Result<Dataset, SubmissionError> {
        let url = self.config.url();
        info!("[HTD] gateway: posting {} records to {}", dataset.len(), url);

        let response = self
            .client
            .post(&url)
            .json(&dataset)
            .send()
            .await
            .map_err(|e| {
                warn!("[HTD] gateway: request to {} failed: {}", url, e);
                SubmissionError::new(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("[HTD] gateway: bad response status from {}: {}", url, status);
            return Err(SubmissionError::new(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        let committed: Dataset = response.json().await.map_err(|e| {
            warn!("[HTD] gateway: failed to decode response from {}: {}", url, e);
            SubmissionError::new(e.to_string())
        })?;
        info!("[HTD] gateway: server confirmed {} records", committed.len());
        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use htd_core::TemperatureRecord;

    #[test]
    fn empty_message_becomes_error() {
        assert_eq!(SubmissionError::new("").message(), "Error");
        assert_eq!(SubmissionError::new("  ").to_string(), "Error");
        assert_eq!(
            SubmissionError::new("Internal server error").to_string(),
            "Internal server error"
        );
    }

    #[tokio::test]
    async fn echo_returns_the_same_dataset() {
        let dataset = vec![TemperatureRecord::new(1859, [Some(20.0); 12], Some(21.4))];
        let committed = EchoGateway.submit(dataset.clone()).await.unwrap();
        assert_eq!(committed, dataset);
    }

    #[cfg(feature = "api")]
    #[test]
    fn config_joins_url() {
        assert_eq!(
            GatewayConfig::new("http://localhost:5000/").url(),
            "http://localhost:5000/temperatures"
        );
        assert_eq!(
            GatewayConfig::new("http://localhost:5000").url(),
            "http://localhost:5000/temperatures"
        );
    }
}
