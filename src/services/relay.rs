//! Email Relay Client
//!
//! Sends contact messages through EmailJS's REST endpoint using a service
//! id, a template id and the account's public key.

use futures::future::BoxFuture;
use reqwest::Client;

use crate::domain::config::RelayConfig;
use crate::domain::contact::{ContactSubmission, RelayParams, RelayRequest, RelayResponse};
use crate::error::{Error, Result};
use crate::services::ContactTransport;

/// Client for the third-party email relay
#[derive(Debug, Clone)]
pub struct RelayClient {
    config: RelayConfig,
    http: Client,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Use `http` for requests instead of a default client
    pub fn with_http(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Request body for one submission
    pub fn request<'a>(&'a self, submission: &ContactSubmission) -> RelayRequest<'a> {
        RelayRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: RelayParams::from(submission),
        }
    }

    /// Send a message, resolving with the relay's status/text pair
    pub async fn send(&self, submission: &ContactSubmission) -> Result<RelayResponse> {
        if !self.config.is_complete() {
            return Err(Error::RelayUnavailable {
                message: "relay identifiers are not configured".to_string(),
            });
        }

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&self.request(submission))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Rejected {
                message: Some(format!("{}: {text}", status.as_u16())),
            });
        }

        Ok(RelayResponse {
            status: status.as_u16(),
            text,
        })
    }
}

impl ContactTransport for RelayClient {
    fn name(&self) -> &'static str {
        "relay"
    }

    fn is_available(&self) -> bool {
        self.config.is_complete()
    }

    fn deliver<'a>(&'a self, submission: &'a ContactSubmission) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let response = self.send(submission).await?;
            tracing::info!("Email sent successfully: {} {}", response.status, response.text);
            Ok(())
        })
    }
}
