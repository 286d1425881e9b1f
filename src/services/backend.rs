//! Contact Backend Client
//!
//! Posts `{name, email, message}` as JSON and reads back
//! `{success, error?}`. The reply body decides the outcome, whatever the
//! HTTP status.

use futures::future::BoxFuture;
use reqwest::{Client, Url};

use crate::domain::contact::{BackendReply, ContactSubmission};
use crate::error::{Error, Result};
use crate::services::{ContactTransport, resolve_url};

/// Client for the site's own contact endpoint
#[derive(Debug, Clone)]
pub struct BackendClient {
    url: Url,
    http: Client,
}

impl BackendClient {
    /// Client for `endpoint`, resolved against the site URL
    pub fn new(base_url: &str, endpoint: &str) -> Result<Self> {
        Ok(Self {
            url: resolve_url(base_url, endpoint)?,
            http: Client::new(),
        })
    }

    /// Use `http` for requests instead of a default client
    pub fn with_http(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Post a submission and decode the reply
    pub async fn post(&self, submission: &ContactSubmission) -> Result<BackendReply> {
        let reply = self
            .http
            .post(self.url.clone())
            .json(submission)
            .send()
            .await?
            .json::<BackendReply>()
            .await?;
        Ok(reply)
    }
}

/// Map a decoded reply to the delivery outcome
pub fn reply_outcome(reply: BackendReply) -> Result<()> {
    if reply.success {
        Ok(())
    } else {
        Err(Error::Rejected {
            message: reply.error,
        })
    }
}

impl ContactTransport for BackendClient {
    fn name(&self) -> &'static str {
        "backend"
    }

    fn shows_server_message(&self) -> bool {
        true
    }

    fn deliver<'a>(&'a self, submission: &'a ContactSubmission) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let reply = self.post(submission).await?;
            reply_outcome(reply)
        })
    }
}
