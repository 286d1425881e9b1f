//! Contact Transport
//!
//! The seam between the contact form and whichever collaborator delivers
//! the message. Exactly one `deliver` call is made per submission; there is
//! no retry and no timeout beyond what the HTTP client imposes.

use futures::future::BoxFuture;

use crate::domain::config::{ContactConfig, SiteConfig};
use crate::domain::contact::ContactSubmission;
use crate::error::Result;
use crate::services::{BackendClient, RelayClient};

/// A collaborator able to deliver a contact submission
pub trait ContactTransport: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether the collaborator is loaded and can be called at all
    fn is_available(&self) -> bool {
        true
    }

    /// Whether a server-supplied rejection reason is shown to the visitor
    fn shows_server_message(&self) -> bool {
        false
    }

    /// Deliver the submission; `Ok` means the collaborator accepted it
    fn deliver<'a>(&'a self, submission: &'a ContactSubmission) -> BoxFuture<'a, Result<()>>;
}

/// Build the transport selected by the site configuration
pub fn transport_from_config(config: &SiteConfig) -> Result<Box<dyn ContactTransport>> {
    let transport: Box<dyn ContactTransport> = match &config.contact {
        ContactConfig::Relay(relay) => Box::new(RelayClient::new(relay.clone())),
        ContactConfig::Backend { endpoint } => {
            Box::new(BackendClient::new(&config.base_url, endpoint)?)
        }
    };
    Ok(transport)
}
