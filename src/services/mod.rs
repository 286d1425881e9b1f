//! Service Layer
//!
//! Abstraction over everything outside the page: preference storage, the
//! title list resource and the two contact collaborators.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        UiController                          │
//! └──────────────────────────────────────────────────────────────┘
//!        │                     │                       │
//!        ▼                     ▼                       ▼
//! ┌───────────────┐   ┌─────────────────┐   ┌─────────────────────┐
//! │PreferenceStore│   │   TitleSource   │   │  ContactTransport   │
//! │ Memory / File │   │  Http / File    │   │ Relay / Backend     │
//! └───────────────┘   └─────────────────┘   └─────────────────────┘
//! ```

mod backend;
mod relay;
mod store;
mod titles;
mod transport;

pub use backend::*;
pub use relay::*;
pub use store::*;
pub use titles::*;
pub use transport::*;

use url::Url;

use crate::error::Result;

/// Resolve a resource reference against the site URL, as a browser does
///
/// Root-relative paths replace the base path, bare paths resolve against
/// the base's directory and absolute URLs pass through unchanged.
pub fn resolve_url(base_url: &str, path: &str) -> Result<Url> {
    let base = Url::parse(base_url)?;
    Ok(base.join(path)?)
}

#[cfg(test)]
pub(crate) mod test_server;
