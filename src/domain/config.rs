//! Config - Site Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONTACT_ENDPOINT, DEFAULT_TITLE_LIST, EMAILJS_SEND_URL, class};
use crate::domain::preference::Language;

/// Main site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin that relative resource URLs are resolved against
    pub base_url: String,
    /// Where the carousel title list comes from
    pub title_list: TitleListConfig,
    /// Language used when nothing valid is persisted
    pub default_language: Language,
    /// Which language picker the markup carries
    pub language_switch: LanguageSwitch,
    /// Elements with this class keep their text on language changes
    pub excluded_text_class: Option<String>,
    /// Contact delivery collaborator
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            title_list: TitleListConfig::default(),
            default_language: Language::En,
            language_switch: LanguageSwitch::Dropdown,
            excluded_text_class: Some(class::CONTACT_LINK.to_string()),
            contact: ContactConfig::default(),
        }
    }
}

/// Title list location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TitleListConfig {
    /// Fetched over HTTP, relative to `base_url`
    Http { path: String },
    /// Read from the local filesystem
    File { path: String },
}

impl Default for TitleListConfig {
    fn default() -> Self {
        TitleListConfig::Http {
            path: DEFAULT_TITLE_LIST.to_string(),
        }
    }
}

/// Language picker variants found in the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSwitch {
    /// Trigger opens a menu of `.lang-option` entries
    #[default]
    Dropdown,
    /// Trigger flips between the two languages and shows the current code
    Toggle,
}

/// Contact delivery collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContactConfig {
    /// Third-party email relay
    Relay(RelayConfig),
    /// Site backend receiving JSON posts
    Backend {
        #[serde(default = "default_contact_endpoint")]
        endpoint: String,
    },
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig::Relay(RelayConfig::default())
    }
}

fn default_contact_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.to_string()
}

/// Email relay account settings
///
/// The relay counts as not loaded when any identifier is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            endpoint: EMAILJS_SEND_URL.to_string(),
        }
    }
}

impl RelayConfig {
    /// Whether every identifier needed for a send is present
    pub fn is_complete(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key, &self.endpoint]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}
