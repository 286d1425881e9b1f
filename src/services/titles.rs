//! Title List Sources
//!
//! Where the carousel's newline-separated title list is read from.

use std::path::PathBuf;

use futures::future::BoxFuture;
use reqwest::{Client, Url};

use crate::domain::config::{SiteConfig, TitleListConfig};
use crate::error::Result;
use crate::services::resolve_url;

/// A readable title list resource
pub trait TitleSource: Send + Sync {
    /// Location, for logs
    fn describe(&self) -> String;

    /// Fetch the raw list text
    fn fetch(&self) -> BoxFuture<'_, Result<String>>;
}

/// Title list served over HTTP
#[derive(Debug, Clone)]
pub struct HttpTitleSource {
    url: Url,
    http: Client,
}

impl HttpTitleSource {
    /// Source at `path`, resolved against the site URL
    pub fn new(base_url: &str, path: &str) -> Result<Self> {
        Ok(Self {
            url: resolve_url(base_url, path)?,
            http: Client::new(),
        })
    }
}

impl TitleSource for HttpTitleSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    fn fetch(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move {
            let text = self
                .http
                .get(self.url.clone())
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            Ok(text)
        })
    }
}

/// Title list on the local filesystem
#[derive(Debug, Clone)]
pub struct FileTitleSource {
    path: PathBuf,
}

impl FileTitleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TitleSource for FileTitleSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move { Ok(tokio::fs::read_to_string(&self.path).await?) })
    }
}

/// Build the title source selected by the site configuration
pub fn title_source_from_config(config: &SiteConfig) -> Result<Box<dyn TitleSource>> {
    let source: Box<dyn TitleSource> = match &config.title_list {
        TitleListConfig::Http { path } => Box::new(HttpTitleSource::new(&config.base_url, path)?),
        TitleListConfig::File { path } => Box::new(FileTitleSource::new(path)),
    };
    Ok(source)
}
