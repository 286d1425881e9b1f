//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::config::SiteConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// File name of the site configuration inside the config directory
pub const SITE_CONFIG_FILE: &str = "site.toml";

/// Load a TOML config file, falling back to defaults when it is absent
pub fn load_config<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load `site.toml` from the platform config directory
pub fn load_site_config() -> Result<SiteConfig> {
    let path = get_or_create_config_dir()?.join(SITE_CONFIG_FILE);
    load_config(&path)
}
