//! Preference - Language and Theme

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported page languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Turkish
    Tr,
    /// English
    #[default]
    En,
}

impl Language {
    /// Both languages, in switch order
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    /// Two-letter code used in storage, markup attributes and catalogs
    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Tr => "Türkçe",
            Language::En => "English",
        }
    }

    /// The other language of the pair
    pub fn toggled(self) -> Self {
        match self {
            Language::Tr => Language::En,
            Language::En => Language::Tr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tr" => Ok(Language::Tr),
            "en" => Ok(Language::En),
            other => Err(Error::Invalid {
                message: format!("unsupported language code {other:?}"),
            }),
        }
    }
}

/// Color theme of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the root `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two process-wide preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preference {
    pub language: Language,
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_parse_back() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().ok(), Some(lang));
        }
        assert!("de".parse::<Language>().is_err());
        assert!("TR".parse::<Language>().is_err());
    }

    #[test]
    fn toggles_are_involutions() {
        assert_eq!(Language::Tr.toggled().toggled(), Language::Tr);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
