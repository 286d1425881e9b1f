//! i18n - Built-in Message Catalog
//!
//! Strings the page logic itself produces (button labels while sending,
//! notifications, nav labels). Text carried by the markup is handled by the
//! localization feature instead. Catalogs live in `locales/*.yml`.

use rust_i18n::t;

use crate::domain::preference::Language;

/// Get translated string from "contact" namespace
pub fn i18n_contact(lang: Language, key: &str) -> String {
    t!(format!("contact.{key}"), locale = lang.code()).into()
}

/// Get translated string from "nav" namespace
pub fn i18n_nav(lang: Language, key: &str) -> String {
    t!(format!("nav.{key}"), locale = lang.code()).into()
}
