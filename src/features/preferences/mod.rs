//! Preferences - Language persistence and load-time theme
//!
//! Storage problems never surface to the visitor: reads fall back to the
//! default and failed writes are logged.

use chrono::Timelike;

use crate::constants::LANGUAGE_STORAGE_KEY;
use crate::domain::preference::{Language, Preference};
use crate::services::PreferenceStore;
use crate::theme::compute_theme;

/// Persisted language, or `default` when absent, invalid or unreadable
pub fn load_language(store: &dyn PreferenceStore, default: Language) -> Language {
    match store.get(LANGUAGE_STORAGE_KEY) {
        Ok(Some(code)) => code.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring stored language {code:?}");
            default
        }),
        Ok(None) => default,
        Err(e) => {
            tracing::debug!("Preference storage unavailable: {e}");
            default
        }
    }
}

/// Persist the language choice
pub fn save_language(store: &mut dyn PreferenceStore, language: Language) {
    if let Err(e) = store.set(LANGUAGE_STORAGE_KEY, language.code()) {
        tracing::warn!("Failed to persist language {language}: {e}");
    }
}

/// Preferences in effect at page load
pub fn initial_preference(
    store: &dyn PreferenceStore,
    default_language: Language,
    now: &impl Timelike,
) -> Preference {
    Preference {
        language: load_language(store, default_language),
        theme: compute_theme(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preference::Theme;
    use crate::services::MemoryStore;
    use chrono::NaiveTime;

    #[test]
    fn absent_value_uses_default() {
        let store = MemoryStore::new();
        assert_eq!(load_language(&store, Language::Tr), Language::Tr);
        assert_eq!(load_language(&store, Language::En), Language::En);
    }

    #[test]
    fn invalid_value_uses_default() {
        let store = MemoryStore::with("lang", "klingon");
        assert_eq!(load_language(&store, Language::En), Language::En);
    }

    #[test]
    fn unavailable_storage_is_silent() {
        let mut store = MemoryStore::unavailable();
        save_language(&mut store, Language::Tr);
        assert_eq!(load_language(&store, Language::En), Language::En);
    }

    #[test]
    fn saved_value_is_loaded() {
        let mut store = MemoryStore::new();
        save_language(&mut store, Language::Tr);
        assert_eq!(load_language(&store, Language::En), Language::Tr);
    }

    #[test]
    fn initial_preference_combines_store_and_clock() {
        let store = MemoryStore::with("lang", "tr");
        let night = NaiveTime::from_hms_opt(23, 15, 0).expect("valid time");

        let preference = initial_preference(&store, Language::En, &night);
        assert_eq!(preference.language, Language::Tr);
        assert_eq!(preference.theme, Theme::Dark);
    }
}
