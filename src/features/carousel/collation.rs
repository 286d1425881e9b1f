//! Turkish Collation
//!
//! Orders titles with the CLDR Turkish tailoring: letters follow the Turkish
//! alphabet (c < ç, g < ğ, ı < i, o < ö, s < ş, u < ü), other accents are a
//! secondary difference and case is tertiary with lowercase first. Dotted
//! and dotless I keep their Turkish case pairs (I ↔ ı, İ ↔ i). Composed and
//! decomposed spellings of a letter compare equal.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use icu_locale_core::locale;

static TURKISH: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    let prefs: CollatorPreferences = locale!("tr").into();
    match Collator::try_new(prefs, CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::error!("Turkish collation data unavailable, using code point order: {e}");
            None
        }
    }
});

/// Compare two strings in Turkish collation order
///
/// Strings the collator considers equal fall back to code point order, so
/// the result is total.
pub fn compare_tr(a: &str, b: &str) -> Ordering {
    TURKISH
        .as_ref()
        .map_or(Ordering::Equal, |collator| collator.compare(a, b))
        .then_with(|| a.cmp(b))
}

/// Sort in place, ascending, in Turkish collation order
pub fn sort_tr(items: &mut [String]) {
    items.sort_by(|a, b| compare_tr(a, b));
}
