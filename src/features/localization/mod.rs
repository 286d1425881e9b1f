//! Localization - Markup-driven language switching
//!
//! Elements opt in by carrying a `data-tr`/`data-en` style attribute pair;
//! switching languages copies the matching attribute into place.

pub mod controller;

pub use controller::{LocalizedField, Localizer};
