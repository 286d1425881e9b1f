//! Folio UI Library
//!
//! Client-side behavior of a bilingual portfolio site: theme and language
//! switching, scroll effects, the title carousel and the contact form. The
//! page is reached through the [`surface::Surface`] trait, so every handler
//! runs headless.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod surface;
pub mod telemetry;
pub mod theme;
pub mod utils;

pub use app::{DocumentReadiness, EventResponse, UiController};
pub use error::{Error, Result};
