//! Domain - Pure Data Structures and Wire Types
//!
//! These types don't depend on the page and represent the site's data.

pub mod config;
pub mod contact;
pub mod preference;
