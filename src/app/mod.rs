//! Application Layer
//!
//! The page controller and its load-time scheduling.

pub mod controller;
pub mod ready;

pub use controller::{EventResponse, UiController};
pub use ready::{DocumentReadiness, ReadyGate};
