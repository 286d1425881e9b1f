//! Effects - Scroll reveal, navbar shadow, parallax and anchor scrolling

pub mod controller;
pub mod scroll;

pub use controller::{EffectsController, ScrollFrame};
pub use scroll::{IntersectionEntry, ObserverOptions};
