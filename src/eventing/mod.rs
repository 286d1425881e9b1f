//! Eventing - Page events and their dispatch

pub mod ui_event;

pub use ui_event::UiEvent;
