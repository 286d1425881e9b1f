//! UiEvent - Browser Events Fed to the Controller
//!
//! The synchronous events a page binding forwards. Form submission and
//! readiness changes await collaborators and go through the controller's
//! async methods instead.

use std::time::Instant;

use crate::app::{EventResponse, UiController};
use crate::features::effects::IntersectionEntry;
use crate::surface::{ElementId, Surface};

/// Synchronous page events
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Click on an element (after hit testing)
    Click { target: ElementId },

    /// Window scrolled
    Scroll,

    /// Reveal observer delivered entries
    Intersection { entries: Vec<IntersectionEntry> },

    /// Timer tick
    Tick { now: Instant },
}

impl UiEvent {
    /// Create a click event
    pub fn click(target: impl Into<ElementId>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }
}

impl UiController {
    /// Run the handler for `event`
    pub fn dispatch(&mut self, surface: &mut dyn Surface, event: UiEvent) -> EventResponse {
        match event {
            UiEvent::Click { target } => return self.on_click(surface, &target),
            UiEvent::Scroll => {
                self.on_scroll(surface);
            }
            UiEvent::Intersection { entries } => self.on_intersection(surface, &entries),
            UiEvent::Tick { now } => {
                self.tick(surface, now);
            }
        }
        EventResponse::default()
    }
}
