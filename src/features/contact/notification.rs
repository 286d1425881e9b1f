//! Notifications
//!
//! Floating messages appended to `body`. Each one lives for
//! [`NOTIFICATION_TTL`] and is removed by the next [`Notifications::sweep`]
//! after that. Notifications never replace each other; several may be on
//! screen at once.

use std::time::{Duration, Instant};

use crate::constants::{NOTIFICATION_TTL, class, id};
use crate::surface::{ElementId, NewElement, Surface};
use crate::theme::{FolioColors, notification_style};

/// Kind of notification, also its second class name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    fn background(&self) -> &'static str {
        match self {
            Severity::Success => FolioColors::success(),
            Severity::Error => FolioColors::danger(),
        }
    }
}

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ElementId,
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Live notifications, oldest first
#[derive(Debug, Clone)]
pub struct Notifications {
    ttl: Duration,
    active: Vec<Notification>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL)
    }
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            active: Vec::new(),
        }
    }

    /// Append a notification to the page
    pub fn show(
        &mut self,
        surface: &mut dyn Surface,
        message: &str,
        severity: Severity,
        now: Instant,
    ) -> ElementId {
        let mut element = NewElement::new("div")
            .class(class::NOTIFICATION)
            .class(severity.as_str())
            .text(message);
        for (property, value) in notification_style(severity.background()) {
            element = element.style(property, value);
        }

        let key = surface.append_child(&ElementId::from(id::BODY), element);
        tracing::debug!("Notification {key} ({}): {message}", severity.as_str());

        self.active.push(Notification {
            id: key.clone(),
            message: message.to_string(),
            severity,
            expires_at: now + self.ttl,
        });
        key
    }

    /// Remove every notification whose lifetime has ended
    ///
    /// Returns how many were removed.
    pub fn sweep(&mut self, surface: &mut dyn Surface, now: Instant) -> usize {
        let (expired, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(|n| n.expires_at <= now);
        self.active = live;

        for notification in &expired {
            surface.remove(&notification.id);
        }
        expired.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}
