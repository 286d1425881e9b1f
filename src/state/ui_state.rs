//! UiState - Shared Page State
//!
//! The only state the handlers share. It is owned by the controller and
//! passed explicitly, so handlers can be exercised without a page.

use crate::domain::preference::{Language, Preference, Theme};

/// Phase of the contact panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactPhase {
    /// Form visible, submit enabled
    #[default]
    Idle,
    /// Submit disabled while the collaborator call is pending
    Submitting,
    /// Form hidden, success panel shown
    Succeeded,
    /// Submit re-enabled after an error notification
    Failed,
}

impl ContactPhase {
    /// Whether the form panel (rather than the success panel) is showing
    pub fn form_visible(&self) -> bool {
        !matches!(self, ContactPhase::Succeeded)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ContactPhase::Submitting)
    }
}

/// State shared by the page handlers
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Current language
    pub language: Language,
    /// Current theme
    pub theme: Theme,
    /// Contact panel phase
    pub contact: ContactPhase,
    /// Whether the language dropdown is open
    pub language_menu_open: bool,
}

impl UiState {
    pub fn new(preference: Preference) -> Self {
        Self {
            language: preference.language,
            theme: preference.theme,
            ..Default::default()
        }
    }

    pub fn preference(&self) -> Preference {
        Preference {
            language: self.language,
            theme: self.theme,
        }
    }

    /// Set the language
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
