//! Contact Controller
//!
//! Drives the contact panel through `Idle → Submitting → Succeeded | Failed`
//! and back to `Idle` on reset.
//!
//! Submission is split so no page borrow is held while the collaborator
//! call is pending:
//!
//! ```text
//! begin_submit (sync) ─▶ deliver(..).await ─▶ finish_submit (sync)
//! ```

use std::time::Instant;

use crate::constants::{class, id};
use crate::domain::contact::ContactSubmission;
use crate::domain::preference::Language;
use crate::error::{Error, Result};
use crate::features::localization::{LocalizedField, Localizer};
use crate::i18n::i18n_contact;
use crate::services::ContactTransport;
use crate::state::{ContactPhase, UiState};
use crate::surface::{ElementId, Selector, Surface};

use super::notification::{Notifications, Severity};

/// Contact form behavior
#[derive(Debug, Clone)]
pub struct ContactController {
    localizer: Localizer,
    /// Submit label captured when sending began, used when the button
    /// carries no locale attributes
    saved_label: Option<String>,
}

impl ContactController {
    pub fn new(localizer: Localizer) -> Self {
        Self {
            localizer,
            saved_label: None,
        }
    }

    /// Read the three inputs verbatim
    pub fn collect(surface: &dyn Surface) -> ContactSubmission {
        ContactSubmission {
            name: surface.value(&ElementId::from(id::CONTACT_NAME)),
            email: surface.value(&ElementId::from(id::CONTACT_EMAIL)),
            message: surface.value(&ElementId::from(id::CONTACT_MESSAGE)),
        }
    }

    /// Enter `Submitting`: disable the submit control and show the sending
    /// label
    ///
    /// Returns `None` while a submission is already pending or the submit
    /// control is disabled.
    pub fn begin_submit(
        &mut self,
        surface: &mut dyn Surface,
        state: &mut UiState,
    ) -> Option<ContactSubmission> {
        if state.contact.is_submitting() {
            tracing::debug!("Submit ignored, a submission is pending");
            return None;
        }
        let button = submit_button(surface);
        if button.as_ref().is_some_and(|b| surface.is_disabled(b)) {
            tracing::debug!("Submit ignored, the submit control is disabled");
            return None;
        }

        let submission = Self::collect(surface);
        if let Some(button) = button {
            self.saved_label = Some(surface.text_content(&button));
            surface.set_disabled(&button, true);
            surface.set_text(&button, &i18n_contact(state.language, "sending"));
        }
        state.contact = ContactPhase::Submitting;
        Some(submission)
    }

    /// Make the single collaborator call for a submission
    pub async fn deliver(
        transport: &dyn ContactTransport,
        submission: &ContactSubmission,
    ) -> Result<()> {
        if !transport.is_available() {
            return Err(Error::RelayUnavailable {
                message: format!("{} transport is not loaded", transport.name()),
            });
        }
        transport.deliver(submission).await
    }

    /// Leave `Submitting` according to the collaborator's outcome
    pub fn finish_submit(
        &mut self,
        surface: &mut dyn Surface,
        state: &mut UiState,
        notifications: &mut Notifications,
        outcome: &Result<()>,
        shows_server_message: bool,
        now: Instant,
    ) -> ContactPhase {
        let button = submit_button(surface);

        match outcome {
            Ok(()) => {
                tracing::info!("Contact message sent");
                surface.add_class(&ElementId::from(id::CONTACT_FORM), class::HIDDEN);
                surface.add_class(&ElementId::from(id::SUCCESS_MESSAGE), class::SHOW);
                self.localizer.apply_language(surface, state.language);
                if let Some(button) = &button {
                    surface.set_disabled(button, false);
                }
                state.contact = ContactPhase::Succeeded;
            }
            Err(e) => {
                tracing::error!("Contact submission failed: {e}");
                if let Some(button) = &button {
                    surface.set_disabled(button, false);
                    self.restore_label(surface, button, state.language);
                }
                let message = failure_message(e, state.language, shows_server_message);
                notifications.show(surface, &message, Severity::Error, now);
                state.contact = ContactPhase::Failed;
            }
        }

        self.saved_label = None;
        state.contact
    }

    /// Full submit flow against `transport`
    pub async fn submit(
        &mut self,
        surface: &mut dyn Surface,
        state: &mut UiState,
        notifications: &mut Notifications,
        transport: &dyn ContactTransport,
        now: Instant,
    ) -> Option<ContactPhase> {
        let submission = self.begin_submit(surface, state)?;
        let outcome = Self::deliver(transport, &submission).await;
        Some(self.finish_submit(
            surface,
            state,
            notifications,
            &outcome,
            transport.shows_server_message(),
            now,
        ))
    }

    /// Back control: show the form again, cleared
    pub fn reset(&mut self, surface: &mut dyn Surface, state: &mut UiState) {
        surface.remove_class(&ElementId::from(id::CONTACT_FORM), class::HIDDEN);
        surface.remove_class(&ElementId::from(id::SUCCESS_MESSAGE), class::SHOW);
        for input in [id::CONTACT_NAME, id::CONTACT_EMAIL, id::CONTACT_MESSAGE] {
            surface.set_value(&ElementId::from(input), "");
        }
        self.localizer.apply_language(surface, state.language);
        state.contact = ContactPhase::Idle;
    }

    fn restore_label(&self, surface: &mut dyn Surface, button: &ElementId, lang: Language) {
        let label = surface
            .attribute(button, &LocalizedField::Text.source_attribute(lang))
            .or_else(|| self.saved_label.clone());
        if let Some(label) = label {
            surface.set_text(button, &label);
        }
    }
}

fn submit_button(surface: &dyn Surface) -> Option<ElementId> {
    let form = Selector::id(id::CONTACT_FORM);
    surface
        .query_all(&Selector::class(class::SUBMIT_BUTTON))
        .into_iter()
        .find(|button| surface.closest(button, &form).is_some())
}

/// Visitor-facing text for a failed submission
fn failure_message(error: &Error, lang: Language, shows_server_message: bool) -> String {
    match error {
        Error::RelayUnavailable { .. } => i18n_contact(lang, "relay_unavailable"),
        Error::Rejected { message } if shows_server_message => message
            .clone()
            .unwrap_or_else(|| i18n_contact(lang, "unexpected_error")),
        _ if shows_server_message => i18n_contact(lang, "unexpected_error"),
        _ => i18n_contact(lang, "send_failed"),
    }
}
