//! UiController - Page Handlers
//!
//! One controller per page load. It owns the shared [`UiState`] and routes
//! each browser event to the feature that reacts to it. Features never call
//! each other; they meet only on the [`Surface`].

use std::time::Instant;

use chrono::Timelike;

use crate::constants::{class, id};
use crate::domain::config::{ContactConfig, LanguageSwitch, SiteConfig};
use crate::domain::preference::{Language, Theme};
use crate::features::carousel::CarouselLoader;
use crate::features::contact::{ContactController, Notifications, Severity};
use crate::features::effects::{EffectsController, IntersectionEntry, ScrollFrame};
use crate::features::localization::Localizer;
use crate::features::preferences::{initial_preference, save_language};
use crate::error::Result;
use crate::i18n::i18n_contact;
use crate::services::{
    ContactTransport, PreferenceStore, TitleSource, title_source_from_config,
    transport_from_config,
};
use crate::state::{ContactPhase, UiState};
use crate::surface::{ElementId, Selector, Surface};
use crate::theme::theme_icon;

use super::ready::{DocumentReadiness, ReadyGate};

/// What the browser should do with the event after the handler ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl EventResponse {
    fn prevented() -> Self {
        Self {
            default_prevented: true,
            ..Default::default()
        }
    }

    fn stopped() -> Self {
        Self {
            propagation_stopped: true,
            ..Default::default()
        }
    }
}

/// Page controller
pub struct UiController {
    config: SiteConfig,
    state: UiState,
    store: Box<dyn PreferenceStore>,
    transport: Box<dyn ContactTransport>,
    titles: Box<dyn TitleSource>,
    localizer: Localizer,
    effects: EffectsController,
    carousel: CarouselLoader,
    contact: ContactController,
    notifications: Notifications,
    carousel_gate: ReadyGate,
}

impl UiController {
    /// Controller with collaborators chosen by `config`
    ///
    /// Fails when `base_url` or a configured resource path is malformed.
    pub fn from_config(
        config: SiteConfig,
        store: Box<dyn PreferenceStore>,
        now: &impl Timelike,
    ) -> Result<Self> {
        let transport = transport_from_config(&config)?;
        let titles = title_source_from_config(&config)?;
        Ok(Self::new(config, store, transport, titles, now))
    }

    /// Controller with explicit collaborators
    ///
    /// The language is read from `store` and the theme from `now`.
    pub fn new(
        config: SiteConfig,
        store: Box<dyn PreferenceStore>,
        transport: Box<dyn ContactTransport>,
        titles: Box<dyn TitleSource>,
        now: &impl Timelike,
    ) -> Self {
        let preference = initial_preference(store.as_ref(), config.default_language, now);
        let localizer = Localizer::new(config.language_switch, config.excluded_text_class.clone());

        Self {
            state: UiState::new(preference),
            store,
            transport,
            titles,
            effects: EffectsController::default(),
            carousel: CarouselLoader::default(),
            contact: ContactController::new(localizer.clone()),
            localizer,
            notifications: Notifications::default(),
            carousel_gate: ReadyGate::default(),
            config,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Page load: theme, language and the first reveal pass
    pub fn init(&mut self, surface: &mut dyn Surface) {
        self.apply_theme(surface);
        self.localizer.apply_language(surface, self.state.language);
        self.effects.reveal_in_range(surface);
        tracing::info!(
            "UI initialized (language {}, theme {})",
            self.state.language.display_name(),
            self.state.theme.as_str()
        );
    }

    /// Start the page at the given readiness, loading titles if it allows
    pub async fn start(
        &mut self,
        surface: &mut dyn Surface,
        readiness: DocumentReadiness,
        now: Instant,
    ) {
        self.init(surface);
        self.carousel_gate = ReadyGate::new(readiness);
        if readiness.is_ready() {
            self.on_content_loaded(surface, now);
        }
        if self.carousel_gate.schedule() {
            self.load_titles(surface).await;
        }
    }

    /// Document readiness changed
    pub async fn on_ready_state(
        &mut self,
        surface: &mut dyn Surface,
        readiness: DocumentReadiness,
        now: Instant,
    ) {
        let was_ready = self.carousel_gate.readiness().is_ready();
        let run_titles = self.carousel_gate.advance(readiness);
        if readiness.is_ready() && !was_ready {
            self.on_content_loaded(surface, now);
        }
        if run_titles {
            self.load_titles(surface).await;
        }
    }

    /// Fetch and render the carousel
    pub async fn load_titles(&mut self, surface: &mut dyn Surface) -> bool {
        self.carousel.load_titles(self.titles.as_ref(), surface).await
    }

    fn on_content_loaded(&mut self, surface: &mut dyn Surface, now: Instant) {
        if matches!(self.config.contact, ContactConfig::Relay(_)) && !self.transport.is_available() {
            tracing::error!("Email relay not loaded");
            let message = i18n_contact(self.state.language, "relay_load_failed");
            self.notifications.show(surface, &message, Severity::Error, now);
        }
    }

    /// Theme toggle clicked
    pub fn on_theme_toggle(&mut self, surface: &mut dyn Surface) -> Theme {
        let theme = self.state.toggle_theme();
        self.apply_theme(surface);
        theme
    }

    fn apply_theme(&self, surface: &mut dyn Surface) {
        let theme = self.state.theme;
        surface.set_attribute(&ElementId::from(id::ROOT), "data-theme", theme.as_str());
        if let Some(icon) = surface.query(&Selector::id(id::THEME_ICON)) {
            surface.set_attribute(&icon, "src", theme_icon(theme));
        }
    }

    /// Language trigger clicked
    pub fn on_language_trigger(&mut self, surface: &mut dyn Surface) -> EventResponse {
        match self.localizer.switch() {
            LanguageSwitch::Dropdown => {
                if let Some(wrapper) = surface.query(&Selector::class(class::LANG_WRAPPER)) {
                    self.state.language_menu_open = surface.toggle_class(&wrapper, class::ACTIVE);
                }
                EventResponse::stopped()
            }
            LanguageSwitch::Toggle => {
                self.set_language(surface, self.state.language.toggled());
                EventResponse::default()
            }
        }
    }

    /// A `.lang-option` entry clicked
    pub fn on_language_option(&mut self, surface: &mut dyn Surface, option: &ElementId) {
        let Some(code) = surface.attribute(option, "data-lang") else {
            return;
        };
        match code.parse::<Language>() {
            Ok(language) => self.set_language(surface, language),
            Err(e) => tracing::warn!("Ignoring language option: {e}"),
        }
        self.close_language_menu(surface);
    }

    /// Switch, persist and apply a language
    pub fn set_language(&mut self, surface: &mut dyn Surface, language: Language) {
        self.state.set_language(language);
        save_language(self.store.as_mut(), language);
        self.localizer.apply_language(surface, language);
    }

    /// A click that reached the document
    pub fn on_document_click(&mut self, surface: &mut dyn Surface) {
        self.close_language_menu(surface);
    }

    fn close_language_menu(&mut self, surface: &mut dyn Surface) {
        if let Some(wrapper) = surface.query(&Selector::class(class::LANG_WRAPPER)) {
            surface.remove_class(&wrapper, class::ACTIVE);
        }
        self.state.language_menu_open = false;
    }

    /// Window scrolled
    pub fn on_scroll(&mut self, surface: &mut dyn Surface) -> ScrollFrame {
        self.effects.on_scroll(surface)
    }

    /// Reveal observer reported
    pub fn on_intersection(&mut self, surface: &mut dyn Surface, entries: &[IntersectionEntry]) {
        self.effects.on_intersection(surface, entries);
    }

    /// Route a click on `target` the way the page's listeners would see it
    pub fn on_click(&mut self, surface: &mut dyn Surface, target: &ElementId) -> EventResponse {
        if surface.closest(target, &Selector::id(id::LANG_TOGGLE)).is_some() {
            return self.on_language_trigger(surface);
        }

        let mut response = EventResponse::default();
        if surface.closest(target, &Selector::id(id::THEME_TOGGLE)).is_some() {
            self.on_theme_toggle(surface);
        } else if surface.closest(target, &Selector::id(id::BACK_BUTTON)).is_some() {
            self.on_back(surface);
        } else if let Some(option) = surface.closest(target, &Selector::class(class::LANG_OPTION)) {
            self.on_language_option(surface, &option);
        }

        if self.effects.on_click(surface, target) {
            response = EventResponse::prevented();
        }
        self.on_document_click(surface);
        response
    }

    /// Contact form submitted
    pub async fn on_submit(&mut self, surface: &mut dyn Surface, now: Instant) -> Option<ContactPhase> {
        self.contact
            .submit(
                surface,
                &mut self.state,
                &mut self.notifications,
                self.transport.as_ref(),
                now,
            )
            .await
    }

    /// Back control on the success panel clicked
    pub fn on_back(&mut self, surface: &mut dyn Surface) {
        self.contact.reset(surface, &mut self.state);
    }

    /// Timer tick: drop expired notifications
    pub fn tick(&mut self, surface: &mut dyn Surface, now: Instant) -> usize {
        self.notifications.sweep(surface, now)
    }
}
