//! End-to-end page behavior against the in-memory surface.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use chrono::NaiveTime;
use folio_ui::app::{DocumentReadiness, UiController};
use folio_ui::domain::config::{LanguageSwitch, SiteConfig};
use folio_ui::domain::contact::ContactSubmission;
use folio_ui::domain::preference::{Language, Theme};
use folio_ui::eventing::UiEvent;
use folio_ui::error::{Error, Result};
use folio_ui::features::localization::Localizer;
use folio_ui::services::{ContactTransport, MemoryStore, PreferenceStore, TitleSource};
use folio_ui::state::ContactPhase;
use folio_ui::surface::{Element, ElementId, MemorySurface, ViewWrite};
use futures::future::BoxFuture;
use pretty_assertions::assert_eq;

struct Titles(&'static str);

impl TitleSource for Titles {
    fn describe(&self) -> String {
        "inline".to_string()
    }

    fn fetch(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move { Ok(self.0.to_string()) })
    }
}

struct Transport {
    available: bool,
    accept: bool,
    calls: AtomicUsize,
}

impl Transport {
    fn new(available: bool, accept: bool) -> Self {
        Self {
            available,
            accept,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ContactTransport for Transport {
    fn name(&self) -> &'static str {
        "test"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn deliver<'a>(&'a self, _: &'a ContactSubmission) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.accept {
                Ok(())
            } else {
                Err(Error::Rejected { message: None })
            }
        })
    }
}

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 30, 0).expect("time")
}

fn page() -> MemorySurface {
    let mut s = MemorySurface::new();
    s.insert("nav", Element::new("nav").class("navbar"));
    s.insert_under("nav", "wrapper", Element::new("div").class("lang-toggle-wrapper"));
    s.insert_under("wrapper", "langToggle", Element::new("button"));
    s.insert_under("wrapper", "optTr", Element::new("a").class("lang-option").attr("data-lang", "tr"));
    s.insert_under("wrapper", "optEn", Element::new("a").class("lang-option").attr("data-lang", "en"));
    s.insert_under(
        "nav",
        "navContact",
        Element::new("a")
            .class("nav-contact")
            .class("contact-link")
            .localized("İletişim", "Contact")
            .text("<img>"),
    );
    s.insert("hero", Element::new("section").class("parallax").localized("Merhaba", "Hello"));
    s.insert("titleCarousel", Element::new("div"));
    s.insert("about", Element::new("section").class("scroll-fade").top(1200.0).height(400.0));
    s.insert("contact", Element::new("section"));
    s.insert_under("contact", "contactForm", Element::new("form"));
    s.insert_under(
        "contactForm",
        "contactName",
        Element::new("input")
            .attr("data-tr-placeholder", "Adınız")
            .attr("data-en-placeholder", "Your name"),
    );
    s.insert_under("contactForm", "contactEmail", Element::new("input"));
    s.insert_under("contactForm", "contactMessage", Element::new("textarea"));
    s.insert_under(
        "contactForm",
        "send",
        Element::new("button").class("submit-button").localized("Gönder", "Send"),
    );
    s.insert_under("contact", "successMessage", Element::new("div"));
    s.insert_under("successMessage", "backButton", Element::new("button"));
    s
}

fn controller(config: SiteConfig, transport: Transport, titles: &'static str, hour: u32) -> UiController {
    UiController::new(
        config,
        Box::new(MemoryStore::new()),
        Box::new(transport),
        Box::new(Titles(titles)),
        &at(hour),
    )
}

fn fill_form(surface: &mut MemorySurface) {
    surface.type_into("contactName", "Ada");
    surface.type_into("contactEmail", "ada@example.com");
    surface.type_into("contactMessage", "Merhaba!");
}

#[test]
fn applying_a_language_twice_changes_nothing() {
    for language in Language::ALL {
        let mut surface = page();
        let localizer = Localizer::new(LanguageSwitch::Toggle, Some("contact-link".to_string()));

        localizer.apply_language(&mut surface, language);
        let once = surface.clone();
        surface.take_writes();
        localizer.apply_language(&mut surface, language);

        for key in ["hero", "navContact", "contactName", "langToggle", "send"] {
            let before = once.element(key).expect("element");
            let after = surface.element(key).expect("element");
            assert_eq!(before.text, after.text, "{key} text");
            assert_eq!(before.attributes, after.attributes, "{key} attributes");
        }
    }
}

#[test]
fn excluded_contact_link_keeps_its_markup() {
    let mut surface = page();
    let mut ui = controller(SiteConfig::default(), Transport::new(true, true), "", 12);
    ui.set_language(&mut surface, Language::Tr);

    let nav = surface.element("navContact").expect("nav contact");
    assert_eq!(nav.text, "<img>");
    assert_eq!(nav.attributes.get("aria-label").map(String::as_str), Some("İletişim"));
    assert_eq!(nav.attributes.get("title").map(String::as_str), Some("İletişim"));
    assert_eq!(
        surface.element("contactName").expect("input").attributes.get("placeholder").map(String::as_str),
        Some("Adınız")
    );
}

#[test]
fn language_choice_survives_a_reload() {
    let mut store = MemoryStore::new();
    store.set("lang", "tr").expect("set");

    let ui = UiController::new(
        SiteConfig::default(),
        Box::new(store),
        Box::new(Transport::new(true, true)),
        Box::new(Titles("")),
        &at(12),
    );
    assert_eq!(ui.state().language, Language::Tr);

    let ui = UiController::new(
        SiteConfig::default(),
        Box::new(MemoryStore::unavailable()),
        Box::new(Transport::new(true, true)),
        Box::new(Titles("")),
        &at(12),
    );
    assert_eq!(ui.state().language, Language::En);
}

#[test]
fn theme_follows_the_clock_at_load() {
    for (hour, expected) in [
        (19, Theme::Dark),
        (23, Theme::Dark),
        (0, Theme::Dark),
        (6, Theme::Dark),
        (7, Theme::Light),
        (12, Theme::Light),
        (18, Theme::Light),
    ] {
        let ui = controller(SiteConfig::default(), Transport::new(true, true), "", hour);
        assert_eq!(ui.state().theme, expected, "hour {hour}");
    }
}

#[test]
fn scrolling_drives_navbar_and_parallax() {
    let mut surface = page();
    let mut ui = controller(SiteConfig::default(), Transport::new(true, true), "", 12);

    for offset in [0.0, 99.0, 100.0, 101.0, 640.0] {
        surface.scroll_to(offset);
        ui.dispatch(&mut surface, UiEvent::Scroll);

        let shadow = surface.style("nav", "box-shadow").expect("shadow");
        assert_eq!(shadow != "none", offset > 100.0, "offset {offset}");
        assert_eq!(
            surface.style("hero", "background-position"),
            Some(format!("center {}px", offset * 0.5).as_str())
        );
    }
}

#[tokio::test]
async fn carousel_loads_once_after_ready() {
    let mut surface = page();
    let mut ui = controller(
        SiteConfig::default(),
        Transport::new(true, true),
        "Zebra\n  \nelma\n\t\nAyşe\n",
        12,
    );
    let now = Instant::now();

    ui.start(&mut surface, DocumentReadiness::Loading, now).await;
    assert!(surface.children("titleCarousel").is_empty());

    ui.on_ready_state(&mut surface, DocumentReadiness::Interactive, now).await;
    ui.on_ready_state(&mut surface, DocumentReadiness::Complete, now).await;

    let columns = surface.children("titleCarousel");
    assert_eq!(columns.len(), 1);
    let cells: Vec<String> = surface
        .children(columns[0].as_str())
        .iter()
        .map(|cell| surface.text(cell.as_str()).unwrap_or_default().to_string())
        .collect();
    assert_eq!(cells, vec!["Ayşe", "elma", "Zebra"]);

    let renders = surface
        .writes()
        .iter()
        .filter(|w| w.element.as_str() == "titleCarousel" && w.attribute == "innerHTML")
        .count();
    assert_eq!(renders, 1);
}

#[tokio::test]
async fn unavailable_relay_rolls_back_and_notifies() {
    let mut surface = page();
    let transport = Transport::new(false, true);
    let mut ui = controller(SiteConfig::default(), transport, "", 12);
    ui.init(&mut surface);
    fill_form(&mut surface);
    surface.take_writes();

    let phase = ui.on_submit(&mut surface, Instant::now()).await;
    assert_eq!(phase, Some(ContactPhase::Failed));

    let send = ElementId::from("send");
    let disabled: Vec<&ViewWrite> = surface
        .writes()
        .iter()
        .filter(|w| w.element == send && w.attribute == "disabled")
        .collect();
    assert_eq!(
        disabled.iter().map(|w| w.value.as_str()).collect::<Vec<_>>(),
        vec!["true", "false"]
    );
    assert_eq!(surface.text("send"), Some("Send"));
    assert!(!surface.element("successMessage").expect("panel").has_class("show"));

    let notification = &ui.notifications().active()[0];
    assert_eq!(notification.message, "EmailJS not loaded. Refresh and try again.");
    assert!(surface.contains(notification.id.as_str()));
}

#[tokio::test]
async fn success_then_back_restores_empty_form() {
    let mut surface = page();
    let mut ui = controller(SiteConfig::default(), Transport::new(true, true), "", 12);
    ui.init(&mut surface);
    fill_form(&mut surface);

    let phase = ui.on_submit(&mut surface, Instant::now()).await;
    assert_eq!(phase, Some(ContactPhase::Succeeded));
    assert!(surface.element("contactForm").expect("form").has_class("hidden"));
    assert!(surface.element("successMessage").expect("panel").has_class("show"));

    ui.dispatch(&mut surface, UiEvent::click("backButton"));

    assert!(!surface.element("contactForm").expect("form").has_class("hidden"));
    assert!(!surface.element("successMessage").expect("panel").has_class("show"));
    for input in ["contactName", "contactEmail", "contactMessage"] {
        assert_eq!(surface.element(input).expect("input").value, "", "{input}");
    }
    assert!(!surface.element("send").expect("button").disabled);
    assert_eq!(ui.state().contact, ContactPhase::Idle);
}

#[tokio::test]
async fn rejected_submission_notification_expires() {
    let mut surface = page();
    let mut ui = controller(SiteConfig::default(), Transport::new(true, false), "", 12);
    ui.init(&mut surface);
    fill_form(&mut surface);
    let start = Instant::now();

    ui.on_submit(&mut surface, start).await;
    assert_eq!(ui.notifications().active().len(), 1);

    ui.dispatch(&mut surface, UiEvent::Tick { now: start + Duration::from_secs(1) });
    assert_eq!(ui.notifications().active().len(), 1);

    ui.dispatch(&mut surface, UiEvent::Tick { now: start + Duration::from_secs(3) });
    assert!(ui.notifications().active().is_empty());
}
