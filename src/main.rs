//! Folio UI - Headless Preview
//!
//! Loads the site configuration, starts the page controller against an
//! in-memory copy of the page skeleton and logs every write it makes.

use std::time::Instant;

use folio_ui::app::{DocumentReadiness, UiController};
use folio_ui::services::{FileStore, MemoryStore, PreferenceStore};
use folio_ui::surface::{Element, MemorySurface};
use folio_ui::telemetry::init_tracing;
use folio_ui::utils::config_store::load_site_config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing for logging
    init_tracing();

    tracing::info!("Starting Folio UI preview...");

    if let Err(e) = run().await {
        tracing::error!("Preview failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> folio_ui::Result<()> {
    let config = load_site_config()?;

    let store: Box<dyn PreferenceStore> = match FileStore::open_default() {
        Ok(store) => {
            tracing::debug!("Preferences at {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!("Preferences will not persist: {e}");
            Box::new(MemoryStore::new())
        }
    };

    let mut ui = UiController::from_config(config, store, &chrono::Local::now())?;
    let mut surface = page_skeleton();
    ui.start(&mut surface, DocumentReadiness::Interactive, Instant::now())
        .await;

    for write in surface.writes() {
        tracing::debug!("{} {} = {:?}", write.element, write.attribute, write.value);
    }
    tracing::info!(
        "Rendered in {} with the {} theme: {} writes",
        ui.state().language.display_name(),
        ui.state().theme.as_str(),
        surface.writes().len()
    );
    Ok(())
}

/// The elements the handlers address by id or class
fn page_skeleton() -> MemorySurface {
    let mut page = MemorySurface::new();
    page.insert("nav", Element::new("nav").class("navbar"));
    page.insert_under("nav", "langWrapper", Element::new("div").class("lang-toggle-wrapper"));
    page.insert_under("langWrapper", "langToggle", Element::new("button"));
    for lang in ["tr", "en"] {
        page.insert_under(
            "langWrapper",
            &format!("lang-{lang}"),
            Element::new("a").class("lang-option").attr("data-lang", lang),
        );
    }
    page.insert_under("nav", "themeToggle", Element::new("button"));
    page.insert_under("themeToggle", "themeIcon", Element::new("img"));
    page.insert_under(
        "nav",
        "navContact",
        Element::new("a").class("nav-contact").class("contact-link"),
    );
    page.insert(
        "hero",
        Element::new("section").class("parallax").localized("Merhaba", "Hello"),
    );
    page.insert("titleCarousel", Element::new("div"));
    page.insert("contact", Element::new("section").class("scroll-fade"));
    page.insert_under("contact", "contactForm", Element::new("form"));
    for input in ["contactName", "contactEmail", "contactMessage"] {
        page.insert_under("contactForm", input, Element::new("input"));
    }
    page.insert_under(
        "contactForm",
        "submit",
        Element::new("button").class("submit-button").localized("Gönder", "Send"),
    );
    page.insert_under("contact", "successMessage", Element::new("div"));
    page.insert_under("successMessage", "backButton", Element::new("button"));
    page
}
