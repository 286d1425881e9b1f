//! Localization Controller
//!
//! Swaps every localizable element to the chosen language.

use crate::constants::{class, id};
use crate::domain::config::LanguageSwitch;
use crate::domain::preference::Language;
use crate::i18n::i18n_nav;
use crate::surface::{ElementId, Selector, Surface};

/// A field an element can localize through a pair of data attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizedField {
    /// Visible text, from `data-tr` / `data-en`
    Text,
    /// Input placeholder, from `data-tr-placeholder` / `data-en-placeholder`
    Placeholder,
    /// `aria-label`, from `data-tr-aria-label` / `data-en-aria-label`
    AriaLabel,
    /// `title`, from `data-tr-title` / `data-en-title`
    Title,
}

impl LocalizedField {
    pub const ALL: [LocalizedField; 4] = [
        LocalizedField::Text,
        LocalizedField::Placeholder,
        LocalizedField::AriaLabel,
        LocalizedField::Title,
    ];

    /// Attribute carrying this field's translation for `lang`
    pub fn source_attribute(&self, lang: Language) -> String {
        match self {
            LocalizedField::Text => format!("data-{}", lang.code()),
            LocalizedField::Placeholder => format!("data-{}-placeholder", lang.code()),
            LocalizedField::AriaLabel => format!("data-{}-aria-label", lang.code()),
            LocalizedField::Title => format!("data-{}-title", lang.code()),
        }
    }

    /// Elements carrying both locale attributes for this field
    pub fn selector(&self, excluded_class: Option<&str>) -> Selector {
        let selector = Language::ALL
            .iter()
            .fold(Selector::default(), |s, lang| s.with_attribute(self.source_attribute(*lang)));
        match self {
            LocalizedField::Text => selector.excluding_class(excluded_class),
            _ => selector,
        }
    }

    fn write(&self, surface: &mut dyn Surface, element: &ElementId, value: &str) {
        match self {
            LocalizedField::Text => surface.set_text(element, value),
            LocalizedField::Placeholder => surface.set_attribute(element, "placeholder", value),
            LocalizedField::AriaLabel => surface.set_attribute(element, "aria-label", value),
            LocalizedField::Title => surface.set_attribute(element, "title", value),
        }
    }
}

/// Applies a language to the page
#[derive(Debug, Clone)]
pub struct Localizer {
    switch: LanguageSwitch,
    excluded_class: Option<String>,
}

impl Localizer {
    /// Create a localizer
    ///
    /// Elements with `excluded_class` keep their text; their labels are
    /// maintained by the nav updater instead.
    pub fn new(switch: LanguageSwitch, excluded_class: Option<String>) -> Self {
        Self {
            switch,
            excluded_class,
        }
    }

    pub fn switch(&self) -> LanguageSwitch {
        self.switch
    }

    /// Set every localizable field to `lang`
    ///
    /// Idempotent: applying the same language again writes the same values.
    pub fn apply_language(&self, surface: &mut dyn Surface, lang: Language) {
        surface.set_attribute(&ElementId::from(id::ROOT), "data-lang", lang.code());

        for field in LocalizedField::ALL {
            let source = field.source_attribute(lang);
            for element in surface.query_all(&field.selector(self.excluded_class.as_deref())) {
                if let Some(value) = surface.attribute(&element, &source) {
                    field.write(surface, &element, &value);
                }
            }
        }

        self.update_nav_links(surface, lang);
        self.update_trigger(surface, lang);
        tracing::debug!("Applied language {lang}");
    }

    fn update_nav_links(&self, surface: &mut dyn Surface, lang: Language) {
        let Some(link) = surface.query(&Selector::class(class::NAV_CONTACT)) else {
            return;
        };
        let label = i18n_nav(lang, "contact");
        surface.set_attribute(&link, "aria-label", &label);
        surface.set_attribute(&link, "title", &label);
    }

    fn update_trigger(&self, surface: &mut dyn Surface, lang: Language) {
        if self.switch != LanguageSwitch::Toggle {
            return;
        }
        if let Some(trigger) = surface.query(&Selector::id(id::LANG_TOGGLE)) {
            surface.set_text(&trigger, &lang.code().to_uppercase());
        }
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(LanguageSwitch::Dropdown, Some(class::CONTACT_LINK.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Element, MemorySurface};

    fn page() -> MemorySurface {
        let mut surface = MemorySurface::new();
        surface.insert("hero", Element::new("h1").localized("Merhaba", "Hello").text("Hello"));
        surface.insert(
            "contactName",
            Element::new("input")
                .attr("data-tr-placeholder", "Adınız")
                .attr("data-en-placeholder", "Your name"),
        );
        surface.insert(
            "mail",
            Element::new("a")
                .class("contact-link")
                .localized("Yaz", "Write")
                .text("<img>"),
        );
        surface.insert("half", Element::new("p").attr("data-tr", "Yarım").text("orig"));
        surface.insert(
            "github",
            Element::new("a")
                .attr("data-tr-aria-label", "GitHub profilim")
                .attr("data-en-aria-label", "My GitHub profile")
                .attr("data-tr-title", "GitHub")
                .attr("data-en-title", "GitHub"),
        );
        surface.insert("navContact", Element::new("a").class("nav-contact"));
        surface.insert("langToggle", Element::new("button").text("?"));
        surface
    }

    #[test]
    fn swaps_text_placeholders_and_labels() {
        let mut surface = page();
        Localizer::default().apply_language(&mut surface, Language::Tr);

        assert_eq!(surface.text("hero"), Some("Merhaba"));
        let name = surface.element("contactName").expect("input");
        assert_eq!(name.attributes.get("placeholder").map(String::as_str), Some("Adınız"));
        let github = surface.element("github").expect("link");
        assert_eq!(
            github.attributes.get("aria-label").map(String::as_str),
            Some("GitHub profilim")
        );
        let root = surface.element("html").expect("root");
        assert_eq!(root.attributes.get("data-lang").map(String::as_str), Some("tr"));
    }

    #[test]
    fn excluded_and_incomplete_elements_untouched() {
        let mut surface = page();
        Localizer::default().apply_language(&mut surface, Language::Tr);

        assert_eq!(surface.text("mail"), Some("<img>"));
        assert_eq!(surface.text("half"), Some("orig"));
    }

    #[test]
    fn nav_contact_labels_follow_language() {
        let mut surface = page();
        let localizer = Localizer::default();

        localizer.apply_language(&mut surface, Language::Tr);
        let nav = surface.element("navContact").expect("nav");
        assert_eq!(nav.attributes.get("title").map(String::as_str), Some("İletişim"));

        localizer.apply_language(&mut surface, Language::En);
        let nav = surface.element("navContact").expect("nav");
        assert_eq!(nav.attributes.get("aria-label").map(String::as_str), Some("Contact"));
    }

    #[test]
    fn toggle_switch_shows_current_code() {
        let mut surface = page();
        Localizer::new(LanguageSwitch::Toggle, None).apply_language(&mut surface, Language::En);
        assert_eq!(surface.text("langToggle"), Some("EN"));

        let mut surface = page();
        Localizer::default().apply_language(&mut surface, Language::En);
        assert_eq!(surface.text("langToggle"), Some("?"));
    }

    #[test]
    fn without_exclusion_contact_links_are_swapped() {
        let mut surface = page();
        Localizer::new(LanguageSwitch::Dropdown, None).apply_language(&mut surface, Language::En);
        assert_eq!(surface.text("mail"), Some("Write"));
    }

    #[test]
    fn applying_twice_matches_applying_once() {
        for lang in Language::ALL {
            let localizer = Localizer::default();

            let mut once = page();
            localizer.apply_language(&mut once, lang);
            let first = once.take_writes();

            localizer.apply_language(&mut once, lang);
            let second = once.take_writes();

            assert_eq!(first, second, "language {lang}");
        }
    }
}
