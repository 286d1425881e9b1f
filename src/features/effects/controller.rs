//! Effects Controller
//!
//! Scroll-driven visuals and in-page navigation.

use crate::constants::{class, id};
use crate::surface::{ElementId, Selector, Surface};

use super::scroll::{
    IntersectionEntry, ObserverOptions, has_navbar_shadow, in_reveal_range, navbar_shadow,
    parallax_offset, parallax_position, scroll_progress,
};

/// What one scroll pass computed
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub offset: f64,
    pub navbar_shadow: bool,
    pub parallax_offset: f64,
    /// Percentage scrolled; computed but not shown anywhere
    pub progress: f64,
    /// Reveal targets found in range by this pass
    pub revealed: usize,
}

/// Scroll and navigation effects
#[derive(Debug, Clone, Default)]
pub struct EffectsController {
    options: ObserverOptions,
}

impl EffectsController {
    /// Create a controller with custom observer options
    pub fn new(options: ObserverOptions) -> Self {
        Self { options }
    }

    /// Handle a window scroll event
    pub fn on_scroll(&self, surface: &mut dyn Surface) -> ScrollFrame {
        let viewport = surface.viewport();
        let offset = viewport.scroll_y;

        if let Some(navbar) = surface.query(&Selector::class(class::NAVBAR)) {
            surface.set_style(&navbar, "box-shadow", navbar_shadow(offset));
        }

        let position = parallax_position(offset);
        for layer in surface.query_all(&Selector::class(class::PARALLAX)) {
            surface.set_style(&layer, "background-position", &position);
        }

        let revealed = self.reveal_in_range(surface);

        ScrollFrame {
            offset,
            navbar_shadow: has_navbar_shadow(offset),
            parallax_offset: parallax_offset(offset),
            progress: scroll_progress(&viewport),
            revealed,
        }
    }

    /// Scroll-path reveal: mark in-range targets visible
    ///
    /// Only adds the class; hiding again is the observer's job.
    pub fn reveal_in_range(&self, surface: &mut dyn Surface) -> usize {
        let inner_height = surface.viewport().inner_height;
        let mut revealed = 0;
        for target in surface.query_all(&Selector::class(class::SCROLL_FADE)) {
            if in_reveal_range(surface.bounding_top(&target), inner_height) {
                surface.add_class(&target, class::VISIBLE);
                revealed += 1;
            }
        }
        revealed
    }

    /// Observer path: show intersecting targets, hide the rest
    pub fn on_intersection(&self, surface: &mut dyn Surface, entries: &[IntersectionEntry]) {
        for entry in entries {
            if entry.is_intersecting {
                surface.add_class(&entry.target, class::VISIBLE);
            } else {
                surface.remove_class(&entry.target, class::VISIBLE);
            }
        }
    }

    /// Compute observations for every reveal target from the current layout
    pub fn observe(&self, surface: &dyn Surface) -> Vec<IntersectionEntry> {
        let inner_height = surface.viewport().inner_height;
        surface
            .query_all(&Selector::class(class::SCROLL_FADE))
            .into_iter()
            .map(|target| {
                let top = surface.bounding_top(&target);
                let height = surface.bounding_height(&target);
                self.options.observe(target, top, height, inner_height)
            })
            .collect()
    }

    /// Handle a click; returns whether the default navigation was prevented
    ///
    /// Same-page fragment links scroll smoothly to their target, and
    /// contact links scroll to the contact section. Missing targets are
    /// ignored.
    pub fn on_click(&self, surface: &mut dyn Surface, target: &ElementId) -> bool {
        let fragment_link = Selector::tag("a").with_attribute_prefix("href", "#");
        if let Some(anchor) = surface.closest(target, &fragment_link) {
            let href = surface.attribute(&anchor, "href").unwrap_or_default();
            self.scroll_to_fragment(surface, &href);
            return true;
        }

        if surface.closest(target, &Selector::class(class::CONTACT_LINK)).is_some() {
            self.scroll_to_fragment(surface, &format!("#{}", id::CONTACT_SECTION));
            return true;
        }

        false
    }

    fn scroll_to_fragment(&self, surface: &mut dyn Surface, href: &str) {
        let fragment = href.trim_start_matches('#');
        if fragment.is_empty() {
            return;
        }
        match surface.query(&Selector::id(fragment)) {
            Some(section) => surface.scroll_into_view(&section),
            None => tracing::debug!("No element for fragment {href}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Element, MemorySurface, Viewport};

    fn page() -> MemorySurface {
        let mut surface = MemorySurface::new();
        surface.insert("nav", Element::new("nav").class("navbar"));
        surface.insert("hero", Element::new("section").class("parallax"));
        surface.insert("stars", Element::new("div").class("parallax"));
        surface.insert("about", Element::new("section").class("scroll-fade").top(100.0).height(300.0));
        surface.insert("work", Element::new("section").class("scroll-fade").top(900.0).height(300.0));
        surface.insert("toAbout", Element::new("a").attr("href", "#about"));
        surface.insert("toNowhere", Element::new("a").attr("href", "#missing"));
        surface.insert("contact", Element::new("section"));
        surface.insert("mail", Element::new("a").class("contact-link"));
        surface.insert_under("mail", "mailIcon", Element::new("img"));
        surface.set_viewport(Viewport {
            scroll_y: 0.0,
            inner_height: 800.0,
            document_height: 2400.0,
        });
        surface
    }

    #[test]
    fn scroll_updates_navbar_and_parallax() {
        let mut surface = page();
        let effects = EffectsController::default();

        surface.scroll_to(400.0);
        let frame = effects.on_scroll(&mut surface);

        assert!(frame.navbar_shadow);
        assert_eq!(surface.style("nav", "box-shadow"), Some("0 4px 20px rgba(0, 0, 0, 0.1)"));
        assert_eq!(surface.style("hero", "background-position"), Some("center 200px"));
        assert_eq!(surface.style("stars", "background-position"), Some("center 200px"));
        assert_eq!(frame.progress, 25.0);

        surface.scroll_to(80.0);
        effects.on_scroll(&mut surface);
        assert_eq!(surface.style("nav", "box-shadow"), Some("none"));
    }

    #[test]
    fn scroll_reveal_only_adds() {
        let mut surface = page();
        let effects = EffectsController::default();

        assert_eq!(effects.reveal_in_range(&mut surface), 1);
        assert!(surface.element("about").expect("about").has_class("visible"));
        assert!(!surface.element("work").expect("work").has_class("visible"));

        surface.set_top("about", 2000.0);
        effects.reveal_in_range(&mut surface);
        assert!(surface.element("about").expect("about").has_class("visible"));
    }

    #[test]
    fn observer_visibility_is_revocable() {
        let mut surface = page();
        let effects = EffectsController::default();

        let entries = effects.observe(&surface);
        effects.on_intersection(&mut surface, &entries);
        assert!(surface.element("about").expect("about").has_class("visible"));

        surface.set_top("about", -1000.0);
        let entries = effects.observe(&surface);
        effects.on_intersection(&mut surface, &entries);
        assert!(!surface.element("about").expect("about").has_class("visible"));
    }

    #[test]
    fn fragment_click_scrolls_smoothly() {
        let mut surface = page();
        let effects = EffectsController::default();

        assert!(effects.on_click(&mut surface, &ElementId::from("toAbout")));
        assert_eq!(surface.scrolled_into_view(), &[ElementId::from("about")]);
    }

    #[test]
    fn missing_fragment_is_prevented_but_silent() {
        let mut surface = page();
        let effects = EffectsController::default();

        assert!(effects.on_click(&mut surface, &ElementId::from("toNowhere")));
        assert!(surface.scrolled_into_view().is_empty());
    }

    #[test]
    fn contact_link_icon_scrolls_to_contact() {
        let mut surface = page();
        let effects = EffectsController::default();

        assert!(effects.on_click(&mut surface, &ElementId::from("mailIcon")));
        assert_eq!(surface.scrolled_into_view()[0], ElementId::from("contact"));

        assert!(!effects.on_click(&mut surface, &ElementId::from("hero")));
    }
}
