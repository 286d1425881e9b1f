//! Surface - The Markup Contract
//!
//! Handlers never touch a rendering engine directly. Everything they read
//! from or write to the page goes through [`Surface`], which captures the
//! subset of DOM operations the site relies on.
//!
//! ```text
//! browser event ─▶ UiController handler ─▶ Surface writes ─▶ (element, attribute, value)
//! ```
//!
//! [`MemorySurface`] is the in-process implementation used by tests and
//! headless previews. It records every write in order.

mod memory;
mod selector;

pub use memory::*;
pub use selector::*;

use std::fmt;
use std::sync::Arc;

/// Identifier of an element on the surface
///
/// For elements declared in the markup this is their `id` attribute;
/// elements created at runtime receive a generated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(Arc<str>);

impl ElementId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scroll geometry of the window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Vertical scroll offset (`pageYOffset`)
    pub scroll_y: f64,
    /// Window inner height
    pub inner_height: f64,
    /// Full document scroll height
    pub document_height: f64,
}

/// An element to be created under a parent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewElement {
    pub tag: String,
    pub classes: Vec<String>,
    pub text: String,
    pub style: Vec<(String, String)>,
}

impl NewElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((property.into(), value.into()));
        self
    }
}

/// Read/write access to the page
pub trait Surface {
    /// All elements matching `selector`, in document order
    fn query_all(&self, selector: &Selector) -> Vec<ElementId>;

    /// First element matching `selector`
    fn query(&self, selector: &Selector) -> Option<ElementId> {
        self.query_all(selector).into_iter().next()
    }

    /// Nearest element (starting with `element` itself) matching `selector`
    fn closest(&self, element: &ElementId, selector: &Selector) -> Option<ElementId>;

    fn attribute(&self, element: &ElementId, name: &str) -> Option<String>;

    fn has_class(&self, element: &ElementId, class: &str) -> bool;

    /// Current text content of the element
    fn text_content(&self, element: &ElementId) -> String;

    /// Current value of a form input
    fn value(&self, element: &ElementId) -> String;

    fn is_disabled(&self, element: &ElementId) -> bool;

    /// Distance from the viewport top to the element's top edge
    fn bounding_top(&self, element: &ElementId) -> f64;

    /// Rendered height of the element
    fn bounding_height(&self, element: &ElementId) -> f64;

    fn viewport(&self) -> Viewport;

    fn set_text(&mut self, element: &ElementId, text: &str);

    fn set_attribute(&mut self, element: &ElementId, name: &str, value: &str);

    fn set_style(&mut self, element: &ElementId, property: &str, value: &str);

    fn set_value(&mut self, element: &ElementId, value: &str);

    fn set_disabled(&mut self, element: &ElementId, disabled: bool);

    fn add_class(&mut self, element: &ElementId, class: &str);

    fn remove_class(&mut self, element: &ElementId, class: &str);

    /// Flip a class, returning whether it is now present
    fn toggle_class(&mut self, element: &ElementId, class: &str) -> bool {
        if self.has_class(element, class) {
            self.remove_class(element, class);
            false
        } else {
            self.add_class(element, class);
            true
        }
    }

    fn append_child(&mut self, parent: &ElementId, child: NewElement) -> ElementId;

    /// Remove every descendant of `element`
    fn clear_children(&mut self, element: &ElementId);

    /// Remove `element` and its descendants
    fn remove(&mut self, element: &ElementId);

    /// Smoothly scroll `element` into view
    fn scroll_into_view(&mut self, element: &ElementId);
}
