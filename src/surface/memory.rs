//! MemorySurface - In-process page model that records every write

use ahash::AHashMap;
use hashlink::LinkedHashMap;

use super::{ElementId, NewElement, Selector, Surface, Viewport};
use crate::constants::id;

/// A single observable mutation: `(element, attribute, value)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewWrite {
    pub element: ElementId,
    pub attribute: String,
    pub value: String,
}

/// An element of the in-memory page
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: AHashMap<String, String>,
    pub text: String,
    pub value: String,
    pub disabled: bool,
    pub style: LinkedHashMap<String, String>,
    /// Top edge relative to the viewport, as `getBoundingClientRect().top`
    pub top: f64,
    pub height: f64,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Shorthand for a `data-tr`/`data-en` pair
    pub fn localized(self, tr: &str, en: &str) -> Self {
        self.attr("data-tr", tr).attr("data-en", en)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn parent(&self) -> Option<&ElementId> {
        self.parent.as_ref()
    }
}

/// In-memory [`Surface`]
///
/// Starts with `html` and `body`. Elements keep insertion order, which
/// stands in for document order.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    elements: LinkedHashMap<ElementId, Element>,
    viewport: Viewport,
    writes: Vec<ViewWrite>,
    scrolled: Vec<ElementId>,
    next_generated: u64,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        let mut surface = Self {
            elements: LinkedHashMap::new(),
            viewport: Viewport {
                scroll_y: 0.0,
                inner_height: 800.0,
                document_height: 800.0,
            },
            writes: Vec::new(),
            scrolled: Vec::new(),
            next_generated: 0,
        };
        surface.elements.insert(ElementId::from(id::ROOT), Element::new("html"));
        surface.insert_under(id::ROOT, id::BODY, Element::new("body"));
        surface
    }

    /// Declare a markup element under `body`
    pub fn insert(&mut self, key: &str, element: Element) -> ElementId {
        self.insert_under(id::BODY, key, element)
    }

    /// Declare a markup element under `parent`
    pub fn insert_under(&mut self, parent: &str, key: &str, mut element: Element) -> ElementId {
        let key = ElementId::from(key);
        let parent = ElementId::from(parent);
        element.parent = Some(parent.clone());
        if let Some(p) = self.elements.get_mut(&parent) {
            p.children.push(key.clone());
        }
        self.elements.insert(key.clone(), element);
        key
    }

    pub fn element(&self, key: &str) -> Option<&Element> {
        self.elements.get(&ElementId::from(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.element(key).is_some()
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.element(key).map(|e| e.text.as_str())
    }

    pub fn style(&self, key: &str, property: &str) -> Option<&str> {
        self.element(key)
            .and_then(|e| e.style.get(property))
            .map(String::as_str)
    }

    pub fn children(&self, key: &str) -> Vec<ElementId> {
        self.element(key)
            .map(|e| e.children.clone())
            .unwrap_or_default()
    }

    /// Simulate scrolling the window
    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.viewport.scroll_y = scroll_y;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Simulate layout moving an element
    pub fn set_top(&mut self, key: &str, top: f64) {
        if let Some(e) = self.elements.get_mut(&ElementId::from(key)) {
            e.top = top;
        }
    }

    /// Simulate the user typing into an input, without recording a write
    pub fn type_into(&mut self, key: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(&ElementId::from(key)) {
            e.value = value.to_string();
        }
    }

    /// Every write recorded so far, oldest first
    pub fn writes(&self) -> &[ViewWrite] {
        &self.writes
    }

    pub fn take_writes(&mut self) -> Vec<ViewWrite> {
        std::mem::take(&mut self.writes)
    }

    pub fn scrolled_into_view(&self) -> &[ElementId] {
        &self.scrolled
    }

    fn record(&mut self, element: &ElementId, attribute: &str, value: impl Into<String>) {
        self.writes.push(ViewWrite {
            element: element.clone(),
            attribute: attribute.to_string(),
            value: value.into(),
        });
    }

    fn class_list(&self, element: &ElementId) -> String {
        self.elements
            .get(element)
            .map(|e| e.classes.join(" "))
            .unwrap_or_default()
    }

    fn matches(&self, key: &ElementId, element: &Element, selector: &Selector) -> bool {
        selector.matches(
            &element.tag,
            key.as_str(),
            |c| element.has_class(c),
            |n| element.attributes.get(n).map(String::as_str),
        )
    }

    fn detach_descendants(&mut self, element: &ElementId) {
        let children = match self.elements.get_mut(element) {
            Some(e) => std::mem::take(&mut e.children),
            None => return,
        };
        for child in children {
            self.detach_descendants(&child);
            self.elements.remove(&child);
        }
    }
}

impl Surface for MemorySurface {
    fn query_all(&self, selector: &Selector) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(key, element)| self.matches(key, element, selector))
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn closest(&self, element: &ElementId, selector: &Selector) -> Option<ElementId> {
        let mut current = Some(element.clone());
        while let Some(key) = current {
            let node = self.elements.get(&key)?;
            if self.matches(&key, node, selector) {
                return Some(key);
            }
            current = node.parent.clone();
        }
        None
    }

    fn attribute(&self, element: &ElementId, name: &str) -> Option<String> {
        self.elements
            .get(element)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.elements
            .get(element)
            .is_some_and(|e| e.has_class(class))
    }

    fn text_content(&self, element: &ElementId) -> String {
        self.elements
            .get(element)
            .map(|e| e.text.clone())
            .unwrap_or_default()
    }

    fn value(&self, element: &ElementId) -> String {
        self.elements
            .get(element)
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    fn is_disabled(&self, element: &ElementId) -> bool {
        self.elements.get(element).is_some_and(|e| e.disabled)
    }

    fn bounding_top(&self, element: &ElementId) -> f64 {
        self.elements.get(element).map_or(0.0, |e| e.top)
    }

    fn bounding_height(&self, element: &ElementId) -> f64 {
        self.elements.get(element).map_or(0.0, |e| e.height)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_text(&mut self, element: &ElementId, text: &str) {
        if let Some(e) = self.elements.get_mut(element) {
            e.text = text.to_string();
            self.record(element, "textContent", text);
        }
    }

    fn set_attribute(&mut self, element: &ElementId, name: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(element) {
            e.attributes.insert(name.to_string(), value.to_string());
            self.record(element, name, value);
        }
    }

    fn set_style(&mut self, element: &ElementId, property: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(element) {
            e.style.replace(property.to_string(), value.to_string());
            self.record(element, &format!("style.{property}"), value);
        }
    }

    fn set_value(&mut self, element: &ElementId, value: &str) {
        if let Some(e) = self.elements.get_mut(element) {
            e.value = value.to_string();
            self.record(element, "value", value);
        }
    }

    fn set_disabled(&mut self, element: &ElementId, disabled: bool) {
        if let Some(e) = self.elements.get_mut(element) {
            e.disabled = disabled;
            self.record(element, "disabled", disabled.to_string());
        }
    }

    fn add_class(&mut self, element: &ElementId, class: &str) {
        let Some(e) = self.elements.get_mut(element) else {
            return;
        };
        if !e.has_class(class) {
            e.classes.push(class.to_string());
        }
        let list = self.class_list(element);
        self.record(element, "class", list);
    }

    fn remove_class(&mut self, element: &ElementId, class: &str) {
        let Some(e) = self.elements.get_mut(element) else {
            return;
        };
        e.classes.retain(|c| c != class);
        let list = self.class_list(element);
        self.record(element, "class", list);
    }

    fn append_child(&mut self, parent: &ElementId, child: NewElement) -> ElementId {
        self.next_generated += 1;
        let key = ElementId::from(format!("{}-{}", child.tag, self.next_generated));

        let mut element = Element::new(child.tag).text(child.text);
        for class in child.classes {
            element = element.class(class);
        }
        for (property, value) in child.style {
            element.style.replace(property, value);
        }
        element.parent = Some(parent.clone());

        if let Some(p) = self.elements.get_mut(parent) {
            p.children.push(key.clone());
        }
        self.elements.insert(key.clone(), element);
        self.record(parent, "child", key.as_str());
        key
    }

    fn clear_children(&mut self, element: &ElementId) {
        if self.elements.contains_key(element) {
            self.detach_descendants(element);
            self.record(element, "innerHTML", "");
        }
    }

    fn remove(&mut self, element: &ElementId) {
        let Some(node) = self.elements.get(element) else {
            return;
        };
        let parent = node.parent.clone();

        self.detach_descendants(element);
        self.elements.remove(element);
        if let Some(p) = parent.as_ref().and_then(|p| self.elements.get_mut(p)) {
            p.children.retain(|c| c != element);
        }
        self.record(element, "removed", "true");
    }

    fn scroll_into_view(&mut self, element: &ElementId) {
        if self.elements.contains_key(element) {
            self.scrolled.push(element.clone());
        }
    }
}
