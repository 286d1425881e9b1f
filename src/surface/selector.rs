//! Selector - Element queries used by the handlers

/// Conjunction of simple conditions, like a compound CSS selector
///
/// `Selector::class("scroll-fade")` is `.scroll-fade`;
/// `Selector::default().with_attribute("data-tr").with_attribute("data-en")
/// .excluding_class(Some("contact-link"))` is `[data-tr][data-en]:not(.contact-link)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub class: Option<String>,
    pub attributes: Vec<String>,
    pub attribute_prefix: Option<(String, String)>,
    pub excluded_class: Option<String>,
}

impl Selector {
    /// `#id`
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// `.class`
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            ..Default::default()
        }
    }

    /// `tag`
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Default::default()
        }
    }

    /// Adds `[name]`
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    /// Adds `[name^="prefix"]`
    pub fn with_attribute_prefix(mut self, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.attribute_prefix = Some((name.into(), prefix.into()));
        self
    }

    /// Adds `:not(.class)`; `None` leaves the selector unchanged
    pub fn excluding_class(mut self, class: Option<&str>) -> Self {
        self.excluded_class = class.map(str::to_string);
        self
    }

    /// Evaluate against an element described by the three lookups
    pub fn matches<'a>(
        &self,
        tag: &str,
        id: &str,
        has_class: impl Fn(&str) -> bool,
        attribute: impl Fn(&str) -> Option<&'a str>,
    ) -> bool {
        if self.tag.as_deref().is_some_and(|t| !t.eq_ignore_ascii_case(tag)) {
            return false;
        }
        if self.id.as_deref().is_some_and(|wanted| wanted != id) {
            return false;
        }
        if self.class.as_deref().is_some_and(|c| !has_class(c)) {
            return false;
        }
        if self.excluded_class.as_deref().is_some_and(&has_class) {
            return false;
        }
        if !self.attributes.iter().all(|name| attribute(name).is_some()) {
            return false;
        }
        match &self.attribute_prefix {
            Some((name, prefix)) => attribute(name).is_some_and(|v| v.starts_with(prefix.as_str())),
            None => true,
        }
    }
}
