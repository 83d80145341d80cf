//! In-memory render targets.
//!
//! An [`Element`] stands in for one container of the page. Renderers only ever get the
//! elements they write to, passed in by the caller.

use std::collections::BTreeMap;
use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    inner_html: String,
}

impl Element {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            inner_html: String::new(),
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replaces the content with escaped text.
    pub fn set_text<S: AsRef<str>>(&mut self, text: S) {
        self.inner_html = encode_text(text.as_ref()).into_owned();
    }

    pub fn set_inner_html<S: Into<String>>(&mut self, html: S) {
        self.inner_html = html.into();
    }

    pub fn append_html<S: AsRef<str>>(&mut self, html: S) {
        self.inner_html.push_str(html.as_ref());
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|existing| existing != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Outer markup of the element.
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);

        if let Some(id) = &self.id {
            let _ = write!(html, " id=\"{}\"", encode_double_quoted_attribute(id));
        }

        if !self.classes.is_empty() {
            let _ = write!(
                html,
                " class=\"{}\"",
                encode_double_quoted_attribute(&self.classes.join(" "))
            );
        }

        for (name, value) in &self.attributes {
            let _ = write!(html, " {name}=\"{}\"", encode_double_quoted_attribute(value));
        }

        let _ = write!(html, ">{}</{}>", self.inner_html, self.tag);
        html
    }
}

/// Marks the element for the CSS fade-in animation.
pub fn fade_in(element: &mut Element) {
    element.add_class("fade-in");
}
