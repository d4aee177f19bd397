//! Owned model of the document root element.
//!
//! Styling rules select dark variants through the marker this module
//! toggles: a `data-theme="dark"` attribute plus a `dark` class.

use std::collections::{BTreeMap, BTreeSet};

use crate::theme::ColorScheme;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the dark-mode marker to match `scheme`.
    pub fn apply_color_scheme(&mut self, scheme: ColorScheme) {
        match scheme {
            ColorScheme::Dark => {
                self.set_attribute(THEME_ATTRIBUTE, "dark");
                self.add_class(DARK_CLASS);
            }
            ColorScheme::Light => {
                self.remove_attribute(THEME_ATTRIBUTE);
                self.remove_class(DARK_CLASS);
            }
        }
    }

    pub fn is_dark_marked(&self) -> bool {
        self.attribute(THEME_ATTRIBUTE) == Some("dark")
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Space-separated class list, `None` when empty.
    pub fn class_list(&self) -> Option<String> {
        if self.classes.is_empty() {
            return None;
        }
        Some(
            self.classes
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}
