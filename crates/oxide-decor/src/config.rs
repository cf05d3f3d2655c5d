//! Rendering defaults and site configuration.

use serde::Deserialize;

use crate::error::Result;
use crate::tag::Attributes;

/// Built-in form attributes, the lowest configuration layer.
pub const DEFAULT_FORM_ATTRIBUTES: [(&str, &str); 3] = [
    ("autocomplete", "off"),
    ("enctype", "application/x-www-form-urlencoded"),
    ("method", "post"),
];

/// Presentation defaults shared by every field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    element_class: String,
    label_class: String,
    required_style: String,
    required_marker: String,
    separator: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            element_class: "form-control col-sm-6 mr-1".to_string(),
            label_class: "col-form-label col-sm-2".to_string(),
            required_style: "color:red;font-size:xx-small".to_string(),
            required_marker: "*".to_string(),
            separator: "\n".to_string(),
        }
    }
}

impl FormDefaults {
    /// Creates the default presentation settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the class given to controls that carry none.
    #[must_use]
    pub fn element_class(mut self, class: impl Into<String>) -> Self {
        self.element_class = class.into();
        self
    }

    /// Sets the class of labels built by the default decorators.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label_class = class.into();
        self
    }

    /// Sets the inline style of the required marker.
    #[must_use]
    pub fn required_style(mut self, style: impl Into<String>) -> Self {
        self.required_style = style.into();
        self
    }

    /// Sets the glyph of the required marker.
    #[must_use]
    pub fn required_marker(mut self, marker: impl Into<String>) -> Self {
        self.required_marker = marker.into();
        self
    }

    /// Sets the line separator placed between fragments.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Returns the default control class.
    pub fn get_element_class(&self) -> &str {
        &self.element_class
    }

    /// Returns the default label class.
    pub fn get_label_class(&self) -> &str {
        &self.label_class
    }

    /// Returns the required marker style.
    pub fn get_required_style(&self) -> &str {
        &self.required_style
    }

    /// Returns the required marker glyph.
    pub fn get_required_marker(&self) -> &str {
        &self.required_marker
    }

    /// Returns the line separator.
    pub fn get_separator(&self) -> &str {
        &self.separator
    }

    /// Renders the required marker appended to label text.
    pub fn required_span(&self) -> String {
        format!(
            r#"<span style="{}">{}</span>"#,
            self.required_style, self.required_marker
        )
    }
}

/// Site-wide configuration loaded by the application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Attributes merged into every `<form>` tag.
    #[serde(default)]
    pub form: Attributes,
}

impl SiteConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document such as
    /// `{"form": {"autocomplete": "on", "class": "needs-validation"}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets one attribute of the `form` section.
    #[must_use]
    pub fn form_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }
}

/// Merges the form attribute layers: built-in defaults, then the site
/// configuration, then caller overrides. Later layers win.
///
/// `action` is set last. `enctype` only survives for `post` forms and the
/// `create` pseudo-attribute never reaches the output.
pub fn merge_form_options(site: &Attributes, overrides: &Attributes, action: &str) -> Attributes {
    let mut merged: Attributes = DEFAULT_FORM_ATTRIBUTES
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    for (k, v) in site.iter().chain(overrides) {
        merged.insert(k.clone(), v.clone());
    }

    merged.insert("action".to_string(), action.to_string());

    let is_post = merged
        .get("method")
        .is_some_and(|m| m.eq_ignore_ascii_case("post"));
    if !is_post {
        merged.shift_remove("enctype");
    }
    merged.shift_remove("create");

    merged
}
