//! Low-level tag emission.
//!
//! Attribute values are always escaped; attribute names are emitted as
//! given.

use indexmap::IndexMap;

use crate::sanitize::html_escape;

/// Ordered HTML attributes.
pub type Attributes = IndexMap<String, String>;

/// Renders attributes as ` key="value"` pairs, each with a leading space.
///
/// Keys listed in `skip` are left out.
pub fn render_attrs(attrs: &Attributes, skip: &[&str]) -> String {
    attrs
        .iter()
        .filter(|(k, _)| !skip.contains(&k.as_str()))
        .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
        .collect()
}

/// Renders an opening tag, e.g. `<div class="row">`.
pub fn open_tag(name: &str, attrs: &Attributes) -> String {
    format!("<{name}{}>", render_attrs(attrs, &[]))
}

/// Renders a closing tag, e.g. `</div>`.
pub fn close_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Renders a void element, e.g. `<input type="text" />`.
pub fn void_tag(name: &str, attrs: &Attributes) -> String {
    format!("<{name}{} />", render_attrs(attrs, &[]))
}

/// Renders a hidden input carrying an already-sanitized value.
pub(crate) fn hidden_echo(name: &str, sanitized: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{sanitized}"/>"#,
        html_escape(name)
    )
}

/// Builds an attribute map from literal pairs.
pub fn attrs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tag_keeps_attribute_order() {
        let a = attrs([("class", "row"), ("id", "main")]);
        assert_eq!(open_tag("div", &a), r#"<div class="row" id="main">"#);
        assert_eq!(open_tag("div", &Attributes::new()), "<div>");
    }

    #[test]
    fn test_void_tag_escapes_values() {
        let a = attrs([("value", "\"quoted\"")]);
        assert_eq!(
            void_tag("input", &a),
            r#"<input value="&quot;quoted&quot;" />"#
        );
    }

    #[test]
    fn test_render_attrs_skips() {
        let a = attrs([("id", "x"), ("name", "y"), ("class", "z")]);
        assert_eq!(render_attrs(&a, &["id", "name"]), r#" class="z""#);
    }

    #[test]
    fn test_hidden_echo_escapes_name() {
        assert_eq!(
            hidden_echo("a\"b", "v"),
            r#"<input type="hidden" name="a&quot;b" value="v"/>"#
        );
    }

    #[test]
    fn test_close_tag() {
        assert_eq!(close_tag("form"), "</form>");
    }
}
