//! Choice controls: dropdowns, radio lists and checkbox lists.

use ironhtml::html;

use super::zero_sibling;
use crate::fields::Field;
use crate::sanitize::html_escape;
use crate::tag::{render_attrs, Attributes};

const CHECKED: &str = r#" checked="checked""#;

fn checked_if(on: bool) -> &'static str {
    if on {
        CHECKED
    } else {
        ""
    }
}

fn options_markup(field: &Field, multiple: bool) -> String {
    let mut options = String::new();

    if let Some((value, label)) = &field.empty_option {
        options.push_str(&format!(
            "\t<option value=\"{}\">{}</option>\n",
            html_escape(value),
            html_escape(label)
        ));
    }

    for (value, label) in &field.options {
        let selected = if multiple {
            field.value.contains(value)
        } else {
            field.value.matches(value)
        };
        let selected_attr = if selected { r#" selected="selected""# } else { "" };
        options.push_str(&format!(
            "\t<option value=\"{}\"{selected_attr}>{}</option>\n",
            html_escape(value),
            html_escape(label)
        ));
    }

    options
}

pub(super) fn select(field: &Field, attrs: &Attributes) -> String {
    let multiple = attrs.contains_key("multiple");
    format!(
        "<select id=\"{}\" name=\"{}\"{}>\n{}</select>",
        html_escape(field.id()),
        html_escape(&field.name),
        render_attrs(attrs, &["id", "name", "value"]),
        options_markup(field, multiple)
    )
}

pub(super) fn multi_select(field: &Field, attrs: &Attributes) -> String {
    format!(
        "{}\n<select id=\"{}\" name=\"{}\" multiple=\"multiple\"{}>\n{}</select>",
        zero_sibling(field),
        html_escape(field.id()),
        html_escape(&field.array_name()),
        render_attrs(attrs, &["id", "name", "value", "multiple"]),
        options_markup(field, true)
    )
}

pub(super) fn radio(field: &Field, attrs: &Attributes) -> String {
    let extra = render_attrs(attrs, &["id", "name", "type", "value", "checked"]);
    let mut items = String::from("\n");

    for (value, label) in &field.options {
        items.push_str(&format!(
            "<div class=\"form-check\">\n  \
             <input type=\"radio\" name=\"{}\" value=\"{}\"{}{extra}>\n  \
             <label>{}</label>\n\
             </div>\n",
            html_escape(&field.name),
            html_escape(value),
            checked_if(field.value.matches(value)),
            html_escape(label)
        ));
    }

    html! { div.class("d-flex align-items-center justify-content-center") }
        .raw(&items)
        .render()
}

pub(super) fn multi_check(field: &Field, _attrs: &Attributes) -> String {
    let name = html_escape(&field.array_name());
    let mut items = String::from("\n");

    for (value, label) in &field.options {
        items.push_str(&format!(
            "<div class=\"form-check form-check-inline\">\n  \
             <input class=\"form-check-input\" type=\"checkbox\" name=\"{name}\" value=\"{}\"{}>\n  \
             <label class=\"form-check-label\">{}</label>\n\
             </div>\n",
            html_escape(value),
            checked_if(field.value.contains(value)),
            html_escape(label)
        ));
    }

    let container = html! { div.class("d-flex align-items-center justify-content-center") }
        .raw(&items)
        .render();
    format!("{}\n{container}", zero_sibling(field))
}

/// A `Select` drawn as one labelled radio per choice.
pub(super) fn select_as_radio(field: &Field, attrs: &Attributes) -> String {
    let extra = render_attrs(attrs, &["id", "name", "type", "value", "checked"]);

    field
        .options
        .iter()
        .map(|(value, label)| {
            format!(
                "<label>\n  <input type=\"radio\" name=\"{}\" value=\"{}\"{}{extra}>{}\n</label>\n",
                html_escape(&field.name),
                html_escape(value),
                checked_if(field.value.matches(value)),
                html_escape(label)
            )
        })
        .collect()
}

/// A `Select` drawn as a checkbox list. Only `class` is copied onto the
/// inputs.
pub(super) fn select_as_checkboxes(field: &Field, attrs: &Attributes) -> String {
    let name = html_escape(&field.array_name());
    let class = attrs
        .get("class")
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();
    let mut items = String::from("\n");

    for (value, label) in &field.options {
        items.push_str(&format!(
            "<div class=\"form-check form-check-inline\">\n\
             <label class=\"form-check-label\">\n  \
             <input type=\"checkbox\" name=\"{name}\" value=\"{}\"{class}{}>{}\n\
             </label>\n\
             </div>\n",
            html_escape(value),
            checked_if(field.value.contains(value)),
            html_escape(label)
        ));
    }

    let container = html! { div.class("col-sm-6 pl-0") }.raw(&items).render();
    format!("{}\n{container}", zero_sibling(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::attrs;

    fn colors() -> Vec<(&'static str, &'static str)> {
        vec![("1", "Red"), ("2", "Blue"), ("3", "Green")]
    }

    #[test]
    fn test_select_marks_selected() {
        let field = Field::select("color", colors()).value("2");
        let html = select(&field, &attrs([("class", "form-select")]));
        assert!(html.starts_with(r#"<select id="color" name="color" class="form-select">"#));
        assert!(html.contains(r#"<option value="2" selected="selected">Blue</option>"#));
        assert!(html.contains(r#"<option value="1">Red</option>"#));
        assert!(html.ends_with("</select>"));
    }

    #[test]
    fn test_select_empty_option_first() {
        let field = Field::select("color", colors()).empty_option("", "Choose...");
        let html = select(&field, &Attributes::new());
        let empty = html.find("Choose...").unwrap();
        let red = html.find("Red").unwrap();
        assert!(empty < red);
    }

    #[test]
    fn test_multi_select() {
        let field = Field::multi_select("color", colors()).values(["1", "3"]);
        let html = multi_select(&field, &field.attributes);
        assert!(html.starts_with(r#"<input type="hidden" name="color" value="0" />"#));
        assert!(html.contains(r#"name="color[]" multiple="multiple""#));
        assert_eq!(html.matches("multiple=").count(), 1);
        assert!(html.contains(r#"<option value="1" selected="selected">Red</option>"#));
        assert!(html.contains(r#"<option value="2">Blue</option>"#));
        assert!(html.contains(r#"<option value="3" selected="selected">Green</option>"#));
    }

    #[test]
    fn test_multi_select_empty_selection_keeps_sibling() {
        let field = Field::multi_select("color", colors());
        let html = multi_select(&field, &field.attributes);
        assert!(html.contains(r#"<input type="hidden" name="color" value="0" />"#));
        assert!(!html.contains("selected="));
    }

    #[test]
    fn test_radio() {
        let field = Field::radio("size", [("s", "Small"), ("l", "Large")]).value("l");
        let html = radio(&field, &Attributes::new());
        assert!(html.contains("d-flex align-items-center justify-content-center"));
        assert!(html.contains(r#"<input type="radio" name="size" value="l" checked="checked">"#));
        assert!(html.contains(r#"<input type="radio" name="size" value="s">"#));
        assert!(html.contains("<label>Small</label>"));
        assert_eq!(html.matches(r#"<div class="form-check">"#).count(), 2);
    }

    #[test]
    fn test_multi_check() {
        let field = Field::multi_check("tags", [("a", "Alpha"), ("b", "Beta")]).values(["b"]);
        let html = multi_check(&field, &Attributes::new());
        assert!(html.starts_with(r#"<input type="hidden" name="tags" value="0" />"#));
        assert!(html.contains(r#"name="tags[]" value="b" checked="checked""#));
        assert!(html.contains(r#"name="tags[]" value="a">"#));
        assert!(html.contains(r#"<label class="form-check-label">Alpha</label>"#));
    }

    #[test]
    fn test_multi_check_empty_selection_keeps_sibling() {
        let field = Field::multi_check("tags[]", [("a", "Alpha")]);
        let html = multi_check(&field, &Attributes::new());
        assert!(html.contains(r#"<input type="hidden" name="tags" value="0" />"#));
        assert!(!html.contains("checked="));
    }

    #[test]
    fn test_select_as_radio() {
        let field = Field::select("plan", [("free", "Free"), ("pro", "Pro")])
            .as_radio()
            .value("free");
        let html = select_as_radio(&field, &attrs([("class", "mr-1")]));
        assert!(html.contains(
            r#"<input type="radio" name="plan" value="free" checked="checked" class="mr-1">Free"#
        ));
        assert_eq!(html.matches("<label>").count(), 2);
    }

    #[test]
    fn test_select_as_checkboxes_only_class() {
        let field = Field::select("days", [("mon", "Mon"), ("tue", "Tue")])
            .as_checkboxes()
            .value("mon,tue");
        let html = select_as_checkboxes(
            &field,
            &attrs([("class", "form-check-input"), ("data-x", "1")]),
        );
        assert!(html.contains("col-sm-6 pl-0"));
        assert!(html.contains(
            r#"name="days[]" value="mon" class="form-check-input" checked="checked""#
        ));
        assert!(html.contains(r#"value="tue" class="form-check-input" checked="checked""#));
        assert!(!html.contains("data-x"));
    }
}
