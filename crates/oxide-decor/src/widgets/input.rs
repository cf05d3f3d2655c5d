//! Single-value inputs.

use crate::fields::Field;
use crate::sanitize::html_escape;
use crate::tag::{render_attrs, Attributes};

/// Attributes emitted explicitly by `<input>` controls.
const INPUT_OWN: [&str; 4] = ["id", "name", "type", "value"];

fn input(input_type: &str, field: &Field, attrs: &Attributes) -> String {
    format!(
        r#"<input type="{input_type}" id="{}" name="{}" value="{}"{} />"#,
        html_escape(field.id()),
        html_escape(&field.name),
        html_escape(&field.value.joined()),
        render_attrs(attrs, &INPUT_OWN)
    )
}

pub(super) fn text(field: &Field, attrs: &Attributes) -> String {
    input("text", field, attrs)
}

pub(super) fn hidden(field: &Field, attrs: &Attributes) -> String {
    input("hidden", field, attrs)
}

pub(super) fn password(field: &Field, attrs: &Attributes) -> String {
    input("password", field, attrs)
}

pub(super) fn submit(field: &Field, attrs: &Attributes) -> String {
    input("submit", field, attrs)
}

pub(super) fn textarea(field: &Field, attrs: &Attributes) -> String {
    format!(
        r#"<textarea id="{}" name="{}"{}>{}</textarea>"#,
        html_escape(field.id()),
        html_escape(&field.name),
        render_attrs(attrs, &["id", "name", "value"]),
        html_escape(&field.value.joined())
    )
}

/// A hidden `0` followed by the checkbox posting `1`; the later one wins
/// when checked.
pub(super) fn check(field: &Field, attrs: &Attributes) -> String {
    let id = html_escape(field.id());
    let checked = if field.value.is_truthy() {
        r#" checked="checked""#
    } else {
        ""
    };
    format!(
        "<input type=\"hidden\" id=\"{id}_\" name=\"{name}\" value=\"0\" />\n\
         <input type=\"checkbox\" id=\"{id}\" name=\"{name}\" value=\"1\"{extra}{checked} />",
        name = html_escape(&field.name),
        extra = render_attrs(attrs, &["id", "name", "placeholder", "type", "value"]),
    )
}

pub(super) fn raw(field: &Field, _attrs: &Attributes) -> String {
    field.value.joined()
}
