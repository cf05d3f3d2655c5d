//! Buttons and button groups.

use ironhtml::html;

use crate::fields::Field;
use crate::sanitize::html_escape;
use crate::tag::{render_attrs, Attributes};

/// Name every submit button posts under; the pressed button is told apart
/// by its value.
pub const ACTION_FIELD: &str = "action";

pub(super) fn button(field: &Field, attrs: &Attributes) -> String {
    let extra = render_attrs(attrs, &["id", "name", "placeholder", "type"]);
    let value = html_escape(&field.value.joined());
    let label = if field.label.is_empty() {
        value.clone()
    } else {
        html_escape(&field.label)
    };

    let is_reset = attrs
        .get("type")
        .is_some_and(|t| t.eq_ignore_ascii_case("reset"));
    if is_reset {
        format!(r#"<button type="reset" value="{value}"{extra}>{label}</button>"#)
    } else {
        format!(
            r#"<button type="submit" name="{ACTION_FIELD}" value="{value}"{extra}>{label}</button>"#
        )
    }
}

pub(super) fn button_group(field: &Field, _attrs: &Attributes) -> String {
    let mut items = String::from("\n");
    for child in &field.buttons {
        items.push_str(&button(child, &child.attributes));
        items.push('\n');
    }

    html! { div.class("d-flex align-items-center justify-content-center") }
        .raw(&items)
        .render()
}
