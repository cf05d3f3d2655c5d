//! Confirm-mode rendering: read-only summaries with hidden echoes.
//!
//! Every editable field is shown as static text followed by a hidden input
//! that carries the sanitized value, so submitting the confirmation page
//! posts the same data again.

use std::sync::LazyLock;

use ironhtml::html;
use regex::Regex;

use crate::config::FormDefaults;
use crate::fields::{is_truthy, strip_array_suffix, Field, FieldKind};
use crate::sanitize::{html_escape, Sanitizer};
use crate::tag::hidden_echo;
use crate::widgets::build_input_normal;

/// Visible stand-in for a password.
pub const PASSWORD_MASK: &str = "********";

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("line break pattern is valid"));

fn static_text(text: &str) -> String {
    html! { span.class("form-control-static") }.raw(text).render()
}

fn summary(visible: &str, hidden_name: &str, hidden_value: &str) -> String {
    format!(
        "{} {}",
        static_text(visible),
        hidden_echo(hidden_name, hidden_value)
    )
}

/// Inserts `<br/>` before every line break.
pub fn nl2br(text: &str) -> String {
    LINE_BREAK.replace_all(text, "<br/>$0").into_owned()
}

/// Maps the selected values of a choice field to their labels.
///
/// Values are looked up before sanitizing so keys holding markup
/// characters still match. Empty fragments are skipped; a fragment without
/// a matching choice is shown sanitized.
fn choice_labels(field: &Field, sanitizer: &dyn Sanitizer) -> String {
    field
        .value
        .selected()
        .into_iter()
        .map(|v| {
            field
                .options
                .get(v)
                .map_or_else(|| sanitizer.sanitize(v), |label| html_escape(label))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders a field's confirm-mode output.
pub fn build_input_confirm(
    field: &Field,
    defaults: &FormDefaults,
    sanitizer: &dyn Sanitizer,
) -> String {
    if matches!(
        field.kind,
        FieldKind::Hidden | FieldKind::Submit | FieldKind::Button | FieldKind::ButtonGroup
    ) {
        return build_input_normal(field, defaults);
    }

    let sanitized = sanitizer.sanitize(&field.value.joined());

    match field.kind {
        FieldKind::Password => summary(PASSWORD_MASK, &field.name, &sanitized),
        FieldKind::TextArea => summary(&nl2br(&sanitized), &field.name, &sanitized),
        FieldKind::Check => {
            let (shown, posted) = if is_truthy(&sanitized) {
                ("1 (ON)", "1")
            } else {
                ("0 (OFF)", "0")
            };
            summary(shown, &field.name, posted)
        }
        kind if kind.is_choice() => summary(
            &choice_labels(field, sanitizer),
            strip_array_suffix(&field.name),
            &sanitized,
        ),
        _ => summary(&sanitized, strip_array_suffix(&field.name), &sanitized),
    }
}
