//! Edit-mode control markup, one function per field kind.

mod button;
mod choice;
mod input;

pub use button::ACTION_FIELD;

use crate::config::FormDefaults;
use crate::fields::{Field, FieldKind, SelectStyle};
use crate::sanitize::html_escape;
use crate::tag::Attributes;

/// Renders the control of a field with the given attributes.
pub type ControlFn = fn(&Field, &Attributes) -> String;

/// Looks up the control function for a field.
///
/// `Select` fields are drawn according to their [`SelectStyle`].
pub fn control_for(field: &Field) -> ControlFn {
    match field.kind {
        FieldKind::Text => input::text,
        FieldKind::Hidden => input::hidden,
        FieldKind::Password => input::password,
        FieldKind::TextArea => input::textarea,
        FieldKind::Select => match field.select_style {
            SelectStyle::Dropdown => choice::select,
            SelectStyle::Radio => choice::select_as_radio,
            SelectStyle::Checkbox => choice::select_as_checkboxes,
        },
        FieldKind::Check => input::check,
        FieldKind::Radio => choice::radio,
        FieldKind::MultiSelect => choice::multi_select,
        FieldKind::MultiCheck => choice::multi_check,
        FieldKind::Submit => input::submit,
        FieldKind::Button => button::button,
        FieldKind::ButtonGroup => button::button_group,
        FieldKind::Raw => input::raw,
    }
}

/// Renders a field's edit-mode control.
///
/// The field's attributes are used as-is, except that a missing `class`
/// falls back to the default element class.
pub fn build_input_normal(field: &Field, defaults: &FormDefaults) -> String {
    let mut attrs = field.attributes.clone();
    if !attrs.contains_key("class") {
        attrs.insert("class".to_string(), defaults.get_element_class().to_string());
    }
    control_for(field)(field, &attrs)
}

/// Hidden `0` input submitted ahead of a multi-value control, so that an
/// empty selection still posts the field.
pub(crate) fn zero_sibling(field: &Field) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="0" />"#,
        html_escape(field.base_name())
    )
}
