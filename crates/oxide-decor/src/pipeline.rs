//! The decorator pipeline.
//!
//! Steps run left to right over an accumulated HTML string. Each step only
//! sees the field, its own options and the content built so far.

use ironhtml::html;
use tracing::warn;

use crate::config::FormDefaults;
use crate::confirm::build_input_confirm;
use crate::decorator::{concatenate, DecoratorStep, Placement, TagMode};
use crate::fields::{Field, FieldKind};
use crate::sanitize::{html_escape, Sanitizer};
use crate::tag::{close_tag, open_tag, Attributes};
use crate::widgets::build_input_normal;

/// Whether fields render as editable controls or as a read-only review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Editable controls.
    #[default]
    Edit,
    /// Submitted values as static text plus hidden inputs.
    Confirm,
}

/// Everything a step needs besides the field itself.
#[derive(Clone, Copy)]
pub struct RenderPass<'a> {
    /// Presentation defaults of the form.
    pub defaults: &'a FormDefaults,
    /// Current mode.
    pub mode: RenderMode,
    /// Filter applied to values before display.
    pub sanitizer: &'a dyn Sanitizer,
}

impl std::fmt::Debug for RenderPass<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderPass")
            .field("defaults", &self.defaults)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl RenderPass<'_> {
    fn separator(&self) -> &str {
        self.defaults.get_separator()
    }
}

/// Runs `steps` over `field`, starting from empty content.
pub fn run_steps(field: &Field, steps: &[DecoratorStep], pass: &RenderPass<'_>) -> String {
    steps
        .iter()
        .fold(String::new(), |content, step| apply_step(field, step, content, pass))
}

/// Applies one step to the accumulated content.
pub fn apply_step(
    field: &Field,
    step: &DecoratorStep,
    content: String,
    pass: &RenderPass<'_>,
) -> String {
    match step {
        DecoratorStep::Label {
            placement,
            attributes,
        } => build_label(field, *placement, attributes, &content, pass),
        DecoratorStep::ViewHelper {
            raw_value,
            placement,
        } => build_input(field, *raw_value, *placement, &content, pass),
        DecoratorStep::HtmlTag {
            tag,
            attributes,
            placement,
            mode,
        } => wrap_content(tag, attributes, *placement, *mode, &content, pass.separator()),
        DecoratorStep::Errors => build_error(field, content),
        DecoratorStep::Literal(name) => {
            warn!(field = %field.name, step = %name, "unknown decorator step");
            format!("{content}<p>{name}</p>")
        }
    }
}

/// Label text with the required marker when the field is required.
///
/// Computed from the field on every call, so repeated renders never stack
/// markers.
pub fn label_text(field: &Field, defaults: &FormDefaults) -> String {
    let text = if field.label.is_empty() {
        html_escape(&field.name)
    } else {
        field.label.clone()
    };
    if field.is_required() {
        format!("{text}{}", defaults.required_span())
    } else {
        text
    }
}

/// The label step.
///
/// Checks and radios with `Wrap` placement get the accumulated content and
/// the label text wrapped together in a `<label>`.
pub fn build_label(
    field: &Field,
    placement: Placement,
    attributes: &Attributes,
    content: &str,
    pass: &RenderPass<'_>,
) -> String {
    let separator = pass.separator();

    if placement == Placement::Wrap && matches!(field.kind, FieldKind::Check | FieldKind::Radio) {
        let inner = format!("{content}{}", field.label);
        return wrap_content("label", attributes, placement, TagMode::Wrap, &inner, separator);
    }

    let mut label_attrs = Attributes::new();
    label_attrs.insert("for".to_string(), field.id().to_string());
    for (k, v) in attributes {
        label_attrs.insert(k.clone(), v.clone());
    }
    let output = format!(
        "{}{}{}",
        open_tag("label", &label_attrs),
        label_text(field, pass.defaults),
        close_tag("label")
    );

    concatenate(&output, content, placement, separator)
}

/// The control step: the edit control, the confirm summary, or with
/// `raw_value` only the sanitized value.
pub fn build_input(
    field: &Field,
    raw_value: bool,
    placement: Placement,
    content: &str,
    pass: &RenderPass<'_>,
) -> String {
    let output = if raw_value {
        pass.sanitizer.sanitize(&field.value.joined())
    } else {
        match pass.mode {
            RenderMode::Edit => build_input_normal(field, pass.defaults),
            RenderMode::Confirm => build_input_confirm(field, pass.defaults, pass.sanitizer),
        }
    };
    concatenate(&output, content, placement, pass.separator())
}

/// The tag step.
///
/// `br` is emitted as a single `<br />`. A full wrap always brackets the
/// content, whatever the placement.
pub fn wrap_content(
    tag: &str,
    attributes: &Attributes,
    placement: Placement,
    mode: TagMode,
    content: &str,
    separator: &str,
) -> String {
    if tag == "br" {
        return concatenate("<br />", content, placement, separator);
    }

    let open = open_tag(tag, attributes);
    let close = close_tag(tag);
    match mode {
        TagMode::OpenOnly => concatenate(&open, content, placement, separator),
        TagMode::CloseOnly => concatenate(&close, content, placement, separator),
        TagMode::Wrap => concatenate(
            &open,
            &concatenate(&close, content, Placement::Append, separator),
            Placement::Prepend,
            separator,
        ),
    }
}

/// The messages step. Fields without messages pass content through.
pub fn build_error(field: &Field, mut content: String) -> String {
    if field.messages.is_empty() {
        return content;
    }
    let messages = field.messages.concat();
    let block = html! { span.class("alert-danger rounded pt-2 col-sm-3") }
        .text(&messages)
        .render();
    content.push_str(&block);
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::StringFilter;
    use crate::tag::attrs;

    fn pass(defaults: &FormDefaults, mode: RenderMode) -> RenderPass<'_> {
        RenderPass {
            defaults,
            mode,
            sanitizer: &StringFilter,
        }
    }

    #[test]
    fn test_wrap_full() {
        let html = wrap_content(
            "div",
            &attrs([("class", "x")]),
            Placement::Append,
            TagMode::Wrap,
            "C",
            "\n",
        );
        assert_eq!(html, "<div class=\"x\">\nC\n</div>");
    }

    #[test]
    fn test_wrap_full_ignores_placement() {
        let append = wrap_content("p", &Attributes::new(), Placement::Append, TagMode::Wrap, "C", "\n");
        let prepend = wrap_content("p", &Attributes::new(), Placement::Prepend, TagMode::Wrap, "C", "\n");
        assert_eq!(append, prepend);
    }

    #[test]
    fn test_wrap_open_and_close_only() {
        let open = wrap_content(
            "fieldset",
            &Attributes::new(),
            Placement::Prepend,
            TagMode::OpenOnly,
            "C",
            "\n",
        );
        assert_eq!(open, "<fieldset>\nC");

        let close = wrap_content(
            "fieldset",
            &Attributes::new(),
            Placement::Append,
            TagMode::CloseOnly,
            "C",
            "\n",
        );
        assert_eq!(close, "C\n</fieldset>");
    }

    #[test]
    fn test_wrap_br() {
        let html = wrap_content(
            "br",
            &attrs([("class", "ignored")]),
            Placement::Append,
            TagMode::Wrap,
            "C",
            "\n",
        );
        assert_eq!(html, "C\n<br />");
    }

    #[test]
    fn test_build_error_identity_without_messages() {
        let field = Field::text("name");
        assert_eq!(build_error(&field, "<input>".to_string()), "<input>");
        assert_eq!(build_error(&field, String::new()), "");
    }

    #[test]
    fn test_build_error_appends_messages_in_order() {
        let field = Field::text("name")
            .message("Too short.")
            .message("Not unique.");
        let html = build_error(&field, "<input>".to_string());
        assert!(html.starts_with("<input>"));
        assert!(html.contains("alert-danger rounded pt-2 col-sm-3"));
        let first = html.find("Too short.").unwrap();
        let second = html.find("Not unique.").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_label_required_marker_once() {
        let defaults = FormDefaults::new();
        let field = Field::text("name").label("Name").required();
        let p = pass(&defaults, RenderMode::Edit);

        let first = build_label(&field, Placement::Prepend, &Attributes::new(), "X", &p);
        let second = build_label(&field, Placement::Prepend, &Attributes::new(), "X", &p);

        assert_eq!(first, second);
        assert_eq!(first.matches(&defaults.required_span()).count(), 1);
        assert_eq!(field.label, "Name");
    }

    #[test]
    fn test_label_element() {
        let defaults = FormDefaults::new();
        let field = Field::text("email").label("Email");
        let html = build_label(
            &field,
            Placement::Prepend,
            &attrs([("class", "col-form-label")]),
            "<input>",
            &pass(&defaults, RenderMode::Edit),
        );
        assert_eq!(
            html,
            "<label for=\"email\" class=\"col-form-label\">Email</label>\n<input>"
        );
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let defaults = FormDefaults::new();
        assert_eq!(label_text(&Field::text("zip"), &defaults), "zip");
    }

    #[test]
    fn test_label_wrap_for_check() {
        let defaults = FormDefaults::new();
        let field = Field::check("agree").label("I agree");
        let html = build_label(
            &field,
            Placement::Wrap,
            &attrs([("class", "form-check-label")]),
            "<input type=\"checkbox\">",
            &pass(&defaults, RenderMode::Edit),
        );
        assert_eq!(
            html,
            "<label class=\"form-check-label\">\n<input type=\"checkbox\">I agree\n</label>"
        );
    }

    #[test]
    fn test_label_wrap_ignored_for_text() {
        let defaults = FormDefaults::new();
        let field = Field::text("name").label("Name");
        let html = build_label(
            &field,
            Placement::Wrap,
            &Attributes::new(),
            "<input>",
            &pass(&defaults, RenderMode::Edit),
        );
        assert_eq!(html, "<input>\n<label for=\"name\">Name</label>");
    }

    #[test]
    fn test_build_input_raw_value() {
        let defaults = FormDefaults::new();
        let field = Field::text("name").value("<i>Bo</i>");
        let html = build_input(
            &field,
            true,
            Placement::Append,
            "",
            &pass(&defaults, RenderMode::Edit),
        );
        assert_eq!(html, "Bo");
    }

    #[test]
    fn test_build_input_follows_mode() {
        let defaults = FormDefaults::new();
        let field = Field::text("name").value("Bo");

        let edit = build_input(&field, false, Placement::Append, "", &pass(&defaults, RenderMode::Edit));
        assert!(edit.starts_with("<input type=\"text\""));

        let confirm = build_input(
            &field,
            false,
            Placement::Append,
            "",
            &pass(&defaults, RenderMode::Confirm),
        );
        assert!(confirm.contains("form-control-static"));
    }

    #[test]
    fn test_unknown_step_is_literal() {
        let defaults = FormDefaults::new();
        let field = Field::text("name");
        let html = apply_step(
            &field,
            &DecoratorStep::Literal("Description".to_string()),
            "C".to_string(),
            &pass(&defaults, RenderMode::Edit),
        );
        assert_eq!(html, "C<p>Description</p>");
    }

    #[test]
    fn test_run_steps_default_layout() {
        let defaults = FormDefaults::new();
        let field = Field::text("name").label("Name").value("Bo");
        let steps = crate::decorator::DefaultDecorators::new(defaults.get_label_class()).normal;
        let html = run_steps(&field, &steps, &pass(&defaults, RenderMode::Edit));

        let lines: Vec<_> = html.lines().collect();
        assert_eq!(lines[0], "<div class=\"form-group row\">");
        assert_eq!(
            lines[1],
            "<label for=\"name\" class=\"col-form-label col-sm-2\">Name</label>"
        );
        assert!(lines[2].starts_with("<input type=\"text\" id=\"name\""));
        assert_eq!(lines[3], "</div>");
    }
}
