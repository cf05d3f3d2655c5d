//! Form field definitions.

mod value;

pub use value::FieldValue;
pub(crate) use value::is_truthy;

use indexmap::IndexMap;
use serde_json::Value;

use crate::decorator::DecoratorStep;
use crate::tag::Attributes;

/// Ordered choices of a choice field, value to label.
pub type Choices = IndexMap<String, String>;

/// The kind of control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Hidden input.
    Hidden,
    /// Password input.
    Password,
    /// Multi-line text.
    TextArea,
    /// Dropdown, or a radio/checkbox list depending on [`SelectStyle`].
    Select,
    /// Two-state checkbox posting `1` or `0`.
    Check,
    /// Radio list in a flex container.
    Radio,
    /// Native multiple select.
    MultiSelect,
    /// Checkbox list in a flex container.
    MultiCheck,
    /// Submit input.
    Submit,
    /// Button posting under the shared `action` name.
    Button,
    /// Several buttons side by side.
    ButtonGroup,
    /// Value written verbatim.
    Raw,
}

impl FieldKind {
    /// Whether the kind selects among [`Choices`].
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            Self::Select | Self::Radio | Self::MultiSelect | Self::MultiCheck
        )
    }

    /// Whether the kind posts a list of values under `name[]`.
    pub fn is_multi(self) -> bool {
        matches!(self, Self::MultiSelect | Self::MultiCheck)
    }
}

/// How a [`FieldKind::Select`] field is drawn in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectStyle {
    /// Native `<select>`.
    #[default]
    Dropdown,
    /// One radio input per choice.
    Radio,
    /// One checkbox per choice, multiple values.
    Checkbox,
}

/// A form field.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name, used for the `name` attribute.
    pub name: String,
    /// Control kind.
    pub kind: FieldKind,
    /// Label text.
    pub label: String,
    /// Current value.
    pub value: FieldValue,
    /// HTML attributes of the control.
    pub attributes: Attributes,
    /// Whether the label shows the required marker.
    pub required: bool,
    /// Validation messages, in display order.
    pub messages: Vec<String>,
    /// Choices for choice kinds.
    pub options: Choices,
    /// Edit-mode drawing of `Select` fields.
    pub select_style: SelectStyle,
    /// Leading empty option of a dropdown (value, label).
    pub empty_option: Option<(String, String)>,
    /// Buttons of a button group.
    pub buttons: Vec<Field>,
    /// Decorators replacing the form defaults in edit mode.
    pub decorators: Option<Vec<DecoratorStep>>,
    /// Decorators replacing the form defaults in confirm mode.
    pub confirm_decorators: Option<Vec<DecoratorStep>>,
}

impl Field {
    /// Creates a field of the given kind.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: String::new(),
            value: FieldValue::default(),
            attributes: Attributes::new(),
            required: false,
            messages: Vec::new(),
            options: Choices::new(),
            select_style: SelectStyle::default(),
            empty_option: None,
            buttons: Vec::new(),
            decorators: None,
            confirm_decorators: None,
        }
    }

    /// Creates a text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Creates a hidden field.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Hidden)
    }

    /// Creates a password field.
    pub fn password(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Password)
    }

    /// Creates a textarea field.
    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::TextArea)
    }

    /// Creates a two-state checkbox.
    pub fn check(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Check)
    }

    /// Creates a dropdown.
    pub fn select<K, V>(name: impl Into<String>, choices: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(name, FieldKind::Select).choices(choices)
    }

    /// Creates a radio list.
    pub fn radio<K, V>(name: impl Into<String>, choices: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(name, FieldKind::Radio).choices(choices)
    }

    /// Creates a native multiple select.
    pub fn multi_select<K, V>(
        name: impl Into<String>,
        choices: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(name, FieldKind::MultiSelect)
            .choices(choices)
            .attr("multiple", "multiple")
    }

    /// Creates a checkbox list.
    pub fn multi_check<K, V>(
        name: impl Into<String>,
        choices: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(name, FieldKind::MultiCheck).choices(choices)
    }

    /// Creates a submit input.
    pub fn submit(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Submit).value(value)
    }

    /// Creates a button. Its value tells which button was pressed.
    pub fn button(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(value.clone(), FieldKind::Button).value(value)
    }

    /// Creates a group of buttons.
    pub fn button_group(name: impl Into<String>, buttons: Vec<Field>) -> Self {
        let mut field = Self::new(name, FieldKind::ButtonGroup);
        field.buttons = buttons;
        field
    }

    /// Creates a raw text field.
    pub fn raw(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Raw).value(text)
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets a scalar value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = FieldValue::Single(value.into());
        self
    }

    /// Sets a list value.
    #[must_use]
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value = FieldValue::Multi(values.into_iter().map(Into::into).collect());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Marks the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a validation message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Replaces the choices.
    #[must_use]
    pub fn choices<K, V>(mut self, choices: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.options = choices
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Replaces the choices with values read from table rows, such as the
    /// records of a lookup table fetched as JSON objects.
    ///
    /// Each row contributes `row[key_column] => row[label_column]`. Rows
    /// lacking either column, or holding a null, array or object there, are
    /// skipped.
    #[must_use]
    pub fn choices_from_rows<'r>(
        mut self,
        rows: impl IntoIterator<Item = &'r Value>,
        key_column: &str,
        label_column: &str,
    ) -> Self {
        self.options = rows
            .into_iter()
            .filter_map(|row| {
                let key = column_text(row, key_column)?;
                let label = column_text(row, label_column)?;
                Some((key, label))
            })
            .collect();
        self
    }

    /// Draws a `Select` as radio buttons.
    #[must_use]
    pub fn as_radio(mut self) -> Self {
        self.select_style = SelectStyle::Radio;
        self
    }

    /// Draws a `Select` as a checkbox list.
    #[must_use]
    pub fn as_checkboxes(mut self) -> Self {
        self.select_style = SelectStyle::Checkbox;
        self
    }

    /// Adds a leading empty option to a dropdown.
    #[must_use]
    pub fn empty_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.empty_option = Some((value.into(), label.into()));
        self
    }

    /// Overrides the edit-mode decorators.
    #[must_use]
    pub fn decorators(mut self, steps: Vec<DecoratorStep>) -> Self {
        self.decorators = Some(steps);
        self
    }

    /// Overrides the confirm-mode decorators.
    #[must_use]
    pub fn confirm_decorators(mut self, steps: Vec<DecoratorStep>) -> Self {
        self.confirm_decorators = Some(steps);
        self
    }

    /// Whether the label gets the required marker, via the flag or a
    /// `required` attribute.
    pub fn is_required(&self) -> bool {
        self.required
            || self
                .attributes
                .get("required")
                .is_some_and(|v| v != "false" && v != "0")
    }

    /// The `id` attribute, defaulting to the name.
    pub fn id(&self) -> &str {
        self.attributes.get("id").map_or(self.name.as_str(), String::as_str)
    }

    /// The name without a trailing `[]`.
    pub fn base_name(&self) -> &str {
        strip_array_suffix(&self.name)
    }

    /// The name with a trailing `[]`, added if missing.
    pub fn array_name(&self) -> String {
        format!("{}[]", self.base_name())
    }
}

fn column_text(row: &Value, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Removes a trailing `[]` from a field name.
pub(crate) fn strip_array_suffix(name: &str) -> &str {
    name.strip_suffix("[]").unwrap_or(name)
}
