//! Decorator steps and the default decorator lists.
//!
//! A decorator list is an ordered sequence of steps. Each step receives the
//! HTML accumulated so far and returns the new accumulated HTML. Steps can be
//! built in code or deserialized from configuration in any of these shapes:
//!
//! ```json
//! [
//!   "ViewHelper",
//!   "Errors",
//!   ["Label", { "placement": "PREPEND", "attributes": { "class": "col-sm-2" } }],
//!   { "type": "HtmlTag", "tag": "div", "attributes": { "class": "form-group row" } }
//! ]
//! ```

use std::str::FromStr;

use serde::Deserialize;

use crate::error::FormError;
use crate::tag::Attributes;

/// Where a step's output goes relative to the accumulated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Placement {
    /// After the accumulated content.
    #[default]
    Append,
    /// Before the accumulated content.
    Prepend,
    /// Around the accumulated content. Only labels of checks and radios
    /// honour it; elsewhere it behaves as `Append`.
    Wrap,
}

/// Which parts of an `HtmlTag` step are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagMode {
    /// Open tag before, close tag after.
    #[default]
    Wrap,
    /// Only the open tag, placed per the step placement.
    OpenOnly,
    /// Only the close tag, placed per the step placement.
    CloseOnly,
}

/// One rendering step of a decorator list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawStep")]
pub enum DecoratorStep {
    /// The field label.
    Label {
        placement: Placement,
        attributes: Attributes,
    },
    /// The control itself (or its confirm summary).
    ViewHelper {
        /// Emit only the sanitized value instead of a control.
        raw_value: bool,
        placement: Placement,
    },
    /// An arbitrary tag around, before or after the content.
    HtmlTag {
        tag: String,
        attributes: Attributes,
        placement: Placement,
        mode: TagMode,
    },
    /// Validation messages.
    Errors,
    /// An unrecognised step name, echoed as `<p>{name}</p>`.
    Literal(String),
}

impl DecoratorStep {
    /// A label step, appended.
    pub fn label() -> Self {
        Self::Label {
            placement: Placement::Append,
            attributes: Attributes::new(),
        }
    }

    /// A control step, appended.
    pub fn view_helper() -> Self {
        Self::ViewHelper {
            raw_value: false,
            placement: Placement::Append,
        }
    }

    /// A wrapping tag step.
    pub fn html_tag(tag: impl Into<String>) -> Self {
        Self::HtmlTag {
            tag: tag.into(),
            attributes: Attributes::new(),
            placement: Placement::Append,
            mode: TagMode::Wrap,
        }
    }

    /// A messages step.
    pub fn errors() -> Self {
        Self::Errors
    }

    /// Sets the placement of a label, control or tag step.
    #[must_use]
    pub fn placement(mut self, value: Placement) -> Self {
        match &mut self {
            Self::Label { placement, .. }
            | Self::ViewHelper { placement, .. }
            | Self::HtmlTag { placement, .. } => *placement = value,
            Self::Errors | Self::Literal(_) => {}
        }
        self
    }

    /// Sets an attribute of a label or tag step.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Label { attributes, .. } | Self::HtmlTag { attributes, .. } = &mut self {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Makes a tag step emit only its open tag.
    #[must_use]
    pub fn open_only(self) -> Self {
        self.tag_mode(TagMode::OpenOnly)
    }

    /// Makes a tag step emit only its close tag.
    #[must_use]
    pub fn close_only(self) -> Self {
        self.tag_mode(TagMode::CloseOnly)
    }

    fn tag_mode(mut self, value: TagMode) -> Self {
        if let Self::HtmlTag { mode, .. } = &mut self {
            *mode = value;
        }
        self
    }

    /// Makes a control step emit the sanitized value only.
    #[must_use]
    pub fn raw_value(mut self) -> Self {
        if let Self::ViewHelper { raw_value, .. } = &mut self {
            *raw_value = true;
        }
        self
    }

    /// The step name as written in configuration.
    pub fn name(&self) -> &str {
        match self {
            Self::Label { .. } => "Label",
            Self::ViewHelper { .. } => "ViewHelper",
            Self::HtmlTag { .. } => "HtmlTag",
            Self::Errors => "Errors",
            Self::Literal(name) => name,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StepOptions {
    placement: Placement,
    attributes: Attributes,
    tag: Option<String>,
    #[serde(alias = "openOnly")]
    open_only: bool,
    #[serde(alias = "closeOnly")]
    close_only: bool,
    #[serde(alias = "rawValue")]
    raw_value: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawStep {
    Name(String),
    Pair(String, Option<StepOptions>),
    Single((String,)),
    Map {
        #[serde(rename = "type")]
        kind: String,
        #[serde(flatten)]
        options: StepOptions,
    },
}

impl TryFrom<RawStep> for DecoratorStep {
    type Error = FormError;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        let (name, options) = match raw {
            RawStep::Name(name) => (name, StepOptions::default()),
            RawStep::Pair(name, options) => (name, options.unwrap_or_default()),
            RawStep::Single((name,)) => (name, StepOptions::default()),
            RawStep::Map { kind, options } => (kind, options),
        };

        let step = match name.as_str() {
            "Label" => Self::Label {
                placement: options.placement,
                attributes: options.attributes,
            },
            "ViewHelper" => Self::ViewHelper {
                raw_value: options.raw_value,
                placement: options.placement,
            },
            "HtmlTag" => {
                let tag = options.tag.ok_or_else(|| FormError::InvalidDecorator {
                    name: name.clone(),
                    message: "missing `tag` option".to_string(),
                })?;
                let mode = if options.open_only {
                    TagMode::OpenOnly
                } else if options.close_only {
                    TagMode::CloseOnly
                } else {
                    TagMode::Wrap
                };
                Self::HtmlTag {
                    tag,
                    attributes: options.attributes,
                    placement: options.placement,
                    mode,
                }
            }
            "Errors" => Self::Errors,
            _ => Self::Literal(name),
        };
        Ok(step)
    }
}

/// The two named default decorator lists of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoratorSet {
    /// Used in edit mode (`decorators`).
    Normal,
    /// Used in confirm mode (`decorators_confirm`).
    Confirm,
}

impl FromStr for DecoratorSet {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decorators" => Ok(Self::Normal),
            "decorators_confirm" => Ok(Self::Confirm),
            other => Err(FormError::UnknownDecoratorSet(other.to_string())),
        }
    }
}

/// Default decorator lists, computed once per form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultDecorators {
    /// Edit mode list.
    pub normal: Vec<DecoratorStep>,
    /// Confirm mode list.
    pub confirm: Vec<DecoratorStep>,
}

impl DefaultDecorators {
    /// Control, messages, label before, all inside a `form-group row` div.
    pub fn new(label_class: &str) -> Self {
        let list = vec![
            DecoratorStep::view_helper(),
            DecoratorStep::errors(),
            DecoratorStep::label()
                .placement(Placement::Prepend)
                .attr("class", label_class),
            DecoratorStep::html_tag("div").attr("class", "form-group row"),
        ];
        Self {
            normal: list.clone(),
            confirm: list,
        }
    }

    /// Returns the list for a set.
    pub fn get(&self, set: DecoratorSet) -> &[DecoratorStep] {
        match set {
            DecoratorSet::Normal => &self.normal,
            DecoratorSet::Confirm => &self.confirm,
        }
    }

    /// Replaces the list for a set.
    pub fn set(&mut self, set: DecoratorSet, steps: Vec<DecoratorStep>) {
        match set {
            DecoratorSet::Normal => self.normal = steps,
            DecoratorSet::Confirm => self.confirm = steps,
        }
    }
}

/// Joins a step's `output` with the accumulated `content`.
///
/// `Prepend` puts the output first. `Append` (and `Wrap`) puts it last and
/// returns the output alone when there is no content yet.
pub fn concatenate(output: &str, content: &str, placement: Placement, separator: &str) -> String {
    match placement {
        Placement::Prepend => format!("{output}{separator}{content}"),
        Placement::Append | Placement::Wrap => {
            if content.is_empty() {
                output.to_string()
            } else {
                format!("{content}{separator}{output}")
            }
        }
    }
}
