//! Forms and the form renderer.

use tracing::debug;

use crate::config::{merge_form_options, FormDefaults, SiteConfig};
use crate::decorator::{DecoratorSet, DecoratorStep, DefaultDecorators};
use crate::error::{Result, ValidationErrors};
use crate::fields::Field;
use crate::pipeline::{run_steps, RenderMode, RenderPass};
use crate::route::RouteContext;
use crate::sanitize::{Sanitizer, StringFilter};
use crate::tag::{close_tag, open_tag, Attributes};

/// A form: ordered fields plus everything needed to decorate them.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    mode: RenderMode,
    defaults: FormDefaults,
    decorators: DefaultDecorators,
    action: Option<String>,
    options: Attributes,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Creates an empty form with the default presentation.
    pub fn new() -> Self {
        Self::with_defaults(FormDefaults::default())
    }

    /// Creates an empty form. The default decorator lists are built here
    /// from the label class of `defaults`.
    pub fn with_defaults(defaults: FormDefaults) -> Self {
        let decorators = DefaultDecorators::new(defaults.get_label_class());
        Self {
            fields: Vec::new(),
            mode: RenderMode::Edit,
            defaults,
            decorators,
            action: None,
            options: Attributes::new(),
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a field in place.
    pub fn add(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Sets the form action.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets a caller override of a `<form>` attribute.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Replaces the default decorators named `name` (`decorators` or
    /// `decorators_confirm`).
    pub fn set_default_decorators(&mut self, name: &str, steps: Vec<DecoratorStep>) -> Result<()> {
        let set: DecoratorSet = name.parse()?;
        self.decorators.set(set, steps);
        Ok(())
    }

    /// Switches between edit and confirm rendering.
    pub fn set_confirm(&mut self, confirm: bool) {
        self.mode = if confirm {
            RenderMode::Confirm
        } else {
            RenderMode::Edit
        };
    }

    /// Whether the form renders in confirm mode.
    pub fn is_confirm(&self) -> bool {
        self.mode == RenderMode::Confirm
    }

    /// Sets the render mode.
    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    /// Returns the render mode.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Returns the presentation defaults.
    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }

    /// Returns the action, if set.
    pub fn get_action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns the fields in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns a field by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Copies messages onto the fields they name. Messages for unknown
    /// fields are ignored.
    pub fn apply_errors(&mut self, errors: &ValidationErrors) {
        for field in &mut self.fields {
            if let Some(messages) = errors.get(&field.name) {
                field.messages.extend(messages.iter().cloned());
            }
        }
    }

    /// The decorators used for `field` in the current mode: the field's
    /// own list if it has one, else the form default.
    pub fn decorators_for<'a>(&'a self, field: &'a Field) -> &'a [DecoratorStep] {
        let (own, set) = match self.mode {
            RenderMode::Edit => (&field.decorators, DecoratorSet::Normal),
            RenderMode::Confirm => (&field.confirm_decorators, DecoratorSet::Confirm),
        };
        own.as_deref()
            .unwrap_or_else(|| self.decorators.get(set))
    }
}

/// Renders forms with the collaborators of the current request.
pub struct FormRenderer<'a> {
    route: &'a dyn RouteContext,
    config: &'a SiteConfig,
    sanitizer: Box<dyn Sanitizer + 'a>,
}

impl std::fmt::Debug for FormRenderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRenderer")
            .field("controller", &self.route.controller_name())
            .field("action", &self.route.action_name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> FormRenderer<'a> {
    /// Creates a renderer using the [`StringFilter`] sanitizer.
    pub fn new(route: &'a dyn RouteContext, config: &'a SiteConfig) -> Self {
        Self {
            route,
            config,
            sanitizer: Box::new(StringFilter),
        }
    }

    /// Replaces the sanitizer.
    #[must_use]
    pub fn sanitizer(mut self, sanitizer: impl Sanitizer + 'a) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    fn pass<'f>(&'f self, form: &'f Form) -> RenderPass<'f> {
        RenderPass {
            defaults: &form.defaults,
            mode: form.mode,
            sanitizer: self.sanitizer.as_ref(),
        }
    }

    /// The form action, or `controller/action/params...` of the current
    /// route when the form has none.
    pub fn resolve_action(&self, form: &Form) -> String {
        form.action
            .clone()
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| self.route.default_action())
    }

    /// The merged `<form>` attributes.
    pub fn form_options(&self, form: &Form) -> Attributes {
        merge_form_options(&self.config.form, &form.options, &self.resolve_action(form))
    }

    /// Renders one field through its decorators.
    pub fn render_decorated(&self, form: &Form, field: &Field) -> String {
        let steps = form.decorators_for(field);
        debug!(field = %field.name, steps = steps.len(), mode = ?form.mode, "decorating field");
        run_steps(field, steps, &self.pass(form))
    }

    /// Renders a field looked up by name.
    pub fn render_field(&self, form: &Form, name: &str) -> Option<String> {
        form.get(name).map(|field| self.render_decorated(form, field))
    }

    /// Renders the whole form: the open tag, every decorated field, the
    /// close tag.
    pub fn render(&self, form: &Form) -> String {
        let separator = form.defaults.get_separator();
        let options = self.form_options(form);
        debug!(
            fields = form.fields.len(),
            mode = ?form.mode,
            action = options.get("action").map(String::as_str).unwrap_or_default(),
            "rendering form"
        );

        let mut output = open_tag("form", &options);
        output.push_str(separator);
        output.push_str(separator);

        for field in &form.fields {
            output.push_str(&self.render_decorated(form, field));
            output.push_str(separator);
            output.push_str(separator);
        }

        output.push_str(separator);
        output.push_str(&close_tag("form"));
        output.push_str(separator);
        output
    }
}
