//! Current-route information used to build a default form action.

/// Supplies the route that is handling the current request.
pub trait RouteContext: Send + Sync {
    /// Name of the controller handling the request.
    fn controller_name(&self) -> &str;

    /// Name of the action handling the request.
    fn action_name(&self) -> &str;

    /// Positional parameters, in order.
    fn params(&self) -> &[String];

    /// Builds `controller/action/param1/param2...`.
    fn default_action(&self) -> String {
        let mut action = format!("{}/{}", self.controller_name(), self.action_name());
        for param in self.params() {
            action.push('/');
            action.push_str(param);
        }
        action
    }
}

/// A plain route value.
#[derive(Debug, Clone, Default)]
pub struct CurrentRoute {
    /// Controller name.
    pub controller: String,
    /// Action name.
    pub action: String,
    /// Positional parameters.
    pub params: Vec<String>,
}

impl CurrentRoute {
    /// Creates a route without parameters.
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
            params: Vec::new(),
        }
    }

    /// Appends a positional parameter.
    #[must_use]
    pub fn param(mut self, value: impl Into<String>) -> Self {
        self.params.push(value.into());
        self
    }
}

impl RouteContext for CurrentRoute {
    fn controller_name(&self) -> &str {
        &self.controller
    }

    fn action_name(&self) -> &str {
        &self.action
    }

    fn params(&self) -> &[String] {
        &self.params
    }
}
