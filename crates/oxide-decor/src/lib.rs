//! # oxide-decor
//!
//! Decorator-based HTML form rendering with an edit mode and a read-only
//! confirmation mode.
//!
//! This crate provides:
//! - Field definitions for text, choice, checkbox, button and raw fields
//! - Decorator lists: ordered steps (label, control, wrapping tag, messages)
//!   that build each field's HTML
//! - Confirmation rendering that shows submitted values as text and echoes
//!   them in hidden inputs
//! - Form assembly with layered `<form>` attributes
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_decor::{CurrentRoute, Field, Form, FormRenderer, SiteConfig};
//!
//! let form = Form::new()
//!     .field(Field::text("name").label("Name").required())
//!     .field(
//!         Field::select("topic", [("1", "Sales"), ("2", "Support")])
//!             .label("Topic")
//!             .value("2"),
//!     )
//!     .field(Field::button("confirm").label("Confirm"));
//!
//! let route = CurrentRoute::new("contact", "index");
//! let config = SiteConfig::new();
//! let html = FormRenderer::new(&route, &config).render(&form);
//!
//! assert!(html.contains(r#"action="contact/index""#));
//! assert!(html.contains(r#"<option value="2" selected="selected">Support</option>"#));
//! assert!(html.contains(r#"name="action" value="confirm""#));
//! ```
//!
//! ## Confirmation
//!
//! ```rust
//! use oxide_decor::{CurrentRoute, Field, Form, FormRenderer, SiteConfig};
//!
//! let mut form = Form::new()
//!     .action("/contact/send")
//!     .field(Field::password("secret").value("hunter2"));
//! form.set_confirm(true);
//!
//! let route = CurrentRoute::new("contact", "confirm");
//! let config = SiteConfig::new();
//! let html = FormRenderer::new(&route, &config).render(&form);
//!
//! assert!(html.contains("********"));
//! assert!(html.contains(r#"<input type="hidden" name="secret" value="hunter2"/>"#));
//! ```
//!
//! ## Decorators
//!
//! ```rust
//! use oxide_decor::{DecoratorStep, Field, Placement};
//!
//! let field = Field::check("agree").label("I agree").decorators(vec![
//!     DecoratorStep::view_helper(),
//!     DecoratorStep::label().placement(Placement::Wrap),
//!     DecoratorStep::html_tag("div").attr("class", "form-check"),
//! ]);
//! assert_eq!(field.decorators.as_ref().map(Vec::len), Some(3));
//!
//! // The same list from configuration.
//! let steps: Vec<DecoratorStep> = serde_json::from_str(
//!     r#"["ViewHelper", ["Label", {"placement": "WRAP"}],
//!        {"type": "HtmlTag", "tag": "div", "attributes": {"class": "form-check"}}]"#,
//! )
//! .unwrap();
//! assert_eq!(Some(&steps), field.decorators.as_ref());
//! ```

pub mod config;
mod confirm;
pub mod decorator;
mod error;
pub mod fields;
mod form;
pub mod pipeline;
pub mod route;
pub mod sanitize;
pub mod tag;
pub mod widgets;

pub use config::{FormDefaults, SiteConfig};
pub use confirm::{build_input_confirm, nl2br, PASSWORD_MASK};
pub use decorator::{concatenate, DecoratorSet, DecoratorStep, DefaultDecorators, Placement, TagMode};
pub use error::{FormError, Result, ValidationErrors};
pub use fields::{Choices, Field, FieldKind, FieldValue, SelectStyle};
pub use form::{Form, FormRenderer};
pub use pipeline::{RenderMode, RenderPass};
pub use route::{CurrentRoute, RouteContext};
pub use sanitize::{html_escape, EscapeFilter, Sanitizer, StringFilter};
pub use widgets::{build_input_normal, ACTION_FIELD};
