//! Contact Form Example
//!
//! Renders the same contact form twice: first for input, then as the
//! confirmation page that shows the submitted values before sending.
//! Run with: cargo run --example contact_form
//! Add `-- -v` for debug logging of every decorated field.

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_decor::{
    CurrentRoute, DecoratorStep, Field, Form, FormRenderer, Placement, SiteConfig,
    ValidationErrors,
};

const SITE_CONFIG: &str = r#"{
    "form": {
        "class": "container mt-3",
        "novalidate": "novalidate"
    }
}"#;

fn contact_form() -> Form {
    Form::new()
        .field(Field::hidden("token").value("4f9c2e"))
        .field(
            Field::text("name")
                .label("Name")
                .required()
                .attr("maxlength", "50"),
        )
        .field(Field::text("email").label("Email").required())
        .field(
            Field::select("topic", [("1", "Sales"), ("2", "Support"), ("3", "Press")])
                .label("Topic")
                .empty_option("", "Choose..."),
        )
        .field(
            Field::multi_check(
                "channels[]",
                [("mail", "E-mail"), ("phone", "Phone"), ("post", "Post")],
            )
            .label("Reply via"),
        )
        .field(Field::textarea("body").label("Message").attr("rows", "5"))
        .field(
            Field::check("agree")
                .label("I accept the privacy policy")
                .attr("class", "form-check-input")
                .decorators(vec![
                    DecoratorStep::view_helper(),
                    DecoratorStep::label()
                        .placement(Placement::Wrap)
                        .attr("class", "form-check-label"),
                    DecoratorStep::html_tag("div").attr("class", "form-check offset-sm-2"),
                ]),
        )
        .field(
            Field::button_group(
                "buttons",
                vec![
                    Field::button("back")
                        .label("Back")
                        .attr("class", "btn btn-secondary mr-2"),
                    Field::button("confirm")
                        .label("Confirm")
                        .attr("class", "btn btn-primary"),
                ],
            )
            .decorators(vec![DecoratorStep::view_helper()])
            .confirm_decorators(vec![DecoratorStep::view_helper()]),
        )
}

fn main() -> anyhow::Result<()> {
    let verbose = std::env::args().any(|a| a == "-v" || a == "--verbose");
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SiteConfig::from_json(SITE_CONFIG)?;
    let route = CurrentRoute::new("contact", "index");
    let renderer = FormRenderer::new(&route, &config);

    // First visit: empty form, one field already flagged by validation.
    let mut form = contact_form();
    let mut errors = ValidationErrors::new();
    errors.add("email", "Enter a valid email address.");
    form.apply_errors(&errors);

    info!("Rendering input page...");
    println!("{}", renderer.render(&form));

    // Second visit: values were submitted and are shown for review.
    let mut form = contact_form().action("contact/send");
    for (name, value) in [
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("topic", "2"),
        ("body", "Hello,\nplease call me back."),
        ("agree", "1"),
    ] {
        if let Some(field) = form.get_mut(name) {
            field.value = value.into();
        }
    }
    if let Some(field) = form.get_mut("channels[]") {
        field.value = vec!["mail".to_string(), "phone".to_string()].into();
    }
    form.set_confirm(true);

    info!("Rendering confirmation page...");
    println!("{}", renderer.render(&form));

    Ok(())
}
