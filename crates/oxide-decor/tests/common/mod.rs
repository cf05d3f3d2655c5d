#![allow(dead_code)]

use oxide_decor::{CurrentRoute, Field, Form, FormRenderer, SiteConfig};

pub fn route() -> CurrentRoute {
    CurrentRoute::new("order", "edit").param("42")
}

pub fn render(form: &Form) -> String {
    let route = route();
    let config = SiteConfig::new();
    let html = FormRenderer::new(&route, &config).render(form);
    html
}

pub fn render_with_config(form: &Form, config: &SiteConfig) -> String {
    let route = route();
    let html = FormRenderer::new(&route, config).render(form);
    html
}

pub fn render_field(form: &Form, name: &str) -> String {
    let route = route();
    let config = SiteConfig::new();
    let html = FormRenderer::new(&route, &config)
        .render_field(form, name)
        .unwrap_or_else(|| panic!("no field named {name}"));
    html
}

/// Text shown to the user: everything outside hidden inputs.
pub fn visible(html: &str) -> String {
    html.split("<input type=\"hidden\"")
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part
            } else {
                part.split_once("/>").map_or("", |(_, rest)| rest)
            }
        })
        .collect()
}

pub fn order_form() -> Form {
    Form::new()
        .field(Field::text("customer").label("Customer").required())
        .field(Field::password("pin").label("PIN"))
        .field(
            Field::select("color", [("1", "Red"), ("2", "Blue")])
                .label("Color")
                .value("1,2"),
        )
        .field(
            Field::multi_select("sizes", [("s", "Small"), ("m", "Medium"), ("l", "Large")])
                .label("Sizes"),
        )
        .field(Field::textarea("notes").label("Notes"))
        .field(Field::check("gift").label("Gift wrap"))
        .field(Field::hidden("token").value("t0k3n"))
}
