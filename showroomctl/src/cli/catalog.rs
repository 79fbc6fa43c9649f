use std::fmt::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use showroom_model::{
    PRODUCT_CATEGORIES, PROJECTS, ProductCategory, Project, TESTIMONIALS,
    Testimonial,
};

#[derive(Serialize)]
struct CatalogDump<'a> {
    testimonials: &'a [Testimonial],
    projects: &'a [Project],
    product_categories: &'a [ProductCategory],
}

pub fn render_json() -> Result<String> {
    let dump = CatalogDump {
        testimonials: &TESTIMONIALS,
        projects: &PROJECTS,
        product_categories: &PRODUCT_CATEGORIES,
    };
    serde_json::to_string_pretty(&dump).context("failed to serialize catalog")
}

pub fn render_text() -> Result<String> {
    let mut out = String::new();

    writeln!(out, "testimonials ({})", TESTIMONIALS.len())?;
    for testimonial in &TESTIMONIALS {
        writeln!(
            out,
            "  {}  {}",
            testimonial.id,
            testimonial.attribution()
        )?;
    }

    writeln!(out, "\nprojects ({})", PROJECTS.len())?;
    for project in &PROJECTS {
        writeln!(
            out,
            "  {}  {} [{}]",
            project.id, project.title, project.category
        )?;
    }

    writeln!(out, "\nproduct categories ({})", PRODUCT_CATEGORIES.len())?;
    for category in &PRODUCT_CATEGORIES {
        writeln!(
            out,
            "  {:<14} {} ({} products)",
            category.id,
            category.label,
            category.products.len()
        )?;
    }
    Ok(out)
}
