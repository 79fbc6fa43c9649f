//! Display records shared across showroom crates.
//!
//! Every record here is immutable and compiled into the binary. Carousels
//! borrow slices of them and only ever track which one is on screen.
#![allow(missing_docs)]

pub mod catalog;
pub mod ids;
pub mod product;
pub mod project;
pub mod testimonial;

pub use catalog::{PRODUCT_CATEGORIES, PROJECTS, TESTIMONIALS, category};
pub use ids::{ProjectId, TestimonialId};
pub use product::{ProductCategory, ProductImage};
pub use project::Project;
pub use testimonial::Testimonial;
