use std::time::Duration;

use showroom_model::{TESTIMONIALS, Testimonial};

use crate::auto::AutoCarousel;
use crate::error::Result;

pub const DEFAULT_TESTIMONIAL_INTERVAL: Duration = Duration::from_secs(7);

pub type TestimonialCarousel = AutoCarousel<Testimonial>;

/// Mount the testimonials carousel over the built-in quotes.
pub fn mount_testimonials(interval: Duration) -> Result<TestimonialCarousel> {
    AutoCarousel::mount("testimonials", &TESTIMONIALS[..], interval)
}

impl AutoCarousel<Testimonial> {
    /// Accessible label for the dot at `index`, e.g. "Go to testimonial 2".
    pub fn dot_label(index: usize) -> String {
        format!("Go to testimonial {}", index + 1)
    }
}
