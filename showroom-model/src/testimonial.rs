use crate::ids::TestimonialId;

/// A client quote shown in the testimonials carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Testimonial {
    pub id: TestimonialId,
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub firm: &'static str,
    /// Sector badge rendered next to the attribution.
    pub sector: &'static str,
}

impl Testimonial {
    /// "Role, Firm" line under the author name.
    pub fn attribution(&self) -> String {
        format!("{}, {}", self.role, self.firm)
    }
}
