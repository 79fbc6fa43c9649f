//! Carousel controllers behind the showroom site.
//!
//! Three independent controllers share one piece of index arithmetic
//! ([`rotation`]):
//!
//! * [`AutoCarousel`] advances on a [`Ticker`] and accepts chevron and dot
//!   navigation without disturbing the ticker's cadence. The testimonials
//!   section uses it directly.
//! * [`ProjectGallery`] is the same controller plus slide direction, offsets
//!   and a position counter.
//! * [`PointerCarousel`] maps the pointer's horizontal position over the
//!   product viewer to an item, and [`ProductShowcase`] swaps one in per
//!   product category.
//!
//! Nothing here renders. Views read the current [`Slide`] (or subscribe to
//! it) and draw whatever they like.
#![allow(missing_docs)]

pub mod auto;
pub mod error;
pub mod gallery;
pub mod pointer;
pub mod rotation;
pub mod showcase;
pub mod testimonials;
pub mod ticker;

pub use auto::AutoCarousel;
pub use error::{CarouselError, Result};
pub use gallery::{
    DEFAULT_GALLERY_INTERVAL, DEFAULT_SLIDE_DISTANCE, ProjectGallery,
    SlideOffsets,
};
pub use pointer::{
    ContainerRect, LeavePolicy, PointerCarousel, ZoneState, index_at,
};
pub use rotation::{Direction, Rotation, Slide, Step};
pub use showcase::ProductShowcase;
pub use testimonials::{
    DEFAULT_TESTIMONIAL_INTERVAL, TestimonialCarousel, mount_testimonials,
};
pub use ticker::Ticker;
