use std::time::Duration;

use serde::{Deserialize, Serialize};
use showroom_core::{
    DEFAULT_GALLERY_INTERVAL, DEFAULT_SLIDE_DISTANCE,
    DEFAULT_TESTIMONIAL_INTERVAL, LeavePolicy,
};

/// Timing and behaviour knobs for every carousel on the page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowroomConfig {
    pub testimonials: TestimonialSettings,
    pub gallery: GallerySettings,
    pub products: ProductSettings,
}

/// Testimonials section. Longer quotes need a slower cadence to be
/// readable before the next one slides in.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestimonialSettings {
    /// Time each quote stays on screen, e.g. `"7s"`.
    #[serde(with = "humantime_duration")]
    pub interval: Duration,
}

impl Default for TestimonialSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_TESTIMONIAL_INTERVAL,
        }
    }
}

/// Project gallery section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GallerySettings {
    /// Time each project stays on screen, e.g. `"6s"`.
    #[serde(with = "humantime_duration")]
    pub interval: Duration,
    /// Horizontal travel of the slide transition, in layout pixels.
    pub slide_distance: f32,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_GALLERY_INTERVAL,
            slide_distance: DEFAULT_SLIDE_DISTANCE,
        }
    }
}

/// Product viewer section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductSettings {
    /// `retain` keeps the last hovered product when the pointer leaves the
    /// viewer, `reset` snaps back to the first one.
    pub leave_policy: LeavePolicy,
    /// Category tab selected on load.
    pub initial_category: String,
}

impl Default for ProductSettings {
    fn default() -> Self {
        Self {
            leave_policy: LeavePolicy::Retain,
            initial_category: showroom_model::PRODUCT_CATEGORIES[0]
                .id
                .to_string(),
        }
    }
}

/// Serde adapter for humantime strings such as `"6s"` or `"1m 30s"`.
mod humantime_duration {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&humantime::format_duration(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(raw.trim()).map_err(|err| {
            serde::de::Error::custom(format!("invalid duration '{raw}': {err}"))
        })
    }
}
