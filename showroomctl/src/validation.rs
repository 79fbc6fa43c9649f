use std::time::Duration;

use thiserror::Error;

use super::models::ShowroomConfig;

/// Below this a quote changes before a visitor can finish reading it.
const MIN_READABLE_TESTIMONIAL: Duration = Duration::from_secs(3);
/// The slide transition itself runs for 600ms.
const MIN_GALLERY_INTERVAL: Duration = Duration::from_millis(600);

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },
    #[error("gallery.slide_distance must be a finite, non-negative number (got {value})")]
    InvalidSlideDistance { value: f32 },
    #[error("products.initial_category '{id}' is not a known category")]
    UnknownCategory { id: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

pub fn apply_guard_rails(
    config: &ShowroomConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.testimonials.interval.is_zero() {
        return Err(ConfigGuardRailError::ZeroInterval {
            field: "testimonials.interval",
        });
    }
    if config.gallery.interval.is_zero() {
        return Err(ConfigGuardRailError::ZeroInterval {
            field: "gallery.interval",
        });
    }

    let distance = config.gallery.slide_distance;
    if !distance.is_finite() || distance < 0.0 {
        return Err(ConfigGuardRailError::InvalidSlideDistance {
            value: distance,
        });
    }

    let category = &config.products.initial_category;
    if showroom_model::category(category).is_none() {
        return Err(ConfigGuardRailError::UnknownCategory {
            id: category.clone(),
        });
    }

    if config.testimonials.interval < MIN_READABLE_TESTIMONIAL {
        warnings.push_with_hint(
            format!(
                "testimonials.interval of {} is too short to read a quote",
                humantime::format_duration(config.testimonials.interval)
            ),
            "Use at least 3s; the site ships with 7s",
        );
    }

    if config.gallery.interval < MIN_GALLERY_INTERVAL {
        warnings.push_with_hint(
            format!(
                "gallery.interval of {} is shorter than the slide transition",
                humantime::format_duration(config.gallery.interval)
            ),
            "Slides will be cut off mid-transition; 6s is the default",
        );
    }

    if distance == 0.0 {
        warnings.push(
            "gallery.slide_distance is 0; projects will crossfade without sliding",
        );
    }

    Ok(warnings)
}
