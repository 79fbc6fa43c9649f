pub mod config;

pub use config::{
    GallerySettings, ProductSettings, ShowroomConfig, TestimonialSettings,
};
