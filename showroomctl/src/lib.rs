//! Configuration loading, validation and a headless preview for the
//! showroom carousels.
#![allow(missing_docs)]

pub mod cli;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoadError, ConfigLoader, ConfigSource, LoadedConfig};
pub use models::ShowroomConfig;
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
