//! Resolve the showroom configuration from flags, environment and disk.

pub mod error;

use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

pub use error::ConfigLoadError;

use crate::models::ShowroomConfig;
use crate::validation::{ConfigWarnings, apply_guard_rails};

/// Path to a TOML config file.
pub const CONFIG_PATH_ENV: &str = "SHOWROOM_CONFIG_PATH";
/// Inline TOML document.
pub const CONFIG_INLINE_ENV: &str = "SHOWROOM_CONFIG_TOML";
/// Picked up from the search directory when nothing else is set.
pub const DEFAULT_CONFIG_FILE: &str = "showroom.toml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "built-in defaults"),
            ConfigSource::Explicit(path) => {
                write!(f, "--config {}", path.display())
            }
            ConfigSource::EnvPath(path) => {
                write!(f, "${CONFIG_PATH_ENV} ({})", path.display())
            }
            ConfigSource::EnvInline => write!(f, "${CONFIG_INLINE_ENV}"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A validated configuration plus the non-fatal issues found in it.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ShowroomConfig,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit: Option<PathBuf>,
    search_dir: PathBuf,
    env_file: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            explicit: None,
            search_dir: PathBuf::from("."),
            env_file: None,
        }
    }

    /// A `--config` flag; wins over everything else.
    pub fn with_explicit_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    /// Directory searched for [`DEFAULT_CONFIG_FILE`].
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = dir.into();
        self
    }

    /// `.env` file to load before reading the environment. Without one, a
    /// `.env` in the working directory is used if present.
    pub fn with_env_file(mut self, path: Option<PathBuf>) -> Self {
        self.env_file = path;
        self
    }

    /// Load using the process environment.
    pub fn load(&self) -> Result<LoadedConfig, ConfigLoadError> {
        self.load_env_file()?;
        self.load_with(|key| env::var(key).ok())
    }

    /// Load with an explicit environment lookup.
    ///
    /// Evaluation order:
    /// 1) the explicit path,
    /// 2) `$SHOWROOM_CONFIG_PATH`,
    /// 3) `$SHOWROOM_CONFIG_TOML` (inline),
    /// 4) `showroom.toml` in the search directory,
    /// 5) defaults.
    pub fn load_with<F>(&self, lookup: F) -> Result<LoadedConfig, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, source) = self.resolve(lookup)?;
        let warnings = apply_guard_rails(&config)?;
        for warning in &warnings.items {
            warn!(hint = warning.hint.as_deref(), "{}", warning.message);
        }
        debug!(source = %source, "showroom config loaded");
        Ok(LoadedConfig {
            config,
            source,
            warnings,
        })
    }

    fn resolve<F>(
        &self,
        lookup: F,
    ) -> Result<(ShowroomConfig, ConfigSource), ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = &self.explicit {
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_INLINE_ENV)
            && !raw.trim().is_empty()
        {
            let config = parse_from_str(&raw, CONFIG_INLINE_ENV)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        let candidate = self.search_dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            let config = load_from_file(&candidate)?;
            return Ok((config, ConfigSource::File(candidate)));
        }

        Ok((ShowroomConfig::default(), ConfigSource::Default))
    }

    fn load_env_file(&self) -> Result<(), ConfigLoadError> {
        match &self.env_file {
            Some(path) => {
                dotenvy::from_path(path)?;
                Ok(())
            }
            None => match dotenvy::dotenv() {
                Ok(_) => Ok(()),
                Err(err) if err.not_found() => Ok(()),
                Err(err) => Err(err.into()),
            },
        }
    }
}

pub fn load_from_file(path: &Path) -> Result<ShowroomConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::ConfigFileIo {
            path: path.to_path_buf(),
            source,
        })?;
    parse_from_str(&contents, &path.display().to_string())
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<ShowroomConfig, ConfigLoadError> {
    toml::from_str(contents).map_err(|source| ConfigLoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}
